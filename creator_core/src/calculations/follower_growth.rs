//! # Follower Growth
//!
//! Compounds a monthly growth rate over a horizon and, optionally, finds how
//! long it takes to reach a follower goal.
//!
//! ```text
//! followers(m) = current × (1 + rate / 100)^m
//! months_to_target = ceil(ln(target / current) / ln(1 + rate / 100))
//! ```
//!
//! `target_followers = 0` means no goal.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::classify;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

/// Average days per month (365.25 / 12)
const DAYS_PER_MONTH: f64 = 30.4375;

/// Goals further out than this are reported as unreachable
const MAX_TARGET_MONTHS: f64 = 1_200.0;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("current_followers", "Current followers", 1.0, 1e10),
    FieldSpec::number("monthly_growth_rate", "Monthly growth rate", -100.0, 1_000.0),
    FieldSpec::integer("months", "Months", 1, 120),
    FieldSpec::number("target_followers", "Target followers", 0.0, 1e11).optional(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerGrowthInput {
    pub current_followers: f64,
    /// Growth per month (%), negative for decline
    pub monthly_growth_rate: f64,
    pub months: u32,
    /// Follower goal, 0 for none
    pub target_followers: f64,
}

impl Default for FollowerGrowthInput {
    fn default() -> Self {
        FollowerGrowthInput {
            current_followers: 5_000.0,
            monthly_growth_rate: 10.0,
            months: 12,
            target_followers: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthTrend {
    Explosive,
    Fast,
    Steady,
    Slow,
    Declining,
}

impl GrowthTrend {
    pub fn for_rate(monthly_growth_rate: f64) -> Self {
        classify(
            monthly_growth_rate,
            &[
                (20.0, GrowthTrend::Explosive),
                (10.0, GrowthTrend::Fast),
                (3.0, GrowthTrend::Steady),
                (0.0, GrowthTrend::Slow),
            ],
            GrowthTrend::Declining,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: u32,
    pub followers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerGrowthResult {
    /// Followers at the end of the horizon (whole number)
    pub projected_followers: f64,
    pub net_gain: f64,
    pub total_growth_percent: f64,
    pub average_daily_gain: f64,
    pub trend: GrowthTrend,
    /// One entry per month, month 1 first
    pub monthly_projection: Vec<MonthlyProjection>,
    /// Months until the goal; `None` without a goal or when it is unreachable
    pub months_to_target: Option<u32>,
}

fn project(current: f64, rate: f64, month: u32) -> f64 {
    (current * (1.0 + rate / 100.0).powi(month as i32)).round()
}

/// Months needed to grow from `current` to `target` at `rate` % per month
pub fn months_to_reach(current: f64, target: f64, rate: f64) -> Option<u32> {
    if target <= 0.0 {
        return None;
    }
    if target <= current {
        return Some(0);
    }
    if rate <= 0.0 {
        return None;
    }
    let months = ((target / current).ln() / (1.0 + rate / 100.0).ln()).ceil();
    (months <= MAX_TARGET_MONTHS).then_some(months as u32)
}

pub fn validate(input: &FollowerGrowthInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &FollowerGrowthInput) -> FollowerGrowthResult {
    let current = input.current_followers;
    let rate = input.monthly_growth_rate;

    let monthly_projection: Vec<MonthlyProjection> = (1..=input.months)
        .map(|month| MonthlyProjection {
            month,
            followers: project(current, rate, month),
        })
        .collect();

    let projected = project(current, rate, input.months);
    let net_gain = projected - current;

    FollowerGrowthResult {
        projected_followers: projected,
        net_gain,
        total_growth_percent: round2(net_gain / current * 100.0),
        average_daily_gain: round2(net_gain / (input.months as f64 * DAYS_PER_MONTH)),
        trend: GrowthTrend::for_rate(rate),
        monthly_projection,
        months_to_target: months_to_reach(current, input.target_followers, rate),
    }
}

pub struct FollowerGrowth;

impl Calculator for FollowerGrowth {
    type Input = FollowerGrowthInput;
    type Output = FollowerGrowthResult;

    const ID: &'static str = "follower-growth";
    const TITLE: &'static str = "Follower Growth Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["projected_followers", "trend", "months_to_target"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_growth() {
        let input = FollowerGrowthInput {
            current_followers: 10_000.0,
            monthly_growth_rate: 10.0,
            months: 3,
            target_followers: 0.0,
        };
        let result = calculate(&input);
        assert_eq!(result.projected_followers, 13_310.0);
        assert_eq!(result.net_gain, 3_310.0);
        assert_eq!(result.total_growth_percent, 33.1);
        assert_eq!(result.monthly_projection.len(), 3);
        assert_eq!(result.monthly_projection[0].followers, 11_000.0);
        assert_eq!(result.monthly_projection[2].followers, 13_310.0);
        assert_eq!(result.trend, GrowthTrend::Fast);
        assert_eq!(result.months_to_target, None);
    }

    #[test]
    fn test_months_to_target() {
        // 10k → 20k at 10%/month: ln 2 / ln 1.1 = 7.27 → 8
        assert_eq!(months_to_reach(10_000.0, 20_000.0, 10.0), Some(8));
        assert_eq!(months_to_reach(10_000.0, 5_000.0, 10.0), Some(0));
        assert_eq!(months_to_reach(10_000.0, 20_000.0, 0.0), None);
        assert_eq!(months_to_reach(10_000.0, 20_000.0, -5.0), None);
        assert_eq!(months_to_reach(1.0, 1e11, 0.001), None);
    }

    #[test]
    fn test_decline() {
        let input = FollowerGrowthInput {
            current_followers: 10_000.0,
            monthly_growth_rate: -10.0,
            months: 1,
            target_followers: 0.0,
        };
        let result = calculate(&input);
        assert_eq!(result.projected_followers, 9_000.0);
        assert_eq!(result.net_gain, -1_000.0);
        assert_eq!(result.trend, GrowthTrend::Declining);
    }

    #[test]
    fn test_trend_boundaries() {
        assert_eq!(GrowthTrend::for_rate(20.0), GrowthTrend::Explosive);
        assert_eq!(GrowthTrend::for_rate(3.0), GrowthTrend::Steady);
        assert_eq!(GrowthTrend::for_rate(0.0), GrowthTrend::Slow);
    }

    #[test]
    fn test_rejects_zero_months() {
        let input = FollowerGrowthInput {
            months: 0,
            ..FollowerGrowthInput::default()
        };
        assert_eq!(validate(&input).error("months"), Some("Months must be between 1 and 120"));
    }
}
