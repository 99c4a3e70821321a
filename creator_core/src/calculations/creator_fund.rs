//! # Creator Fund Earnings
//!
//! Estimates legacy Creator Fund payouts from monthly views.
//!
//! ```text
//! monthly = views / 1000 × base RPM ($0.02 - $0.04) × engagement multiplier × niche RPM multiplier
//! ```
//!
//! The engagement multiplier here is the gentler payout curve:
//! `>= 10%` 1.2, `>= 5%` 1.1, `>= 2%` 1.0, otherwise 0.9.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::platform::CREATOR_FUND_RPM;
use crate::tables::tier::payout_engagement_multiplier;
use crate::tables::{Choice, Niche};
use crate::units::ValueRange;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("monthly_views", "Monthly views", 0.0, 1e12),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorFundInput {
    pub monthly_views: f64,
    pub niche: Niche,
    /// Engagement rate (%)
    pub engagement_rate: f64,
}

impl Default for CreatorFundInput {
    fn default() -> Self {
        CreatorFundInput {
            monthly_views: 100_000.0,
            niche: Niche::Lifestyle,
            engagement_rate: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorFundResult {
    pub min_monthly: f64,
    pub max_monthly: f64,
    pub min_yearly: f64,
    pub max_yearly: f64,
    /// Effective earnings per 1,000 views after multipliers
    pub effective_rpm: ValueRange,
    pub engagement_multiplier: f64,
    pub niche_multiplier: f64,
}

pub fn validate(input: &CreatorFundInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

/// Effective RPM range for a niche and engagement rate
pub(crate) fn effective_rpm(niche: Niche, engagement_rate: f64) -> ValueRange {
    CREATOR_FUND_RPM
        .scale(payout_engagement_multiplier(engagement_rate))
        .scale(niche.rpm_multiplier())
}

pub fn calculate(input: &CreatorFundInput) -> CreatorFundResult {
    let rpm = effective_rpm(input.niche, input.engagement_rate);
    let monthly = rpm.scale(input.monthly_views / 1000.0).round(2);
    let yearly = monthly.scale(12.0).round(2);

    CreatorFundResult {
        min_monthly: monthly.min,
        max_monthly: monthly.max,
        min_yearly: yearly.min,
        max_yearly: yearly.max,
        effective_rpm: rpm.round(4),
        engagement_multiplier: payout_engagement_multiplier(input.engagement_rate),
        niche_multiplier: input.niche.rpm_multiplier(),
    }
}

pub struct CreatorFund;

impl Calculator for CreatorFund {
    type Input = CreatorFundInput;
    type Output = CreatorFundResult;

    const ID: &'static str = "creator-fund";
    const TITLE: &'static str = "Creator Fund Earnings Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["min_monthly", "max_monthly"];

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
    fn test_lifestyle_base_case() {
        let input = CreatorFundInput {
            monthly_views: 500_000.0,
            niche: Niche::Lifestyle,
            engagement_rate: 5.0,
        };
        let result = calculate(&input);

        // 500 × $0.02..$0.04 × 1.1 × 1.0
        assert!((result.min_monthly - 11.0).abs() < 0.01);
        assert!((result.max_monthly - 22.0).abs() < 0.01);
        assert!(result.min_monthly <= result.max_monthly);
        assert!((result.max_yearly - 264.0).abs() < 0.01);

        let upper_bound = 500.0 * 0.04 * 1.1 * 1.0;
        assert!(result.max_monthly <= upper_bound + 0.005);
    }

    #[test]
    fn test_niche_scales_earnings() {
        let base = CreatorFundInput {
            monthly_views: 1_000_000.0,
            niche: Niche::Lifestyle,
            engagement_rate: 3.0,
        };
        let finance = CreatorFundInput {
            niche: Niche::Finance,
            ..base.clone()
        };
        let a = calculate(&base);
        let b = calculate(&finance);
        assert!((b.max_monthly / a.max_monthly - 1.4).abs() < 0.001);
    }

    #[test]
    fn test_zero_views() {
        let input = CreatorFundInput {
            monthly_views: 0.0,
            ..CreatorFundInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.min_monthly, 0.0);
        assert_eq!(result.max_yearly, 0.0);
    }

    #[test]
    fn test_rejects_negative_views() {
        let input = CreatorFundInput {
            monthly_views: -10.0,
            ..CreatorFundInput::default()
        };
        assert!(validate(&input).has_error("monthly_views"));
    }
}
