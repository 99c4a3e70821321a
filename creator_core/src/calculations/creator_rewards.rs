//! # Creator Rewards Program
//!
//! Earnings under the Creator Rewards Program, which pays on qualified views
//! (over a minute long, from the For You feed, not fraudulent) for accounts
//! with at least 10,000 followers.
//!
//! ```text
//! qualified views = monthly views × qualified %
//! earnings        = qualified views / 1000 × $0.40..$1.00 × niche RPM multiplier
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::platform::{CREATOR_REWARDS_MIN_FOLLOWERS, CREATOR_REWARDS_RPM};
use crate::tables::{Choice, Niche};
use crate::units::{round2, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("monthly_views", "Monthly views", 0.0, 1e12),
    FieldSpec::number("qualified_view_percent", "Qualified views", 0.0, 100.0),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::number("followers", "Followers", 0.0, 1e10),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRewardsInput {
    pub monthly_views: f64,
    /// Share of views that qualify (%)
    pub qualified_view_percent: f64,
    pub niche: Niche,
    pub followers: f64,
}

impl Default for CreatorRewardsInput {
    fn default() -> Self {
        CreatorRewardsInput {
            monthly_views: 500_000.0,
            qualified_view_percent: 70.0,
            niche: Niche::Lifestyle,
            followers: 25_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorRewardsResult {
    pub eligible: bool,
    /// Followers still needed to join, 0 once eligible
    pub followers_needed: f64,
    pub qualified_views: f64,
    pub effective_rpm: ValueRange,
    /// Zero when not eligible
    pub monthly: ValueRange,
    pub yearly: ValueRange,
}

pub fn validate(input: &CreatorRewardsInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &CreatorRewardsInput) -> CreatorRewardsResult {
    let eligible = input.followers >= CREATOR_REWARDS_MIN_FOLLOWERS;
    let qualified_views = input.monthly_views * input.qualified_view_percent / 100.0;
    let rpm = CREATOR_REWARDS_RPM.scale(input.niche.rpm_multiplier());

    let monthly = if eligible {
        rpm.scale(qualified_views / 1000.0)
    } else {
        ValueRange::point(0.0)
    };

    CreatorRewardsResult {
        eligible,
        followers_needed: (CREATOR_REWARDS_MIN_FOLLOWERS - input.followers).max(0.0).ceil(),
        qualified_views: qualified_views.round(),
        effective_rpm: rpm.round(4),
        monthly: monthly.round(2),
        yearly: monthly.scale(12.0).round(2),
    }
}

pub struct CreatorRewards;

impl Calculator for CreatorRewards {
    type Input = CreatorRewardsInput;
    type Output = CreatorRewardsResult;

    const ID: &'static str = "creator-rewards";
    const TITLE: &'static str = "Creator Rewards Program Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["eligible", "monthly"];

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
    fn test_default_eligible() {
        let result = calculate(&CreatorRewardsInput::default());
        assert!(result.eligible);
        assert_eq!(result.followers_needed, 0.0);
        assert_eq!(result.qualified_views, 350_000.0);
        assert!((result.monthly.min - 140.0).abs() < 0.01);
        assert!((result.monthly.max - 350.0).abs() < 0.01);
        assert!((result.yearly.max - 4_200.0).abs() < 0.01);
        assert_eq!(round2(result.effective_rpm.min), 0.4);
    }

    #[test]
    fn test_threshold_inclusive() {
        let input = CreatorRewardsInput {
            followers: 10_000.0,
            ..CreatorRewardsInput::default()
        };
        assert!(calculate(&input).eligible);
    }

    #[test]
    fn test_not_eligible_earns_nothing() {
        let input = CreatorRewardsInput {
            followers: 7_500.0,
            ..CreatorRewardsInput::default()
        };
        let result = calculate(&input);
        assert!(!result.eligible);
        assert_eq!(result.followers_needed, 2_500.0);
        assert_eq!(result.monthly, ValueRange::point(0.0));
        assert_eq!(result.yearly, ValueRange::point(0.0));
    }

    #[test]
    fn test_niche_multiplier() {
        let input = CreatorRewardsInput {
            niche: Niche::Finance,
            ..CreatorRewardsInput::default()
        };
        let result = calculate(&input);
        // 350 × $1.00 × 1.4
        assert!((result.monthly.max - 490.0).abs() < 0.01);
    }
}
