//! # Engagement Rate
//!
//! Average interactions per post as a share of followers.
//!
//! ```text
//! rate = (avg_likes + avg_comments + avg_shares) / followers × 100
//! ```
//!
//! | Rate      | Rating        |
//! |-----------|---------------|
//! | >= 10%    | excellent     |
//! | >= 5%     | good          |
//! | >= 2%     | average       |
//! | otherwise | below-average |
//!
//! ## JSON Example
//!
//! ```json
//! { "followers": 50000, "avg_likes": 2500, "avg_comments": 150, "avg_shares": 100 }
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::Rating;
use crate::units::{percent_of, round2};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("followers", "Followers", 1.0, 1e10),
    FieldSpec::number("avg_likes", "Average likes", 0.0, 1e10),
    FieldSpec::number("avg_comments", "Average comments", 0.0, 1e10),
    FieldSpec::number("avg_shares", "Average shares", 0.0, 1e10),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRateInput {
    /// Follower count (must be positive)
    pub followers: f64,
    /// Average likes per post
    pub avg_likes: f64,
    /// Average comments per post
    pub avg_comments: f64,
    /// Average shares per post
    pub avg_shares: f64,
}

impl Default for EngagementRateInput {
    fn default() -> Self {
        EngagementRateInput {
            followers: 10_000.0,
            avg_likes: 500.0,
            avg_comments: 25.0,
            avg_shares: 10.0,
        }
    }
}

/// Share of total engagement by interaction type (%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementBreakdown {
    pub likes_percent: f64,
    pub comments_percent: f64,
    pub shares_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRateResult {
    /// Engagement rate (%), 2 decimals
    pub rate: f64,
    pub rating: Rating,
    /// Sum of average likes, comments and shares
    pub total_engagement: f64,
    pub breakdown: EngagementBreakdown,
}

/// Rating for an engagement rate
pub fn rate_engagement(rate: f64) -> Rating {
    Rating::from_thresholds(rate, 10.0, 5.0, 2.0)
}

pub fn validate(input: &EngagementRateInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &EngagementRateInput) -> EngagementRateResult {
    let total = input.avg_likes + input.avg_comments + input.avg_shares;
    let rate = round2(total / input.followers * 100.0);

    EngagementRateResult {
        rate,
        rating: rate_engagement(rate),
        total_engagement: total,
        breakdown: EngagementBreakdown {
            likes_percent: round2(percent_of(input.avg_likes, total)),
            comments_percent: round2(percent_of(input.avg_comments, total)),
            shares_percent: round2(percent_of(input.avg_shares, total)),
        },
    }
}

pub struct EngagementRate;

impl Calculator for EngagementRate {
    type Input = EngagementRateInput;
    type Output = EngagementRateResult;

    const ID: &'static str = "engagement-rate";
    const TITLE: &'static str = "Engagement Rate Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["rate", "rating"];

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

    fn sample() -> EngagementRateInput {
        EngagementRateInput {
            followers: 50_000.0,
            avg_likes: 2_500.0,
            avg_comments: 150.0,
            avg_shares: 100.0,
        }
    }

    #[test]
    fn test_engagement_rate_example() {
        let result = calculate(&sample());
        // (2750 / 50000) × 100 = 5.5
        assert_eq!(result.rate, 5.5);
        assert_eq!(result.rating, Rating::Good);
        assert_eq!(result.total_engagement, 2_750.0);
    }

    #[test]
    fn test_breakdown_sums_to_100() {
        let b = calculate(&sample()).breakdown;
        assert!((b.likes_percent - 90.91).abs() < 0.01);
        let sum = b.likes_percent + b.comments_percent + b.shares_percent;
        assert!((sum - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_zero_engagement_breakdown() {
        let input = EngagementRateInput {
            avg_likes: 0.0,
            avg_comments: 0.0,
            avg_shares: 0.0,
            ..sample()
        };
        let result = calculate(&input);
        assert_eq!(result.rate, 0.0);
        assert_eq!(result.rating, Rating::BelowAverage);
        assert_eq!(result.breakdown.likes_percent, 0.0);
    }

    #[test]
    fn test_rating_thresholds_exact() {
        assert_eq!(rate_engagement(10.0), Rating::Excellent);
        assert_eq!(rate_engagement(9.99), Rating::Good);
        assert_eq!(rate_engagement(5.0), Rating::Good);
        assert_eq!(rate_engagement(2.0), Rating::Average);
        assert_eq!(rate_engagement(1.99), Rating::BelowAverage);
    }

    #[test]
    fn test_rejects_zero_followers() {
        let input = EngagementRateInput {
            followers: 0.0,
            ..sample()
        };
        let report = validate(&input);
        assert!(!report.valid);
        assert!(report.has_error("followers"));
        assert!(EngagementRate::run(&input).is_err());
    }

    #[test]
    fn test_rejects_negative_likes() {
        let input = EngagementRateInput {
            avg_likes: -1.0,
            ..sample()
        };
        assert_eq!(
            validate(&input).error("avg_likes"),
            Some("Average likes must be between 0 and 10000000000")
        );
    }
}
