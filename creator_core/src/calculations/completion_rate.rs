//! # Completion Rate
//!
//! Average watch time as a share of video length. Rewatches can push the
//! rate above 100%.
//!
//! | Completion | Rating        |
//! |------------|---------------|
//! | >= 70%     | excellent     |
//! | >= 50%     | good          |
//! | >= 30%     | average       |
//! | otherwise  | below-average |

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::Rating;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

/// Longest supported upload, in seconds
pub const MAX_VIDEO_SECONDS: f64 = 3_600.0;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("video_duration", "Video duration", 1.0, MAX_VIDEO_SECONDS),
    FieldSpec::number("avg_watch_time", "Average watch time", 0.0, MAX_VIDEO_SECONDS * 10.0),
    FieldSpec::number("views", "Views", 0.0, 1e12).optional(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRateInput {
    /// Video length (seconds)
    pub video_duration: f64,
    /// Average time watched per view (seconds)
    pub avg_watch_time: f64,
    /// Total views, used for the full-watch estimate
    pub views: f64,
}

impl Default for CompletionRateInput {
    fn default() -> Self {
        CompletionRateInput {
            video_duration: 30.0,
            avg_watch_time: 15.0,
            views: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRateResult {
    /// Completion rate (%), may exceed 100 with rewatches
    pub completion_rate: f64,
    pub rating: Rating,
    /// Viewers rewatch on average (completion above 100%)
    pub has_rewatches: bool,
    /// Seconds before the average viewer leaves (0 when they watch it all)
    pub drop_off_seconds: f64,
    /// Estimated views that reached the end
    pub estimated_full_watches: f64,
}

/// Rating for a completion or retention rate
pub fn rate_completion(rate: f64) -> Rating {
    Rating::from_thresholds(rate, 70.0, 50.0, 30.0)
}

pub fn validate(input: &CompletionRateInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &CompletionRateInput) -> CompletionRateResult {
    let completion_rate = round2(input.avg_watch_time / input.video_duration * 100.0);

    CompletionRateResult {
        completion_rate,
        rating: rate_completion(completion_rate),
        has_rewatches: completion_rate > 100.0,
        drop_off_seconds: round2((input.video_duration - input.avg_watch_time).max(0.0)),
        estimated_full_watches: (input.views * completion_rate.min(100.0) / 100.0).round(),
    }
}

pub struct CompletionRate;

impl Calculator for CompletionRate {
    type Input = CompletionRateInput;
    type Output = CompletionRateResult;

    const ID: &'static str = "completion-rate";
    const TITLE: &'static str = "Completion Rate Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["completion_rate", "rating"];

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
    fn test_completion_example() {
        let input = CompletionRateInput {
            video_duration: 30.0,
            avg_watch_time: 25.0,
            views: 10_000.0,
        };
        let result = calculate(&input);
        assert_eq!(result.completion_rate, 83.33);
        assert_eq!(result.rating, Rating::Excellent);
        assert!(!result.has_rewatches);
        assert_eq!(result.drop_off_seconds, 5.0);
        assert_eq!(result.estimated_full_watches, 8_333.0);
    }

    #[test]
    fn test_rewatch_exceeds_100() {
        let input = CompletionRateInput {
            video_duration: 10.0,
            avg_watch_time: 14.0,
            views: 1_000.0,
        };
        let result = calculate(&input);
        assert_eq!(result.completion_rate, 140.0);
        assert!(result.has_rewatches);
        assert_eq!(result.drop_off_seconds, 0.0);
        assert_eq!(result.estimated_full_watches, 1_000.0);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(rate_completion(70.0), Rating::Excellent);
        assert_eq!(rate_completion(69.99), Rating::Good);
        assert_eq!(rate_completion(30.0), Rating::Average);
        assert_eq!(rate_completion(0.0), Rating::BelowAverage);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let input = CompletionRateInput {
            video_duration: 0.0,
            ..CompletionRateInput::default()
        };
        assert!(validate(&input).has_error("video_duration"));
    }
}
