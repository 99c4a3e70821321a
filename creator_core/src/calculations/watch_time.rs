//! # Watch Time
//!
//! Total hours watched and average retention for one video.
//!
//! ```text
//! retention_rate    = avg_watch_time / video_duration × 100
//! total_watch_hours = views × avg_watch_time / 3600
//! ```

use serde::{Deserialize, Serialize};

use super::completion_rate::{rate_completion, MAX_VIDEO_SECONDS};
use super::Calculator;
use crate::tables::Rating;
use crate::units::{round2, SECONDS_PER_HOUR};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("video_duration", "Video duration", 1.0, MAX_VIDEO_SECONDS),
    FieldSpec::number("avg_watch_time", "Average watch time", 0.0, MAX_VIDEO_SECONDS * 10.0),
    FieldSpec::number("views", "Views", 0.0, 1e12),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTimeInput {
    /// Video length (seconds)
    pub video_duration: f64,
    /// Average time watched per view (seconds)
    pub avg_watch_time: f64,
    pub views: f64,
}

impl Default for WatchTimeInput {
    fn default() -> Self {
        WatchTimeInput {
            video_duration: 30.0,
            avg_watch_time: 15.0,
            views: 10_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchTimeResult {
    /// Retention (%), may exceed 100 with rewatches
    pub retention_rate: f64,
    pub rating: Rating,
    pub total_watch_hours: f64,
    pub total_watch_minutes: f64,
    /// Hours that would accrue if every view watched to the end
    pub potential_watch_hours: f64,
}

pub fn validate(input: &WatchTimeInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &WatchTimeInput) -> WatchTimeResult {
    let retention_rate = round2(input.avg_watch_time / input.video_duration * 100.0);
    let total_seconds = input.views * input.avg_watch_time;

    WatchTimeResult {
        retention_rate,
        rating: rate_completion(retention_rate),
        total_watch_hours: round2(total_seconds / SECONDS_PER_HOUR),
        total_watch_minutes: round2(total_seconds / 60.0),
        potential_watch_hours: round2(input.views * input.video_duration / SECONDS_PER_HOUR),
    }
}

pub struct WatchTime;

impl Calculator for WatchTime {
    type Input = WatchTimeInput;
    type Output = WatchTimeResult;

    const ID: &'static str = "watch-time";
    const TITLE: &'static str = "Watch Time Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;

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
    fn test_watch_time_example() {
        let input = WatchTimeInput {
            video_duration: 30.0,
            avg_watch_time: 22.0,
            views: 50_000.0,
        };
        let result = calculate(&input);
        assert_eq!(result.retention_rate, 73.33);
        // (50000 × 22) / 3600 = 305.555...
        assert_eq!(result.total_watch_hours, 305.56);
        assert_eq!(result.total_watch_minutes, 18_333.33);
        assert!((result.potential_watch_hours - 416.67).abs() < 1e-9);
        assert_eq!(result.rating, Rating::Excellent);
    }

    #[test]
    fn test_zero_views() {
        let input = WatchTimeInput {
            views: 0.0,
            ..WatchTimeInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.total_watch_hours, 0.0);
        assert_eq!(result.retention_rate, 50.0);
    }

    #[test]
    fn test_missing_views_rejected() {
        let input = WatchTimeInput {
            views: f64::NAN,
            ..WatchTimeInput::default()
        };
        assert_eq!(validate(&input).error("views"), Some("Views is required"));
    }
}
