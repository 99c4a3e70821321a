//! # Video Performance
//!
//! Per-video scorecard: interaction rates against views, reach relative to
//! the follower base, and completion. The performance score weights three
//! normalized signals, each capped at 100:
//!
//! | Signal          | Ceiling   | Weight |
//! |-----------------|-----------|--------|
//! | engagement rate | 10%       | 0.35   |
//! | completion rate | 70%       | 0.35   |
//! | reach ratio     | 3× base   | 0.30   |

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::classify;
use crate::units::{percent_of, round1, round2};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

const ENGAGEMENT_CEILING: f64 = 10.0;
const COMPLETION_CEILING: f64 = 70.0;
const REACH_CEILING: f64 = 3.0;

const ENGAGEMENT_WEIGHT: f64 = 0.35;
const COMPLETION_WEIGHT: f64 = 0.35;
const REACH_WEIGHT: f64 = 0.30;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("views", "Views", 1.0, 1e12),
    FieldSpec::number("likes", "Likes", 0.0, 1e12),
    FieldSpec::number("comments", "Comments", 0.0, 1e12),
    FieldSpec::number("shares", "Shares", 0.0, 1e12),
    FieldSpec::number("saves", "Saves", 0.0, 1e12),
    FieldSpec::number("followers", "Followers", 1.0, 1e10),
    FieldSpec::number("avg_watch_time", "Average watch time", 0.0, 36_000.0),
    FieldSpec::number("video_duration", "Video duration", 1.0, 3_600.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPerformanceInput {
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub saves: f64,
    pub followers: f64,
    /// Seconds
    pub avg_watch_time: f64,
    /// Seconds
    pub video_duration: f64,
}

impl Default for VideoPerformanceInput {
    fn default() -> Self {
        VideoPerformanceInput {
            views: 20_000.0,
            likes: 1_500.0,
            comments: 80.0,
            shares: 60.0,
            saves: 120.0,
            followers: 10_000.0,
            avg_watch_time: 12.0,
            video_duration: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceLabel {
    Viral,
    Strong,
    Average,
    Weak,
}

impl PerformanceLabel {
    pub fn for_score(score: f64) -> Self {
        classify(
            score,
            &[
                (80.0, PerformanceLabel::Viral),
                (60.0, PerformanceLabel::Strong),
                (35.0, PerformanceLabel::Average),
            ],
            PerformanceLabel::Weak,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPerformanceResult {
    pub engagement_rate: f64,
    pub like_rate: f64,
    pub comment_rate: f64,
    pub share_rate: f64,
    pub save_rate: f64,
    /// Views per follower
    pub reach_ratio: f64,
    pub completion_rate: f64,
    /// 0-100, 1 decimal
    pub performance_score: f64,
    pub label: PerformanceLabel,
}

fn capped(value: f64, ceiling: f64) -> f64 {
    (value / ceiling * 100.0).min(100.0)
}

pub fn validate(input: &VideoPerformanceInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &VideoPerformanceInput) -> VideoPerformanceResult {
    let interactions = input.likes + input.comments + input.shares + input.saves;
    let engagement_rate = percent_of(interactions, input.views);
    let reach_ratio = input.views / input.followers;
    let completion_rate = percent_of(input.avg_watch_time, input.video_duration);

    let performance_score = round1(
        capped(engagement_rate, ENGAGEMENT_CEILING) * ENGAGEMENT_WEIGHT
            + capped(completion_rate, COMPLETION_CEILING) * COMPLETION_WEIGHT
            + capped(reach_ratio, REACH_CEILING) * REACH_WEIGHT,
    );

    VideoPerformanceResult {
        engagement_rate: round2(engagement_rate),
        like_rate: round2(percent_of(input.likes, input.views)),
        comment_rate: round2(percent_of(input.comments, input.views)),
        share_rate: round2(percent_of(input.shares, input.views)),
        save_rate: round2(percent_of(input.saves, input.views)),
        reach_ratio: round2(reach_ratio),
        completion_rate: round2(completion_rate),
        performance_score,
        label: PerformanceLabel::for_score(performance_score),
    }
}

pub struct VideoPerformance;

impl Calculator for VideoPerformance {
    type Input = VideoPerformanceInput;
    type Output = VideoPerformanceResult;

    const ID: &'static str = "video-performance";
    const TITLE: &'static str = "Video Performance Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["performance_score", "label", "engagement_rate"];

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
    fn test_default_scorecard() {
        let result = calculate(&VideoPerformanceInput::default());
        assert_eq!(result.engagement_rate, 8.8);
        assert_eq!(result.like_rate, 7.5);
        assert_eq!(result.comment_rate, 0.4);
        assert_eq!(result.share_rate, 0.3);
        assert_eq!(result.save_rate, 0.6);
        assert_eq!(result.reach_ratio, 2.0);
        assert_eq!(result.completion_rate, 60.0);
        // 88 × 0.35 + 85.71 × 0.35 + 66.67 × 0.30
        assert_eq!(result.performance_score, 80.8);
        assert_eq!(result.label, PerformanceLabel::Viral);
    }

    #[test]
    fn test_score_capped_at_100() {
        let input = VideoPerformanceInput {
            views: 1_000_000.0,
            likes: 200_000.0,
            followers: 1_000.0,
            avg_watch_time: 40.0,
            ..VideoPerformanceInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.performance_score, 100.0);
    }

    #[test]
    fn test_weak_video() {
        let input = VideoPerformanceInput {
            views: 500.0,
            likes: 5.0,
            comments: 0.0,
            shares: 0.0,
            saves: 0.0,
            followers: 10_000.0,
            avg_watch_time: 3.0,
            video_duration: 30.0,
        };
        let result = calculate(&input);
        assert_eq!(result.label, PerformanceLabel::Weak);
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(PerformanceLabel::for_score(60.0), PerformanceLabel::Strong);
        assert_eq!(PerformanceLabel::for_score(35.0), PerformanceLabel::Average);
        assert_eq!(PerformanceLabel::for_score(34.9), PerformanceLabel::Weak);
    }
}
