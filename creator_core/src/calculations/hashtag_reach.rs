//! # Hashtag Reach
//!
//! Judges how crowded a hashtag is and estimates the extra discovery views a
//! video can pick up from it.
//!
//! | Videos using the tag | Competition | Discovery factor |
//! |----------------------|-------------|------------------|
//! | >= 10,000,000        | saturated   | 0.1              |
//! | >= 1,000,000         | high        | 0.3              |
//! | >= 100,000           | medium      | 0.6              |
//! | otherwise            | low         | 1.0              |
//!
//! ```text
//! extra reach = views per video × discovery factor × engagement multiplier × [0.5, 1.5]
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::classify;
use crate::tables::tier::payout_engagement_multiplier;
use crate::units::{round2, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("hashtag_views", "Hashtag views", 0.0, 1e13),
    FieldSpec::number("hashtag_videos", "Hashtag videos", 1.0, 1e10),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagReachInput {
    /// Total views across the hashtag
    pub hashtag_views: f64,
    /// Videos posted under the hashtag
    pub hashtag_videos: f64,
    /// Creator's engagement rate (%)
    pub engagement_rate: f64,
}

impl Default for HashtagReachInput {
    fn default() -> Self {
        HashtagReachInput {
            hashtag_views: 50_000_000.0,
            hashtag_videos: 200_000.0,
            engagement_rate: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Competition {
    Low,
    Medium,
    High,
    Saturated,
}

impl Competition {
    pub fn for_videos(videos: f64) -> Self {
        classify(
            videos,
            &[
                (10_000_000.0, Competition::Saturated),
                (1_000_000.0, Competition::High),
                (100_000.0, Competition::Medium),
            ],
            Competition::Low,
        )
    }

    /// Share of the tag's typical views a new video can expect
    pub fn discovery_factor(&self) -> f64 {
        match self {
            Competition::Low => 1.0,
            Competition::Medium => 0.6,
            Competition::High => 0.3,
            Competition::Saturated => 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagReachResult {
    pub avg_views_per_video: f64,
    pub competition: Competition,
    /// Whole views
    pub estimated_extra_reach: ValueRange,
}

pub fn validate(input: &HashtagReachInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &HashtagReachInput) -> HashtagReachResult {
    let avg_views = input.hashtag_views / input.hashtag_videos;
    let competition = Competition::for_videos(input.hashtag_videos);
    let expected =
        avg_views * competition.discovery_factor() * payout_engagement_multiplier(input.engagement_rate);

    HashtagReachResult {
        avg_views_per_video: round2(avg_views),
        competition,
        estimated_extra_reach: ValueRange::new(expected * 0.5, expected * 1.5).round(0),
    }
}

pub struct HashtagReach;

impl Calculator for HashtagReach {
    type Input = HashtagReachInput;
    type Output = HashtagReachResult;

    const ID: &'static str = "hashtag-reach";
    const TITLE: &'static str = "Hashtag Reach Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["competition", "estimated_extra_reach"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
