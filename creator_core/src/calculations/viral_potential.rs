//! # Viral Potential Score
//!
//! Scores a video 0-100 from its early signals. Each signal is normalized
//! to a 0-100 sub-score against a ceiling, capped at 100, then weighted:
//!
//! | Signal          | Ceiling | Weight |
//! |-----------------|---------|--------|
//! | engagement rate | 15%     | 0.25   |
//! | share rate      | 1%      | 0.30   |
//! | save rate       | 2%      | 0.20   |
//! | completion rate | 80%     | 0.25   |
//!
//! Rates are measured against views, not followers.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::classify;
use crate::units::{percent_of, round1, round2};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

const ENGAGEMENT_CEILING: f64 = 15.0;
const SHARE_CEILING: f64 = 1.0;
const SAVE_CEILING: f64 = 2.0;
const COMPLETION_CEILING: f64 = 80.0;

const ENGAGEMENT_WEIGHT: f64 = 0.25;
const SHARE_WEIGHT: f64 = 0.30;
const SAVE_WEIGHT: f64 = 0.20;
const COMPLETION_WEIGHT: f64 = 0.25;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("views", "Views", 1.0, 1e12),
    FieldSpec::number("likes", "Likes", 0.0, 1e12),
    FieldSpec::number("comments", "Comments", 0.0, 1e12),
    FieldSpec::number("shares", "Shares", 0.0, 1e12),
    FieldSpec::number("saves", "Saves", 0.0, 1e12),
    FieldSpec::number("completion_rate", "Completion rate", 0.0, 1_000.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralPotentialInput {
    pub views: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub saves: f64,
    /// Completion rate (%), may exceed 100 with rewatches
    pub completion_rate: f64,
}

impl Default for ViralPotentialInput {
    fn default() -> Self {
        ViralPotentialInput {
            views: 10_000.0,
            likes: 800.0,
            comments: 40.0,
            shares: 30.0,
            saves: 50.0,
            completion_rate: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViralLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ViralLevel {
    pub fn for_score(score: f64) -> Self {
        classify(
            score,
            &[
                (80.0, ViralLevel::VeryHigh),
                (60.0, ViralLevel::High),
                (40.0, ViralLevel::Moderate),
                (20.0, ViralLevel::Low),
            ],
            ViralLevel::VeryLow,
        )
    }
}

/// Normalized 0-100 sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViralSubScores {
    pub engagement: f64,
    pub shares: f64,
    pub saves: f64,
    pub completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralPotentialResult {
    /// Weighted score 0-100, 1 decimal
    pub viral_score: f64,
    pub level: ViralLevel,
    pub engagement_rate: f64,
    pub share_rate: f64,
    pub save_rate: f64,
    pub sub_scores: ViralSubScores,
    /// Signal with the lowest sub-score (first in table order on ties)
    pub weakest_signal: String,
}

/// Normalize a rate against a ceiling to 0..=100
fn normalize(rate: f64, ceiling: f64) -> f64 {
    (rate / ceiling * 100.0).clamp(0.0, 100.0)
}

pub fn validate(input: &ViralPotentialInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &ViralPotentialInput) -> ViralPotentialResult {
    let interactions = input.likes + input.comments + input.shares + input.saves;
    let engagement_rate = percent_of(interactions, input.views);
    let share_rate = percent_of(input.shares, input.views);
    let save_rate = percent_of(input.saves, input.views);

    let sub_scores = ViralSubScores {
        engagement: round1(normalize(engagement_rate, ENGAGEMENT_CEILING)),
        shares: round1(normalize(share_rate, SHARE_CEILING)),
        saves: round1(normalize(save_rate, SAVE_CEILING)),
        completion: round1(normalize(input.completion_rate, COMPLETION_CEILING)),
    };

    let viral_score = round1(
        normalize(engagement_rate, ENGAGEMENT_CEILING) * ENGAGEMENT_WEIGHT
            + normalize(share_rate, SHARE_CEILING) * SHARE_WEIGHT
            + normalize(save_rate, SAVE_CEILING) * SAVE_WEIGHT
            + normalize(input.completion_rate, COMPLETION_CEILING) * COMPLETION_WEIGHT,
    );

    let signals = [
        ("engagement", sub_scores.engagement),
        ("shares", sub_scores.shares),
        ("saves", sub_scores.saves),
        ("completion", sub_scores.completion),
    ];
    let weakest_signal = signals
        .iter()
        .fold(signals[0], |weakest, s| if s.1 < weakest.1 { *s } else { weakest })
        .0
        .to_string();

    ViralPotentialResult {
        viral_score,
        level: ViralLevel::for_score(viral_score),
        engagement_rate: round2(engagement_rate),
        share_rate: round2(share_rate),
        save_rate: round2(save_rate),
        sub_scores,
        weakest_signal,
    }
}

pub struct ViralPotential;

impl Calculator for ViralPotential {
    type Input = ViralPotentialInput;
    type Output = ViralPotentialResult;

    const ID: &'static str = "viral-potential";
    const TITLE: &'static str = "Viral Potential Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["viral_score", "level"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
