//! # Content Value
//!
//! What one piece of content is worth in advertising terms: the media cost
//! a brand would pay to buy the same attention.
//!
//! ```text
//! value = views / 1000 × niche CPM × format multiplier × engagement multiplier
//! range = value × [0.75, 1.25]
//! ```
//!
//! Lifetime value adds 50% for long-tail views after the first month.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::tier::payout_engagement_multiplier;
use crate::tables::{Choice, ContentFormat, Niche};
use crate::units::{round2, round_to, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

const SPREAD_LOW: f64 = 0.75;
const SPREAD_HIGH: f64 = 1.25;
const LONG_TAIL_FACTOR: f64 = 1.5;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("views", "Views", 0.0, 1e12),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::choice("content_format", "Content format", ContentFormat::SLUGS),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentValueInput {
    pub views: f64,
    /// Engagement rate (%)
    pub engagement_rate: f64,
    pub niche: Niche,
    pub content_format: ContentFormat,
}

impl Default for ContentValueInput {
    fn default() -> Self {
        ContentValueInput {
            views: 50_000.0,
            engagement_rate: 5.0,
            niche: Niche::Lifestyle,
            content_format: ContentFormat::ShortVideo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentValueResult {
    /// Point estimate (USD)
    pub estimated_value: f64,
    pub value_range: ValueRange,
    /// Including long-tail views
    pub lifetime_value: ValueRange,
    /// USD per view, 5 decimals
    pub value_per_view: f64,
    /// CPM used for the niche
    pub cpm: f64,
}

pub fn validate(input: &ContentValueInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &ContentValueInput) -> ContentValueResult {
    let cpm = input.niche.profile().cpm_usd;
    let value = input.views / 1000.0
        * cpm
        * input.content_format.multiplier()
        * payout_engagement_multiplier(input.engagement_rate);

    let range = ValueRange::new(value * SPREAD_LOW, value * SPREAD_HIGH);
    let value_per_view = if input.views > 0.0 { value / input.views } else { 0.0 };

    ContentValueResult {
        estimated_value: round2(value),
        value_range: range.round(2),
        lifetime_value: range.scale(LONG_TAIL_FACTOR).round(2),
        value_per_view: round_to(value_per_view, 5),
        cpm,
    }
}

pub struct ContentValue;

impl Calculator for ContentValue {
    type Input = ContentValueInput;
    type Output = ContentValueResult;

    const ID: &'static str = "content-value";
    const TITLE: &'static str = "Content Value Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["estimated_value"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
