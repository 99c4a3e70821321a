//! # Brand Deal Rate
//!
//! Estimates what to charge a brand for one sponsored placement.
//!
//! ```text
//! rate = tier base range × engagement multiplier × niche multiplier × deliverable multiplier
//! ```
//!
//! - Tier is selected by follower count (see [`crate::tables::tier`]),
//!   lower bound inclusive: 500,000 followers is `macro`.
//! - Engagement multiplier is stepwise: `>= 10%` 1.5, `>= 5%` 1.2,
//!   `>= 3%` 1.0, `>= 1%` 0.8, otherwise 0.6.
//! - Annual potential assumes four deals per year.
//!
//! ## JSON Example
//!
//! ```json
//! { "followers": 50000, "engagement_rate": 5, "niche": "lifestyle", "deliverable_type": "in-feed" }
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::tier::engagement_multiplier;
use crate::tables::{Choice, Deliverable, FollowerTier, Niche};
use crate::units::{round_to, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

/// Sponsored deals assumed per year for the annual projection
pub const DEALS_PER_YEAR: f64 = 4.0;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("followers", "Followers", 1.0, 1e10),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::choice("deliverable_type", "Deliverable type", Deliverable::SLUGS),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDealInput {
    pub followers: f64,
    /// Engagement rate (%)
    pub engagement_rate: f64,
    pub niche: Niche,
    pub deliverable_type: Deliverable,
}

impl Default for BrandDealInput {
    fn default() -> Self {
        BrandDealInput {
            followers: 25_000.0,
            engagement_rate: 4.0,
            niche: Niche::Lifestyle,
            deliverable_type: Deliverable::InFeed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandDealResult {
    pub tier: FollowerTier,
    pub min_rate: f64,
    pub max_rate: f64,
    pub engagement_multiplier: f64,
    pub niche_multiplier: f64,
    pub deliverable_multiplier: f64,
    /// Midpoint rate divided by followers (USD, 4 decimals)
    pub cost_per_follower: f64,
    /// Four deals per year at the min / max rate
    pub annual_potential: ValueRange,
}

impl BrandDealResult {
    pub fn rate(&self) -> ValueRange {
        ValueRange::new(self.min_rate, self.max_rate)
    }
}

pub fn validate(input: &BrandDealInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

/// Rate range for one placement, before rounding
pub(crate) fn rate_range(input: &BrandDealInput) -> ValueRange {
    FollowerTier::for_followers(input.followers)
        .base_rate()
        .scale(engagement_multiplier(input.engagement_rate))
        .scale(input.niche.brand_multiplier())
        .scale(input.deliverable_type.multiplier())
}

pub fn calculate(input: &BrandDealInput) -> BrandDealResult {
    let rate = rate_range(input).round(2);

    BrandDealResult {
        tier: FollowerTier::for_followers(input.followers),
        min_rate: rate.min,
        max_rate: rate.max,
        engagement_multiplier: engagement_multiplier(input.engagement_rate),
        niche_multiplier: input.niche.brand_multiplier(),
        deliverable_multiplier: input.deliverable_type.multiplier(),
        cost_per_follower: round_to(rate.midpoint() / input.followers, 4),
        annual_potential: rate.scale(DEALS_PER_YEAR).round(2),
    }
}

pub struct BrandDeal;

impl Calculator for BrandDeal {
    type Input = BrandDealInput;
    type Output = BrandDealResult;

    const ID: &'static str = "brand-deal";
    const TITLE: &'static str = "Brand Deal Rate Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["tier", "min_rate", "max_rate"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}

/// Round a rate range to whole dollars for display
pub fn display_range(result: &BrandDealResult) -> ValueRange {
    ValueRange::new(result.min_rate.round(), result.max_rate.round())
}
