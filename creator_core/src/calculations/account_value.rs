//! # Account Value
//!
//! Rough market value of a creator account, taken as the higher of two
//! valuations:
//!
//! - Audience: followers × tier value per follower × niche brand multiplier
//!   × engagement multiplier
//! - Revenue: annual revenue × 1.5..3.0
//!
//! The bounds are combined independently, so the result is never below
//! either valuation.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::tier::engagement_multiplier;
use crate::tables::{Choice, FollowerTier, Niche};
use crate::units::{round_to, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

/// Annual revenue multiple range
pub const REVENUE_MULTIPLE: ValueRange = ValueRange { min: 1.5, max: 3.0 };

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("followers", "Followers", 0.0, 1e10),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::number("monthly_revenue", "Monthly revenue", 0.0, 1e8),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountValueInput {
    pub followers: f64,
    /// Engagement rate (%)
    pub engagement_rate: f64,
    pub niche: Niche,
    pub monthly_revenue: f64,
}

impl Default for AccountValueInput {
    fn default() -> Self {
        AccountValueInput {
            followers: 100_000.0,
            engagement_rate: 5.0,
            niche: Niche::Lifestyle,
            monthly_revenue: 1_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValuationMethod {
    Audience,
    Revenue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountValueResult {
    pub tier: FollowerTier,
    pub audience_value: ValueRange,
    pub revenue_value: ValueRange,
    pub valuation: ValueRange,
    /// Valuation with the higher midpoint
    pub method: ValuationMethod,
    /// Midpoint valuation per follower, `None` without followers
    pub value_per_follower: Option<f64>,
}

pub fn validate(input: &AccountValueInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &AccountValueInput) -> AccountValueResult {
    let tier = FollowerTier::for_followers(input.followers);
    let audience = tier.value_per_follower().scale(
        input.followers * input.niche.brand_multiplier() * engagement_multiplier(input.engagement_rate),
    );
    let revenue = REVENUE_MULTIPLE.scale(input.monthly_revenue * 12.0);

    let valuation = ValueRange::new(audience.min.max(revenue.min), audience.max.max(revenue.max));
    let method = if revenue.midpoint() > audience.midpoint() {
        ValuationMethod::Revenue
    } else {
        ValuationMethod::Audience
    };

    AccountValueResult {
        tier,
        audience_value: audience.round(2),
        revenue_value: revenue.round(2),
        valuation: valuation.round(2),
        method,
        value_per_follower: (input.followers > 0.0)
            .then(|| round_to(valuation.midpoint() / input.followers, 4)),
    }
}

pub struct AccountValue;

impl Calculator for AccountValue {
    type Input = AccountValueInput;
    type Output = AccountValueResult;

    const ID: &'static str = "account-value";
    const TITLE: &'static str = "Account Value Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["valuation", "method"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
