//! # Ad Campaign Cost
//!
//! Delivery estimate for a paid campaign bought on a CPM basis.
//!
//! ```text
//! impressions = budget / cpm × 1000
//! clicks      = impressions × click_through_rate / 100
//! conversions = clicks × conversion_rate / 100
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("budget", "Budget", 1.0, 1e9),
    FieldSpec::number("cpm", "CPM", 0.01, 1_000.0),
    FieldSpec::number("click_through_rate", "Click-through rate", 0.0, 100.0),
    FieldSpec::number("conversion_rate", "Conversion rate", 0.0, 100.0),
    FieldSpec::integer("campaign_days", "Campaign days", 1, 365),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCostInput {
    pub budget: f64,
    /// Cost per 1,000 impressions (USD)
    pub cpm: f64,
    /// Click-through rate (%)
    pub click_through_rate: f64,
    /// Conversion rate (%)
    pub conversion_rate: f64,
    pub campaign_days: u32,
}

impl Default for AdCostInput {
    fn default() -> Self {
        AdCostInput {
            budget: 500.0,
            cpm: 10.0,
            click_through_rate: 1.0,
            conversion_rate: 2.0,
            campaign_days: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCostResult {
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    /// `None` when no clicks are expected
    pub cost_per_click: Option<f64>,
    /// `None` when no conversions are expected
    pub cost_per_acquisition: Option<f64>,
    pub daily_budget: f64,
    pub daily_impressions: f64,
}

pub fn validate(input: &AdCostInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &AdCostInput) -> AdCostResult {
    let impressions = input.budget / input.cpm * 1000.0;
    let clicks = impressions * input.click_through_rate / 100.0;
    let conversions = clicks * input.conversion_rate / 100.0;
    let days = input.campaign_days as f64;

    AdCostResult {
        impressions: impressions.round(),
        clicks: round2(clicks),
        conversions: round2(conversions),
        cost_per_click: (clicks > 0.0).then(|| round2(input.budget / clicks)),
        cost_per_acquisition: (conversions > 0.0).then(|| round2(input.budget / conversions)),
        daily_budget: round2(input.budget / days),
        daily_impressions: (impressions / days).round(),
    }
}

pub struct AdCost;

impl Calculator for AdCost {
    type Input = AdCostInput;
    type Output = AdCostResult;

    const ID: &'static str = "ad-cost";
    const TITLE: &'static str = "TikTok Ad Cost Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["impressions", "cost_per_acquisition"];

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
    fn test_default_campaign() {
        let result = calculate(&AdCostInput::default());
        assert_eq!(result.impressions, 50_000.0);
        assert_eq!(result.clicks, 500.0);
        assert_eq!(result.conversions, 10.0);
        assert_eq!(result.cost_per_click, Some(1.0));
        assert_eq!(result.cost_per_acquisition, Some(50.0));
        assert_eq!(result.daily_budget, 71.43);
        assert_eq!(result.daily_impressions, 7_143.0);
    }

    #[test]
    fn test_zero_ctr() {
        let input = AdCostInput {
            click_through_rate: 0.0,
            ..AdCostInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.clicks, 0.0);
        assert_eq!(result.cost_per_click, None);
        assert_eq!(result.cost_per_acquisition, None);
    }

    #[test]
    fn test_rejects_zero_cpm() {
        let input = AdCostInput {
            cpm: 0.0,
            ..AdCostInput::default()
        };
        assert!(validate(&input).has_error("cpm"));
    }
}
