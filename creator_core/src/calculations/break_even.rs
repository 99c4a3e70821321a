//! # Ad Spend Break-Even
//!
//! How many sales a paid TikTok campaign needs before it pays for itself.
//!
//! ```text
//! required_clicks      = ad_spend / cost_per_click
//! required_conversions = required_clicks × conversion_rate / 100
//! profit_per_unit      = product_price - product_cost
//! break_even_units     = ceil(ad_spend / profit_per_unit)
//! ```
//!
//! `product_cost` must be strictly below `product_price`, otherwise no
//! number of sales can break even.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("ad_spend", "Ad spend", 0.0, 1e9),
    FieldSpec::number("cost_per_click", "Cost per click", 0.01, 1_000.0),
    FieldSpec::number("conversion_rate", "Conversion rate", 0.0, 100.0),
    FieldSpec::number("product_price", "Product price", 0.01, 1e7),
    FieldSpec::number("product_cost", "Product cost", 0.0, 1e7),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Total campaign budget (USD)
    pub ad_spend: f64,
    pub cost_per_click: f64,
    /// Click-to-purchase conversion (%)
    pub conversion_rate: f64,
    pub product_price: f64,
    /// Unit cost of goods (USD)
    pub product_cost: f64,
}

impl Default for BreakEvenInput {
    fn default() -> Self {
        BreakEvenInput {
            ad_spend: 500.0,
            cost_per_click: 0.5,
            conversion_rate: 2.0,
            product_price: 40.0,
            product_cost: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    pub required_clicks: f64,
    pub required_conversions: f64,
    pub profit_per_unit: f64,
    /// Units that must sell to recover the ad spend (rounded up)
    pub break_even_units: u64,
    /// Revenue from the conversions the budget buys
    pub projected_revenue: f64,
    /// Gross profit on those conversions minus ad spend
    pub projected_profit: f64,
    /// Return on ad spend (revenue / spend), 0 when spend is 0
    pub roas: f64,
    /// Projected profit is at least zero
    pub is_profitable: bool,
}

pub fn validate(input: &BreakEvenInput) -> ValidationReport {
    let mut report = validate_input(FIELDS, input);
    if !report.has_error("product_cost") && !report.has_error("product_price") {
        report.require(
            "product_cost",
            input.product_cost < input.product_price,
            "Product cost must be lower than the product price",
        );
    }
    report
}

pub fn calculate(input: &BreakEvenInput) -> BreakEvenResult {
    let required_clicks = input.ad_spend / input.cost_per_click;
    let required_conversions = required_clicks * input.conversion_rate / 100.0;
    let profit_per_unit = input.product_price - input.product_cost;
    let break_even_units = (input.ad_spend / profit_per_unit).ceil() as u64;

    let projected_revenue = required_conversions * input.product_price;
    let projected_profit = required_conversions * profit_per_unit - input.ad_spend;
    let roas = if input.ad_spend > 0.0 {
        projected_revenue / input.ad_spend
    } else {
        0.0
    };

    BreakEvenResult {
        required_clicks: round2(required_clicks),
        required_conversions: round2(required_conversions),
        profit_per_unit: round2(profit_per_unit),
        break_even_units,
        projected_revenue: round2(projected_revenue),
        projected_profit: round2(projected_profit),
        roas: round2(roas),
        is_profitable: projected_profit >= 0.0,
    }
}

pub struct BreakEven;

impl Calculator for BreakEven {
    type Input = BreakEvenInput;
    type Output = BreakEvenResult;

    const ID: &'static str = "break-even";
    const TITLE: &'static str = "Ad Spend Break-Even Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["break_even_units", "is_profitable"];

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

    fn sample() -> BreakEvenInput {
        BreakEvenInput {
            ad_spend: 1_000.0,
            cost_per_click: 0.50,
            conversion_rate: 2.0,
            product_price: 50.0,
            product_cost: 20.0,
        }
    }

    #[test]
    fn test_break_even_example() {
        let result = calculate(&sample());
        assert_eq!(result.required_clicks, 2_000.0);
        assert_eq!(result.required_conversions, 40.0);
        assert_eq!(result.profit_per_unit, 30.0);
        // 1000 / 30 = 33.3 → 34
        assert_eq!(result.break_even_units, 34);
        assert_eq!(result.projected_revenue, 2_000.0);
        assert_eq!(result.projected_profit, 200.0);
        assert_eq!(result.roas, 2.0);
        assert!(result.is_profitable);
    }

    #[test]
    fn test_exact_division_does_not_round_up() {
        let input = BreakEvenInput {
            ad_spend: 900.0,
            ..sample()
        };
        assert_eq!(calculate(&input).break_even_units, 30);
    }

    #[test]
    fn test_unprofitable_campaign() {
        let input = BreakEvenInput {
            conversion_rate: 1.0,
            ..sample()
        };
        let result = calculate(&input);
        assert_eq!(result.required_conversions, 20.0);
        assert!(!result.is_profitable);
        assert!(result.projected_profit < 0.0);
    }

    #[test]
    fn test_fractional_conversions_profit_matches_flag() {
        // 33.5 conversions clear the ad spend even though 34 units are needed to break even
        let input = BreakEvenInput {
            conversion_rate: 1.675,
            ..sample()
        };
        let result = calculate(&input);
        assert_eq!(result.break_even_units, 34);
        assert!((result.required_conversions - 33.5).abs() < 0.01);
        assert!((result.projected_profit - 5.0).abs() < 0.01);
        assert!(result.is_profitable);
    }

    #[test]
    fn test_zero_spend() {
        let input = BreakEvenInput {
            ad_spend: 0.0,
            ..sample()
        };
        let result = calculate(&input);
        assert_eq!(result.break_even_units, 0);
        assert_eq!(result.roas, 0.0);
    }

    #[test]
    fn test_rejects_cost_above_price() {
        let input = BreakEvenInput {
            product_cost: 50.0,
            ..sample()
        };
        let report = validate(&input);
        assert_eq!(
            report.error("product_cost"),
            Some("Product cost must be lower than the product price")
        );
    }

    #[test]
    fn test_rejects_zero_cost_per_click() {
        let input = BreakEvenInput {
            cost_per_click: 0.0,
            ..sample()
        };
        assert!(validate(&input).has_error("cost_per_click"));
    }
}
