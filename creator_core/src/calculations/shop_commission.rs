//! # Shop Affiliate Commission
//!
//! Affiliate commission from products sold through the creator's links,
//! net of refunded orders (commission is clawed back on refunds).
//!
//! ```text
//! commission per unit = product price × commission rate
//! net units           = units sold × (1 - refund rate)
//! monthly commission  = commission per unit × net units
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::units::{percent_of, round2};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("product_price", "Product price", 0.01, 1e6),
    FieldSpec::number("commission_rate", "Commission rate", 0.0, 100.0),
    FieldSpec::number("units_sold_monthly", "Units sold per month", 0.0, 1e9),
    FieldSpec::number("refund_rate", "Refund rate", 0.0, 100.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCommissionInput {
    pub product_price: f64,
    /// Commission (%)
    pub commission_rate: f64,
    pub units_sold_monthly: f64,
    /// Refunded orders (%)
    pub refund_rate: f64,
}

impl Default for ShopCommissionInput {
    fn default() -> Self {
        ShopCommissionInput {
            product_price: 30.0,
            commission_rate: 15.0,
            units_sold_monthly: 200.0,
            refund_rate: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCommissionResult {
    pub gross_sales: f64,
    pub commission_per_unit: f64,
    pub refunded_units: f64,
    pub monthly_commission: f64,
    pub yearly_commission: f64,
    /// Commission lost to refunds each month
    pub refund_loss: f64,
    /// Commission kept over gross sales (%)
    pub effective_rate: f64,
}

pub fn validate(input: &ShopCommissionInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &ShopCommissionInput) -> ShopCommissionResult {
    let gross_sales = input.product_price * input.units_sold_monthly;
    let per_unit = input.product_price * input.commission_rate / 100.0;
    let refunded = input.units_sold_monthly * input.refund_rate / 100.0;
    let monthly = per_unit * (input.units_sold_monthly - refunded);

    ShopCommissionResult {
        gross_sales: round2(gross_sales),
        commission_per_unit: round2(per_unit),
        refunded_units: round2(refunded),
        monthly_commission: round2(monthly),
        yearly_commission: round2(monthly * 12.0),
        refund_loss: round2(per_unit * refunded),
        effective_rate: round2(percent_of(monthly, gross_sales)),
    }
}

pub struct ShopCommission;

impl Calculator for ShopCommission {
    type Input = ShopCommissionInput;
    type Output = ShopCommissionResult;

    const ID: &'static str = "shop-commission";
    const TITLE: &'static str = "Shop Commission Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["monthly_commission"];

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
    fn test_default_commission() {
        let result = calculate(&ShopCommissionInput::default());
        assert_eq!(result.gross_sales, 6_000.0);
        assert_eq!(result.commission_per_unit, 4.5);
        assert_eq!(result.refunded_units, 10.0);
        assert_eq!(result.monthly_commission, 855.0);
        assert_eq!(result.yearly_commission, 10_260.0);
        assert_eq!(result.refund_loss, 45.0);
        assert_eq!(result.effective_rate, 14.25);
    }

    #[test]
    fn test_no_sales() {
        let input = ShopCommissionInput {
            units_sold_monthly: 0.0,
            ..ShopCommissionInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.monthly_commission, 0.0);
        assert_eq!(result.effective_rate, 0.0);
    }

    #[test]
    fn test_rejects_commission_over_100() {
        let input = ShopCommissionInput {
            commission_rate: 120.0,
            ..ShopCommissionInput::default()
        };
        assert_eq!(
            validate(&input).error("commission_rate"),
            Some("Commission rate must be between 0 and 100")
        );
    }
}
