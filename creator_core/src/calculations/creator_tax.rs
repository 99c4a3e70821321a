//! # Creator Tax Estimate
//!
//! US federal + state estimate for a self-employed creator.
//!
//! ```text
//! net profit   = max(gross income - business expenses, 0)
//! SE earnings  = net profit × 92.35%
//! SE tax       = min(SE earnings, wage base) × 12.4% + SE earnings × 2.9%
//! AGI          = net profit - SE tax / 2
//! taxable      = max(AGI - standard deduction, 0)
//! state tax    = AGI × state rate
//! ```
//!
//! Quarterly estimated payments are due Apr 15, Jun 15, Sep 15 and Jan 15 of
//! the following year, moved to the next Monday when they fall on a weekend.
//! Federal holidays are not considered.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::tax::{MEDICARE_RATE, SE_EARNINGS_FACTOR, SOCIAL_SECURITY_RATE, SOCIAL_SECURITY_WAGE_BASE};
use crate::tables::{Choice, FilingStatus};
use crate::units::{percent_of, round2};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("gross_income", "Gross income", 0.0, 1e8),
    FieldSpec::number("business_expenses", "Business expenses", 0.0, 1e8),
    FieldSpec::choice("filing_status", "Filing status", FilingStatus::SLUGS),
    FieldSpec::number("state_tax_rate", "State tax rate", 0.0, 15.0),
    FieldSpec::integer("tax_year", "Tax year", 2024, 2030),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorTaxInput {
    pub gross_income: f64,
    pub business_expenses: f64,
    pub filing_status: FilingStatus,
    /// Flat state income tax rate (%)
    pub state_tax_rate: f64,
    pub tax_year: i32,
}

impl Default for CreatorTaxInput {
    fn default() -> Self {
        CreatorTaxInput {
            gross_income: 60_000.0,
            business_expenses: 10_000.0,
            filing_status: FilingStatus::Single,
            state_tax_rate: 5.0,
            tax_year: 2025,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorTaxResult {
    pub net_profit: f64,
    pub self_employment_tax: f64,
    pub se_tax_deduction: f64,
    pub adjusted_gross_income: f64,
    pub standard_deduction: f64,
    pub taxable_income: f64,
    pub federal_income_tax: f64,
    pub state_income_tax: f64,
    pub total_tax: f64,
    /// Total tax over net profit (%)
    pub effective_rate: f64,
    /// Top federal bracket reached (%)
    pub marginal_rate: f64,
    pub quarterly_payment: f64,
    pub quarterly_due_dates: Vec<NaiveDate>,
    pub take_home: f64,
}

/// Roll a Saturday or Sunday forward to Monday
fn next_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Estimated-payment due dates for a tax year
pub fn quarterly_due_dates(tax_year: i32) -> Vec<NaiveDate> {
    [(tax_year, 4), (tax_year, 6), (tax_year, 9), (tax_year + 1, 1)]
        .into_iter()
        .filter_map(|(year, month)| NaiveDate::from_ymd_opt(year, month, 15))
        .map(next_business_day)
        .collect()
}

/// Social Security + Medicare on net self-employment profit
pub fn self_employment_tax(net_profit: f64) -> f64 {
    let earnings = net_profit * SE_EARNINGS_FACTOR;
    earnings.min(SOCIAL_SECURITY_WAGE_BASE) * SOCIAL_SECURITY_RATE + earnings * MEDICARE_RATE
}

pub fn validate(input: &CreatorTaxInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &CreatorTaxInput) -> CreatorTaxResult {
    let net_profit = (input.gross_income - input.business_expenses).max(0.0);
    let se_tax = self_employment_tax(net_profit);
    let se_deduction = se_tax / 2.0;
    let agi = net_profit - se_deduction;

    let standard_deduction = input.filing_status.standard_deduction();
    let taxable = (agi - standard_deduction).max(0.0);
    let (federal, marginal) = input.filing_status.income_tax(taxable);
    let state = agi * input.state_tax_rate / 100.0;
    let total = se_tax + federal + state;

    CreatorTaxResult {
        net_profit: round2(net_profit),
        self_employment_tax: round2(se_tax),
        se_tax_deduction: round2(se_deduction),
        adjusted_gross_income: round2(agi),
        standard_deduction,
        taxable_income: round2(taxable),
        federal_income_tax: round2(federal),
        state_income_tax: round2(state),
        total_tax: round2(total),
        effective_rate: round2(percent_of(total, net_profit)),
        marginal_rate: round2(marginal * 100.0),
        quarterly_payment: round2(total / 4.0),
        quarterly_due_dates: quarterly_due_dates(input.tax_year),
        take_home: round2(net_profit - total),
    }
}

pub struct CreatorTax;

impl Calculator for CreatorTax {
    type Input = CreatorTaxInput;
    type Output = CreatorTaxResult;

    const ID: &'static str = "creator-tax";
    const TITLE: &'static str = "Creator Tax Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["total_tax", "effective_rate"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
