//! # LIVE Gifts
//!
//! Converts LIVE gift diamonds into dollars at the fixed diamond rate
//! ($0.005), after any agency commission.
//!
//! ```text
//! per stream = diamonds × $0.005 × (1 - agency commission)
//! monthly    = per stream × streams per month
//! ```
//!
//! With a monthly income goal, also reports the diamonds each stream needs.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::platform::DIAMOND_USD;
use crate::units::{round2, round_to};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("diamonds_per_stream", "Diamonds per stream", 0.0, 1e10),
    FieldSpec::integer("streams_per_month", "Streams per month", 0, 200),
    FieldSpec::number("agency_commission", "Agency commission", 0.0, 50.0),
    FieldSpec::number("target_monthly_income", "Target monthly income", 0.0, 1e8).optional(),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGiftsInput {
    pub diamonds_per_stream: f64,
    pub streams_per_month: u32,
    /// Share kept by a LIVE agency (%)
    pub agency_commission: f64,
    /// Goal in USD, 0 for none
    pub target_monthly_income: f64,
}

impl Default for LiveGiftsInput {
    fn default() -> Self {
        LiveGiftsInput {
            diamonds_per_stream: 20_000.0,
            streams_per_month: 12,
            agency_commission: 0.0,
            target_monthly_income: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveGiftsResult {
    pub gross_per_stream: f64,
    pub net_per_stream: f64,
    pub monthly_diamonds: f64,
    pub monthly_earnings: f64,
    pub yearly_earnings: f64,
    pub agency_cut_monthly: f64,
    /// Diamonds per stream needed for the goal; `None` without a goal or streams
    pub diamonds_needed_per_stream: Option<f64>,
}

/// USD value of a diamond count
pub fn diamonds_to_usd(diamonds: f64) -> f64 {
    diamonds * DIAMOND_USD
}

pub fn validate(input: &LiveGiftsInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &LiveGiftsInput) -> LiveGiftsResult {
    let keep = 1.0 - input.agency_commission / 100.0;
    let streams = input.streams_per_month as f64;

    let gross_per_stream = diamonds_to_usd(input.diamonds_per_stream);
    let net_per_stream = gross_per_stream * keep;
    let monthly = net_per_stream * streams;

    let diamonds_needed_per_stream = (input.target_monthly_income > 0.0 && streams > 0.0 && keep > 0.0)
        .then(|| round_to(input.target_monthly_income / streams / (DIAMOND_USD * keep), 6).ceil());

    LiveGiftsResult {
        gross_per_stream: round2(gross_per_stream),
        net_per_stream: round2(net_per_stream),
        monthly_diamonds: input.diamonds_per_stream * streams,
        monthly_earnings: round2(monthly),
        yearly_earnings: round2(monthly * 12.0),
        agency_cut_monthly: round2((gross_per_stream - net_per_stream) * streams),
        diamonds_needed_per_stream,
    }
}

pub struct LiveGifts;

impl Calculator for LiveGifts {
    type Input = LiveGiftsInput;
    type Output = LiveGiftsResult;

    const ID: &'static str = "live-gifts";
    const TITLE: &'static str = "LIVE Gifts Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["monthly_earnings"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
