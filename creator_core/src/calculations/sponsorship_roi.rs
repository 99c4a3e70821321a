//! # Sponsorship ROI
//!
//! Brand-side return on a creator sponsorship.
//!
//! ```text
//! clicks      = views × click_through_rate / 100
//! conversions = clicks × conversion_rate / 100
//! revenue     = conversions × average_order_value
//! roi         = (revenue - sponsorship_cost) / sponsorship_cost × 100
//! ```
//!
//! | ROI       | Outcome   |
//! |-----------|-----------|
//! | >= 100%   | excellent |
//! | >= 50%    | good      |
//! | >= 0%     | break-even|
//! | otherwise | loss      |

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::classify;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("sponsorship_cost", "Sponsorship cost", 1.0, 1e8),
    FieldSpec::number("views", "Views", 1.0, 1e12),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
    FieldSpec::number("click_through_rate", "Click-through rate", 0.0, 100.0),
    FieldSpec::number("conversion_rate", "Conversion rate", 0.0, 100.0),
    FieldSpec::number("average_order_value", "Average order value", 0.0, 1e6),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipRoiInput {
    pub sponsorship_cost: f64,
    pub views: f64,
    /// Engagement rate (%)
    pub engagement_rate: f64,
    /// Click-through rate (%)
    pub click_through_rate: f64,
    /// Conversion rate (%)
    pub conversion_rate: f64,
    pub average_order_value: f64,
}

impl Default for SponsorshipRoiInput {
    fn default() -> Self {
        SponsorshipRoiInput {
            sponsorship_cost: 2_000.0,
            views: 100_000.0,
            engagement_rate: 5.0,
            click_through_rate: 1.5,
            conversion_rate: 3.0,
            average_order_value: 45.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoiOutcome {
    Excellent,
    Good,
    BreakEven,
    Loss,
}

impl RoiOutcome {
    pub fn for_roi(roi_percent: f64) -> Self {
        classify(
            roi_percent,
            &[
                (100.0, RoiOutcome::Excellent),
                (50.0, RoiOutcome::Good),
                (0.0, RoiOutcome::BreakEven),
            ],
            RoiOutcome::Loss,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipRoiResult {
    pub clicks: f64,
    pub conversions: f64,
    pub engagements: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub outcome: RoiOutcome,
    pub cpm: f64,
    /// Cost per click, `None` when no clicks are expected
    pub cost_per_click: Option<f64>,
    /// Cost per acquisition, `None` when no conversions are expected
    pub cost_per_acquisition: Option<f64>,
    /// Cost per engagement, `None` when no engagements are expected
    pub cost_per_engagement: Option<f64>,
}

fn cost_per(cost: f64, count: f64) -> Option<f64> {
    (count > 0.0).then(|| round2(cost / count))
}

pub fn validate(input: &SponsorshipRoiInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &SponsorshipRoiInput) -> SponsorshipRoiResult {
    let cost = input.sponsorship_cost;
    let clicks = input.views * input.click_through_rate / 100.0;
    let conversions = clicks * input.conversion_rate / 100.0;
    let engagements = input.views * input.engagement_rate / 100.0;
    let revenue = conversions * input.average_order_value;
    let roi_percent = round2((revenue - cost) / cost * 100.0);

    SponsorshipRoiResult {
        clicks: round2(clicks),
        conversions: round2(conversions),
        engagements: round2(engagements),
        revenue: round2(revenue),
        profit: round2(revenue - cost),
        roi_percent,
        outcome: RoiOutcome::for_roi(roi_percent),
        cpm: round2(cost / input.views * 1000.0),
        cost_per_click: cost_per(cost, clicks),
        cost_per_acquisition: cost_per(cost, conversions),
        cost_per_engagement: cost_per(cost, engagements),
    }
}

pub struct SponsorshipRoi;

impl Calculator for SponsorshipRoi {
    type Input = SponsorshipRoiInput;
    type Output = SponsorshipRoiResult;

    const ID: &'static str = "sponsorship-roi";
    const TITLE: &'static str = "Sponsorship ROI Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["roi_percent", "outcome"];

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
        let result = calculate(&SponsorshipRoiInput::default());
        // 100,000 × 1.5% = 1,500 clicks; × 3% = 45 conversions; × $45 = $2,025
        assert_eq!(result.clicks, 1_500.0);
        assert_eq!(result.conversions, 45.0);
        assert_eq!(result.revenue, 2_025.0);
        assert_eq!(result.profit, 25.0);
        assert_eq!(result.roi_percent, 1.25);
        assert_eq!(result.outcome, RoiOutcome::BreakEven);
        assert_eq!(result.cpm, 20.0);
        assert_eq!(result.cost_per_click, Some(1.33));
        assert_eq!(result.cost_per_acquisition, Some(44.44));
        assert_eq!(result.engagements, 5_000.0);
        assert_eq!(result.cost_per_engagement, Some(0.4));
    }

    #[test]
    fn test_no_clicks() {
        let input = SponsorshipRoiInput {
            click_through_rate: 0.0,
            ..SponsorshipRoiInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.cost_per_click, None);
        assert_eq!(result.cost_per_acquisition, None);
        assert_eq!(result.roi_percent, -100.0);
        assert_eq!(result.outcome, RoiOutcome::Loss);
    }

    #[test]
    fn test_outcome_boundaries() {
        assert_eq!(RoiOutcome::for_roi(100.0), RoiOutcome::Excellent);
        assert_eq!(RoiOutcome::for_roi(50.0), RoiOutcome::Good);
        assert_eq!(RoiOutcome::for_roi(0.0), RoiOutcome::BreakEven);
        assert_eq!(RoiOutcome::for_roi(-0.01), RoiOutcome::Loss);
    }

    #[test]
    fn test_rejects_zero_cost() {
        let input = SponsorshipRoiInput {
            sponsorship_cost: 0.0,
            ..SponsorshipRoiInput::default()
        };
        assert!(validate(&input).has_error("sponsorship_cost"));
    }
}
