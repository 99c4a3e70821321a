//! # Subscription Earnings
//!
//! Projects paid-subscription revenue month by month. Each month a share of
//! subscribers churns and new ones join:
//!
//! ```text
//! subscribers(1)   = current subscribers
//! subscribers(m+1) = subscribers(m) × (1 - churn) + new per month
//! net(m)           = subscribers(m) × price × creator share
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::units::round2;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("subscribers", "Subscribers", 0.0, 1e8),
    FieldSpec::number("monthly_price", "Monthly price", 0.99, 99.99),
    FieldSpec::number("creator_share_percent", "Creator share", 0.0, 100.0),
    FieldSpec::number("churn_rate", "Monthly churn", 0.0, 100.0),
    FieldSpec::number("new_subscribers_per_month", "New subscribers per month", 0.0, 1e7),
    FieldSpec::integer("months", "Months", 1, 36),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionEarningsInput {
    pub subscribers: f64,
    pub monthly_price: f64,
    /// Share of the price paid to the creator (%)
    pub creator_share_percent: f64,
    /// Subscribers lost each month (%)
    pub churn_rate: f64,
    pub new_subscribers_per_month: f64,
    pub months: u32,
}

impl Default for SubscriptionEarningsInput {
    fn default() -> Self {
        SubscriptionEarningsInput {
            subscribers: 200.0,
            monthly_price: 4.99,
            creator_share_percent: 50.0,
            churn_rate: 5.0,
            new_subscribers_per_month: 20.0,
            months: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionMonth {
    pub month: u32,
    /// Whole subscribers
    pub subscribers: f64,
    pub net_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionEarningsResult {
    pub first_month_net: f64,
    pub projection: Vec<SubscriptionMonth>,
    pub total_net: f64,
    pub average_monthly_net: f64,
    /// Subscribers in the final projected month
    pub ending_subscribers: f64,
    /// Level where churn equals new signups; `None` without churn
    pub steady_state_subscribers: Option<f64>,
}

pub fn validate(input: &SubscriptionEarningsInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &SubscriptionEarningsInput) -> SubscriptionEarningsResult {
    let churn = input.churn_rate / 100.0;
    let net_per_subscriber = input.monthly_price * input.creator_share_percent / 100.0;

    let mut subscribers = input.subscribers;
    let mut total = 0.0;
    let mut projection = Vec::with_capacity(input.months as usize);

    for month in 1..=input.months {
        let net = subscribers * net_per_subscriber;
        total += net;
        projection.push(SubscriptionMonth {
            month,
            subscribers: subscribers.round(),
            net_revenue: round2(net),
        });
        subscribers = subscribers * (1.0 - churn) + input.new_subscribers_per_month;
    }

    let ending_subscribers = projection.last().map(|m| m.subscribers).unwrap_or(input.subscribers);

    SubscriptionEarningsResult {
        first_month_net: round2(input.subscribers * net_per_subscriber),
        projection,
        total_net: round2(total),
        average_monthly_net: round2(total / input.months as f64),
        ending_subscribers,
        steady_state_subscribers: (churn > 0.0).then(|| (input.new_subscribers_per_month / churn).round()),
    }
}

pub struct SubscriptionEarnings;

impl Calculator for SubscriptionEarnings {
    type Input = SubscriptionEarningsInput;
    type Output = SubscriptionEarningsResult;

    const ID: &'static str = "subscription-earnings";
    const TITLE: &'static str = "Subscription Earnings Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["total_net", "ending_subscribers"];

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
    fn test_default_projection() {
        let result = calculate(&SubscriptionEarningsInput::default());
        assert_eq!(result.first_month_net, 499.0);
        assert_eq!(result.projection.len(), 12);
        assert_eq!(result.projection[0].subscribers, 200.0);
        assert_eq!(result.projection[1].subscribers, 210.0);
        assert_eq!(result.projection[1].net_revenue, 523.95);
        assert_eq!(result.ending_subscribers, 286.0);
        assert!((result.total_net - 7_388.79).abs() < 0.011);
        assert!((result.average_monthly_net - 615.73).abs() < 0.011);
        assert_eq!(result.steady_state_subscribers, Some(400.0));
    }

    #[test]
    fn test_no_churn_no_growth() {
        let input = SubscriptionEarningsInput {
            churn_rate: 0.0,
            new_subscribers_per_month: 0.0,
            months: 3,
            ..SubscriptionEarningsInput::default()
        };
        let result = calculate(&input);
        assert!((result.total_net - 1_497.0).abs() < 0.01);
        assert_eq!(result.ending_subscribers, 200.0);
        assert_eq!(result.steady_state_subscribers, None);
    }

    #[test]
    fn test_rejects_price_out_of_range() {
        let input = SubscriptionEarningsInput {
            monthly_price: 0.5,
            ..SubscriptionEarningsInput::default()
        };
        assert_eq!(
            validate(&input).error("monthly_price"),
            Some("Monthly price must be between 0.99 and 99.99")
        );
    }
}
