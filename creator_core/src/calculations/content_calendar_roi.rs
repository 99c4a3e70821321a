//! # Content Calendar ROI
//!
//! Monthly return on a posting schedule, counting the creator's time at an
//! hourly rate alongside direct production costs.
//!
//! ```text
//! monthly_posts = posts_per_week × 52 / 12
//! cost          = monthly_posts × (hours_per_post × hourly_rate + production_cost_per_post)
//! revenue       = monthly_posts × avg_views_per_post / 1000 × rpm
//!                 + brand_deals_per_month × avg_deal_value
//! roi           = (revenue - cost) / cost × 100
//! ```

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::units::{round2, WEEKS_PER_MONTH};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("posts_per_week", "Posts per week", 1, 50),
    FieldSpec::number("hours_per_post", "Hours per post", 0.1, 100.0),
    FieldSpec::number("hourly_rate", "Hourly rate", 0.0, 10_000.0),
    FieldSpec::number("production_cost_per_post", "Production cost per post", 0.0, 1e6),
    FieldSpec::number("avg_views_per_post", "Average views per post", 0.0, 1e10),
    FieldSpec::number("rpm", "RPM", 0.0, 100.0),
    FieldSpec::number("brand_deals_per_month", "Brand deals per month", 0.0, 100.0),
    FieldSpec::number("avg_deal_value", "Average deal value", 0.0, 1e7),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCalendarRoiInput {
    pub posts_per_week: u32,
    pub hours_per_post: f64,
    /// Value of the creator's time (USD/hour)
    pub hourly_rate: f64,
    pub production_cost_per_post: f64,
    pub avg_views_per_post: f64,
    /// Payout per 1,000 views (USD)
    pub rpm: f64,
    pub brand_deals_per_month: f64,
    pub avg_deal_value: f64,
}

impl Default for ContentCalendarRoiInput {
    fn default() -> Self {
        ContentCalendarRoiInput {
            posts_per_week: 5,
            hours_per_post: 2.0,
            hourly_rate: 25.0,
            production_cost_per_post: 20.0,
            avg_views_per_post: 10_000.0,
            rpm: 0.5,
            brand_deals_per_month: 1.0,
            avg_deal_value: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCalendarRoiResult {
    pub monthly_posts: f64,
    pub hours_per_month: f64,
    pub time_cost: f64,
    pub production_cost: f64,
    pub total_cost: f64,
    pub ad_revenue: f64,
    pub brand_revenue: f64,
    pub total_revenue: f64,
    pub monthly_profit: f64,
    /// `None` when the schedule costs nothing
    pub roi_percent: Option<f64>,
    /// Revenue per hour worked
    pub effective_hourly_rate: f64,
    pub revenue_per_post: f64,
    /// Views each post needs for revenue to cover cost; `None` at zero RPM
    pub break_even_views_per_post: Option<f64>,
}

pub fn validate(input: &ContentCalendarRoiInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &ContentCalendarRoiInput) -> ContentCalendarRoiResult {
    let monthly_posts = input.posts_per_week as f64 * WEEKS_PER_MONTH;
    let hours = monthly_posts * input.hours_per_post;

    let time_cost = hours * input.hourly_rate;
    let production_cost = monthly_posts * input.production_cost_per_post;
    let total_cost = time_cost + production_cost;

    let revenue_per_view = input.rpm / 1000.0;
    let ad_revenue = monthly_posts * input.avg_views_per_post * revenue_per_view;
    let brand_revenue = input.brand_deals_per_month * input.avg_deal_value;
    let total_revenue = ad_revenue + brand_revenue;
    let profit = total_revenue - total_cost;

    let break_even_views_per_post = (revenue_per_view > 0.0).then(|| {
        let shortfall = (total_cost - brand_revenue).max(0.0);
        (shortfall / (monthly_posts * revenue_per_view)).ceil()
    });

    ContentCalendarRoiResult {
        monthly_posts: round2(monthly_posts),
        hours_per_month: round2(hours),
        time_cost: round2(time_cost),
        production_cost: round2(production_cost),
        total_cost: round2(total_cost),
        ad_revenue: round2(ad_revenue),
        brand_revenue: round2(brand_revenue),
        total_revenue: round2(total_revenue),
        monthly_profit: round2(profit),
        roi_percent: (total_cost > 0.0).then(|| round2(profit / total_cost * 100.0)),
        effective_hourly_rate: round2(total_revenue / hours),
        revenue_per_post: round2(total_revenue / monthly_posts),
        break_even_views_per_post,
    }
}

pub struct ContentCalendarRoi;

impl Calculator for ContentCalendarRoi {
    type Input = ContentCalendarRoiInput;
    type Output = ContentCalendarRoiResult;

    const ID: &'static str = "content-calendar-roi";
    const TITLE: &'static str = "Content Calendar ROI Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["monthly_profit", "roi_percent"];

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
    fn test_default_schedule() {
        let result = calculate(&ContentCalendarRoiInput::default());
        assert_eq!(result.monthly_posts, 21.67);
        assert_eq!(result.hours_per_month, 43.33);
        assert_eq!(result.time_cost, 1_083.33);
        assert_eq!(result.production_cost, 433.33);
        assert_eq!(result.total_cost, 1_516.67);
        assert_eq!(result.ad_revenue, 108.33);
        assert_eq!(result.total_revenue, 608.33);
        assert_eq!(result.monthly_profit, -908.33);
        assert_eq!(result.roi_percent, Some(-59.89));
        assert_eq!(result.effective_hourly_rate, 14.04);
        assert_eq!(result.break_even_views_per_post, Some(93_847.0));
    }

    #[test]
    fn test_free_schedule() {
        let input = ContentCalendarRoiInput {
            hourly_rate: 0.0,
            production_cost_per_post: 0.0,
            ..ContentCalendarRoiInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.roi_percent, None);
        assert_eq!(result.break_even_views_per_post, Some(0.0));
    }

    #[test]
    fn test_zero_rpm() {
        let input = ContentCalendarRoiInput {
            rpm: 0.0,
            ..ContentCalendarRoiInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.ad_revenue, 0.0);
        assert_eq!(result.break_even_views_per_post, None);
    }

    #[test]
    fn test_rejects_zero_posts() {
        let input = ContentCalendarRoiInput {
            posts_per_week: 0,
            ..ContentCalendarRoiInput::default()
        };
        assert!(validate(&input).has_error("posts_per_week"));
    }
}
