//! End-to-end runs through the JSON registry, the way a form or the CLI
//! drives the calculators.

use creator_core::analytics::MemorySink;
use creator_core::calculations::brand_deal::{BrandDeal, BrandDealInput};
use creator_core::calculations::creator_fund::{CreatorFund, CreatorFundInput};
use creator_core::calculations::{Calculator, CalculatorKind, Submission};
use creator_core::session::CalculatorSession;
use creator_core::tables::{Deliverable, FollowerTier, Niche};
use serde_json::json;

#[test]
fn engagement_rate_good() {
    let result = CalculatorKind::EngagementRate
        .calculate_json(&json!({
            "followers": 50000,
            "avg_likes": 2500,
            "avg_comments": 150,
            "avg_shares": 100
        }))
        .unwrap();

    assert_eq!(result["rate"], 5.5);
    assert_eq!(result["rating"], "good");
    assert_eq!(result["total_engagement"], 2750.0);
}

#[test]
fn break_even_campaign() {
    let result = CalculatorKind::BreakEven
        .calculate_json(&json!({
            "ad_spend": 1000,
            "cost_per_click": 0.50,
            "conversion_rate": 2,
            "product_price": 50,
            "product_cost": 20
        }))
        .unwrap();

    assert_eq!(result["required_clicks"], 2000.0);
    assert_eq!(result["required_conversions"], 40.0);
    assert_eq!(result["profit_per_unit"], 30.0);
    assert_eq!(result["break_even_units"], 34);
    assert_eq!(result["is_profitable"], true);
}

#[test]
fn completion_rate_of_short_video() {
    let result = CalculatorKind::CompletionRate
        .calculate_json(&json!({"video_duration": 30, "avg_watch_time": 25}))
        .unwrap();

    assert_eq!(result["completion_rate"], 83.33);
    assert_eq!(result["has_rewatches"], false);
}

#[test]
fn watch_time_hours() {
    let result = CalculatorKind::WatchTime
        .calculate_json(&json!({"video_duration": 30, "avg_watch_time": 22, "views": 50000}))
        .unwrap();

    assert_eq!(result["retention_rate"], 73.33);
    assert_eq!(result["total_watch_hours"], 305.56);
}

#[test]
fn creator_fund_within_rpm_bounds() {
    let input = CreatorFundInput {
        monthly_views: 500_000.0,
        niche: Niche::Lifestyle,
        engagement_rate: 5.0,
    };
    let result = CreatorFund::run(&input).unwrap();

    let thousands = input.monthly_views / 1000.0;
    let scale = result.engagement_multiplier * result.niche_multiplier;
    let lower = thousands * 0.02 * scale;
    let upper = thousands * 0.04 * scale;

    assert!(result.min_monthly <= result.max_monthly);
    assert!(result.min_monthly >= lower - 0.01);
    assert!(result.max_monthly <= upper + 0.01);
    assert_eq!(result.engagement_multiplier, 1.1);
}

#[test]
fn brand_deal_mid_tier() {
    let input = BrandDealInput {
        followers: 50_000.0,
        engagement_rate: 5.0,
        niche: Niche::Lifestyle,
        deliverable_type: Deliverable::InFeed,
    };
    let result = BrandDeal::run(&input).unwrap();

    assert_eq!(result.tier, FollowerTier::Mid);
    assert_eq!(result.engagement_multiplier, 1.2);
    assert_eq!(result.deliverable_multiplier, 1.0);
    let expected_min = 1_000.0 * 1.2 * result.niche_multiplier;
    let expected_max = 10_000.0 * 1.2 * result.niche_multiplier;
    assert!((result.min_rate - expected_min).abs() < 0.01);
    assert!((result.max_rate - expected_max).abs() < 0.01);
}

#[test]
fn brand_deal_json_matches_typed() {
    let typed = BrandDeal::run(&BrandDealInput {
        followers: 50_000.0,
        engagement_rate: 5.0,
        niche: Niche::Lifestyle,
        deliverable_type: Deliverable::InFeed,
    })
    .unwrap();
    let raw = CalculatorKind::BrandDeal
        .calculate_json(&json!({
            "followers": 50000,
            "engagement_rate": 5,
            "niche": "lifestyle",
            "deliverable_type": "in-feed"
        }))
        .unwrap();

    assert_eq!(raw, serde_json::to_value(typed).unwrap());
}

#[test]
fn submission_round_trip_through_sink() {
    let sink = MemorySink::new();
    let submission = CalculatorKind::CompletionRate
        .submit(&json!({"video_duration": 30, "avg_watch_time": 25}), &sink)
        .unwrap();

    match &submission {
        Submission::Calculated { input, output } => {
            assert_eq!(input["video_duration"], 30.0);
            assert_eq!(output["completion_rate"], 83.33);
        }
        Submission::Invalid(report) => panic!("rejected: {:?}", report.errors),
    }
    let serialized = serde_json::to_value(&submission).unwrap();
    assert_eq!(serialized["status"], "calculated");

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.events()[0].calculator, "completion-rate");
}

#[test]
fn rejected_submission_is_serialized_with_errors() {
    let sink = MemorySink::new();
    let submission = CalculatorKind::WatchTime
        .submit(&json!({"video_duration": 0, "avg_watch_time": 22, "views": 50000}), &sink)
        .unwrap();

    let serialized = serde_json::to_value(&submission).unwrap();
    assert_eq!(serialized["status"], "invalid");
    assert!(serialized["errors"]["video_duration"].is_string());
    assert!(sink.is_empty());
}

#[test]
fn sessions_for_different_pages_are_independent() {
    let sink = MemorySink::new();
    let mut brand = CalculatorSession::<BrandDeal>::new();
    let mut fund = CalculatorSession::<CreatorFund>::new();

    brand.input_mut().followers = 2_000_000.0;
    let tier = brand.submit(&sink).map(|r| r.tier);
    assert_eq!(tier, Some(FollowerTier::Mega));

    assert!(fund.result().is_none());
    assert!(fund.submit(&sink).is_some());
    assert_eq!(sink.len(), 2);
}
