//! # Niche Profitability
//!
//! Combines the three main income streams for a niche into a monthly
//! estimate and scores how lucrative the niche is for this creator.
//!
//! - Brand deals: in-feed rate for the follower tier × typical deals/month
//! - Creator fund: monthly views at the niche's effective RPM
//! - Affiliate: monthly views at the niche's affiliate RPM, ±50%
//!
//! Profitability score (0-100):
//!
//! ```text
//! 40 × min(cpm / 15, 1)
//! + 30 × min((1 - competition) / 0.6, 1)
//! + 30 × min(engagement_rate / benchmark, 2) / 2
//! ```

use serde::{Deserialize, Serialize};

use super::brand_deal::{rate_range, BrandDealInput};
use super::creator_fund::effective_rpm;
use super::Calculator;
use crate::tables::{classify, Choice, Deliverable, FollowerTier, Niche};
use crate::units::{round1, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

const CPM_CEILING: f64 = 15.0;
const OPEN_MARKET_CEILING: f64 = 0.6;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::number("followers", "Followers", 0.0, 1e10),
    FieldSpec::number("engagement_rate", "Engagement rate", 0.0, 100.0),
    FieldSpec::number("monthly_views", "Monthly views", 0.0, 1e12),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheProfitabilityInput {
    pub niche: Niche,
    pub followers: f64,
    /// Engagement rate (%)
    pub engagement_rate: f64,
    pub monthly_views: f64,
}

impl Default for NicheProfitabilityInput {
    fn default() -> Self {
        NicheProfitabilityInput {
            niche: Niche::Lifestyle,
            followers: 25_000.0,
            engagement_rate: 5.0,
            monthly_views: 250_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfitabilityLevel {
    High,
    Medium,
    Low,
}

impl ProfitabilityLevel {
    pub fn for_score(score: f64) -> Self {
        classify(
            score,
            &[(70.0, ProfitabilityLevel::High), (45.0, ProfitabilityLevel::Medium)],
            ProfitabilityLevel::Low,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheProfitabilityResult {
    pub tier: FollowerTier,
    pub brand_deals_monthly: ValueRange,
    pub creator_fund_monthly: ValueRange,
    pub affiliate_monthly: ValueRange,
    pub total_monthly: ValueRange,
    pub total_yearly: ValueRange,
    /// 0-100, 1 decimal
    pub profitability_score: f64,
    pub level: ProfitabilityLevel,
    pub niche_cpm: f64,
    pub competition: f64,
}

pub fn validate(input: &NicheProfitabilityInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

/// Niche attractiveness score, 0-100
pub fn profitability_score(niche: Niche, engagement_rate: f64) -> f64 {
    let profile = niche.profile();
    let cpm_part = (profile.cpm_usd / CPM_CEILING).min(1.0) * 40.0;
    let market_part = ((1.0 - profile.competition) / OPEN_MARKET_CEILING).min(1.0) * 30.0;
    let engagement_part = (engagement_rate / profile.benchmark_engagement).min(2.0) / 2.0 * 30.0;
    round1(cpm_part + market_part + engagement_part)
}

pub fn calculate(input: &NicheProfitabilityInput) -> NicheProfitabilityResult {
    let tier = FollowerTier::for_followers(input.followers);
    let profile = input.niche.profile();
    let views_k = input.monthly_views / 1000.0;

    let brand = rate_range(&BrandDealInput {
        followers: input.followers,
        engagement_rate: input.engagement_rate,
        niche: input.niche,
        deliverable_type: Deliverable::InFeed,
    })
    .scale(tier.deals_per_month());
    let fund = effective_rpm(input.niche, input.engagement_rate).scale(views_k);
    let affiliate_mid = views_k * profile.affiliate_rpm_usd;
    let affiliate = ValueRange::new(affiliate_mid * 0.5, affiliate_mid * 1.5);

    let total = brand.add(fund).add(affiliate);
    let score = profitability_score(input.niche, input.engagement_rate);

    NicheProfitabilityResult {
        tier,
        brand_deals_monthly: brand.round(2),
        creator_fund_monthly: fund.round(2),
        affiliate_monthly: affiliate.round(2),
        total_monthly: total.round(2),
        total_yearly: total.scale(12.0).round(2),
        profitability_score: score,
        level: ProfitabilityLevel::for_score(score),
        niche_cpm: profile.cpm_usd,
        competition: profile.competition,
    }
}

pub struct NicheProfitability;

impl Calculator for NicheProfitability {
    type Input = NicheProfitabilityInput;
    type Output = NicheProfitabilityResult;

    const ID: &'static str = "niche-profitability";
    const TITLE: &'static str = "Niche Profitability Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["profitability_score", "level", "total_monthly"];

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
    fn test_default_breakdown() {
        let result = calculate(&NicheProfitabilityInput::default());
        assert_eq!(result.tier, FollowerTier::Micro);
        // micro $250 - $1,000 × 1.2 × 1 deal
        assert!((result.brand_deals_monthly.min - 300.0).abs() < 0.01);
        assert!((result.brand_deals_monthly.max - 1_200.0).abs() < 0.01);
        // 250 × $0.02..$0.04 × 1.1
        assert!((result.creator_fund_monthly.min - 5.5).abs() < 0.01);
        // 250 × $0.40 = $100 ± 50%
        assert!((result.affiliate_monthly.min - 50.0).abs() < 0.01);
        assert!((result.affiliate_monthly.max - 150.0).abs() < 0.01);
        assert!((result.total_monthly.min - 355.5).abs() < 0.01);
        assert!(result.total_monthly.min <= result.total_monthly.max);
    }

    #[test]
    fn test_score_lifestyle() {
        // 40 × 8/15 + 30 × min(0.2/0.6, 1) + 30 × (5/5)/2 = 21.33 + 10 + 15
        assert_eq!(profitability_score(Niche::Lifestyle, 5.0), 46.3);
        assert_eq!(ProfitabilityLevel::for_score(46.3), ProfitabilityLevel::Medium);
    }

    #[test]
    fn test_finance_beats_comedy() {
        let finance = profitability_score(Niche::Finance, 5.0);
        let comedy = profitability_score(Niche::ComedyEntertainment, 5.0);
        assert!(finance > comedy);
        assert!(finance <= 100.0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(ProfitabilityLevel::for_score(70.0), ProfitabilityLevel::High);
        assert_eq!(ProfitabilityLevel::for_score(44.9), ProfitabilityLevel::Low);
    }
}
