//! Follower-count tiers and engagement multipliers.
//!
//! | Tier  | Followers             | Base rate per post |
//! |-------|-----------------------|--------------------|
//! | nano  | < 10,000              | $50 - $250         |
//! | micro | 10,000 - 49,999       | $250 - $1,000      |
//! | mid   | 50,000 - 499,999      | $1,000 - $10,000   |
//! | macro | 500,000 - 999,999     | $10,000 - $25,000  |
//! | mega  | >= 1,000,000          | $25,000 - $100,000 |
//!
//! Bracket boundaries are inclusive on the lower bound.

use serde::{Deserialize, Serialize};

use super::{classify, Choice};
use crate::units::ValueRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowerTier {
    Nano,
    Micro,
    Mid,
    Macro,
    Mega,
}

impl Choice for FollowerTier {
    const ALL: &'static [FollowerTier] = &[
        FollowerTier::Nano,
        FollowerTier::Micro,
        FollowerTier::Mid,
        FollowerTier::Macro,
        FollowerTier::Mega,
    ];

    const SLUGS: &'static [&'static str] = &["nano", "micro", "mid", "macro", "mega"];

    fn slug(&self) -> &'static str {
        match self {
            FollowerTier::Nano => "nano",
            FollowerTier::Micro => "micro",
            FollowerTier::Mid => "mid",
            FollowerTier::Macro => "macro",
            FollowerTier::Mega => "mega",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FollowerTier::Nano => "Nano",
            FollowerTier::Micro => "Micro",
            FollowerTier::Mid => "Mid-tier",
            FollowerTier::Macro => "Macro",
            FollowerTier::Mega => "Mega",
        }
    }
}

impl std::fmt::Display for FollowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FollowerTier {
    /// Select the tier for a follower count
    pub fn for_followers(followers: f64) -> Self {
        classify(
            followers,
            &[
                (1_000_000.0, FollowerTier::Mega),
                (500_000.0, FollowerTier::Macro),
                (50_000.0, FollowerTier::Mid),
                (10_000.0, FollowerTier::Micro),
            ],
            FollowerTier::Nano,
        )
    }

    /// Base brand-deal rate range for one sponsored post (USD)
    pub fn base_rate(&self) -> ValueRange {
        match self {
            FollowerTier::Nano => ValueRange::new(50.0, 250.0),
            FollowerTier::Micro => ValueRange::new(250.0, 1_000.0),
            FollowerTier::Mid => ValueRange::new(1_000.0, 10_000.0),
            FollowerTier::Macro => ValueRange::new(10_000.0, 25_000.0),
            FollowerTier::Mega => ValueRange::new(25_000.0, 100_000.0),
        }
    }

    /// Market value of one follower when valuing a whole account (USD)
    pub fn value_per_follower(&self) -> ValueRange {
        match self {
            FollowerTier::Nano => ValueRange::new(0.01, 0.03),
            FollowerTier::Micro => ValueRange::new(0.02, 0.05),
            FollowerTier::Mid => ValueRange::new(0.03, 0.08),
            FollowerTier::Macro => ValueRange::new(0.04, 0.10),
            FollowerTier::Mega => ValueRange::new(0.05, 0.12),
        }
    }

    /// Typical number of sponsored posts per month at this tier
    pub fn deals_per_month(&self) -> f64 {
        match self {
            FollowerTier::Nano => 0.5,
            FollowerTier::Micro => 1.0,
            FollowerTier::Mid => 2.0,
            FollowerTier::Macro => 3.0,
            FollowerTier::Mega => 4.0,
        }
    }
}

/// Stepwise multiplier applied to brand rates by engagement rate (%)
///
/// `>= 10` → 1.5, `>= 5` → 1.2, `>= 3` → 1.0, `>= 1` → 0.8, otherwise 0.6.
pub fn engagement_multiplier(engagement_rate: f64) -> f64 {
    classify(
        engagement_rate,
        &[(10.0, 1.5), (5.0, 1.2), (3.0, 1.0), (1.0, 0.8)],
        0.6,
    )
}

/// Gentler engagement multiplier applied to view-based payouts (%)
///
/// `>= 10` → 1.2, `>= 5` → 1.1, `>= 2` → 1.0, otherwise 0.9.
pub fn payout_engagement_multiplier(engagement_rate: f64) -> f64 {
    classify(engagement_rate, &[(10.0, 1.2), (5.0, 1.1), (2.0, 1.0)], 0.9)
}
