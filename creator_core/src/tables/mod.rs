//! # Lookup Tables
//!
//! Static data consumed by the calculators: niche profiles, follower tiers,
//! deliverable and content-format multipliers, platform RPM ranges, tax
//! brackets and posting schedules.
//!
//! All figures are hand-coded approximations from public industry reports.
//! They are not TikTok's actual payout rules.
//!
//! ## Conventions
//!
//! - Categorical values are closed enums implementing [`Choice`], serialized
//!   as kebab-case slugs.
//! - Multipliers are keyed by slug in a [`MultiplierTable`]; an unrecognized
//!   key falls back to `1.0`.
//! - Threshold buckets use inclusive lower bounds: see [`classify`].

pub mod content;
pub mod niche;
pub mod platform;
pub mod schedule;
pub mod tax;
pub mod tier;

pub use content::{ContentFormat, Deliverable, ExperienceLevel, VideoLength};
pub use niche::{Niche, NicheProfile};
pub use platform::Platform;
pub use schedule::{Day, PostingWindow};
pub use tax::{FilingStatus, TaxBracket};
pub use tier::FollowerTier;

use serde::{Deserialize, Serialize};

/// A closed categorical value with a stable slug.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Slugs of every variant, in the same order as `ALL`
    const SLUGS: &'static [&'static str];

    /// Stable identifier (matches the serde representation)
    fn slug(&self) -> &'static str;

    /// Human-readable name
    fn label(&self) -> &'static str;
}

/// Static multiplier table keyed by slug.
#[derive(Debug, Clone, Copy)]
pub struct MultiplierTable(pub &'static [(&'static str, f64)]);

impl MultiplierTable {
    /// Multiplier used for keys missing from the table
    pub const DEFAULT: f64 = 1.0;

    /// Look up a multiplier, falling back to [`MultiplierTable::DEFAULT`]
    pub fn lookup(&self, key: &str) -> f64 {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, m)| *m)
            .unwrap_or(Self::DEFAULT)
    }

    /// Whether the table has an explicit entry for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| *k == key)
    }
}

/// Bucket a value by threshold.
///
/// `thresholds` lists `(lower_bound, bucket)` pairs from highest to lowest.
/// The first pair whose lower bound is `<= value` wins; anything below every
/// bound (including NaN) lands in `fallback`. Every value maps to exactly one
/// bucket.
pub fn classify<T: Copy>(value: f64, thresholds: &[(f64, T)], fallback: T) -> T {
    thresholds
        .iter()
        .find(|(bound, _)| value >= *bound)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(fallback)
}

/// Four-step quality rating shared by several calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Excellent,
    Good,
    Average,
    BelowAverage,
}

impl Rating {
    /// Rate a value against `[excellent, good, average]` lower bounds
    pub fn from_thresholds(value: f64, excellent: f64, good: f64, average: f64) -> Self {
        classify(
            value,
            &[
                (excellent, Rating::Excellent),
                (good, Rating::Good),
                (average, Rating::Average),
            ],
            Rating::BelowAverage,
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::BelowAverage => "Below average",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table_fallback() {
        const TABLE: MultiplierTable = MultiplierTable(&[("spark-ad", 1.5)]);
        assert_eq!(TABLE.lookup("spark-ad"), 1.5);
        assert_eq!(TABLE.lookup("billboard"), 1.0);
        assert!(!TABLE.contains("billboard"));
    }

    #[test]
    fn test_classify_inclusive_lower_bound() {
        let thresholds = [(10.0, 'a'), (5.0, 'b'), (2.0, 'c')];
        assert_eq!(classify(10.0, &thresholds, 'd'), 'a');
        assert_eq!(classify(9.999, &thresholds, 'd'), 'b');
        assert_eq!(classify(5.0, &thresholds, 'd'), 'b');
        assert_eq!(classify(2.0, &thresholds, 'd'), 'c');
        assert_eq!(classify(1.99, &thresholds, 'd'), 'd');
        assert_eq!(classify(f64::NAN, &thresholds, 'd'), 'd');
    }

    #[test]
    fn test_rating_serialization() {
        let json = serde_json::to_string(&Rating::BelowAverage).unwrap();
        assert_eq!(json, "\"below-average\"");
        assert_eq!(Rating::from_thresholds(10.0, 10.0, 5.0, 2.0), Rating::Excellent);
    }
}
