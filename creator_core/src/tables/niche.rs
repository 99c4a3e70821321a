//! Content niches and their market profiles.
//!
//! Each niche carries a brand-deal multiplier, a creator-fund RPM
//! multiplier, an advertiser CPM, an affiliate RPM, a competition level and
//! a benchmark engagement rate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{Choice, MultiplierTable};

/// Content category of a creator's account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Niche {
    #[default]
    Lifestyle,
    BeautyFashion,
    Finance,
    Tech,
    Gaming,
    Fitness,
    Food,
    Travel,
    Education,
    ComedyEntertainment,
    Parenting,
    Business,
}

impl Choice for Niche {
    const ALL: &'static [Niche] = &[
        Niche::Lifestyle,
        Niche::BeautyFashion,
        Niche::Finance,
        Niche::Tech,
        Niche::Gaming,
        Niche::Fitness,
        Niche::Food,
        Niche::Travel,
        Niche::Education,
        Niche::ComedyEntertainment,
        Niche::Parenting,
        Niche::Business,
    ];

    const SLUGS: &'static [&'static str] = &[
        "lifestyle",
        "beauty-fashion",
        "finance",
        "tech",
        "gaming",
        "fitness",
        "food",
        "travel",
        "education",
        "comedy-entertainment",
        "parenting",
        "business",
    ];

    fn slug(&self) -> &'static str {
        match self {
            Niche::Lifestyle => "lifestyle",
            Niche::BeautyFashion => "beauty-fashion",
            Niche::Finance => "finance",
            Niche::Tech => "tech",
            Niche::Gaming => "gaming",
            Niche::Fitness => "fitness",
            Niche::Food => "food",
            Niche::Travel => "travel",
            Niche::Education => "education",
            Niche::ComedyEntertainment => "comedy-entertainment",
            Niche::Parenting => "parenting",
            Niche::Business => "business",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Niche::Lifestyle => "Lifestyle",
            Niche::BeautyFashion => "Beauty & Fashion",
            Niche::Finance => "Finance",
            Niche::Tech => "Tech",
            Niche::Gaming => "Gaming",
            Niche::Fitness => "Fitness",
            Niche::Food => "Food",
            Niche::Travel => "Travel",
            Niche::Education => "Education",
            Niche::ComedyEntertainment => "Comedy & Entertainment",
            Niche::Parenting => "Parenting",
            Niche::Business => "Business",
        }
    }
}

impl std::fmt::Display for Niche {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Brand-deal rate multiplier by niche
pub const BRAND_MULTIPLIERS: MultiplierTable = MultiplierTable(&[
    ("lifestyle", 1.0),
    ("beauty-fashion", 1.2),
    ("finance", 1.5),
    ("tech", 1.3),
    ("gaming", 1.1),
    ("fitness", 1.15),
    ("food", 1.05),
    ("travel", 1.1),
    ("education", 1.25),
    ("comedy-entertainment", 0.9),
    ("parenting", 1.1),
    ("business", 1.4),
]);

/// Creator-fund / rewards RPM multiplier by niche
pub const RPM_MULTIPLIERS: MultiplierTable = MultiplierTable(&[
    ("lifestyle", 1.0),
    ("beauty-fashion", 1.1),
    ("finance", 1.4),
    ("tech", 1.3),
    ("gaming", 0.9),
    ("fitness", 1.05),
    ("food", 1.0),
    ("travel", 1.05),
    ("education", 1.2),
    ("comedy-entertainment", 0.85),
    ("parenting", 1.0),
    ("business", 1.35),
]);

/// Market profile of a niche
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NicheProfile {
    /// Advertiser CPM in USD (cost per 1,000 impressions)
    pub cpm_usd: f64,
    /// Affiliate earnings per 1,000 views in USD
    pub affiliate_rpm_usd: f64,
    /// Share of creators competing for the same sponsors, 0..1
    pub competition: f64,
    /// Typical engagement rate for the niche (%)
    pub benchmark_engagement: f64,
}

static PROFILES: Lazy<HashMap<Niche, NicheProfile>> = Lazy::new(|| {
    let rows: [(Niche, f64, f64, f64, f64); 12] = [
        (Niche::Lifestyle, 8.0, 0.40, 0.80, 5.0),
        (Niche::BeautyFashion, 10.0, 0.90, 0.85, 5.5),
        (Niche::Finance, 15.0, 0.70, 0.55, 3.5),
        (Niche::Tech, 12.0, 0.80, 0.60, 4.0),
        (Niche::Gaming, 7.0, 0.30, 0.75, 6.0),
        (Niche::Fitness, 9.0, 0.60, 0.70, 5.0),
        (Niche::Food, 8.0, 0.35, 0.70, 6.5),
        (Niche::Travel, 9.0, 0.50, 0.65, 4.5),
        (Niche::Education, 11.0, 0.45, 0.45, 4.5),
        (Niche::ComedyEntertainment, 6.0, 0.15, 0.90, 8.0),
        (Niche::Parenting, 8.0, 0.55, 0.50, 5.5),
        (Niche::Business, 14.0, 0.75, 0.50, 3.5),
    ];

    rows.into_iter()
        .map(|(niche, cpm_usd, affiliate_rpm_usd, competition, benchmark_engagement)| {
            (
                niche,
                NicheProfile {
                    cpm_usd,
                    affiliate_rpm_usd,
                    competition,
                    benchmark_engagement,
                },
            )
        })
        .collect()
});

impl Niche {
    /// Brand-deal multiplier (1.0 if the table lacks this niche)
    pub fn brand_multiplier(&self) -> f64 {
        BRAND_MULTIPLIERS.lookup(self.slug())
    }

    /// Creator-fund RPM multiplier (1.0 if the table lacks this niche)
    pub fn rpm_multiplier(&self) -> f64 {
        RPM_MULTIPLIERS.lookup(self.slug())
    }

    /// Market profile for this niche
    pub fn profile(&self) -> NicheProfile {
        PROFILES.get(self).copied().unwrap_or(NicheProfile {
            cpm_usd: 8.0,
            affiliate_rpm_usd: 0.40,
            competition: 0.75,
            benchmark_engagement: 5.0,
        })
    }
}
