//! Sponsored deliverables, content formats and UGC production options.

use serde::{Deserialize, Serialize};

use super::{Choice, MultiplierTable};

/// Kind of sponsored placement sold to a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Deliverable {
    #[default]
    InFeed,
    SparkAd,
    LiveMention,
    ProductShowcase,
}

impl Choice for Deliverable {
    const ALL: &'static [Deliverable] = &[
        Deliverable::InFeed,
        Deliverable::SparkAd,
        Deliverable::LiveMention,
        Deliverable::ProductShowcase,
    ];

    const SLUGS: &'static [&'static str] = &["in-feed", "spark-ad", "live-mention", "product-showcase"];

    fn slug(&self) -> &'static str {
        match self {
            Deliverable::InFeed => "in-feed",
            Deliverable::SparkAd => "spark-ad",
            Deliverable::LiveMention => "live-mention",
            Deliverable::ProductShowcase => "product-showcase",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Deliverable::InFeed => "In-feed video",
            Deliverable::SparkAd => "Spark Ad",
            Deliverable::LiveMention => "LIVE mention",
            Deliverable::ProductShowcase => "Product showcase",
        }
    }
}

/// Rate multiplier by deliverable
pub const DELIVERABLE_MULTIPLIERS: MultiplierTable = MultiplierTable(&[
    ("in-feed", 1.0),
    ("spark-ad", 1.5),
    ("live-mention", 0.7),
    ("product-showcase", 1.25),
]);

impl Deliverable {
    pub fn multiplier(&self) -> f64 {
        DELIVERABLE_MULTIPLIERS.lookup(self.slug())
    }
}

/// Format of a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFormat {
    #[default]
    ShortVideo,
    LongVideo,
    Live,
    PhotoCarousel,
}

impl Choice for ContentFormat {
    const ALL: &'static [ContentFormat] = &[
        ContentFormat::ShortVideo,
        ContentFormat::LongVideo,
        ContentFormat::Live,
        ContentFormat::PhotoCarousel,
    ];

    const SLUGS: &'static [&'static str] = &["short-video", "long-video", "live", "photo-carousel"];

    fn slug(&self) -> &'static str {
        match self {
            ContentFormat::ShortVideo => "short-video",
            ContentFormat::LongVideo => "long-video",
            ContentFormat::Live => "live",
            ContentFormat::PhotoCarousel => "photo-carousel",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContentFormat::ShortVideo => "Short video (< 1 min)",
            ContentFormat::LongVideo => "Long video (1 min+)",
            ContentFormat::Live => "LIVE stream",
            ContentFormat::PhotoCarousel => "Photo carousel",
        }
    }
}

/// Value multiplier by content format
pub const FORMAT_MULTIPLIERS: MultiplierTable = MultiplierTable(&[
    ("short-video", 1.0),
    ("long-video", 1.2),
    ("live", 0.8),
    ("photo-carousel", 0.9),
]);

impl ContentFormat {
    pub fn multiplier(&self) -> f64 {
        FORMAT_MULTIPLIERS.lookup(self.slug())
    }
}

/// UGC creator experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Choice for ExperienceLevel {
    const ALL: &'static [ExperienceLevel] = &[
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    const SLUGS: &'static [&'static str] = &["beginner", "intermediate", "expert"];

    fn slug(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Expert => "expert",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

impl ExperienceLevel {
    /// Base fee for one UGC video (USD)
    pub fn base_fee(&self) -> f64 {
        match self {
            ExperienceLevel::Beginner => 150.0,
            ExperienceLevel::Intermediate => 250.0,
            ExperienceLevel::Expert => 400.0,
        }
    }
}

/// Length bucket of a UGC video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl Choice for VideoLength {
    const ALL: &'static [VideoLength] = &[VideoLength::Short, VideoLength::Medium, VideoLength::Long];

    const SLUGS: &'static [&'static str] = &["short", "medium", "long"];

    fn slug(&self) -> &'static str {
        match self {
            VideoLength::Short => "short",
            VideoLength::Medium => "medium",
            VideoLength::Long => "long",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VideoLength::Short => "Up to 15 seconds",
            VideoLength::Medium => "15 - 60 seconds",
            VideoLength::Long => "Over 60 seconds",
        }
    }
}

/// Fee multiplier by video length
pub const LENGTH_MULTIPLIERS: MultiplierTable =
    MultiplierTable(&[("short", 1.0), ("medium", 1.25), ("long", 1.5)]);

impl VideoLength {
    pub fn multiplier(&self) -> f64 {
        LENGTH_MULTIPLIERS.lookup(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_slugs<T: Choice + Serialize>() {
        assert_eq!(T::ALL.len(), T::SLUGS.len());
        for (variant, slug) in T::ALL.iter().zip(T::SLUGS) {
            assert_eq!(variant.slug(), *slug);
            assert_eq!(serde_json::to_value(variant).unwrap(), serde_json::json!(slug));
        }
    }

    #[test]
    fn test_slugs_match_serde() {
        assert_slugs::<Deliverable>();
        assert_slugs::<ContentFormat>();
        assert_slugs::<ExperienceLevel>();
        assert_slugs::<VideoLength>();
    }

    #[test]
    fn test_deliverable_multipliers() {
        assert_eq!(Deliverable::InFeed.multiplier(), 1.0);
        assert_eq!(Deliverable::SparkAd.multiplier(), 1.5);
        assert_eq!(Deliverable::LiveMention.multiplier(), 0.7);
        assert_eq!(Deliverable::ProductShowcase.multiplier(), 1.25);
    }

    #[test]
    fn test_every_variant_has_explicit_multiplier() {
        for d in Deliverable::ALL {
            assert!(DELIVERABLE_MULTIPLIERS.contains(d.slug()));
        }
        for f in ContentFormat::ALL {
            assert!(FORMAT_MULTIPLIERS.contains(f.slug()));
        }
        for l in VideoLength::ALL {
            assert!(LENGTH_MULTIPLIERS.contains(l.slug()));
        }
    }
}
