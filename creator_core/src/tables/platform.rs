//! Short-form video platforms and their payout RPM ranges.

use serde::{Deserialize, Serialize};

use super::Choice;
use crate::units::ValueRange;

/// Diamond to USD conversion used for LIVE gifts (1 diamond = $0.005)
pub const DIAMOND_USD: f64 = 0.005;

/// Legacy Creator Fund base RPM range (USD per 1,000 views)
pub const CREATOR_FUND_RPM: ValueRange = ValueRange { min: 0.02, max: 0.04 };

/// Creator Rewards Program base RPM range for qualified views
pub const CREATOR_REWARDS_RPM: ValueRange = ValueRange { min: 0.40, max: 1.00 };

/// Minimum followers to join the Creator Rewards Program
pub const CREATOR_REWARDS_MIN_FOLLOWERS: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Tiktok,
    YoutubeShorts,
    InstagramReels,
    FacebookReels,
    SnapchatSpotlight,
}

impl Choice for Platform {
    const ALL: &'static [Platform] = &[
        Platform::Tiktok,
        Platform::YoutubeShorts,
        Platform::InstagramReels,
        Platform::FacebookReels,
        Platform::SnapchatSpotlight,
    ];

    const SLUGS: &'static [&'static str] = &[
        "tiktok",
        "youtube-shorts",
        "instagram-reels",
        "facebook-reels",
        "snapchat-spotlight",
    ];

    fn slug(&self) -> &'static str {
        match self {
            Platform::Tiktok => "tiktok",
            Platform::YoutubeShorts => "youtube-shorts",
            Platform::InstagramReels => "instagram-reels",
            Platform::FacebookReels => "facebook-reels",
            Platform::SnapchatSpotlight => "snapchat-spotlight",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Platform::Tiktok => "TikTok",
            Platform::YoutubeShorts => "YouTube Shorts",
            Platform::InstagramReels => "Instagram Reels",
            Platform::FacebookReels => "Facebook Reels",
            Platform::SnapchatSpotlight => "Snapchat Spotlight",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Platform {
    /// Typical creator RPM range (USD per 1,000 monetized views)
    pub fn rpm(&self) -> ValueRange {
        match self {
            Platform::Tiktok => CREATOR_REWARDS_RPM,
            Platform::YoutubeShorts => ValueRange::new(0.05, 0.10),
            Platform::InstagramReels => ValueRange::new(0.01, 0.05),
            Platform::FacebookReels => ValueRange::new(0.10, 0.60),
            Platform::SnapchatSpotlight => ValueRange::new(0.02, 0.08),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpm_ranges_ordered() {
        for platform in Platform::ALL {
            let rpm = platform.rpm();
            assert!(rpm.min <= rpm.max, "{}", platform);
            assert!(rpm.min > 0.0);
        }
        assert!(CREATOR_FUND_RPM.min <= CREATOR_FUND_RPM.max);
    }

    #[test]
    fn test_slugs_match_serde() {
        for (platform, slug) in Platform::ALL.iter().zip(Platform::SLUGS) {
            assert_eq!(platform.slug(), *slug);
            assert_eq!(serde_json::to_value(platform).unwrap(), serde_json::json!(slug));
        }
    }
}
