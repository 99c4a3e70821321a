//! # Multi-Platform Earnings
//!
//! Short-form payout estimate across platforms for the same creator.
//! Each platform's monthly views are paid at its RPM range, adjusted by the
//! niche RPM multiplier:
//!
//! ```text
//! earnings(platform) = views / 1000 × platform RPM × niche RPM multiplier
//! ```
//!
//! Shares of the total are computed on range midpoints.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::{Choice, Niche, Platform};
use crate::units::{percent_of, round2, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::number("tiktok_views", "TikTok monthly views", 0.0, 1e12),
    FieldSpec::number("youtube_shorts_views", "YouTube Shorts monthly views", 0.0, 1e12),
    FieldSpec::number("instagram_reels_views", "Instagram Reels monthly views", 0.0, 1e12),
    FieldSpec::number("facebook_reels_views", "Facebook Reels monthly views", 0.0, 1e12),
    FieldSpec::number("snapchat_spotlight_views", "Snapchat Spotlight monthly views", 0.0, 1e12),
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPlatformEarningsInput {
    pub tiktok_views: f64,
    pub youtube_shorts_views: f64,
    pub instagram_reels_views: f64,
    pub facebook_reels_views: f64,
    pub snapchat_spotlight_views: f64,
    pub niche: Niche,
}

impl Default for MultiPlatformEarningsInput {
    fn default() -> Self {
        MultiPlatformEarningsInput {
            tiktok_views: 200_000.0,
            youtube_shorts_views: 100_000.0,
            instagram_reels_views: 100_000.0,
            facebook_reels_views: 0.0,
            snapchat_spotlight_views: 0.0,
            niche: Niche::Lifestyle,
        }
    }
}

impl MultiPlatformEarningsInput {
    pub fn views_for(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Tiktok => self.tiktok_views,
            Platform::YoutubeShorts => self.youtube_shorts_views,
            Platform::InstagramReels => self.instagram_reels_views,
            Platform::FacebookReels => self.facebook_reels_views,
            Platform::SnapchatSpotlight => self.snapchat_spotlight_views,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEarnings {
    pub platform: Platform,
    pub views: f64,
    pub monthly: ValueRange,
    /// Share of the combined midpoint (%)
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPlatformEarningsResult {
    /// One entry per platform, in table order
    pub platforms: Vec<PlatformEarnings>,
    pub total_views: f64,
    pub total_monthly: ValueRange,
    pub total_yearly: ValueRange,
    /// Highest-earning platform; `None` when no views were entered
    pub best_platform: Option<Platform>,
}

pub fn validate(input: &MultiPlatformEarningsInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &MultiPlatformEarningsInput) -> MultiPlatformEarningsResult {
    let niche_multiplier = input.niche.rpm_multiplier();

    let raw: Vec<(Platform, f64, ValueRange)> = Platform::ALL
        .iter()
        .map(|&platform| {
            let views = input.views_for(platform);
            let monthly = platform.rpm().scale(views / 1000.0 * niche_multiplier);
            (platform, views, monthly)
        })
        .collect();

    let total = raw
        .iter()
        .fold(ValueRange::point(0.0), |acc, (_, _, monthly)| acc.add(*monthly));
    let total_mid = total.midpoint();

    let best_platform = raw
        .iter()
        .filter(|(_, _, monthly)| monthly.max > 0.0)
        .fold(None::<&(Platform, f64, ValueRange)>, |best, entry| match best {
            Some(b) if b.2.midpoint() >= entry.2.midpoint() => Some(b),
            _ => Some(entry),
        })
        .map(|(platform, _, _)| *platform);

    let platforms = raw
        .iter()
        .map(|(platform, views, monthly)| PlatformEarnings {
            platform: *platform,
            views: *views,
            monthly: monthly.round(2),
            share_percent: round2(percent_of(monthly.midpoint(), total_mid)),
        })
        .collect();

    MultiPlatformEarningsResult {
        platforms,
        total_views: raw.iter().map(|(_, views, _)| views).sum(),
        total_monthly: total.round(2),
        total_yearly: total.scale(12.0).round(2),
        best_platform,
    }
}

pub struct MultiPlatformEarnings;

impl Calculator for MultiPlatformEarnings {
    type Input = MultiPlatformEarningsInput;
    type Output = MultiPlatformEarningsResult;

    const ID: &'static str = "multi-platform-earnings";
    const TITLE: &'static str = "Multi-Platform Earnings Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["total_monthly", "best_platform"];

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
    fn test_default_split() {
        let result = calculate(&MultiPlatformEarningsInput::default());
        assert_eq!(result.platforms.len(), Platform::ALL.len());
        assert_eq!(result.total_views, 400_000.0);

        let tiktok = &result.platforms[0];
        assert_eq!(tiktok.platform, Platform::Tiktok);
        // 200 × $0.40..$1.00
        assert!((tiktok.monthly.min - 80.0).abs() < 0.01);
        assert!((tiktok.monthly.max - 200.0).abs() < 0.01);
        // midpoints 140 / 150.5
        assert_eq!(tiktok.share_percent, 93.02);

        assert!((result.total_monthly.min - 86.0).abs() < 0.01);
        assert!((result.total_monthly.max - 215.0).abs() < 0.01);
        assert!((result.total_yearly.max - 2_580.0).abs() < 0.01);
        assert_eq!(result.best_platform, Some(Platform::Tiktok));
    }

    #[test]
    fn test_niche_scales_every_platform() {
        let input = MultiPlatformEarningsInput {
            niche: Niche::Finance,
            ..MultiPlatformEarningsInput::default()
        };
        let result = calculate(&input);
        // 215 × 1.4
        assert!((result.total_monthly.max - 301.0).abs() < 0.01);
    }

    #[test]
    fn test_no_views() {
        let input = MultiPlatformEarningsInput {
            tiktok_views: 0.0,
            youtube_shorts_views: 0.0,
            instagram_reels_views: 0.0,
            ..MultiPlatformEarningsInput::default()
        };
        let result = calculate(&input);
        assert_eq!(result.best_platform, None);
        assert_eq!(result.total_monthly, ValueRange::point(0.0));
        assert!(result.platforms.iter().all(|p| p.share_percent == 0.0));
    }

    #[test]
    fn test_facebook_can_win() {
        let input = MultiPlatformEarningsInput {
            tiktok_views: 10_000.0,
            facebook_reels_views: 100_000.0,
            ..MultiPlatformEarningsInput::default()
        };
        assert_eq!(calculate(&input).best_platform, Some(Platform::FacebookReels));
    }
}
