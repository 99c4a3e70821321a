//! # UGC Rate
//!
//! Quote for a package of user-generated-content videos delivered to a
//! brand (not posted on the creator's own account).
//!
//! ```text
//! per video = base fee × length multiplier
//!             × (1 + 5% per month of usage rights)
//!             × 1.25 with raw footage
//! package   = per video × count × (1 - bundle discount)
//! ```
//!
//! Bundle discount: 15% from 5 videos, 10% from 3. Quotes span ±20%.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::{classify, Choice, ExperienceLevel, VideoLength};
use crate::units::{round2, ValueRange};
use crate::validation::{validate_input, FieldSpec, ValidationReport};

const USAGE_RIGHTS_PER_MONTH: f64 = 0.05;
const RAW_FOOTAGE_PREMIUM: f64 = 1.25;
const QUOTE_SPREAD: f64 = 0.20;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("video_count", "Number of videos", 1, 100),
    FieldSpec::choice("video_length", "Video length", VideoLength::SLUGS),
    FieldSpec::choice("experience_level", "Experience level", ExperienceLevel::SLUGS),
    FieldSpec::integer("usage_rights_months", "Usage rights (months)", 0, 24),
    FieldSpec::flag("raw_footage", "Raw footage"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UgcRateInput {
    pub video_count: u32,
    pub video_length: VideoLength,
    pub experience_level: ExperienceLevel,
    /// Months the brand may run the videos as ads
    pub usage_rights_months: u32,
    /// Unedited footage included
    pub raw_footage: bool,
}

impl Default for UgcRateInput {
    fn default() -> Self {
        UgcRateInput {
            video_count: 3,
            video_length: VideoLength::Short,
            experience_level: ExperienceLevel::Intermediate,
            usage_rights_months: 0,
            raw_footage: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UgcRateResult {
    pub per_video: f64,
    /// Discount applied to the package (%)
    pub bundle_discount: f64,
    pub package_total: f64,
    pub package_range: ValueRange,
    pub usage_rights_fee: f64,
}

/// Package discount for a number of videos (fraction)
pub fn bundle_discount(video_count: u32) -> f64 {
    classify(video_count as f64, &[(5.0, 0.15), (3.0, 0.10)], 0.0)
}

pub fn validate(input: &UgcRateInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &UgcRateInput) -> UgcRateResult {
    let base = input.experience_level.base_fee() * input.video_length.multiplier();
    let rights = 1.0 + USAGE_RIGHTS_PER_MONTH * input.usage_rights_months as f64;
    let raw = if input.raw_footage { RAW_FOOTAGE_PREMIUM } else { 1.0 };
    let per_video = base * rights * raw;

    let count = input.video_count as f64;
    let discount = bundle_discount(input.video_count);
    let package = per_video * count * (1.0 - discount);

    UgcRateResult {
        per_video: round2(per_video),
        bundle_discount: round2(discount * 100.0),
        package_total: round2(package),
        package_range: ValueRange::new(package * (1.0 - QUOTE_SPREAD), package * (1.0 + QUOTE_SPREAD)).round(2),
        usage_rights_fee: round2(base * (rights - 1.0) * raw * count * (1.0 - discount)),
    }
}

pub struct UgcRate;

impl Calculator for UgcRate {
    type Input = UgcRateInput;
    type Output = UgcRateResult;

    const ID: &'static str = "ugc-rate";
    const TITLE: &'static str = "UGC Rate Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["per_video", "package_total"];

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
    fn test_default_package() {
        let result = calculate(&UgcRateInput::default());
        assert_eq!(result.per_video, 250.0);
        assert_eq!(result.bundle_discount, 10.0);
        assert_eq!(result.package_total, 675.0);
        assert_eq!(result.package_range.min, 540.0);
        assert_eq!(result.package_range.max, 810.0);
        assert_eq!(result.usage_rights_fee, 0.0);
    }

    #[test]
    fn test_full_options() {
        let input = UgcRateInput {
            video_count: 5,
            video_length: VideoLength::Long,
            experience_level: ExperienceLevel::Expert,
            usage_rights_months: 6,
            raw_footage: true,
        };
        let result = calculate(&input);
        // 400 × 1.5 × 1.3 × 1.25
        assert_eq!(result.per_video, 975.0);
        assert_eq!(result.bundle_discount, 15.0);
        assert_eq!(result.package_total, 4_143.75);
        assert_eq!(result.package_range.min, 3_315.0);
        assert_eq!(result.package_range.max, 4_972.5);
    }

    #[test]
    fn test_bundle_discount_steps() {
        assert_eq!(bundle_discount(1), 0.0);
        assert_eq!(bundle_discount(2), 0.0);
        assert_eq!(bundle_discount(3), 0.10);
        assert_eq!(bundle_discount(4), 0.10);
        assert_eq!(bundle_discount(5), 0.15);
    }

    #[test]
    fn test_rejects_too_many_videos() {
        let input = UgcRateInput {
            video_count: 101,
            ..UgcRateInput::default()
        };
        assert!(validate(&input).has_error("video_count"));
    }
}
