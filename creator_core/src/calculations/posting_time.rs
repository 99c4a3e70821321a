//! # Best Posting Time
//!
//! Ranks the peak activity windows for a niche on a given day and converts
//! them from the audience's time zone into the creator's.
//!
//! ```text
//! score      = (window weight + niche bonus) × day weight × 100
//! local hour = audience hour - audience offset + creator offset
//! ```
//!
//! A score of 100 is the busiest general window on a peak day; niche
//! bonuses can push a slot above it. Slots that cross midnight carry the
//! creator's local weekday.

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::tables::schedule::{niche_hour_bonus, PEAK_WINDOWS};
use crate::tables::{Choice, Day, Niche};
use crate::units::round1;
use crate::validation::{validate_input, FieldSpec, ValidationReport};

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("niche", "Niche", Niche::SLUGS),
    FieldSpec::choice("day", "Day", Day::SLUGS),
    FieldSpec::integer("audience_utc_offset", "Audience UTC offset", -12, 14),
    FieldSpec::integer("creator_utc_offset", "Creator UTC offset", -12, 14),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingTimeInput {
    pub niche: Niche,
    /// Day of the week in the audience's time zone
    pub day: Day,
    /// Hours from UTC
    pub audience_utc_offset: i32,
    /// Hours from UTC
    pub creator_utc_offset: i32,
}

impl Default for PostingTimeInput {
    fn default() -> Self {
        PostingTimeInput {
            niche: Niche::Lifestyle,
            day: Day::Tuesday,
            audience_utc_offset: -5,
            creator_utc_offset: -5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PostingSlot {
    /// Hour in the audience's time zone (0-23)
    pub audience_hour: u32,
    /// Hour in the creator's time zone (0-23)
    pub local_hour: u32,
    /// Weekday in the creator's time zone
    pub local_day: Day,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingTimeResult {
    pub best_slot: PostingSlot,
    /// Every window, best first (earlier hour wins ties)
    pub slots: Vec<PostingSlot>,
    pub day_weight: f64,
    /// Busiest day of the week overall
    pub best_day: Day,
    /// Creator offset minus audience offset
    pub offset_hours: i32,
}

/// Busiest weekday; the first in week order wins ties
pub fn best_day() -> Day {
    Day::ALL
        .iter()
        .copied()
        .fold(Day::Monday, |best, day| if day.weight() > best.weight() { day } else { best })
}

fn to_local(audience_hour: u32, day: Day, offset_hours: i32) -> (u32, Day) {
    let shifted = audience_hour as i32 + offset_hours;
    let hour = shifted.rem_euclid(24) as u32;
    (hour, day.shift(shifted.div_euclid(24)))
}

pub fn validate(input: &PostingTimeInput) -> ValidationReport {
    validate_input(FIELDS, input)
}

pub fn calculate(input: &PostingTimeInput) -> PostingTimeResult {
    let offset_hours = input.creator_utc_offset - input.audience_utc_offset;
    let day_weight = input.day.weight();

    let mut slots: Vec<PostingSlot> = PEAK_WINDOWS
        .iter()
        .map(|window| {
            let (local_hour, local_day) = to_local(window.hour, input.day, offset_hours);
            let weight = window.weight + niche_hour_bonus(input.niche, window.hour);
            PostingSlot {
                audience_hour: window.hour,
                local_hour,
                local_day,
                score: round1(weight * day_weight * 100.0),
            }
        })
        .collect();

    slots.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.audience_hour.cmp(&b.audience_hour))
    });

    PostingTimeResult {
        best_slot: slots.first().copied().unwrap_or_default(),
        slots,
        day_weight,
        best_day: best_day(),
        offset_hours,
    }
}

pub struct PostingTime;

impl Calculator for PostingTime {
    type Input = PostingTimeInput;
    type Output = PostingTimeResult;

    const ID: &'static str = "posting-time";
    const TITLE: &'static str = "Best Time to Post Calculator";
    const FIELDS: &'static [FieldSpec] = FIELDS;
    const TRACKED: &'static [&'static str] = &["best_slot", "best_day"];

    fn validate(input: &Self::Input) -> ValidationReport {
        validate(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        calculate(input)
    }
}
