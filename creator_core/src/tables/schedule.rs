//! Audience activity windows used by the posting-time calculator.
//!
//! Hours are in the audience's local time (0-23). Weights are relative
//! activity levels, 1.0 being the busiest window of the week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{Choice, Niche};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Day {
    Monday,
    #[default]
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Choice for Day {
    const ALL: &'static [Day] = &[
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    const SLUGS: &'static [&'static str] = &[
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
    ];

    fn slug(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
            Day::Sunday => Weekday::Sun,
        }
    }
}

impl Day {
    /// Relative audience activity for the day
    pub fn weight(&self) -> f64 {
        match self {
            Day::Monday => 0.80,
            Day::Tuesday => 1.00,
            Day::Wednesday => 0.90,
            Day::Thursday => 1.00,
            Day::Friday => 0.95,
            Day::Saturday => 0.85,
            Day::Sunday => 0.90,
        }
    }

    /// Shift by whole days, wrapping around the week
    pub fn shift(self, days: i32) -> Day {
        let mut weekday: Weekday = self.into();
        for _ in 0..days.rem_euclid(7) {
            weekday = weekday.succ();
        }
        weekday.into()
    }
}

/// A peak activity hour and its weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostingWindow {
    pub hour: u32,
    pub weight: f64,
}

const fn window(hour: u32, weight: f64) -> PostingWindow {
    PostingWindow { hour, weight }
}

/// Peak hours shared by every niche (audience local time)
pub const PEAK_WINDOWS: &[PostingWindow] = &[
    window(6, 0.60),
    window(7, 0.70),
    window(9, 0.60),
    window(12, 0.80),
    window(15, 0.70),
    window(17, 0.80),
    window(19, 1.00),
    window(21, 0.90),
    window(22, 0.70),
];

/// Extra weight a niche's audience gives to a particular hour
pub fn niche_hour_bonus(niche: Niche, hour: u32) -> f64 {
    match niche {
        Niche::Business | Niche::Finance | Niche::Education if (6..=9).contains(&hour) => 0.25,
        Niche::Fitness if hour <= 7 || hour == 17 => 0.20,
        Niche::Food if hour == 12 || hour == 17 => 0.20,
        Niche::Gaming | Niche::ComedyEntertainment if hour >= 21 => 0.25,
        Niche::Parenting if hour == 9 || hour == 21 => 0.20,
        _ => 0.0,
    }
}
