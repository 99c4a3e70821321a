//! # Value Types and Rounding
//!
//! Small helpers shared by every calculator: a `{min, max}` range that keeps
//! its bounds ordered, fixed-precision rounding, and display formatting.
//!
//! ## Rounding Convention
//!
//! - Money: cents (2 places)
//! - Percentages and rates: 2 places
//! - Scores: 1 place
//!
//! Rounding is half away from zero (`f64::round`).
//!
//! ## Example
//!
//! ```rust
//! use creator_core::units::{round2, ValueRange};
//!
//! let range = ValueRange::new(1000.0, 10000.0).scale(1.2);
//! assert_eq!(range.min, 1200.0);
//! assert_eq!(range.max, 12000.0);
//! assert_eq!(round2(83.3333), 83.33);
//! ```

use serde::{Deserialize, Serialize};

/// Seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Average weeks per month (52 / 12)
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to 2 decimal places (cents, percentages)
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 1 decimal place (scores)
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Percentage of `part` in `whole`, 0 when `whole` is zero
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// Inclusive `{min, max}` range of an estimate.
///
/// Constructed through [`ValueRange::new`], which orders its arguments, so
/// `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Create a range, swapping the bounds if they arrive reversed
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            ValueRange { min: a, max: b }
        } else {
            ValueRange { min: b, max: a }
        }
    }

    /// Degenerate range holding a single value
    pub fn point(value: f64) -> Self {
        ValueRange { min: value, max: value }
    }

    /// Multiply both bounds by a non-negative factor
    pub fn scale(self, factor: f64) -> Self {
        ValueRange::new(self.min * factor, self.max * factor)
    }

    /// Add another range bound-by-bound
    pub fn add(self, other: ValueRange) -> Self {
        ValueRange::new(self.min + other.min, self.max + other.max)
    }

    /// Midpoint of the range
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Round both bounds to a fixed number of places
    pub fn round(self, places: u32) -> Self {
        ValueRange::new(round_to(self.min, places), round_to(self.max, places))
    }

    /// Check whether a value falls within the range (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", format_usd(self.min), format_usd(self.max))
    }
}

/// Format a dollar amount with thousands separators, e.g. `$12,345.60`
pub fn format_usd(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round2(305.5555), 305.56);
        assert_eq!(round2(73.3333), 73.33);
        assert_eq!(round1(72.25), 72.3);
        assert_eq!(round_to(1234.5, 0), 1235.0);
    }

    #[test]
    fn test_range_orders_bounds() {
        let range = ValueRange::new(10.0, 2.0);
        assert_eq!(range.min, 2.0);
        assert_eq!(range.max, 10.0);
        assert!(range.contains(5.0));
        assert!(!range.contains(10.5));
    }

    #[test]
    fn test_range_arithmetic() {
        let range = ValueRange::new(100.0, 200.0).scale(1.5).add(ValueRange::point(10.0));
        assert_eq!(range, ValueRange::new(160.0, 310.0));
        assert_eq!(range.midpoint(), 235.0);
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of(25.0, 200.0), 12.5);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.5), "$999.50");
        assert_eq!(format_usd(12345.6), "$12,345.60");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-250.0), "-$250.00");
    }
}
