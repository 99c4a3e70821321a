//! US federal tax tables (2025 tax year) for self-employed creators.
//!
//! Simplified: standard deduction only, no credits, no QBI deduction.

use serde::{Deserialize, Serialize};

use super::Choice;

/// Social Security share of self-employment tax
pub const SOCIAL_SECURITY_RATE: f64 = 0.124;

/// Medicare share of self-employment tax
pub const MEDICARE_RATE: f64 = 0.029;

/// Social Security wage base for 2025
pub const SOCIAL_SECURITY_WAGE_BASE: f64 = 176_100.0;

/// Portion of net earnings subject to self-employment tax
pub const SE_EARNINGS_FACTOR: f64 = 0.9235;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilingStatus {
    #[default]
    Single,
    MarriedJoint,
    HeadOfHousehold,
}

impl Choice for FilingStatus {
    const ALL: &'static [FilingStatus] = &[
        FilingStatus::Single,
        FilingStatus::MarriedJoint,
        FilingStatus::HeadOfHousehold,
    ];

    const SLUGS: &'static [&'static str] = &["single", "married-joint", "head-of-household"];

    fn slug(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::MarriedJoint => "married-joint",
            FilingStatus::HeadOfHousehold => "head-of-household",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FilingStatus::Single => "Single",
            FilingStatus::MarriedJoint => "Married filing jointly",
            FilingStatus::HeadOfHousehold => "Head of household",
        }
    }
}

/// One marginal bracket: income above `floor` is taxed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBracket {
    pub floor: f64,
    pub rate: f64,
}

const fn bracket(floor: f64, rate: f64) -> TaxBracket {
    TaxBracket { floor, rate }
}

const SINGLE: &[TaxBracket] = &[
    bracket(0.0, 0.10),
    bracket(11_925.0, 0.12),
    bracket(48_475.0, 0.22),
    bracket(103_350.0, 0.24),
    bracket(197_300.0, 0.32),
    bracket(250_525.0, 0.35),
    bracket(626_350.0, 0.37),
];

const MARRIED_JOINT: &[TaxBracket] = &[
    bracket(0.0, 0.10),
    bracket(23_850.0, 0.12),
    bracket(96_950.0, 0.22),
    bracket(206_700.0, 0.24),
    bracket(394_600.0, 0.32),
    bracket(501_050.0, 0.35),
    bracket(751_600.0, 0.37),
];

const HEAD_OF_HOUSEHOLD: &[TaxBracket] = &[
    bracket(0.0, 0.10),
    bracket(17_000.0, 0.12),
    bracket(64_850.0, 0.22),
    bracket(103_350.0, 0.24),
    bracket(197_300.0, 0.32),
    bracket(250_500.0, 0.35),
    bracket(626_350.0, 0.37),
];

impl FilingStatus {
    /// Marginal brackets, ascending by floor
    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            FilingStatus::Single => SINGLE,
            FilingStatus::MarriedJoint => MARRIED_JOINT,
            FilingStatus::HeadOfHousehold => HEAD_OF_HOUSEHOLD,
        }
    }

    pub fn standard_deduction(&self) -> f64 {
        match self {
            FilingStatus::Single => 15_000.0,
            FilingStatus::MarriedJoint => 30_000.0,
            FilingStatus::HeadOfHousehold => 22_500.0,
        }
    }

    /// Federal income tax on `taxable` income and the marginal rate reached
    pub fn income_tax(&self, taxable: f64) -> (f64, f64) {
        let brackets = self.brackets();
        let mut tax = 0.0;
        let mut marginal = brackets[0].rate;

        for (i, b) in brackets.iter().enumerate() {
            if taxable <= b.floor {
                break;
            }
            let ceiling = brackets.get(i + 1).map(|next| next.floor).unwrap_or(f64::INFINITY);
            tax += (taxable.min(ceiling) - b.floor) * b.rate;
            marginal = b.rate;
        }

        (tax, marginal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_tax_first_bracket() {
        let (tax, marginal) = FilingStatus::Single.income_tax(10_000.0);
        assert!((tax - 1_000.0).abs() < 0.01);
        assert_eq!(marginal, 0.10);
    }

    #[test]
    fn test_income_tax_spans_brackets() {
        // 11,925 * 10% + (40,000 - 11,925) * 12% = 1,192.50 + 3,369.00
        let (tax, marginal) = FilingStatus::Single.income_tax(40_000.0);
        assert!((tax - 4_561.5).abs() < 0.01);
        assert_eq!(marginal, 0.12);
    }

    #[test]
    fn test_zero_income() {
        let (tax, marginal) = FilingStatus::MarriedJoint.income_tax(0.0);
        assert_eq!(tax, 0.0);
        assert_eq!(marginal, 0.10);
    }

    #[test]
    fn test_brackets_ascending() {
        for status in FilingStatus::ALL {
            for pair in status.brackets().windows(2) {
                assert!(pair[0].floor < pair[1].floor);
                assert!(pair[0].rate < pair[1].rate);
            }
        }
    }
}
