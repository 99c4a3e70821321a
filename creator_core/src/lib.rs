//! # creator_core - Creator-Economy Calculation Engine
//!
//! `creator_core` provides the calculators behind a set of creator-economy
//! tools: engagement rate, brand-deal pricing, creator-fund and rewards
//! payouts, break-even, taxes and more. All inputs and outputs are
//! JSON-serializable, so any front end (web form, CLI, assistant) can drive
//! them.
//!
//! ## Design Philosophy
//!
//! - **Pure**: `calculate` takes validated input and returns a result, with
//!   no I/O and no shared state
//! - **Validate first**: every calculator pairs with a validator returning a
//!   field-keyed error map instead of failing
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Best-effort analytics**: usage events never affect a result
//!
//! ## Quick Start
//!
//! ```rust
//! use creator_core::calculations::brand_deal::{BrandDeal, BrandDealInput};
//! use creator_core::calculations::Calculator;
//! use creator_core::tables::{Deliverable, FollowerTier, Niche};
//!
//! let input = BrandDealInput {
//!     followers: 50_000.0,
//!     engagement_rate: 5.0,
//!     niche: Niche::Lifestyle,
//!     deliverable_type: Deliverable::InFeed,
//! };
//!
//! let result = BrandDeal::run(&input).unwrap();
//! assert_eq!(result.tier, FollowerTier::Mid);
//! assert!(result.min_rate <= result.max_rate);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators and the [`CalculatorKind`] registry
//! - [`validation`] - Field specs and validation reports
//! - [`tables`] - Niche, tier, platform, tax and schedule lookup tables
//! - [`session`] - Per-page input/result state
//! - [`analytics`] - Usage events and sinks
//! - [`config`] - Settings file
//! - [`units`] - Rounding, ranges and money formatting
//! - [`errors`] - Structured error types

pub mod analytics;
pub mod calculations;
pub mod config;
pub mod errors;
pub mod session;
pub mod tables;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use analytics::{AnalyticsEvent, AnalyticsSink};
pub use calculations::{Calculator, CalculatorKind, Submission};
pub use config::Settings;
pub use errors::{CalcError, CalcResult};
pub use session::CalculatorSession;
pub use units::ValueRange;
pub use validation::{FieldSpec, ValidationReport};
