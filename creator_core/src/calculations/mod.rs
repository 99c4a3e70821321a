//! # Calculators
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - form fields (JSON-serializable, `Default` = seeded form values)
//! - `*Result` - derived figures and classification labels
//! - `FIELDS` - declared bounds / enumerations for each input field
//! - `validate(input) -> ValidationReport` - field-keyed error map
//! - `calculate(input) -> *Result` - pure function, assumes validated input
//!
//! plus a unit struct implementing [`Calculator`] so the registry and the
//! session layer can drive any of them generically.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::calculations::engagement_rate::{calculate, validate, EngagementRateInput};
//! use creator_core::tables::Rating;
//!
//! let input = EngagementRateInput {
//!     followers: 50_000.0,
//!     avg_likes: 2_500.0,
//!     avg_comments: 150.0,
//!     avg_shares: 100.0,
//! };
//!
//! assert!(validate(&input).valid);
//! let result = calculate(&input);
//! assert_eq!(result.rate, 5.5);
//! assert_eq!(result.rating, Rating::Good);
//! ```

pub mod account_value;
pub mod ad_cost;
pub mod brand_deal;
pub mod break_even;
pub mod completion_rate;
pub mod content_calendar_roi;
pub mod content_value;
pub mod creator_fund;
pub mod creator_rewards;
pub mod creator_tax;
pub mod engagement_rate;
pub mod follower_growth;
pub mod hashtag_reach;
pub mod live_gifts;
pub mod multi_platform_earnings;
pub mod niche_profitability;
pub mod posting_time;
pub mod registry;
pub mod shop_commission;
pub mod sponsorship_roi;
pub mod subscription_earnings;
pub mod ugc_rate;
pub mod video_performance;
pub mod viral_potential;
pub mod watch_time;

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CalcResult;
use crate::validation::{FieldSpec, ValidationReport};

pub use registry::{CalculatorKind, Submission};

/// A pure calculator paired with its validator.
pub trait Calculator {
    type Input: Serialize + DeserializeOwned + Default + Clone + Debug;
    type Output: Serialize + Clone + Debug;

    /// Stable kebab-case identifier, e.g. `"engagement-rate"`
    const ID: &'static str;

    /// Human-readable name
    const TITLE: &'static str;

    /// Declared input fields
    const FIELDS: &'static [FieldSpec];

    /// Result fields reported to analytics. Empty means the whole result.
    const TRACKED: &'static [&'static str] = &[];

    /// Check every field; never panics
    fn validate(input: &Self::Input) -> ValidationReport;

    /// Compute the result. Input is assumed to have passed `validate`.
    fn calculate(input: &Self::Input) -> Self::Output;

    /// Validate, then calculate
    fn run(input: &Self::Input) -> CalcResult<Self::Output> {
        Self::validate(input).into_result()?;
        let output = Self::calculate(input);
        tracing::debug!(calculator = Self::ID, "calculation complete");
        Ok(output)
    }
}
