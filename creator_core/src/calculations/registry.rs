//! # Calculator Registry
//!
//! [`CalculatorKind`] names every calculator and drives any of them from raw
//! JSON, which is what a form or CLI has in hand.
//!
//! Raw payloads are handled in three steps:
//!
//! 1. Check the payload against the calculator's field specs (missing,
//!    out-of-range and unknown categorical values become field errors).
//! 2. Lay the supplied fields over the seeded default input, so optional
//!    fields may be omitted.
//! 3. Deserialize into the typed input and run the calculator's own
//!    validator for cross-field rules.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::calculations::CalculatorKind;
//! use serde_json::json;
//!
//! let kind = CalculatorKind::from_id("completion-rate").unwrap();
//! let result = kind
//!     .calculate_json(&json!({"video_duration": 30, "avg_watch_time": 25}))
//!     .unwrap();
//! assert_eq!(result["completion_rate"], 83.33);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::*;
use crate::analytics::{emit, AnalyticsEvent, AnalyticsSink};
use crate::errors::{CalcError, CalcResult};
use crate::validation::{validate_value, FieldKind};

/// Every available calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    EngagementRate,
    BrandDeal,
    CreatorFund,
    BreakEven,
    ViralPotential,
    ContentValue,
    NicheProfitability,
    SponsorshipRoi,
    WatchTime,
    CompletionRate,
    FollowerGrowth,
    VideoPerformance,
    MultiPlatformEarnings,
    PostingTime,
    ContentCalendarRoi,
    CreatorTax,
    CreatorRewards,
    LiveGifts,
    ShopCommission,
    AdCost,
    AccountValue,
    SubscriptionEarnings,
    HashtagReach,
    UgcRate,
}

/// Run `$body` with `$c` bound to the calculator type for `$kind`
macro_rules! dispatch {
    ($kind:expr, $c:ident => $body:expr) => {
        match $kind {
            CalculatorKind::EngagementRate => {
                type $c = engagement_rate::EngagementRate;
                $body
            }
            CalculatorKind::BrandDeal => {
                type $c = brand_deal::BrandDeal;
                $body
            }
            CalculatorKind::CreatorFund => {
                type $c = creator_fund::CreatorFund;
                $body
            }
            CalculatorKind::BreakEven => {
                type $c = break_even::BreakEven;
                $body
            }
            CalculatorKind::ViralPotential => {
                type $c = viral_potential::ViralPotential;
                $body
            }
            CalculatorKind::ContentValue => {
                type $c = content_value::ContentValue;
                $body
            }
            CalculatorKind::NicheProfitability => {
                type $c = niche_profitability::NicheProfitability;
                $body
            }
            CalculatorKind::SponsorshipRoi => {
                type $c = sponsorship_roi::SponsorshipRoi;
                $body
            }
            CalculatorKind::WatchTime => {
                type $c = watch_time::WatchTime;
                $body
            }
            CalculatorKind::CompletionRate => {
                type $c = completion_rate::CompletionRate;
                $body
            }
            CalculatorKind::FollowerGrowth => {
                type $c = follower_growth::FollowerGrowth;
                $body
            }
            CalculatorKind::VideoPerformance => {
                type $c = video_performance::VideoPerformance;
                $body
            }
            CalculatorKind::MultiPlatformEarnings => {
                type $c = multi_platform_earnings::MultiPlatformEarnings;
                $body
            }
            CalculatorKind::PostingTime => {
                type $c = posting_time::PostingTime;
                $body
            }
            CalculatorKind::ContentCalendarRoi => {
                type $c = content_calendar_roi::ContentCalendarRoi;
                $body
            }
            CalculatorKind::CreatorTax => {
                type $c = creator_tax::CreatorTax;
                $body
            }
            CalculatorKind::CreatorRewards => {
                type $c = creator_rewards::CreatorRewards;
                $body
            }
            CalculatorKind::LiveGifts => {
                type $c = live_gifts::LiveGifts;
                $body
            }
            CalculatorKind::ShopCommission => {
                type $c = shop_commission::ShopCommission;
                $body
            }
            CalculatorKind::AdCost => {
                type $c = ad_cost::AdCost;
                $body
            }
            CalculatorKind::AccountValue => {
                type $c = account_value::AccountValue;
                $body
            }
            CalculatorKind::SubscriptionEarnings => {
                type $c = subscription_earnings::SubscriptionEarnings;
                $body
            }
            CalculatorKind::HashtagReach => {
                type $c = hashtag_reach::HashtagReach;
                $body
            }
            CalculatorKind::UgcRate => {
                type $c = ugc_rate::UgcRate;
                $body
            }
        }
    };
}

/// Outcome of submitting a raw payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Submission {
    /// Input rejected; nothing was calculated or reported
    Invalid(ValidationReport),
    /// Input accepted and calculated
    Calculated {
        /// Full input after defaults were applied
        input: Value,
        output: Value,
    },
}

impl Submission {
    pub fn is_valid(&self) -> bool {
        matches!(self, Submission::Calculated { .. })
    }

    pub fn output(&self) -> Option<&Value> {
        match self {
            Submission::Calculated { output, .. } => Some(output),
            Submission::Invalid(_) => None,
        }
    }

    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Submission::Invalid(report) => Some(report),
            Submission::Calculated { .. } => None,
        }
    }
}

/// Integer fields arriving as `3.0` must reach serde as `3`
fn normalize(spec: &FieldSpec, value: &Value) -> Value {
    match (spec.kind, value.as_i64(), value.as_f64()) {
        (FieldKind::Integer { .. }, None, Some(n)) if n.fract() == 0.0 => Value::from(n as i64),
        _ => value.clone(),
    }
}

/// Validate a raw payload and build the typed input.
///
/// The outer error is an internal failure; the inner one is a rejected input.
fn parse_input<C: Calculator>(raw: &Value) -> CalcResult<Result<C::Input, ValidationReport>> {
    let report = validate_value(C::FIELDS, raw);
    if !report.valid {
        return Ok(Err(report));
    }

    let mut merged = serde_json::to_value(C::Input::default())?;
    let Some(target) = merged.as_object_mut() else {
        return Err(CalcError::Internal {
            message: format!("default input for '{}' is not a JSON object", C::ID),
        });
    };
    if let Some(source) = raw.as_object() {
        for spec in C::FIELDS {
            match source.get(spec.name) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    target.insert(spec.name.to_string(), normalize(spec, value));
                }
            }
        }
    }

    let input: C::Input = serde_json::from_value(merged)?;
    let report = C::validate(&input);
    if report.valid {
        Ok(Ok(input))
    } else {
        Ok(Err(report))
    }
}

fn validate_json<C: Calculator>(raw: &Value) -> ValidationReport {
    match parse_input::<C>(raw) {
        Ok(Ok(_)) => ValidationReport::ok(),
        Ok(Err(report)) => report,
        Err(e) => {
            let mut report = ValidationReport::ok();
            report.add("input", e.to_string());
            report
        }
    }
}

fn calculate_json<C: Calculator>(raw: &Value) -> CalcResult<Value> {
    let input = parse_input::<C>(raw)?.map_err(|report| CalcError::Validation { errors: report.errors })?;
    let output = C::calculate(&input);
    tracing::debug!(calculator = C::ID, "calculation complete");
    Ok(serde_json::to_value(output)?)
}

fn submit<C: Calculator>(raw: &Value, sink: &dyn AnalyticsSink) -> CalcResult<Submission> {
    let input = match parse_input::<C>(raw)? {
        Ok(input) => input,
        Err(report) => return Ok(Submission::Invalid(report)),
    };

    let output = serde_json::to_value(C::calculate(&input))?;
    let input = serde_json::to_value(&input)?;
    emit(sink, &AnalyticsEvent::new(C::ID, input.clone(), &output, C::TRACKED));

    Ok(Submission::Calculated { input, output })
}

impl CalculatorKind {
    pub const ALL: &'static [CalculatorKind] = &[
        CalculatorKind::EngagementRate,
        CalculatorKind::BrandDeal,
        CalculatorKind::CreatorFund,
        CalculatorKind::BreakEven,
        CalculatorKind::ViralPotential,
        CalculatorKind::ContentValue,
        CalculatorKind::NicheProfitability,
        CalculatorKind::SponsorshipRoi,
        CalculatorKind::WatchTime,
        CalculatorKind::CompletionRate,
        CalculatorKind::FollowerGrowth,
        CalculatorKind::VideoPerformance,
        CalculatorKind::MultiPlatformEarnings,
        CalculatorKind::PostingTime,
        CalculatorKind::ContentCalendarRoi,
        CalculatorKind::CreatorTax,
        CalculatorKind::CreatorRewards,
        CalculatorKind::LiveGifts,
        CalculatorKind::ShopCommission,
        CalculatorKind::AdCost,
        CalculatorKind::AccountValue,
        CalculatorKind::SubscriptionEarnings,
        CalculatorKind::HashtagReach,
        CalculatorKind::UgcRate,
    ];

    /// Stable kebab-case id, e.g. `"brand-deal"`
    pub fn id(&self) -> &'static str {
        dispatch!(self, C => C::ID)
    }

    pub fn title(&self) -> &'static str {
        dispatch!(self, C => C::TITLE)
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        dispatch!(self, C => C::FIELDS)
    }

    /// Look up one declared field by name
    pub fn field(&self, name: &str) -> CalcResult<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name).ok_or_else(|| {
            let known = self.fields().iter().map(|spec| spec.name).collect::<Vec<_>>();
            CalcError::invalid_input(
                name,
                self.id(),
                format!("not a field of {}; expected one of: {}", self.id(), known.join(", ")),
            )
        })
    }

    /// Parse a typed-in `value` for the field `name`
    pub fn parse_field(&self, name: &str, value: &str) -> CalcResult<Value> {
        self.field(name)?.parse(value)
    }

    /// Result fields reported to analytics
    pub fn tracked(&self) -> &'static [&'static str] {
        dispatch!(self, C => C::TRACKED)
    }

    /// Look up a calculator by id
    pub fn from_id(id: &str) -> CalcResult<Self> {
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| CalcError::unknown_calculator(id))
    }

    /// Seeded form values as JSON
    pub fn default_input(&self) -> CalcResult<Value> {
        dispatch!(self, C => Ok(serde_json::to_value(<C as Calculator>::Input::default())?))
    }

    /// Validate a raw payload without calculating
    pub fn validate_json(&self, raw: &Value) -> ValidationReport {
        dispatch!(self, C => validate_json::<C>(raw))
    }

    /// Validate and calculate; invalid input is `CalcError::Validation`
    pub fn calculate_json(&self, raw: &Value) -> CalcResult<Value> {
        dispatch!(self, C => calculate_json::<C>(raw))
    }

    /// Validate, calculate and report the event to `sink`.
    ///
    /// A rejected payload is `Ok(Submission::Invalid)`, not an error, and is
    /// never reported.
    pub fn submit(&self, raw: &Value, sink: &dyn AnalyticsSink) -> CalcResult<Submission> {
        dispatch!(self, C => submit::<C>(raw, sink))
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::from_id(s)
    }
}
