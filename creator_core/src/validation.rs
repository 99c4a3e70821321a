//! # Input Validation
//!
//! Every calculator declares its form fields as a static slice of
//! [`FieldSpec`]s. Validation walks those specs against a JSON object and
//! accumulates one message per offending field into a [`ValidationReport`].
//!
//! Typed inputs are validated through the same path: they are serialized to
//! JSON first, so a Rust caller and a raw form payload see identical rules
//! and messages. Non-finite floats serialize to `null` and are therefore
//! reported as missing.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::validation::{validate_value, FieldSpec};
//! use serde_json::json;
//!
//! const FIELDS: &[FieldSpec] = &[
//!     FieldSpec::number("followers", "Followers", 1.0, 1e10),
//!     FieldSpec::choice("tier", "Tier", &["nano", "micro"]),
//! ];
//!
//! let report = validate_value(FIELDS, &json!({ "followers": 0, "tier": "mega" }));
//! assert!(!report.valid);
//! assert_eq!(report.errors.len(), 2);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{CalcError, CalcResult};

/// The kind of value a form field accepts. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Any finite number within `[min, max]`
    Number { min: f64, max: f64 },
    /// A whole number within `[min, max]`
    Integer { min: i64, max: i64 },
    /// One of a closed set of slugs
    Choice { options: &'static [&'static str] },
    /// A boolean toggle
    Flag,
}

/// Declaration of a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// JSON/struct field name
    pub name: &'static str,
    /// Human-readable label used in messages
    pub label: &'static str,
    /// Accepted values
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Whether a raw payload must supply this field
    pub required: bool,
}

impl FieldSpec {
    pub const fn number(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        FieldSpec {
            name,
            label,
            kind: FieldKind::Number { min, max },
            required: true,
        }
    }

    pub const fn integer(name: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        FieldSpec {
            name,
            label,
            kind: FieldKind::Integer { min, max },
            required: true,
        }
    }

    pub const fn choice(name: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        FieldSpec {
            name,
            label,
            kind: FieldKind::Choice { options },
            required: true,
        }
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        FieldSpec {
            name,
            label,
            kind: FieldKind::Flag,
            required: false,
        }
    }

    /// Mark the field optional: raw payloads may omit it and get the default
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Parse a typed-in value (e.g. `--set followers=50000`) into JSON.
    ///
    /// Only the type is checked here; bounds are left to validation so the
    /// whole payload reports at once.
    pub fn parse(&self, raw: &str) -> CalcResult<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CalcError::missing_field(self.name));
        }
        match self.kind {
            FieldKind::Number { .. } => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Value::from(n)),
                _ => Err(CalcError::invalid_input(self.name, raw, format!("{} must be a number", self.label))),
            },
            FieldKind::Integer { .. } => match raw.parse::<i64>() {
                Ok(n) => Ok(Value::from(n)),
                Err(_) => Err(CalcError::invalid_input(
                    self.name,
                    raw,
                    format!("{} must be a whole number", self.label),
                )),
            },
            FieldKind::Choice { options } => {
                if options.contains(&raw) {
                    Ok(Value::from(raw))
                } else {
                    Err(CalcError::unknown_choice(self.name, raw, options))
                }
            }
            FieldKind::Flag => match raw {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(CalcError::invalid_input(
                    self.name,
                    raw,
                    format!("{} must be true or false", self.label),
                )),
            },
        }
    }

    /// Check a single present, non-null value. Returns the error message.
    fn check(&self, value: &Value) -> Option<String> {
        match self.kind {
            FieldKind::Number { min, max } => match value.as_f64() {
                None => Some(format!("{} must be a number", self.label)),
                Some(n) if n < min || n > max => Some(format!(
                    "{} must be between {} and {}",
                    self.label,
                    fmt_bound(min),
                    fmt_bound(max)
                )),
                Some(_) => None,
            },
            FieldKind::Integer { min, max } => {
                let whole = value
                    .as_i64()
                    .or_else(|| value.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64));
                match whole {
                    None => Some(format!("{} must be a whole number", self.label)),
                    Some(n) if n < min || n > max => {
                        Some(format!("{} must be between {} and {}", self.label, min, max))
                    }
                    Some(_) => None,
                }
            }
            FieldKind::Choice { options } => match value.as_str() {
                Some(s) if options.contains(&s) => None,
                Some(s) => Some(format!(
                    "Unknown {} '{}'. Expected one of: {}",
                    self.label.to_lowercase(),
                    s,
                    options.join(", ")
                )),
                None => Some(format!("{} must be one of: {}", self.label, options.join(", "))),
            },
            FieldKind::Flag => {
                if value.is_boolean() {
                    None
                } else {
                    Some(format!("{} must be true or false", self.label))
                }
            }
        }
    }
}

fn fmt_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Outcome of validating one input record.
///
/// `errors` maps field name to a single human-readable message. The map is
/// ordered so reports compare and print deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        ValidationReport::ok()
    }
}

impl ValidationReport {
    /// A passing report with no errors
    pub fn ok() -> Self {
        ValidationReport {
            valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Record an error. The first message recorded for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
        self.valid = false;
    }

    /// Record `message` against `field` unless `condition` holds
    pub fn require(&mut self, field: &str, condition: bool, message: impl Into<String>) {
        if !condition {
            self.add(field, message);
        }
    }

    /// Message recorded for a field, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether a field already failed
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Convert into a `Result`, carrying the whole map on failure
    pub fn into_result(self) -> CalcResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(CalcError::Validation { errors: self.errors })
        }
    }
}

/// Validate a raw JSON payload against field specs.
///
/// Unknown extra keys are ignored. Absent or `null` optional fields are
/// accepted; absent or `null` required fields are reported as required.
pub fn validate_value(fields: &[FieldSpec], value: &Value) -> ValidationReport {
    let mut report = ValidationReport::ok();

    let Some(object) = value.as_object() else {
        report.add("input", "Input must be a JSON object");
        return report;
    };

    for spec in fields {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    report.add(spec.name, format!("{} is required", spec.label));
                }
            }
            Some(v) => {
                if let Some(message) = spec.check(v) {
                    report.add(spec.name, message);
                }
            }
        }
    }

    report
}

/// Validate a typed input record against field specs.
///
/// All fields are treated as required here: a typed record always has every
/// field, so a `null` can only come from a non-finite float.
pub fn validate_input<T: Serialize>(fields: &[FieldSpec], input: &T) -> ValidationReport {
    match serde_json::to_value(input) {
        Ok(value) => {
            let mut report = validate_value(fields, &value);
            if let Some(object) = value.as_object() {
                for spec in fields.iter().filter(|s| !s.required) {
                    if matches!(object.get(spec.name), Some(Value::Null)) {
                        report.add(spec.name, format!("{} is required", spec.label));
                    }
                }
            }
            report
        }
        Err(e) => {
            let mut report = ValidationReport::ok();
            report.add("input", format!("Input could not be serialized: {}", e));
            report
        }
    }
}
