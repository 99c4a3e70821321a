//! # Error Types
//!
//! Structured error types for creator_core. Calculators themselves never fail;
//! errors come from the edges: input validation, JSON payloads, settings files
//! and analytics sinks.
//!
//! ## Example
//!
//! ```rust
//! use creator_core::errors::{CalcError, CalcResult};
//!
//! fn check_followers(followers: f64) -> CalcResult<()> {
//!     if followers <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "followers",
//!             followers.to_string(),
//!             "Followers must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_followers(0.0).is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for creator_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Each variant carries enough context to render a message beside the
/// offending form field or to be handled programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A categorical value is not a member of its enumeration
    #[error("Unknown value '{value}' for '{field}' (expected one of: {expected})")]
    UnknownChoice {
        field: String,
        value: String,
        expected: String,
    },

    /// One or more fields failed validation
    #[error("Validation failed for {} field(s): {}", .errors.len(), summarize(.errors))]
    Validation { errors: BTreeMap<String, String> },

    /// No calculator is registered under this id
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// An analytics sink failed to record an event
    #[error("Analytics sink '{sink}' failed: {reason}")]
    SinkError { sink: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors.keys().cloned().collect::<Vec<_>>().join(", ")
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownChoice error
    pub fn unknown_choice(field: impl Into<String>, value: impl Into<String>, expected: &[&str]) -> Self {
        CalcError::UnknownChoice {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SinkError
    pub fn sink(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::SinkError {
            sink: sink.into(),
            reason: reason.into(),
        }
    }

    /// Field-keyed messages carried by this error, if it is input-related
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            CalcError::Validation { errors } => errors.clone(),
            CalcError::InvalidInput { field, reason, .. } => {
                BTreeMap::from([(field.clone(), reason.clone())])
            }
            CalcError::MissingField { field } => {
                BTreeMap::from([(field.clone(), format!("{field} is required"))])
            }
            CalcError::UnknownChoice { field, .. } => BTreeMap::from([(field.clone(), self.to_string())]),
            _ => BTreeMap::new(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::SinkError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownChoice { .. } => "UNKNOWN_CHOICE",
            CalcError::Validation { .. } => "VALIDATION_FAILED",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SinkError { .. } => "SINK_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("followers", "-5", "Followers must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_calculator("nope").error_code(), "UNKNOWN_CALCULATOR");
        assert_eq!(CalcError::sink("file", "disk full").error_code(), "SINK_ERROR");
    }

    #[test]
    fn test_only_sink_errors_are_recoverable() {
        assert!(CalcError::sink("http", "timeout").is_recoverable());
        assert!(!CalcError::missing_field("followers").is_recoverable());
    }

    #[test]
    fn test_validation_error_message_lists_fields() {
        let errors = BTreeMap::from([
            ("followers".to_string(), "Followers is required".to_string()),
            ("niche".to_string(), "Unknown niche".to_string()),
        ]);
        let error = CalcError::Validation { errors: errors.clone() };
        assert_eq!(error.to_string(), "Validation failed for 2 field(s): followers, niche");
        assert_eq!(error.field_errors(), errors);
    }

    #[test]
    fn test_unknown_choice_lists_expected() {
        let error = CalcError::unknown_choice("niche", "cooking", &["food", "travel"]);
        assert_eq!(
            error.to_string(),
            "Unknown value 'cooking' for 'niche' (expected one of: food, travel)"
        );
        assert!(error.field_errors().contains_key("niche"));
    }
}
