//! # Error Types
//!
//! Structured error types for irrigation_core. Only configuration mistakes are
//! errors here: an unknown unit label, category, formula or benchmark key.
//! Incomplete or non-positive user input is not an error. The evaluator reports
//! it as `Ok(None)` so an interactive caller can re-evaluate on every keystroke.
//!
//! ## Example
//!
//! ```rust
//! use irrigation_core::errors::{CalcError, CalcResult};
//!
//! fn lookup(label: &str) -> CalcResult<f64> {
//!     match label {
//!         "gpm" => Ok(1.0),
//!         other => Err(CalcError::unknown_unit("Flow Rate", other)),
//!     }
//! }
//!
//! assert_eq!(lookup("furlongs").unwrap_err().error_code(), "UNKNOWN_UNIT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for irrigation_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for conversion and evaluation.
///
/// Each variant carries enough context to point at the offending table entry.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A unit label is not present in its category's table
    #[error("Unknown unit '{label}' in category '{category}'")]
    UnknownUnit { category: String, label: String },

    /// A category name does not match any conversion table
    #[error("Unknown unit category: {category}")]
    UnknownCategory { category: String },

    /// A formula identifier is not registered
    #[error("Unknown formula: {name}")]
    UnknownFormula { name: String },

    /// A benchmark table has no entry for the requested key
    #[error("Unknown {table} benchmark: {key}")]
    UnknownBenchmark { table: String, key: String },

    /// An input value is structurally invalid (not a transient user state)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, label: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            category: category.into(),
            label: label.into(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        CalcError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an UnknownFormula error
    pub fn unknown_formula(name: impl Into<String>) -> Self {
        CalcError::UnknownFormula { name: name.into() }
    }

    /// Create an UnknownBenchmark error
    pub fn unknown_benchmark(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownBenchmark {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that come from the static tables rather than from data
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnknownUnit { .. }
                | CalcError::UnknownCategory { .. }
                | CalcError::UnknownFormula { .. }
                | CalcError::UnknownBenchmark { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::UnknownFormula { .. } => "UNKNOWN_FORMULA",
            CalcError::UnknownBenchmark { .. } => "UNKNOWN_BENCHMARK",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
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
        let error = CalcError::unknown_unit("Pressure", "furlongs");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_formula("x").error_code(), "UNKNOWN_FORMULA");
        assert_eq!(CalcError::unknown_category("Heat").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(CalcError::unknown_benchmark("crop", "kelp").error_code(), "UNKNOWN_BENCHMARK");
    }

    #[test]
    fn test_configuration_errors() {
        assert!(CalcError::unknown_unit("Area", "x").is_configuration_error());
        assert!(!CalcError::invalid_input("flow", "NaN", "not a number").is_configuration_error());
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::unknown_unit("Flow Rate", "gpx");
        assert_eq!(error.to_string(), "Unknown unit 'gpx' in category 'Flow Rate'");
    }
}
