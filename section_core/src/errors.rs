//! # Error Types
//!
//! Structured error types for section_core. These back the typed inner APIs
//! (profile parsing, section construction, material lookup). The two public
//! call surfaces, [`crate::compute_properties`] and
//! [`crate::validate_calculation_inputs`], never return them: the engine
//! degrades to an empty result and the validator reports plain messages.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{CalcError, CalcResult};
//!
//! fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
//!     if value <= 0.0 {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_positive("t", -1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Profile family id is not one of the known families
    #[error("Unknown profile type: {family}")]
    UnknownProfile { family: String },

    /// A dimension required by the profile family is absent
    #[error("Missing dimension '{dimension}' for profile '{family}'")]
    MissingDimension { family: String, dimension: String },

    /// An input value is invalid (unparsable, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Length unit symbol not recognised
    #[error("Unknown length unit: {unit}")]
    UnknownUnit { unit: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownProfile error
    pub fn unknown_profile(family: impl Into<String>) -> Self {
        CalcError::UnknownProfile {
            family: family.into(),
        }
    }

    /// Create a MissingDimension error
    pub fn missing_dimension(family: impl Into<String>, dimension: impl Into<String>) -> Self {
        CalcError::MissingDimension {
            family: family.into(),
            dimension: dimension.into(),
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

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownProfile { .. } => "UNKNOWN_PROFILE",
            CalcError::MissingDimension { .. } => "MISSING_DIMENSION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
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
        let error = CalcError::missing_dimension("hea", "tf");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MissingDimension\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_profile("zbeam").error_code(), "UNKNOWN_PROFILE");
        assert_eq!(CalcError::material_not_found("unobtanium").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::unknown_unit("furlong").error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_error_display_names_field() {
        let error = CalcError::missing_dimension("ipe", "tw");
        assert_eq!(error.to_string(), "Missing dimension 'tw' for profile 'ipe'");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<f64>("not json").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
