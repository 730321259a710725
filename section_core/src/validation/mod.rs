//! # Validation Layer
//!
//! Rule-based input checks that gate the property engine. Every check reports
//! through a [`ValidationResult`]:
//!
//! - **errors** block computation (missing, unparsable or out-of-range input,
//!   material at or above its melting point)
//! - **warnings** are advisory and never affect [`ValidationResult::is_valid`];
//!   this includes impossible proportions such as a wall thicker than the tube
//!
//! Nothing in this module panics or returns `Err`; all outcomes are data.
//! Validators never short-circuit, so a user sees every problem at once.
//!
//! ## Modules
//!
//! - [`dimension`] - Single dimension parse, range and family advisories
//! - [`temperature`] - Operating temperature bounds
//! - [`material`] - Material/temperature cross-checks (rule table)
//! - [`geometry`] - Cross-dimension consistency (walls thinner than the section)
//! - [`inputs`] - Orchestration of all of the above for one calculation
//! - [`results`] - Sanity check of computed properties
//!
//! ## Example
//!
//! ```rust
//! use section_core::validation::validate_dimension;
//!
//! let check = validate_dimension("tf", "", "mm", None);
//! assert!(!check.is_valid());
//! assert_eq!(check.result.errors(), &["tf is required".to_string()]);
//! assert_eq!(check.value, None);
//! ```

pub mod dimension;
pub mod geometry;
pub mod inputs;
pub mod material;
pub mod results;
pub mod temperature;

pub use dimension::validate_dimension;
pub use geometry::validate_geometry;
pub use inputs::{validate_calculation_inputs, CalculationInputs};
pub use material::{validate_material_temperature, validate_material_temperature_for, ThermalLimit, ThermalRule, THERMAL_RULES};
pub use results::validate_properties;
pub use temperature::validate_temperature;

use serde::{Deserialize, Serialize};

use crate::units::ABSOLUTE_ZERO_C;

/// Thresholds used by the validators.
///
/// Dimension thresholds are compared against the magnitude in the unit the
/// user entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Dimensions must be strictly greater than this
    pub min_dimension: f64,
    /// Dimensions must not exceed this
    pub max_dimension: f64,
    /// Thickness below this is flagged as very thin
    pub thin_thickness: f64,
    /// Thickness above this is flagged as unusually thick
    pub thick_thickness: f64,
    /// Values below this are checked for excess precision
    pub precision_threshold: f64,
    /// Decimal places allowed below the precision threshold
    pub max_decimals: usize,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    /// Below this a cryogenic warning is added
    pub cryogenic_temperature_c: f64,
    /// Above this a high temperature warning is added
    pub high_temperature_c: f64,
    /// Fraction of the melting point above which a warning is added
    pub melting_point_margin: f64,
}

/// The limits applied by every validator in this module
pub const VALIDATION_LIMITS: ValidationLimits = ValidationLimits {
    min_dimension: 0.001,
    max_dimension: 100_000.0,
    thin_thickness: 0.5,
    thick_thickness: 100.0,
    precision_threshold: 1.0,
    max_decimals: 3,
    min_temperature_c: ABSOLUTE_ZERO_C,
    max_temperature_c: 5000.0,
    cryogenic_temperature_c: -200.0,
    high_temperature_c: 1000.0,
    melting_point_margin: 0.8,
};

/// Outcome of a validation: blocking errors plus advisory warnings.
///
/// `is_valid` is always equal to `errors.is_empty()`: the default is a passing
/// result and deserialization recomputes the flag from `errors`.
///
/// ## JSON Example
///
/// ```json
/// {
///   "is_valid": false,
///   "errors": ["tf is required"],
///   "warnings": ["h of 60 mm is below the typical minimum of 80 mm for I-beam height"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ValidationMessages")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Wire form of [`ValidationResult`]; any incoming `is_valid` is ignored
#[derive(Deserialize)]
struct ValidationMessages {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl From<ValidationMessages> for ValidationResult {
    fn from(messages: ValidationMessages) -> Self {
        ValidationResult {
            is_valid: messages.errors.is_empty(),
            errors: messages.errors,
            warnings: messages.warnings,
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// A passing result with no messages
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A failing result with a single error
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut result = Self::valid();
        result.add_error(message);
        result
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append all messages of `other`
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.is_valid = self.errors.is_empty();
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "valid")?;
        } else {
            write!(f, "invalid ({} errors)", self.errors.len())?;
        }
        if !self.warnings.is_empty() {
            write!(f, ", {} warnings", self.warnings.len())?;
        }
        Ok(())
    }
}

/// Validation of one dimension, with the parsed magnitude when available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionValidation {
    /// Dimension key (e.g., "tf")
    pub name: String,
    /// Parsed magnitude, `None` when empty or unparsable
    pub value: Option<f64>,
    /// Unit symbol the magnitude was entered in
    pub unit: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl DimensionValidation {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_messages() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut result = ValidationResult::valid();
        result.add_warning("unusual");
        assert!(result.is_valid());
        assert_eq!(result.to_string(), "valid, 1 warnings");
    }

    #[test]
    fn test_merge_accumulates() {
        let mut result = ValidationResult::valid();
        result.merge(ValidationResult::from_error("a is required"));
        let mut other = ValidationResult::valid();
        other.add_warning("b is very thin");
        result.merge(other);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_default_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_deserialize_recomputes_validity() {
        let json = r#"{"is_valid": true, "errors": ["x"], "warnings": []}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors(), &["x".to_string()]);

        let json = r#"{"is_valid": false, "errors": [], "warnings": ["w"]}"#;
        let result: ValidationResult = serde_json::from_str(json).unwrap();
        assert!(result.is_valid());
        assert!(result.has_warnings());

        let roundtrip: ValidationResult =
            serde_json::from_str(&serde_json::to_string(&ValidationResult::from_error("e")).unwrap()).unwrap();
        assert_eq!(roundtrip, ValidationResult::from_error("e"));
    }

    #[test]
    fn test_dimension_validation_deserialize() {
        let json = r#"{"name": "tf", "value": null, "unit": "mm", "is_valid": true, "errors": ["tf is required"], "warnings": []}"#;
        let check: DimensionValidation = serde_json::from_str(json).unwrap();
        assert!(!check.is_valid());
    }

    #[test]
    fn test_serialization_shape() {
        let check = DimensionValidation {
            name: "h".to_string(),
            value: Some(200.0),
            unit: "mm".to_string(),
            result: ValidationResult::valid(),
        };
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["value"], 200.0);
        assert!(json["errors"].as_array().unwrap().is_empty());
    }
}
