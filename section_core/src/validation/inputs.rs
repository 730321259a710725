//! Whole-calculation validation
//!
//! Runs every check for one calculation request and accumulates all messages.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use section_core::materials::catalog;
//! use section_core::validation::validate_calculation_inputs;
//!
//! let dims = HashMap::from([
//!     ("h".to_string(), "190".to_string()),
//!     ("b".to_string(), "200".to_string()),
//!     ("tw".to_string(), "6.5".to_string()),
//!     ("tf".to_string(), "10".to_string()),
//! ]);
//! let steel = catalog::lookup("Steel S235").unwrap();
//!
//! let result = validate_calculation_inputs("hea", &dims, "6000", Some(steel), Some("20"));
//! assert!(result.is_valid());
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::engine::DimensionMap;
use crate::materials::MaterialData;
use crate::profiles::ProfileFamily;
use crate::units::LengthUnit;

use super::dimension::validate_dimension;
use super::geometry::validate_geometry;
use super::material::validate_material_temperature_for;
use super::temperature::{parse_temperature, validate_temperature};
use super::ValidationResult;

/// Everything the user entered for one calculation, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct CalculationInputs<'a> {
    /// Profile family id (e.g., "hea")
    pub family: &'a str,
    /// Raw dimension strings keyed by dimension name
    pub dimensions: &'a DimensionMap,
    /// Member length; ignored for plate families, which carry `l`
    pub length: &'a str,
    /// Unit the dimensions and length were entered in
    pub unit: LengthUnit,
    pub material: Option<&'a MaterialData>,
    /// Optional operating temperature (°C)
    pub temperature: Option<&'a str>,
}

impl<'a> CalculationInputs<'a> {
    /// Inputs in millimeters with no material and no temperature
    pub fn new(family: &'a str, dimensions: &'a DimensionMap, length: &'a str) -> Self {
        CalculationInputs {
            family,
            dimensions,
            length,
            unit: LengthUnit::default(),
            material: None,
            temperature: None,
        }
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_material(mut self, material: &'a MaterialData) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_temperature(mut self, temperature: &'a str) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Run every check and collect all errors and warnings.
    pub fn validate(&self) -> ValidationResult {
        let unit = self.unit.symbol();
        let mut result = ValidationResult::valid();

        match self.family.parse::<ProfileFamily>() {
            Ok(family) => {
                let mut parsed = HashMap::new();
                for &key in family.required_dimensions() {
                    let raw = self.dimensions.get(key).map(String::as_str).unwrap_or("");
                    let check = validate_dimension(key, raw, unit, Some(family));
                    if let Some(value) = check.value {
                        parsed.insert(key.to_string(), value);
                    }
                    result.merge(check.result);
                }
                if result.is_valid() {
                    result.merge(validate_geometry(family, &parsed));
                }
                if !family.is_plate_type() {
                    result.merge(validate_dimension("Length", self.length, unit, None).result);
                }
            }
            Err(err) => {
                result.add_error(err.to_string());
                result.merge(validate_dimension("Length", self.length, unit, None).result);
            }
        }

        if self.material.is_none() {
            result.add_error("Material is required");
        }

        if let Some(raw) = self.temperature.filter(|t| !t.trim().is_empty()) {
            let temp_check = validate_temperature(raw);
            let temp_ok = temp_check.is_valid();
            result.merge(temp_check);
            if let (true, Some(material), Ok(Some(temp))) = (temp_ok, self.material, parse_temperature(raw)) {
                result.merge(validate_material_temperature_for(material, temp));
            }
        }

        debug!(
            family = self.family,
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "validated calculation inputs"
        );
        result
    }
}

/// Validate all inputs of one calculation (dimensions in millimeters).
///
/// `is_valid() == false` means the property engine must not be trusted for
/// these inputs. Use [`CalculationInputs`] directly for other units.
pub fn validate_calculation_inputs(
    family: &str,
    dimensions: &DimensionMap,
    length: &str,
    material: Option<&MaterialData>,
    temperature: Option<&str>,
) -> ValidationResult {
    CalculationInputs {
        family,
        dimensions,
        length,
        unit: LengthUnit::default(),
        material,
        temperature,
    }
    .validate()
}
