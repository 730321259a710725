//! # Calculation Records
//!
//! A serializable request/record pair wrapping the validate-then-compute
//! sequence, for applications that store or transmit calculations.
//! [`run`] validates first and only invokes the engine when validation passes,
//! so a record never carries properties for rejected input.
//!
//! ## Example
//!
//! ```rust
//! use section_core::calculation::{run, CalculationRequest, MaterialRef};
//!
//! let request = CalculationRequest::new("B-1", "ipe")
//!     .with_dimension("h", "200")
//!     .with_dimension("b", "100")
//!     .with_dimension("tw", "5.6")
//!     .with_dimension("tf", "8.5")
//!     .with_length("4000")
//!     .with_material(MaterialRef::Name("Steel S355".to_string()));
//!
//! let record = run(request);
//! assert!(record.validation.is_valid());
//! assert!(record.properties.unwrap().area_cm2 > 0.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::engine::{compute_properties_with_temperature, DimensionMap, StructuralProperties};
use crate::errors::CalcResult;
use crate::materials::{catalog, MaterialData};
use crate::units::LengthUnit;
use crate::validation::{CalculationInputs, ValidationResult};

/// Material given by catalog name or inline data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialRef {
    Name(String),
    Data(MaterialData),
}

impl MaterialRef {
    /// Resolve against the built-in catalog
    pub fn resolve(&self) -> CalcResult<MaterialData> {
        match self {
            MaterialRef::Name(name) => catalog::lookup(name).cloned(),
            MaterialRef::Data(data) => Ok(data.clone()),
        }
    }
}

/// One calculation as entered by the user.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Purlin P-3",
///   "family": "upn",
///   "dimensions": { "h": "120", "b": "55", "tw": "7", "tf": "9" },
///   "unit": "mm",
///   "length": "5000",
///   "material": "Steel S235",
///   "temperature": "40"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// User label (e.g., "B-1", "Roof purlin")
    #[serde(default)]
    pub label: String,
    pub family: String,
    #[serde(default)]
    pub dimensions: DimensionMap,
    #[serde(default)]
    pub unit: LengthUnit,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub material: Option<MaterialRef>,
    #[serde(default)]
    pub temperature: Option<String>,
}

impl CalculationRequest {
    pub fn new(label: impl Into<String>, family: impl Into<String>) -> Self {
        CalculationRequest {
            label: label.into(),
            family: family.into(),
            dimensions: DimensionMap::new(),
            unit: LengthUnit::default(),
            length: String::new(),
            material: None,
            temperature: None,
        }
    }

    pub fn with_dimension(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.insert(key.into(), value.into());
        self
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = length.into();
        self
    }

    pub fn with_material(mut self, material: MaterialRef) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<String>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    /// Validate without computing.
    ///
    /// A material that cannot be resolved is reported as a validation error,
    /// the same way [`run`] reports it.
    pub fn validate(&self) -> ValidationResult {
        self.resolve_and_validate().1
    }

    fn resolve_and_validate(&self) -> (Option<MaterialData>, ValidationResult) {
        let (material, lookup_error) = match self.material.as_ref().map(MaterialRef::resolve) {
            Some(Ok(material)) => (Some(material), None),
            Some(Err(err)) => (None, Some(err)),
            None => (None, None),
        };

        let mut validation = CalculationInputs {
            family: &self.family,
            dimensions: &self.dimensions,
            length: &self.length,
            unit: self.unit,
            material: material.as_ref(),
            temperature: self.temperature.as_deref(),
        }
        .validate();
        if let Some(err) = lookup_error {
            validation.add_error(err.to_string());
        }
        (material, validation)
    }
}

/// A validated (and, when valid, computed) calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub request: CalculationRequest,
    pub validation: ValidationResult,
    /// Present only when validation passed
    pub properties: Option<StructuralProperties>,
}

impl CalculationRecord {
    /// Valid inputs and a computed result
    pub fn succeeded(&self) -> bool {
        self.validation.is_valid() && self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// Validate a request and compute its properties when the inputs pass.
pub fn run(request: CalculationRequest) -> CalculationRecord {
    let (material, validation) = request.resolve_and_validate();

    let properties = match (&material, validation.is_valid()) {
        (Some(material), true) => {
            let operating_temp = request
                .temperature
                .as_deref()
                .and_then(|t| t.trim().parse::<f64>().ok());
            Some(compute_properties_with_temperature(
                &request.family,
                &request.dimensions,
                material.density_g_cm3,
                request.unit.to_cm_factor(),
                operating_temp,
                material.thermal_expansion_per_c,
            ))
        }
        _ => None,
    };

    let record = CalculationRecord {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        request,
        validation,
        properties,
    };
    debug!(id = %record.id, label = %record.request.label, succeeded = record.succeeded(), "calculation finished");
    record
}
