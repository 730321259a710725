//! # section_core - Structural Cross-Section Property Engine
//!
//! `section_core` computes closed-form cross-section properties (area, second
//! moments of area, section moduli, radii of gyration, centroid, perimeter,
//! linear weight) for standard structural profiles, and validates the raw user
//! input that feeds it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from input to a freshly built result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Validate, then compute**: The validator reports every problem as data;
//!   the engine never fails and returns a tagged empty result on unusable input
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use section_core::{compute_properties, validate_calculation_inputs};
//! use section_core::materials::catalog;
//!
//! let dims: HashMap<String, String> = [("od", "114.3"), ("t", "3.6")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//! let steel = catalog::lookup("Steel S355").unwrap();
//!
//! let check = validate_calculation_inputs("chs", &dims, "6000", Some(steel), None);
//! assert!(check.is_valid());
//!
//! let props = compute_properties("chs", &dims, steel.density_g_cm3, 0.1);
//! assert_eq!(props.ix_cm4, props.iy_cm4);
//! ```
//!
//! ## Modules
//!
//! - [`profiles`] - Profile families and their required dimensions
//! - [`engine`] - Property engine and result types
//! - [`equations`] - Closed-form section formulas
//! - [`validation`] - Input and result validation
//! - [`materials`] - Material data and built-in catalog
//! - [`calculation`] - Serializable validate-then-compute records
//! - [`units`] - Length units and conversion factors
//! - [`errors`] - Structured error types

pub mod calculation;
pub mod engine;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod profiles;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use engine::{
    compute_area, compute_properties, compute_properties_with_temperature, compute_weight, DimensionMap,
    PropertyStatus, Section, StructuralProperties,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialCategory, MaterialData};
pub use profiles::{ProfileFamily, ProfileGroup};
pub use units::LengthUnit;
pub use validation::{
    validate_calculation_inputs, validate_dimension, validate_material_temperature, validate_temperature,
    DimensionValidation, ValidationResult,
};
