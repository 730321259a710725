//! Material / temperature cross-checks
//!
//! The melting point check is physical. The category rules below are service
//! heuristics (tempering, brittleness, annealing) and live in a table so new
//! materials can be added without touching the validator.

use crate::materials::{MaterialCategory, MaterialData};

use super::{ValidationResult, VALIDATION_LIMITS};

/// Threshold side that triggers a thermal rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThermalLimit {
    /// Warn when the temperature is strictly above the value (°C)
    Above(f64),
    /// Warn when the temperature is strictly below the value (°C)
    Below(f64),
}

/// Category-specific thermal advisory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalRule {
    /// Category the rule applies to; `Steel` also covers stainless grades
    pub category: MaterialCategory,
    pub limit: ThermalLimit,
    pub message: &'static str,
}

impl ThermalRule {
    fn applies_to(&self, category: MaterialCategory) -> bool {
        match self.category {
            MaterialCategory::Steel => category.is_steel(),
            rule_category => rule_category == category,
        }
    }

    fn triggered_by(&self, temperature_c: f64) -> bool {
        match self.limit {
            ThermalLimit::Above(limit) => temperature_c > limit,
            ThermalLimit::Below(limit) => temperature_c < limit,
        }
    }
}

/// Thermal advisories by material category
pub const THERMAL_RULES: &[ThermalRule] = &[
    ThermalRule {
        category: MaterialCategory::Steel,
        limit: ThermalLimit::Above(700.0),
        message: "Steel above 700 °C: tempering effects and loss of strength are likely",
    },
    ThermalRule {
        category: MaterialCategory::Steel,
        limit: ThermalLimit::Below(-40.0),
        message: "Steel below -40 °C: risk of brittle fracture, check impact toughness grade",
    },
    ThermalRule {
        category: MaterialCategory::Aluminum,
        limit: ThermalLimit::Above(300.0),
        message: "Aluminum above 300 °C: annealing significantly reduces strength",
    },
];

fn check_thermal_limits(
    material_name: &str,
    category: MaterialCategory,
    temperature_c: f64,
    melting_point_c: f64,
) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if temperature_c >= melting_point_c {
        result.add_error(format!(
            "Temperature {temperature_c} °C reaches or exceeds the melting point of {material_name} ({melting_point_c} °C)"
        ));
    } else if temperature_c > VALIDATION_LIMITS.melting_point_margin * melting_point_c {
        result.add_warning(format!(
            "Temperature {temperature_c} °C is above {:.0}% of the melting point of {material_name}; material properties degrade significantly",
            VALIDATION_LIMITS.melting_point_margin * 100.0
        ));
    }

    for rule in THERMAL_RULES {
        if rule.applies_to(category) && rule.triggered_by(temperature_c) {
            result.add_warning(rule.message);
        }
    }

    result
}

/// Check an operating temperature against a material known only by name.
///
/// The category is inferred from the name ("steel", "aluminum", ...).
pub fn validate_material_temperature(material_name: &str, temperature_c: f64, melting_point_c: f64) -> ValidationResult {
    check_thermal_limits(
        material_name,
        MaterialCategory::from_name(material_name),
        temperature_c,
        melting_point_c,
    )
}

/// Check an operating temperature against a catalog material, using its category tag
pub fn validate_material_temperature_for(material: &MaterialData, temperature_c: f64) -> ValidationResult {
    check_thermal_limits(
        &material.name,
        material.effective_category(),
        temperature_c,
        material.melting_point_c,
    )
}
