//! Sanity check of computed properties
//!
//! The engine never fails, so a caller that wants to act on its output checks
//! the result here as well as the inputs.

use crate::engine::StructuralProperties;

use super::ValidationResult;

/// Relative density change above which the temperature adjustment is flagged
const DENSITY_SHIFT_WARNING: f64 = 0.05;

/// Check that a computed result is usable.
///
/// Errors for the empty sentinel and for non-positive or non-finite area or
/// inertia; a warning when the temperature adjustment moved the density by more
/// than 5% from `nominal_density_g_cm3`.
pub fn validate_properties(props: &StructuralProperties, nominal_density_g_cm3: f64) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if props.is_empty() {
        result.add_error("No properties were computed; check the profile type and dimensions");
        return result;
    }

    if !props.area_cm2.is_finite() || props.area_cm2 <= 0.0 {
        result.add_error(format!("Computed area {} cm² is not positive", props.area_cm2));
    }
    for (axis, inertia) in [("X", props.ix_cm4), ("Y", props.iy_cm4)] {
        if !inertia.is_finite() || inertia <= 0.0 {
            result.add_error(format!("Computed moment of inertia about {axis} ({inertia} cm⁴) is not positive"));
        }
    }

    if let Some(adjusted) = props.adjusted_density_g_cm3 {
        if nominal_density_g_cm3 > 0.0 {
            let shift = (adjusted - nominal_density_g_cm3).abs() / nominal_density_g_cm3;
            if shift > DENSITY_SHIFT_WARNING {
                result.add_warning(format!(
                    "Temperature adjustment changed density by {:.1}%; the linear model may not hold",
                    shift * 100.0
                ));
            }
        }
    }

    result
}
