//! Operating temperature validation

use super::{ValidationResult, VALIDATION_LIMITS};

/// Parse an optional temperature string.
///
/// `Ok(None)` for empty input, `Err(())` when it is not a finite number.
pub(crate) fn parse_temperature(value: &str) -> Result<Option<f64>, ()> {
    let raw = value.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(t) if t.is_finite() => Ok(Some(t)),
        _ => Err(()),
    }
}

/// Validate an operating temperature in °C.
///
/// Empty input is valid (temperature is optional). Values outside
/// [-273.15, 5000] are errors; sub-zero, cryogenic and high temperatures each
/// add their own warning.
pub fn validate_temperature(value: &str) -> ValidationResult {
    let limits = VALIDATION_LIMITS;
    let temp = match parse_temperature(value) {
        Ok(Some(temp)) => temp,
        Ok(None) => return ValidationResult::valid(),
        Err(()) => return ValidationResult::from_error("Temperature must be a valid number"),
    };

    if temp < limits.min_temperature_c {
        return ValidationResult::from_error(format!(
            "Temperature cannot be below absolute zero ({} °C)",
            limits.min_temperature_c
        ));
    }
    if temp > limits.max_temperature_c {
        return ValidationResult::from_error(format!(
            "Temperature must not exceed {} °C",
            limits.max_temperature_c
        ));
    }

    let mut result = ValidationResult::valid();
    if temp < 0.0 {
        result.add_warning("Sub-zero temperature: check the material for low-temperature brittleness");
    }
    if temp < limits.cryogenic_temperature_c {
        result.add_warning("Cryogenic temperature: most structural steels become brittle");
    }
    if temp > limits.high_temperature_c {
        result.add_warning("Very high temperature: expect significant strength degradation");
    }
    result
}
