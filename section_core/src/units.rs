//! # Unit Types
//!
//! Length units accepted from the user and their conversion into the internal
//! unit. All derived section properties are expressed in centimeters:
//!
//! - Length: centimeters (cm)
//! - Area: cm²
//! - Moment of inertia: cm⁴
//! - Section modulus: cm³
//! - Density: g/cm³
//! - Linear weight: kg/m
//! - Temperature: degrees Celsius
//!
//! The engine receives raw magnitudes in the user's display unit together with
//! a single length factor (see [`LengthUnit::to_cm_factor`]).
//!
//! ## Example
//!
//! ```rust
//! use section_core::units::LengthUnit;
//!
//! let factor = LengthUnit::Millimeter.to_cm_factor();
//! assert_eq!(factor, 0.1);
//!
//! let unit: LengthUnit = "in".parse().unwrap();
//! assert_eq!(unit, LengthUnit::Inch);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Absolute zero in degrees Celsius
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Reference temperature for the linear density adjustment (°C)
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;

// ============================================================================
// Length Units
// ============================================================================

/// User-facing length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimeters (default for structural profile tables)
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    /// Centimeters (internal unit)
    #[serde(rename = "cm")]
    Centimeter,
    /// Meters
    #[serde(rename = "m")]
    Meter,
    /// Inches
    #[serde(rename = "in")]
    Inch,
    /// Feet
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    /// All length units for selection lists
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    /// Short symbol used in messages (e.g., "mm")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }

    /// Multiplier converting a magnitude in this unit to centimeters
    pub fn to_cm_factor(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.1,
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Meter => 100.0,
            LengthUnit::Inch => 2.54,
            LengthUnit::Foot => 30.48,
        }
    }

    /// Convert a length between two units
    pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.to_cm_factor() / to.to_cm_factor()
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" => Ok(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" | "centimetre" => Ok(LengthUnit::Centimeter),
            "m" | "meter" | "meters" | "metre" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "feet" | "'" => Ok(LengthUnit::Foot),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(LengthUnit::Millimeter.to_cm_factor(), 0.1);
        assert_eq!(LengthUnit::Centimeter.to_cm_factor(), 1.0);
        assert_eq!(LengthUnit::Meter.to_cm_factor(), 100.0);
        assert_eq!(LengthUnit::Inch.to_cm_factor(), 2.54);
    }

    #[test]
    fn test_convert() {
        assert_eq!(LengthUnit::convert(250.0, LengthUnit::Millimeter, LengthUnit::Millimeter), 250.0);
        assert!((LengthUnit::convert(12.0, LengthUnit::Inch, LengthUnit::Foot) - 1.0).abs() < 1e-12);
        assert!((LengthUnit::convert(1.5, LengthUnit::Meter, LengthUnit::Millimeter) - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse() {
        assert_eq!("MM".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeter);
        assert_eq!(" feet ".parse::<LengthUnit>().unwrap(), LengthUnit::Foot);
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LengthUnit::Millimeter).unwrap();
        assert_eq!(json, "\"mm\"");

        let roundtrip: LengthUnit = serde_json::from_str("\"ft\"").unwrap();
        assert_eq!(roundtrip, LengthUnit::Foot);
    }
}
