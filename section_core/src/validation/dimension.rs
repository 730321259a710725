//! Single-dimension validation
//!
//! Parse, global range check (errors), then advisory checks (warnings):
//! thickness sanity, family-specific typical ranges and excess precision.

use crate::profiles::ProfileFamily;
use crate::units::LengthUnit;

use super::{DimensionValidation, ValidationResult, VALIDATION_LIMITS};

/// Which side of a threshold triggers an advisory
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    Below(f64),
    Above(f64),
}

/// Advisory range for a dimension of a family group; bounds are in millimeters
struct FamilyAdvisory {
    applies_to: fn(&ProfileFamily) -> bool,
    dimensions: &'static [&'static str],
    bound: Bound,
    subject: &'static str,
}

fn is_round(family: &ProfileFamily) -> bool {
    *family == ProfileFamily::Round
}

const FAMILY_ADVISORIES: &[FamilyAdvisory] = &[
    FamilyAdvisory {
        applies_to: ProfileFamily::is_i_beam,
        dimensions: &["h"],
        bound: Bound::Below(80.0),
        subject: "I-beam height",
    },
    FamilyAdvisory {
        applies_to: ProfileFamily::is_i_beam,
        dimensions: &["b"],
        bound: Bound::Below(50.0),
        subject: "I-beam flange width",
    },
    FamilyAdvisory {
        applies_to: ProfileFamily::is_i_beam,
        dimensions: &["tw"],
        bound: Bound::Below(3.0),
        subject: "I-beam web thickness",
    },
    FamilyAdvisory {
        applies_to: ProfileFamily::is_channel,
        dimensions: &["h"],
        bound: Bound::Below(50.0),
        subject: "channel height",
    },
    FamilyAdvisory {
        applies_to: ProfileFamily::is_hollow,
        dimensions: &["t", "wt"],
        bound: Bound::Below(1.5),
        subject: "hollow section wall thickness",
    },
    FamilyAdvisory {
        applies_to: is_round,
        dimensions: &["d"],
        bound: Bound::Above(500.0),
        subject: "round bar diameter",
    },
];

fn is_thickness(name: &str) -> bool {
    matches!(name, "t" | "tw" | "tf") || name.to_lowercase().contains("thickness")
}

/// Digits after the decimal point of the written value, with any exponent applied
///
/// `"2.5e-3"` is 0.0025 and has 4; `"1.25e1"` is 12.5 and has 1.
fn decimal_places(raw: &str) -> usize {
    let (mantissa, exponent) = match raw.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().unwrap_or(0)),
        None => (raw, 0),
    };
    let fraction_digits = mantissa
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count())
        .unwrap_or(0);
    let places = i64::try_from(fraction_digits).unwrap_or(i64::MAX).saturating_sub(exponent);
    usize::try_from(places).unwrap_or(0)
}

/// Validate one user-entered dimension.
///
/// Empty and unparsable input return immediately with `value = None`. Range
/// violations are errors; thickness, family and precision checks only warn.
///
/// Family advisories are stated in millimeters and the value is converted
/// from `unit` before comparing. An unrecognised unit symbol is taken as mm.
pub fn validate_dimension(name: &str, raw_value: &str, unit: &str, family: Option<ProfileFamily>) -> DimensionValidation {
    let limits = VALIDATION_LIMITS;
    let raw = raw_value.trim();
    let mut check = DimensionValidation {
        name: name.to_string(),
        value: None,
        unit: unit.to_string(),
        result: ValidationResult::valid(),
    };

    if raw.is_empty() {
        check.result.add_error(format!("{name} is required"));
        return check;
    }

    let value = match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            check.result.add_error(format!("{name} must be a valid number"));
            return check;
        }
    };
    check.value = Some(value);

    if value <= limits.min_dimension {
        check
            .result
            .add_error(format!("{name} must be greater than {} {unit}", limits.min_dimension));
    } else if value > limits.max_dimension {
        check
            .result
            .add_error(format!("{name} must not exceed {} {unit}", limits.max_dimension));
    }

    if is_thickness(name) {
        if value < limits.thin_thickness {
            check.result.add_warning(format!(
                "{name} of {value} {unit} is very thin; check that it can be manufactured"
            ));
        } else if value > limits.thick_thickness {
            check
                .result
                .add_warning(format!("{name} of {value} {unit} is unusually thick"));
        }
    }

    if let Some(family) = family {
        let value_mm = unit
            .parse::<LengthUnit>()
            .map(|from| LengthUnit::convert(value, from, LengthUnit::Millimeter))
            .unwrap_or(value);
        for advisory in FAMILY_ADVISORIES {
            if !(advisory.applies_to)(&family) || !advisory.dimensions.contains(&name) {
                continue;
            }
            match advisory.bound {
                Bound::Below(min) if value_mm < min => check.result.add_warning(format!(
                    "{name} of {value} {unit} is below the typical minimum of {min} mm for {}",
                    advisory.subject
                )),
                Bound::Above(max) if value_mm > max => check.result.add_warning(format!(
                    "{name} of {value} {unit} is above the typical maximum of {max} mm for {}",
                    advisory.subject
                )),
                _ => {}
            }
        }
    }

    if value < limits.precision_threshold && decimal_places(raw) > limits.max_decimals {
        check.result.add_warning(format!(
            "{name} has more than {} decimal places; consider rounding",
            limits.max_decimals
        ));
    }

    check
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        let check = validate_dimension("tf", "", "mm", None);
        assert!(!check.is_valid());
        assert_eq!(check.result.errors(), &["tf is required".to_string()]);
        assert!(check.result.warnings().is_empty());
        assert_eq!(check.value, None);
    }

    #[test]
    fn test_whitespace_is_required() {
        let check = validate_dimension("h", "   ", "mm", None);
        assert_eq!(check.result.errors(), &["h is required".to_string()]);
    }

    #[test]
    fn test_unparsable() {
        for raw in ["abc", "12mm", "inf", "NaN"] {
            let check = validate_dimension("b", raw, "mm", None);
            assert_eq!(check.result.errors(), &["b must be a valid number".to_string()], "{raw}");
            assert_eq!(check.value, None);
        }
    }

    #[test]
    fn test_range_errors() {
        let zero = validate_dimension("b", "0", "mm", None);
        assert!(!zero.is_valid());
        assert_eq!(zero.value, Some(0.0));
        assert_eq!(zero.result.errors(), &["b must be greater than 0.001 mm".to_string()]);

        let boundary = validate_dimension("b", "0.001", "mm", None);
        assert!(!boundary.is_valid());

        let negative = validate_dimension("b", "-20", "mm", None);
        assert!(!negative.is_valid());

        let huge = validate_dimension("b", "100001", "mm", None);
        assert_eq!(huge.result.errors(), &["b must not exceed 100000 mm".to_string()]);

        let max = validate_dimension("b", "100000", "mm", None);
        assert!(max.is_valid());
    }

    #[test]
    fn test_thickness_warnings() {
        let thin = validate_dimension("t", "0.4", "mm", None);
        assert!(thin.is_valid());
        assert!(thin.result.warnings()[0].contains("very thin"));

        let thick = validate_dimension("wall_thickness", "150", "mm", None);
        assert!(thick.is_valid());
        assert!(thick.result.warnings()[0].contains("unusually thick"));

        // not a thickness key
        let wide = validate_dimension("b", "150", "mm", None);
        assert!(!wide.result.has_warnings());
    }

    #[test]
    fn test_i_beam_advisories() {
        let h = validate_dimension("h", "60", "mm", Some(ProfileFamily::Hea));
        assert!(h.is_valid());
        assert_eq!(h.result.warnings().len(), 1);
        assert!(h.result.warnings()[0].contains("I-beam height"));

        let tw = validate_dimension("tw", "2", "mm", Some(ProfileFamily::Ipe));
        assert!(tw.result.warnings().iter().any(|w| w.contains("web thickness")));

        let b = validate_dimension("b", "40", "mm", Some(ProfileFamily::WBeam));
        assert!(b.result.warnings()[0].contains("flange width"));

        // same value, family not given
        assert!(!validate_dimension("h", "60", "mm", None).result.has_warnings());
    }

    #[test]
    fn test_other_family_advisories() {
        let channel = validate_dimension("h", "40", "mm", Some(ProfileFamily::Upn));
        assert!(channel.result.warnings()[0].contains("channel height"));

        let pipe = validate_dimension("wt", "1.2", "mm", Some(ProfileFamily::Pipe));
        assert!(pipe.result.warnings()[0].contains("wall thickness"));

        let round = validate_dimension("d", "600", "mm", Some(ProfileFamily::Round));
        assert!(round.result.warnings()[0].contains("typical maximum"));

        let rect = validate_dimension("h", "40", "mm", Some(ProfileFamily::Rectangular));
        assert!(!rect.result.has_warnings());
    }

    #[test]
    fn test_family_advisories_compare_in_millimeters() {
        // HEA 200 entered in meters and inches
        for (unit, h, b) in [("m", "0.19", "0.2"), ("in", "7.48", "7.87"), ("cm", "19", "20")] {
            let h = validate_dimension("h", h, unit, Some(ProfileFamily::Hea));
            let b = validate_dimension("b", b, unit, Some(ProfileFamily::Hea));
            assert!(!h.result.has_warnings(), "{unit}: {:?}", h.result.warnings());
            assert!(!b.result.has_warnings(), "{unit}: {:?}", b.result.warnings());
        }

        let short = validate_dimension("h", "6", "cm", Some(ProfileFamily::Ipe));
        assert_eq!(short.result.warnings().len(), 1);
        assert!(short.result.warnings()[0].contains("typical minimum of 80 mm"));

        let large = validate_dimension("d", "0.6", "m", Some(ProfileFamily::Round));
        assert!(large.result.warnings()[0].contains("typical maximum of 500 mm"));
    }

    #[test]
    fn test_precision_warning() {
        let precise = validate_dimension("t", "0.5555", "mm", None);
        assert!(precise.is_valid());
        assert!(precise.result.warnings().iter().any(|w| w.contains("decimal places")));

        assert!(!validate_dimension("t", "0.555", "mm", None).result.has_warnings());
        // only checked below 1
        assert!(!validate_dimension("h", "12.34567", "mm", None).result.has_warnings());
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places("0.1234"), 4);
        assert_eq!(decimal_places("12"), 0);
        assert_eq!(decimal_places("1.5e-2"), 3);
        assert_eq!(decimal_places("2.5e-3"), 4);
        assert_eq!(decimal_places("25E-4"), 4);
        assert_eq!(decimal_places("1.25e1"), 1);
        assert_eq!(decimal_places("1.5e3"), 0);
    }

    #[test]
    fn test_precision_warning_with_exponent() {
        let scientific = validate_dimension("b", "2.5e-3", "mm", None);
        let plain = validate_dimension("b", "0.0025", "mm", None);
        assert!(scientific.is_valid());
        assert_eq!(scientific.result.warnings(), plain.result.warnings());
        assert!(scientific.result.warnings()[0].contains("decimal places"));

        assert!(!validate_dimension("b", "2.5e-1", "mm", None).result.has_warnings());
    }
}
