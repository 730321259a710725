//! # Property Engine
//!
//! Computes the full set of cross-sectional properties for a profile family
//! from raw dimension strings, a density and a length factor.
//!
//! ## Fail-soft contract
//!
//! [`compute_properties`] never fails. An unknown family or a missing or
//! unparsable required dimension yields [`StructuralProperties::empty`], an
//! all-zero result tagged [`PropertyStatus::Empty`]. A zero-area result is
//! therefore NOT evidence that the inputs were valid: callers must gate on
//! [`crate::validation::validate_calculation_inputs`] first. Use
//! [`try_compute_properties`] when the failure reason is needed.
//!
//! Parsable but physically meaningless values (negative thickness, walls
//! thicker than half the section) are computed as given.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use section_core::engine::compute_properties;
//!
//! let dims = HashMap::from([
//!     ("b".to_string(), "100".to_string()),
//!     ("h".to_string(), "200".to_string()),
//! ]);
//!
//! // millimeters in, centimeters out
//! let props = compute_properties("rectangular", &dims, 7.85, 0.1);
//! assert!((props.area_cm2 - 200.0).abs() < 1e-9);
//! assert!((props.ix_cm4 - 6666.667).abs() < 0.001);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::equations::section::{self, radius_of_gyration, section_modulus, SectionGeometry};
use crate::errors::{CalcError, CalcResult};
use crate::materials::catalog::DEFAULT_DENSITY_G_CM3;
use crate::profiles::ProfileFamily;
use crate::units::REFERENCE_TEMPERATURE_C;

/// Raw dimension magnitudes keyed by dimension name, as entered by the user
pub type DimensionMap = HashMap<String, String>;

/// Whether a [`StructuralProperties`] value came from an actual computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Formulas were evaluated for the given section
    Computed,
    /// Family or dimensions were unusable; every numeric field is zero
    #[default]
    Empty,
}

/// Cross-section properties in centimeter-based units.
///
/// ## JSON Example
///
/// ```json
/// {
///   "status": "computed",
///   "area_cm2": 200.0,
///   "ix_cm4": 6666.667,
///   "iy_cm4": 1666.667,
///   "sx_cm3": 666.667,
///   "sy_cm3": 333.333,
///   "rx_cm": 5.7735,
///   "ry_cm": 2.8868,
///   "centroid_x_cm": 5.0,
///   "centroid_y_cm": 10.0,
///   "perimeter_cm": 60.0,
///   "weight_kg_per_m": 1.57
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuralProperties {
    pub status: PropertyStatus,
    /// Cross-sectional area (cm²)
    pub area_cm2: f64,
    /// Moment of inertia about X (cm⁴)
    pub ix_cm4: f64,
    /// Moment of inertia about Y (cm⁴)
    pub iy_cm4: f64,
    /// Elastic section modulus about X (cm³)
    pub sx_cm3: f64,
    /// Elastic section modulus about Y (cm³)
    pub sy_cm3: f64,
    /// Radius of gyration about X (cm)
    pub rx_cm: f64,
    /// Radius of gyration about Y (cm)
    pub ry_cm: f64,
    pub centroid_x_cm: f64,
    pub centroid_y_cm: f64,
    pub perimeter_cm: f64,
    /// Weight per unit length: area × density / 1000
    pub weight_kg_per_m: f64,
    /// Density actually used, when computed through the temperature-aware entry point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_density_g_cm3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_temperature_c: Option<f64>,
}

impl StructuralProperties {
    /// The all-zero sentinel returned for unusable input
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive section moduli, radii of gyration and weight from raw geometry
    pub fn from_geometry(geometry: &SectionGeometry, density_g_cm3: f64) -> Self {
        StructuralProperties {
            status: PropertyStatus::Computed,
            area_cm2: geometry.area,
            ix_cm4: geometry.ix,
            iy_cm4: geometry.iy,
            sx_cm3: section_modulus(geometry.ix, geometry.cx),
            sy_cm3: section_modulus(geometry.iy, geometry.cy),
            rx_cm: radius_of_gyration(geometry.ix, geometry.area),
            ry_cm: radius_of_gyration(geometry.iy, geometry.area),
            centroid_x_cm: geometry.centroid_x,
            centroid_y_cm: geometry.centroid_y,
            perimeter_cm: geometry.perimeter,
            weight_kg_per_m: geometry.area * density_g_cm3 / 1000.0,
            adjusted_density_g_cm3: None,
            operating_temperature_c: None,
        }
    }

    /// True for the sentinel produced by unusable input
    pub fn is_empty(&self) -> bool {
        self.status == PropertyStatus::Empty
    }

    /// Governing (smallest) radius of gyration
    pub fn r_min_cm(&self) -> f64 {
        self.rx_cm.min(self.ry_cm)
    }

    /// Slenderness L/r_min for a member length in cm, if r_min is positive
    pub fn slenderness(&self, length_cm: f64) -> Option<f64> {
        let r = self.r_min_cm();
        (r > 0.0).then(|| length_cm / r)
    }
}

/// A cross-section with its dimensions resolved, one variant per formula set.
///
/// Naming variants that share a formula map to the same variant (all I/H-beam
/// families become [`Section::IBeam`], pipe becomes [`Section::Chs`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Section {
    Rectangular { b: f64, h: f64 },
    Round { d: f64 },
    Square { a: f64 },
    Flat { b: f64, t: f64 },
    Hexagonal { s: f64 },
    IBeam { h: f64, b: f64, tw: f64, tf: f64 },
    Channel { h: f64, b: f64, tw: f64, tf: f64 },
    EqualAngle { a: f64, t: f64 },
    UnequalAngle { a: f64, b: f64, t: f64 },
    Rhs { h: f64, b: f64, t: f64 },
    Shs { a: f64, t: f64 },
    Chs { od: f64, t: f64 },
    TBeam { h: f64, b: f64, tw: f64, tf: f64 },
    BulbFlat { b: f64, t: f64 },
    HalfRound { d: f64 },
    Plate { b: f64, t: f64, l: f64 },
    PerforatedPlate { b: f64, t: f64, l: f64, hd: f64, p: f64 },
}

impl Section {
    /// Resolve every dimension the family requires through `dim`.
    ///
    /// The first failing lookup is returned as the error.
    pub fn from_dimensions<F>(family: ProfileFamily, dim: F) -> CalcResult<Self>
    where
        F: Fn(&str) -> CalcResult<f64>,
    {
        let section = match family {
            ProfileFamily::Rectangular => Section::Rectangular {
                b: dim("b")?,
                h: dim("h")?,
            },
            ProfileFamily::Round => Section::Round { d: dim("d")? },
            ProfileFamily::Square => Section::Square { a: dim("a")? },
            ProfileFamily::Flat => Section::Flat {
                b: dim("b")?,
                t: dim("t")?,
            },
            ProfileFamily::Hexagonal => Section::Hexagonal { s: dim("s")? },
            ProfileFamily::Ipe
            | ProfileFamily::Ipn
            | ProfileFamily::Hea
            | ProfileFamily::Heb
            | ProfileFamily::Hem
            | ProfileFamily::IBeam
            | ProfileFamily::HBeam
            | ProfileFamily::WBeam => Section::IBeam {
                h: dim("h")?,
                b: dim("b")?,
                tw: dim("tw")?,
                tf: dim("tf")?,
            },
            ProfileFamily::Upn
            | ProfileFamily::Upe
            | ProfileFamily::UChannel
            | ProfileFamily::CChannel => Section::Channel {
                h: dim("h")?,
                b: dim("b")?,
                tw: dim("tw")?,
                tf: dim("tf")?,
            },
            ProfileFamily::EqualAngle => Section::EqualAngle {
                a: dim("a")?,
                t: dim("t")?,
            },
            ProfileFamily::UnequalAngle => Section::UnequalAngle {
                a: dim("a")?,
                b: dim("b")?,
                t: dim("t")?,
            },
            ProfileFamily::Rhs => Section::Rhs {
                h: dim("h")?,
                b: dim("b")?,
                t: dim("t")?,
            },
            ProfileFamily::Shs => Section::Shs {
                a: dim("a")?,
                t: dim("t")?,
            },
            ProfileFamily::Chs => Section::Chs {
                od: dim("od")?,
                t: dim("t")?,
            },
            ProfileFamily::Pipe => Section::Chs {
                od: dim("od")?,
                t: dim("wt")?,
            },
            ProfileFamily::TBeam => Section::TBeam {
                h: dim("h")?,
                b: dim("b")?,
                tw: dim("tw")?,
                tf: dim("tf")?,
            },
            ProfileFamily::BulbFlat => Section::BulbFlat {
                b: dim("b")?,
                t: dim("t")?,
            },
            ProfileFamily::HalfRound => Section::HalfRound { d: dim("d")? },
            ProfileFamily::Plate | ProfileFamily::SheetMetal | ProfileFamily::CheckeredPlate => {
                Section::Plate {
                    b: dim("b")?,
                    t: dim("t")?,
                    l: dim("l")?,
                }
            }
            ProfileFamily::PerforatedPlate => Section::PerforatedPlate {
                b: dim("b")?,
                t: dim("t")?,
                l: dim("l")?,
                hd: dim("hd")?,
                p: dim("p")?,
            },
        };
        Ok(section)
    }

    /// Parse and scale the family's dimensions out of a raw dimension map
    pub fn from_raw(family: ProfileFamily, dimensions: &DimensionMap, length_factor: f64) -> CalcResult<Self> {
        Section::from_dimensions(family, |key| {
            let raw = dimensions
                .get(key)
                .ok_or_else(|| CalcError::missing_dimension(family.id(), key))?;
            parse_magnitude(key, raw).map(|value| value * length_factor)
        })
    }

    /// Evaluate the closed-form geometry for this section
    pub fn geometry(&self) -> SectionGeometry {
        match *self {
            Section::Rectangular { b, h } => section::rectangular(b, h),
            Section::Round { d } => section::round(d),
            Section::Square { a } => section::square(a),
            Section::Flat { b, t } => section::flat(b, t),
            Section::Hexagonal { s } => section::hexagonal(s),
            Section::IBeam { h, b, tw, tf } => section::i_beam(h, b, tw, tf),
            Section::Channel { h, b, tw, tf } => section::channel(h, b, tw, tf),
            Section::EqualAngle { a, t } => section::equal_angle(a, t),
            Section::UnequalAngle { a, b, t } => section::unequal_angle(a, b, t),
            Section::Rhs { h, b, t } => section::rhs(h, b, t),
            Section::Shs { a, t } => section::shs(a, t),
            Section::Chs { od, t } => section::chs(od, t),
            Section::TBeam { h, b, tw, tf } => section::t_beam(h, b, tw, tf),
            Section::BulbFlat { b, t } => section::bulb_flat(b, t),
            Section::HalfRound { d } => section::half_round(d),
            // length does not enter the cross-section
            Section::Plate { b, t, .. } => section::flat(b, t),
            Section::PerforatedPlate { b, t, hd, p, .. } => section::perforated_plate(b, t, hd, p),
        }
    }

    /// Full property set for a given density (g/cm³)
    pub fn properties(&self, density_g_cm3: f64) -> StructuralProperties {
        StructuralProperties::from_geometry(&self.geometry(), density_g_cm3)
    }
}

fn parse_magnitude(key: &str, raw: &str) -> CalcResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_input(key, raw, "Not a valid number")),
    }
}

/// Strict variant of [`compute_properties`] that reports why nothing was computed
pub fn try_compute_properties(
    family: &str,
    dimensions: &DimensionMap,
    density_g_cm3: f64,
    length_factor: f64,
) -> CalcResult<StructuralProperties> {
    let family: ProfileFamily = family.parse()?;
    let section = Section::from_raw(family, dimensions, length_factor)?;
    let props = section.properties(density_g_cm3);
    trace!(family = family.id(), area_cm2 = props.area_cm2, "computed section properties");
    Ok(props)
}

/// Compute all cross-section properties.
///
/// `dimensions` holds raw magnitudes in the user's unit; every value is
/// multiplied by `length_factor` to obtain centimeters. Returns the empty
/// sentinel instead of failing (see the module docs).
pub fn compute_properties(
    family: &str,
    dimensions: &DimensionMap,
    density_g_cm3: f64,
    length_factor: f64,
) -> StructuralProperties {
    match try_compute_properties(family, dimensions, density_g_cm3, length_factor) {
        Ok(props) => props,
        Err(err) => {
            debug!(family, error = %err, "returning empty section properties");
            StructuralProperties::empty()
        }
    }
}

/// Linear density adjustment ρ·(1 + k·(T − 20 °C)).
///
/// A first-order approximation; density is returned unchanged unless both the
/// operating temperature and the coefficient are given.
pub fn adjusted_density(density_g_cm3: f64, operating_temp_c: Option<f64>, temp_coefficient: Option<f64>) -> f64 {
    match (operating_temp_c, temp_coefficient) {
        (Some(temp), Some(k)) => density_g_cm3 * (1.0 + k * (temp - REFERENCE_TEMPERATURE_C)),
        _ => density_g_cm3,
    }
}

/// [`compute_properties`] with the density adjusted for operating temperature.
///
/// The density used and the operating temperature are attached to the result.
pub fn compute_properties_with_temperature(
    family: &str,
    dimensions: &DimensionMap,
    density_g_cm3: f64,
    length_factor: f64,
    operating_temp_c: Option<f64>,
    temp_coefficient: Option<f64>,
) -> StructuralProperties {
    let density = adjusted_density(density_g_cm3, operating_temp_c, temp_coefficient);
    let mut props = compute_properties(family, dimensions, density, length_factor);
    props.adjusted_density_g_cm3 = Some(density);
    props.operating_temperature_c = operating_temp_c;
    props
}

/// Cross-sectional area only (cm²), computed at the default steel density
pub fn compute_area(family: &str, dimensions: &DimensionMap, length_factor: f64) -> f64 {
    compute_properties(family, dimensions, DEFAULT_DENSITY_G_CM3, length_factor).area_cm2
}

/// Weight per unit length only
pub fn compute_weight(family: &str, dimensions: &DimensionMap, density_g_cm3: f64, length_factor: f64) -> f64 {
    compute_properties(family, dimensions, density_g_cm3, length_factor).weight_kg_per_m
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-6
    }

    fn dims(pairs: &[(&str, &str)]) -> DimensionMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_rectangular_mm_to_cm() {
        let props = compute_properties("rectangular", &dims(&[("b", "100"), ("h", "200")]), 7.85, 0.1);
        assert_eq!(props.status, PropertyStatus::Computed);
        assert!(approx_eq(props.area_cm2, 200.0), "A = {}", props.area_cm2);
        assert!(approx_eq(props.ix_cm4, 6666.667), "Ix = {}", props.ix_cm4);
        assert!(approx_eq(props.sx_cm3, 666.667), "Sx = {}", props.sx_cm3);
        assert!((props.rx_cm - 5.7735).abs() < 1e-4, "rx = {}", props.rx_cm);
        assert!(approx_eq(props.centroid_x_cm, 5.0));
        assert!(approx_eq(props.centroid_y_cm, 10.0));
    }

    #[test]
    fn test_rhs_outer_minus_inner() {
        let props = compute_properties("rhs", &dims(&[("h", "100"), ("b", "50"), ("t", "5")]), 7.85, 1.0);
        assert_eq!(props.area_cm2, 100.0 * 50.0 - 90.0 * 40.0);
        assert_eq!(props.area_cm2, 1400.0);
    }

    #[test]
    fn test_pipe_is_chs_alias() {
        let chs = compute_properties("chs", &dims(&[("od", "100"), ("t", "5")]), 7.85, 0.1);
        let pipe = compute_properties("pipe", &dims(&[("od", "100"), ("wt", "5")]), 7.85, 0.1);
        assert_eq!(chs, pipe);
    }

    #[test]
    fn test_symmetric_families_have_equal_axes() {
        let cases = [
            ("round", dims(&[("d", "60")])),
            ("square", dims(&[("a", "40")])),
            ("shs", dims(&[("a", "100"), ("t", "4")])),
            ("chs", dims(&[("od", "114.3"), ("t", "3.6")])),
            ("hexagonal", dims(&[("s", "27")])),
        ];
        for (family, d) in cases {
            let props = compute_properties(family, &d, 7.85, 0.1);
            assert_eq!(props.ix_cm4, props.iy_cm4, "{family}");
            assert_eq!(props.sx_cm3, props.sy_cm3, "{family}");
            assert_eq!(props.rx_cm, props.ry_cm, "{family}");
        }
    }

    #[test]
    fn test_missing_dimension_returns_empty() {
        let props = compute_properties("hea", &dims(&[("h", "190"), ("b", "200"), ("tw", "6.5")]), 7.85, 0.1);
        assert!(props.is_empty());
        assert_eq!(props, StructuralProperties::empty());
        assert_eq!(props.area_cm2, 0.0);
        assert_eq!(props.weight_kg_per_m, 0.0);
    }

    #[test]
    fn test_unknown_family_and_garbage_return_empty() {
        assert!(compute_properties("z_section", &dims(&[("h", "100")]), 7.85, 0.1).is_empty());
        assert!(compute_properties("round", &dims(&[("d", "abc")]), 7.85, 0.1).is_empty());
        assert!(compute_properties("round", &dims(&[("d", "NaN")]), 7.85, 0.1).is_empty());
    }

    #[test]
    fn test_try_compute_reports_reason() {
        let err = try_compute_properties("hea", &dims(&[("h", "190")]), 7.85, 0.1).unwrap_err();
        assert_eq!(err, CalcError::missing_dimension("hea", "b"));

        let err = try_compute_properties("round", &dims(&[("d", "x")]), 7.85, 0.1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_input_is_computed_not_rejected() {
        let props = compute_properties("flat", &dims(&[("b", "50"), ("t", "-5")]), 7.85, 0.1);
        assert_eq!(props.status, PropertyStatus::Computed);
        assert!(props.area_cm2 < 0.0);
        // no NaN leaks out of the radius of gyration
        assert_eq!(props.rx_cm, 0.0);
    }

    #[test]
    fn test_i_beam_variants_share_formula() {
        let d = dims(&[("h", "190"), ("b", "200"), ("tw", "6.5"), ("tf", "10")]);
        let hea = compute_properties("hea", &d, 7.85, 0.1);
        for family in ["ipe", "ipn", "heb", "hem", "i_beam", "h_beam", "w_beam"] {
            assert_eq!(compute_properties(family, &d, 7.85, 0.1), hea, "{family}");
        }
        // 2·20·1.0 + 17·0.65
        assert!(approx_eq(hea.area_cm2, 51.05));
    }

    #[test]
    fn test_plate_length_does_not_change_section() {
        let short = compute_properties("plate", &dims(&[("b", "1000"), ("t", "10"), ("l", "2000")]), 7.85, 0.1);
        let long = compute_properties("plate", &dims(&[("b", "1000"), ("t", "10"), ("l", "6000")]), 7.85, 0.1);
        assert_eq!(short, long);
        assert!(approx_eq(short.area_cm2, 100.0));
    }

    #[test]
    fn test_weight_formula() {
        let props = compute_properties("square", &dims(&[("a", "10")]), 7.85, 1.0);
        assert!(approx_eq(props.weight_kg_per_m, 100.0 * 7.85 / 1000.0));
    }

    #[test]
    fn test_temperature_without_coefficient_keeps_density() {
        let d = dims(&[("b", "100"), ("h", "200")]);
        let base = compute_properties("rectangular", &d, 7.85, 0.1);
        let props = compute_properties_with_temperature("rectangular", &d, 7.85, 0.1, Some(300.0), None);
        assert_eq!(props.adjusted_density_g_cm3, Some(7.85));
        assert_eq!(props.operating_temperature_c, Some(300.0));
        assert_eq!(props.area_cm2, base.area_cm2);
        assert_eq!(props.weight_kg_per_m, base.weight_kg_per_m);
    }

    #[test]
    fn test_temperature_adjusts_density_linearly() {
        let d = dims(&[("a", "10")]);
        let props = compute_properties_with_temperature("square", &d, 7.85, 1.0, Some(120.0), Some(1.2e-5));
        let expected = 7.85 * (1.0 + 1.2e-5 * 100.0);
        assert_eq!(props.adjusted_density_g_cm3, Some(expected));
        assert!(approx_eq(props.weight_kg_per_m, 100.0 * expected / 1000.0));
    }

    #[test]
    fn test_reference_temperature_is_neutral() {
        assert_eq!(adjusted_density(7.85, Some(20.0), Some(1.2e-5)), 7.85);
        assert_eq!(adjusted_density(7.85, None, Some(1.2e-5)), 7.85);
    }

    #[test]
    fn test_legacy_wrappers() {
        let d = dims(&[("od", "100"), ("t", "5")]);
        let full = compute_properties("chs", &d, 2.7, 0.1);
        assert_eq!(compute_area("chs", &d, 0.1), full.area_cm2);
        assert_eq!(compute_weight("chs", &d, 2.7, 0.1), full.weight_kg_per_m);
        assert_eq!(compute_area("chs", &dims(&[]), 0.1), 0.0);
    }

    #[test]
    fn test_idempotent() {
        let d = dims(&[("h", "200"), ("b", "100"), ("tw", "8"), ("tf", "12")]);
        let first = compute_properties_with_temperature("t_beam", &d, 7.85, 0.1, Some(80.0), Some(1.2e-5));
        let second = compute_properties_with_temperature("t_beam", &d, 7.85, 0.1, Some(80.0), Some(1.2e-5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_slenderness() {
        let props = compute_properties("rectangular", &dims(&[("b", "10"), ("h", "20")]), 7.85, 1.0);
        let lambda = props.slenderness(300.0).unwrap();
        assert!(approx_eq(lambda, 300.0 / props.ry_cm));
        assert!(StructuralProperties::empty().slenderness(300.0).is_none());
    }

    #[test]
    fn test_serialization_skips_absent_temperature() {
        let props = compute_properties("round", &dims(&[("d", "20")]), 7.85, 0.1);
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("\"status\":\"computed\""));
        assert!(!json.contains("operating_temperature_c"));
        let roundtrip: StructuralProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn symmetric_case() -> impl Strategy<Value = (&'static str, DimensionMap)> {
        (1.0_f64..500.0, 0.01_f64..0.2).prop_flat_map(|(size, ratio)| {
            let wall = format!("{}", size * ratio);
            let size = format!("{size}");
            prop_oneof![
                Just(("round", HashMap::from([("d".to_string(), size.clone())]))),
                Just(("square", HashMap::from([("a".to_string(), size.clone())]))),
                Just(("hexagonal", HashMap::from([("s".to_string(), size.clone())]))),
                Just((
                    "shs",
                    HashMap::from([("a".to_string(), size.clone()), ("t".to_string(), wall.clone())])
                )),
                Just((
                    "chs",
                    HashMap::from([("od".to_string(), size.clone()), ("t".to_string(), wall.clone())])
                )),
                Just((
                    "pipe",
                    HashMap::from([("od".to_string(), size), ("wt".to_string(), wall)])
                )),
            ]
        })
    }

    proptest! {
        #[test]
        fn symmetric_sections_have_identical_axes((family, dims) in symmetric_case()) {
            let props = compute_properties(family, &dims, 7.85, 0.1);
            prop_assert_eq!(props.ix_cm4, props.iy_cm4);
            prop_assert_eq!(props.rx_cm, props.ry_cm);
            prop_assert!(props.area_cm2 > 0.0);
            prop_assert!(props.rx_cm.is_finite() && props.rx_cm > 0.0);
        }

        #[test]
        fn rectangle_radius_matches_closed_form(b in 1.0_f64..1000.0, h in 1.0_f64..1000.0) {
            let dims = HashMap::from([
                ("b".to_string(), b.to_string()),
                ("h".to_string(), h.to_string()),
            ]);
            let props = compute_properties("rectangular", &dims, 7.85, 1.0);
            let expected = h / 12.0_f64.sqrt();
            prop_assert!((props.rx_cm - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
