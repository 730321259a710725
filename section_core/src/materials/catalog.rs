//! Built-in Material Catalog
//!
//! Nominal room-temperature data for common engineering metals. Values are
//! typical handbook figures (EN 10025, EN 10088, EN 573) and are meant for
//! section weights and sanity checks, not for design resistance.

use once_cell::sync::Lazy;

use super::{MaterialCategory, MaterialData};
use crate::errors::{CalcError, CalcResult};

/// Default density when none is supplied (structural steel, g/cm³)
pub const DEFAULT_DENSITY_G_CM3: f64 = 7.85;

static CATALOG: Lazy<Vec<MaterialData>> = Lazy::new(|| {
    vec![
        MaterialData::new("Steel S235", 7.85, 1500.0)
            .with_category(MaterialCategory::Steel)
            .with_thermal_expansion(1.2e-5)
            .with_strength(235.0, 360.0),
        MaterialData::new("Steel S275", 7.85, 1500.0)
            .with_category(MaterialCategory::Steel)
            .with_thermal_expansion(1.2e-5)
            .with_strength(275.0, 430.0),
        MaterialData::new("Steel S355", 7.85, 1500.0)
            .with_category(MaterialCategory::Steel)
            .with_thermal_expansion(1.2e-5)
            .with_strength(355.0, 490.0),
        MaterialData::new("Stainless Steel 304", 7.93, 1400.0)
            .with_category(MaterialCategory::StainlessSteel)
            .with_thermal_expansion(1.73e-5)
            .with_strength(215.0, 505.0),
        MaterialData::new("Stainless Steel 316", 8.0, 1375.0)
            .with_category(MaterialCategory::StainlessSteel)
            .with_thermal_expansion(1.6e-5)
            .with_strength(205.0, 515.0),
        MaterialData::new("Aluminum 6061-T6", 2.70, 582.0)
            .with_category(MaterialCategory::Aluminum)
            .with_thermal_expansion(2.36e-5)
            .with_strength(276.0, 310.0),
        MaterialData::new("Aluminum 6082-T6", 2.70, 555.0)
            .with_category(MaterialCategory::Aluminum)
            .with_thermal_expansion(2.34e-5)
            .with_strength(260.0, 310.0),
        MaterialData::new("Copper", 8.96, 1085.0)
            .with_category(MaterialCategory::Copper)
            .with_thermal_expansion(1.7e-5)
            .with_strength(70.0, 220.0),
        MaterialData::new("Brass", 8.50, 900.0)
            .with_category(MaterialCategory::Copper)
            .with_thermal_expansion(1.9e-5)
            .with_strength(200.0, 350.0),
        MaterialData::new("Titanium Grade 2", 4.51, 1665.0)
            .with_category(MaterialCategory::Titanium)
            .with_thermal_expansion(8.6e-6)
            .with_strength(275.0, 345.0),
        MaterialData::new("Cast Iron", 7.20, 1150.0)
            .with_category(MaterialCategory::CastIron)
            .with_thermal_expansion(1.05e-5),
    ]
});

/// All catalog entries, in display order
pub fn all() -> &'static [MaterialData] {
    &CATALOG
}

/// Look up a material by name, ignoring case and surrounding whitespace
pub fn lookup(name: &str) -> CalcResult<&'static MaterialData> {
    let wanted = name.trim();
    CATALOG
        .iter()
        .find(|mat| mat.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CalcError::material_not_found(name))
}

/// Catalog entries of one category
pub fn by_category(category: MaterialCategory) -> impl Iterator<Item = &'static MaterialData> {
    CATALOG.iter().filter(move |mat| mat.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        let mat = lookup("  stainless steel 316 ").unwrap();
        assert_eq!(mat.name, "Stainless Steel 316");
        assert_eq!(mat.category, MaterialCategory::StainlessSteel);
    }

    #[test]
    fn test_lookup_missing() {
        let err = lookup("Unobtanium").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("Unobtanium"));
    }

    #[test]
    fn test_catalog_sane() {
        for mat in all() {
            assert!(mat.density_g_cm3 > 0.0, "{} density", mat.name);
            assert!(mat.melting_point_c > 0.0, "{} melting point", mat.name);
            assert!(mat.thermal_expansion_per_c.is_some(), "{} expansion", mat.name);
            assert_eq!(mat.category, MaterialCategory::from_name(&mat.name), "{} category", mat.name);
        }
    }

    #[test]
    fn test_by_category() {
        let aluminum: Vec<_> = by_category(MaterialCategory::Aluminum).collect();
        assert_eq!(aluminum.len(), 2);
        assert!(aluminum.iter().all(|m| m.density_g_cm3 < 3.0));
    }
}
