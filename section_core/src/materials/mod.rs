//! # Materials
//!
//! Material data consumed by the engine (density, thermal expansion) and by
//! the validation layer (melting point, category-keyed thermal rules).
//!
//! The core only reads material data; the application owns its catalog. A
//! small built-in [`catalog`] of common engineering metals is provided for
//! tools and tests.
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::{catalog, MaterialCategory};
//!
//! let steel = catalog::lookup("steel s235").unwrap();
//! assert_eq!(steel.category, MaterialCategory::Steel);
//! assert_eq!(steel.density_g_cm3, 7.85);
//! ```

pub mod catalog;

use serde::{Deserialize, Serialize};

/// Material category tag
///
/// Drives the category-specific temperature rules in
/// [`crate::validation::material`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// Carbon and structural steels
    Steel,
    StainlessSteel,
    /// Aluminum and its alloys
    Aluminum,
    /// Copper and copper alloys (brass, bronze)
    Copper,
    Titanium,
    CastIron,
    #[default]
    Other,
}

impl MaterialCategory {
    /// All categories for selection lists
    pub const ALL: [MaterialCategory; 7] = [
        MaterialCategory::Steel,
        MaterialCategory::StainlessSteel,
        MaterialCategory::Aluminum,
        MaterialCategory::Copper,
        MaterialCategory::Titanium,
        MaterialCategory::CastIron,
        MaterialCategory::Other,
    ];

    /// Infer a category from a free-text material name.
    ///
    /// Substring matching, kept for materials that arrive without a tag.
    /// "Stainless" is checked before "steel" so stainless grades are not
    /// treated as carbon steel.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("stainless") || lower.contains("inox") {
            MaterialCategory::StainlessSteel
        } else if lower.contains("cast iron") {
            MaterialCategory::CastIron
        } else if lower.contains("steel") {
            MaterialCategory::Steel
        } else if lower.contains("alumin") {
            MaterialCategory::Aluminum
        } else if lower.contains("copper") || lower.contains("brass") || lower.contains("bronze") {
            MaterialCategory::Copper
        } else if lower.contains("titanium") {
            MaterialCategory::Titanium
        } else {
            MaterialCategory::Other
        }
    }

    /// Categories that inherit the carbon-steel thermal rules
    pub fn is_steel(&self) -> bool {
        matches!(self, MaterialCategory::Steel | MaterialCategory::StainlessSteel)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Steel => "Steel",
            MaterialCategory::StainlessSteel => "Stainless Steel",
            MaterialCategory::Aluminum => "Aluminum",
            MaterialCategory::Copper => "Copper Alloy",
            MaterialCategory::Titanium => "Titanium",
            MaterialCategory::CastIron => "Cast Iron",
            MaterialCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Physical data for one material, as read by the core.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Steel S235",
///   "density_g_cm3": 7.85,
///   "melting_point_c": 1500.0,
///   "thermal_expansion_per_c": 1.2e-5,
///   "yield_strength_mpa": 235.0,
///   "tensile_strength_mpa": 360.0,
///   "category": "steel"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialData {
    /// Display name (e.g., "Steel S235")
    pub name: String,

    /// Density at 20 °C (g/cm³)
    pub density_g_cm3: f64,

    /// Melting point (°C); lower bound of the range for alloys
    pub melting_point_c: f64,

    /// Linear thermal coefficient used by the density adjustment (1/°C)
    #[serde(default)]
    pub thermal_expansion_per_c: Option<f64>,

    /// Yield strength (MPa)
    #[serde(default)]
    pub yield_strength_mpa: Option<f64>,

    /// Ultimate tensile strength (MPa)
    #[serde(default)]
    pub tensile_strength_mpa: Option<f64>,

    /// Category tag; inferred from the name when absent
    #[serde(default)]
    pub category: MaterialCategory,
}

impl MaterialData {
    /// Create a material with the category inferred from its name
    pub fn new(name: impl Into<String>, density_g_cm3: f64, melting_point_c: f64) -> Self {
        let name = name.into();
        let category = MaterialCategory::from_name(&name);
        MaterialData {
            name,
            density_g_cm3,
            melting_point_c,
            thermal_expansion_per_c: None,
            yield_strength_mpa: None,
            tensile_strength_mpa: None,
            category,
        }
    }

    pub fn with_category(mut self, category: MaterialCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_thermal_expansion(mut self, per_c: f64) -> Self {
        self.thermal_expansion_per_c = Some(per_c);
        self
    }

    pub fn with_strength(mut self, yield_mpa: f64, tensile_mpa: f64) -> Self {
        self.yield_strength_mpa = Some(yield_mpa);
        self.tensile_strength_mpa = Some(tensile_mpa);
        self
    }

    /// Category used for rule lookup: the tag, or the name when the tag is `Other`
    pub fn effective_category(&self) -> MaterialCategory {
        match self.category {
            MaterialCategory::Other => MaterialCategory::from_name(&self.name),
            tagged => tagged,
        }
    }
}

impl std::fmt::Display for MaterialData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} g/cm³)", self.name, self.density_g_cm3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name() {
        assert_eq!(MaterialCategory::from_name("Steel S235"), MaterialCategory::Steel);
        assert_eq!(MaterialCategory::from_name("Stainless Steel 304"), MaterialCategory::StainlessSteel);
        assert_eq!(MaterialCategory::from_name("Aluminium 6082"), MaterialCategory::Aluminum);
        assert_eq!(MaterialCategory::from_name("aluminum 6061-T6"), MaterialCategory::Aluminum);
        assert_eq!(MaterialCategory::from_name("Brass CW617N"), MaterialCategory::Copper);
        assert_eq!(MaterialCategory::from_name("Grey Cast Iron"), MaterialCategory::CastIron);
        assert_eq!(MaterialCategory::from_name("Oak"), MaterialCategory::Other);
    }

    #[test]
    fn test_new_infers_category() {
        let mat = MaterialData::new("Structural Steel", 7.85, 1500.0);
        assert_eq!(mat.category, MaterialCategory::Steel);
        assert!(mat.thermal_expansion_per_c.is_none());
    }

    #[test]
    fn test_effective_category_prefers_tag() {
        let mat = MaterialData::new("Custom alloy X", 8.0, 1400.0).with_category(MaterialCategory::Titanium);
        assert_eq!(mat.effective_category(), MaterialCategory::Titanium);

        let untagged = MaterialData {
            category: MaterialCategory::Other,
            ..MaterialData::new("Steel S355", 7.85, 1500.0)
        };
        assert_eq!(untagged.effective_category(), MaterialCategory::Steel);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"name":"Steel S235","density_g_cm3":7.85,"melting_point_c":1500.0}"#;
        let mat: MaterialData = serde_json::from_str(json).unwrap();
        assert_eq!(mat.category, MaterialCategory::Other);
        assert_eq!(mat.effective_category(), MaterialCategory::Steel);
        assert!(mat.yield_strength_mpa.is_none());
    }
}
