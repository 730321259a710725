//! # Profile Families
//!
//! The closed set of cross-section shapes the engine understands, grouped the
//! way steel tables group them. Each family has a fixed list of required
//! dimension keys; several standardized names share one formula set (every
//! I/H-beam variant uses `h, b, tw, tf`).
//!
//! ## Example
//!
//! ```rust
//! use section_core::profiles::{ProfileFamily, ProfileGroup};
//!
//! let family: ProfileFamily = "HEA".parse().unwrap();
//! assert_eq!(family.group(), ProfileGroup::IBeam);
//! assert_eq!(family.required_dimensions(), &["h", "b", "tw", "tf"]);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

const SOLID_RECT: &[&str] = &["b", "h"];
const SOLID_ROUND: &[&str] = &["d"];
const SOLID_SQUARE: &[&str] = &["a"];
const FLAT_BAR: &[&str] = &["b", "t"];
const HEXAGON: &[&str] = &["s"];
const FLANGED: &[&str] = &["h", "b", "tw", "tf"];
const ANGLE_EQUAL: &[&str] = &["a", "t"];
const ANGLE_UNEQUAL: &[&str] = &["a", "b", "t"];
const HOLLOW_RECT: &[&str] = &["h", "b", "t"];
const HOLLOW_SQUARE: &[&str] = &["a", "t"];
const HOLLOW_ROUND: &[&str] = &["od", "t"];
const PIPE: &[&str] = &["od", "wt"];
const BULB: &[&str] = &["b", "t"];
const HALF_ROUND: &[&str] = &["d"];
const PLATE: &[&str] = &["b", "t", "l"];
const PERFORATED: &[&str] = &["b", "t", "l", "hd", "p"];

/// Shape category a family belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileGroup {
    /// Solid bars: rectangular, round, square, flat, hexagonal
    Solid,
    /// I and H beams
    IBeam,
    /// U and C channels
    Channel,
    /// Equal and unequal leg angles
    Angle,
    /// RHS, SHS, CHS and pipe
    Hollow,
    /// T-beam, bulb flat, half round
    Special,
    /// Plate products carrying their length as a dimension
    Plate,
}

impl ProfileGroup {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileGroup::Solid => "Solid Sections",
            ProfileGroup::IBeam => "I/H-Beams",
            ProfileGroup::Channel => "Channels",
            ProfileGroup::Angle => "Angles",
            ProfileGroup::Hollow => "Hollow Sections",
            ProfileGroup::Special => "Special Sections",
            ProfileGroup::Plate => "Plates & Sheets",
        }
    }
}

/// Cross-section profile family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileFamily {
    Rectangular,
    Round,
    Square,
    Flat,
    Hexagonal,
    /// European I-beam, parallel flanges
    Ipe,
    /// European I-beam, tapered flanges
    Ipn,
    /// European wide flange, light
    Hea,
    /// European wide flange, standard
    Heb,
    /// European wide flange, heavy
    Hem,
    IBeam,
    HBeam,
    /// American wide flange
    WBeam,
    /// European channel, tapered flanges
    Upn,
    /// European channel, parallel flanges
    Upe,
    UChannel,
    CChannel,
    EqualAngle,
    UnequalAngle,
    /// Rectangular hollow section
    Rhs,
    /// Square hollow section
    Shs,
    /// Circular hollow section
    Chs,
    /// Circular hollow section named by outer diameter and wall thickness
    Pipe,
    TBeam,
    BulbFlat,
    HalfRound,
    Plate,
    SheetMetal,
    CheckeredPlate,
    PerforatedPlate,
}

impl ProfileFamily {
    /// All profile families for iteration
    pub const ALL: [ProfileFamily; 30] = [
        ProfileFamily::Rectangular,
        ProfileFamily::Round,
        ProfileFamily::Square,
        ProfileFamily::Flat,
        ProfileFamily::Hexagonal,
        ProfileFamily::Ipe,
        ProfileFamily::Ipn,
        ProfileFamily::Hea,
        ProfileFamily::Heb,
        ProfileFamily::Hem,
        ProfileFamily::IBeam,
        ProfileFamily::HBeam,
        ProfileFamily::WBeam,
        ProfileFamily::Upn,
        ProfileFamily::Upe,
        ProfileFamily::UChannel,
        ProfileFamily::CChannel,
        ProfileFamily::EqualAngle,
        ProfileFamily::UnequalAngle,
        ProfileFamily::Rhs,
        ProfileFamily::Shs,
        ProfileFamily::Chs,
        ProfileFamily::Pipe,
        ProfileFamily::TBeam,
        ProfileFamily::BulbFlat,
        ProfileFamily::HalfRound,
        ProfileFamily::Plate,
        ProfileFamily::SheetMetal,
        ProfileFamily::CheckeredPlate,
        ProfileFamily::PerforatedPlate,
    ];

    /// Family id as used in requests and JSON (e.g., "hea", "equal_angle")
    pub fn id(&self) -> &'static str {
        match self {
            ProfileFamily::Rectangular => "rectangular",
            ProfileFamily::Round => "round",
            ProfileFamily::Square => "square",
            ProfileFamily::Flat => "flat",
            ProfileFamily::Hexagonal => "hexagonal",
            ProfileFamily::Ipe => "ipe",
            ProfileFamily::Ipn => "ipn",
            ProfileFamily::Hea => "hea",
            ProfileFamily::Heb => "heb",
            ProfileFamily::Hem => "hem",
            ProfileFamily::IBeam => "i_beam",
            ProfileFamily::HBeam => "h_beam",
            ProfileFamily::WBeam => "w_beam",
            ProfileFamily::Upn => "upn",
            ProfileFamily::Upe => "upe",
            ProfileFamily::UChannel => "u_channel",
            ProfileFamily::CChannel => "c_channel",
            ProfileFamily::EqualAngle => "equal_angle",
            ProfileFamily::UnequalAngle => "unequal_angle",
            ProfileFamily::Rhs => "rhs",
            ProfileFamily::Shs => "shs",
            ProfileFamily::Chs => "chs",
            ProfileFamily::Pipe => "pipe",
            ProfileFamily::TBeam => "t_beam",
            ProfileFamily::BulbFlat => "bulb_flat",
            ProfileFamily::HalfRound => "half_round",
            ProfileFamily::Plate => "plate",
            ProfileFamily::SheetMetal => "sheet_metal",
            ProfileFamily::CheckeredPlate => "checkered_plate",
            ProfileFamily::PerforatedPlate => "perforated_plate",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProfileFamily::Rectangular => "Rectangular Bar",
            ProfileFamily::Round => "Round Bar",
            ProfileFamily::Square => "Square Bar",
            ProfileFamily::Flat => "Flat Bar",
            ProfileFamily::Hexagonal => "Hexagonal Bar",
            ProfileFamily::Ipe => "IPE Beam",
            ProfileFamily::Ipn => "IPN Beam",
            ProfileFamily::Hea => "HEA Beam",
            ProfileFamily::Heb => "HEB Beam",
            ProfileFamily::Hem => "HEM Beam",
            ProfileFamily::IBeam => "I-Beam",
            ProfileFamily::HBeam => "H-Beam",
            ProfileFamily::WBeam => "Wide Flange (W)",
            ProfileFamily::Upn => "UPN Channel",
            ProfileFamily::Upe => "UPE Channel",
            ProfileFamily::UChannel => "U-Channel",
            ProfileFamily::CChannel => "C-Channel",
            ProfileFamily::EqualAngle => "Equal Angle",
            ProfileFamily::UnequalAngle => "Unequal Angle",
            ProfileFamily::Rhs => "Rectangular Hollow Section (RHS)",
            ProfileFamily::Shs => "Square Hollow Section (SHS)",
            ProfileFamily::Chs => "Circular Hollow Section (CHS)",
            ProfileFamily::Pipe => "Pipe",
            ProfileFamily::TBeam => "T-Beam",
            ProfileFamily::BulbFlat => "Bulb Flat",
            ProfileFamily::HalfRound => "Half Round",
            ProfileFamily::Plate => "Plate",
            ProfileFamily::SheetMetal => "Sheet Metal",
            ProfileFamily::CheckeredPlate => "Checkered Plate",
            ProfileFamily::PerforatedPlate => "Perforated Plate",
        }
    }

    /// Shape category of this family
    pub fn group(&self) -> ProfileGroup {
        match self {
            ProfileFamily::Rectangular
            | ProfileFamily::Round
            | ProfileFamily::Square
            | ProfileFamily::Flat
            | ProfileFamily::Hexagonal => ProfileGroup::Solid,
            ProfileFamily::Ipe
            | ProfileFamily::Ipn
            | ProfileFamily::Hea
            | ProfileFamily::Heb
            | ProfileFamily::Hem
            | ProfileFamily::IBeam
            | ProfileFamily::HBeam
            | ProfileFamily::WBeam => ProfileGroup::IBeam,
            ProfileFamily::Upn
            | ProfileFamily::Upe
            | ProfileFamily::UChannel
            | ProfileFamily::CChannel => ProfileGroup::Channel,
            ProfileFamily::EqualAngle | ProfileFamily::UnequalAngle => ProfileGroup::Angle,
            ProfileFamily::Rhs | ProfileFamily::Shs | ProfileFamily::Chs | ProfileFamily::Pipe => {
                ProfileGroup::Hollow
            }
            ProfileFamily::TBeam | ProfileFamily::BulbFlat | ProfileFamily::HalfRound => {
                ProfileGroup::Special
            }
            ProfileFamily::Plate
            | ProfileFamily::SheetMetal
            | ProfileFamily::CheckeredPlate
            | ProfileFamily::PerforatedPlate => ProfileGroup::Plate,
        }
    }

    /// Dimension keys that must be present for this family
    pub fn required_dimensions(&self) -> &'static [&'static str] {
        match self {
            ProfileFamily::Rectangular => SOLID_RECT,
            ProfileFamily::Round => SOLID_ROUND,
            ProfileFamily::Square => SOLID_SQUARE,
            ProfileFamily::Flat => FLAT_BAR,
            ProfileFamily::Hexagonal => HEXAGON,
            ProfileFamily::EqualAngle => ANGLE_EQUAL,
            ProfileFamily::UnequalAngle => ANGLE_UNEQUAL,
            ProfileFamily::Rhs => HOLLOW_RECT,
            ProfileFamily::Shs => HOLLOW_SQUARE,
            ProfileFamily::Chs => HOLLOW_ROUND,
            ProfileFamily::Pipe => PIPE,
            ProfileFamily::TBeam => FLANGED,
            ProfileFamily::BulbFlat => BULB,
            ProfileFamily::HalfRound => HALF_ROUND,
            ProfileFamily::PerforatedPlate => PERFORATED,
            _ => match self.group() {
                ProfileGroup::IBeam | ProfileGroup::Channel => FLANGED,
                _ => PLATE,
            },
        }
    }

    /// Plate-type families carry their length as the `l` dimension
    pub fn is_plate_type(&self) -> bool {
        self.group() == ProfileGroup::Plate
    }

    pub fn is_i_beam(&self) -> bool {
        self.group() == ProfileGroup::IBeam
    }

    pub fn is_channel(&self) -> bool {
        self.group() == ProfileGroup::Channel
    }

    pub fn is_hollow(&self) -> bool {
        self.group() == ProfileGroup::Hollow
    }

    /// Families whose X and Y properties coincide
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            ProfileFamily::Round
                | ProfileFamily::Square
                | ProfileFamily::Hexagonal
                | ProfileFamily::Shs
                | ProfileFamily::Chs
                | ProfileFamily::Pipe
        )
    }
}

impl FromStr for ProfileFamily {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        ProfileFamily::ALL
            .iter()
            .copied()
            .find(|family| family.id() == normalized)
            .ok_or_else(|| CalcError::unknown_profile(s))
    }
}

impl std::fmt::Display for ProfileFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
