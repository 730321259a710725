//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of standard structural cross-sections.
//! Every function takes dimensions in one consistent length unit (the engine
//! passes centimeters) and returns a [`SectionGeometry`] in powers of that unit.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `S` = Section modulus (I/c, where c = distance to extreme fiber)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section, `h` = Height of section
//! - `tw`, `tf` = Web and flange thickness
//! - `t` = Wall or leg thickness
//!
//! X is the horizontal centroidal axis (bending in the plane of `h`),
//! Y the vertical one.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - EN 10365: Hot rolled steel channels, I and H sections

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Raw geometric properties of a cross-section.
///
/// Extreme fiber distances are measured from the centroidal axis to the
/// farthest point of the section for that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Cross-sectional area
    pub area: f64,
    /// Moment of inertia about the X axis
    pub ix: f64,
    /// Moment of inertia about the Y axis
    pub iy: f64,
    /// Extreme fiber distance for bending about X
    pub cx: f64,
    /// Extreme fiber distance for bending about Y
    pub cy: f64,
    /// Centroid x coordinate from the section's left edge
    pub centroid_x: f64,
    /// Centroid y coordinate from the section's bottom edge
    pub centroid_y: f64,
    /// Boundary length
    pub perimeter: f64,
}

// =============================================================================
// GENERAL RELATIONS
// =============================================================================

/// Section modulus S = I/c
///
/// Returns 0 when the extreme fiber distance is not positive.
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    if c > 0.0 {
        i / c
    } else {
        0.0
    }
}

/// Radius of gyration r = √(I/A)
///
/// Returns 0 for non-positive area so that degenerate sections never produce
/// NaN or infinity.
///
/// # Example
/// ```rust
/// use section_core::equations::section::radius_of_gyration;
///
/// // 10 x 20 rectangle: I = 6666.67, A = 200
/// let r = radius_of_gyration(10.0 * 20.0_f64.powi(3) / 12.0, 200.0);
/// assert!((r - 5.7735).abs() < 0.0001);
/// ```
#[inline]
pub fn radius_of_gyration(i: f64, area: f64) -> f64 {
    if area > 0.0 {
        (i / area).sqrt()
    } else {
        0.0
    }
}

/// Moment of inertia of a rectangle about its own centroidal axis
///
/// # Formula
/// I = b·d³/12, with `d` measured perpendicular to the axis
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

// =============================================================================
// SOLID SECTIONS
// =============================================================================

/// Solid rectangular bar
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ═══X═══ │ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// - A = b·h
/// - Ix = b·h³/12, Iy = h·b³/12
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular;
///
/// let g = rectangular(10.0, 20.0);
/// assert_eq!(g.area, 200.0);
/// assert!((g.ix - 6666.667).abs() < 0.001);
/// ```
pub fn rectangular(b: f64, h: f64) -> SectionGeometry {
    SectionGeometry {
        area: b * h,
        ix: rectangular_moment_of_inertia(b, h),
        iy: rectangular_moment_of_inertia(h, b),
        cx: h / 2.0,
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: h / 2.0,
        perimeter: 2.0 * (b + h),
    }
}

/// Solid round bar of diameter `d`
///
/// # Formula
/// - A = π·(d/2)²
/// - Ix = Iy = π·d⁴/64
pub fn round(d: f64) -> SectionGeometry {
    let i = PI * d.powi(4) / 64.0;
    SectionGeometry {
        area: PI * (d / 2.0).powi(2),
        ix: i,
        iy: i,
        cx: d / 2.0,
        cy: d / 2.0,
        centroid_x: d / 2.0,
        centroid_y: d / 2.0,
        perimeter: PI * d,
    }
}

/// Solid square bar of side `a`
///
/// # Formula
/// - A = a²
/// - Ix = Iy = a⁴/12
pub fn square(a: f64) -> SectionGeometry {
    let i = a.powi(4) / 12.0;
    SectionGeometry {
        area: a * a,
        ix: i,
        iy: i,
        cx: a / 2.0,
        cy: a / 2.0,
        centroid_x: a / 2.0,
        centroid_y: a / 2.0,
        perimeter: 4.0 * a,
    }
}

/// Flat bar of width `b` and thickness `t`, lying flat
///
/// # Formula
/// - A = b·t
/// - Ix = b·t³/12, Iy = t·b³/12
pub fn flat(b: f64, t: f64) -> SectionGeometry {
    SectionGeometry {
        area: b * t,
        ix: rectangular_moment_of_inertia(b, t),
        iy: rectangular_moment_of_inertia(t, b),
        cx: t / 2.0,
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: t / 2.0,
        perimeter: 2.0 * (b + t),
    }
}

/// Hexagonal bar given the distance across flats `s`
///
/// The side length is taken as s/2, the simplification used throughout the
/// profile tables this library reproduces. Extreme fiber is one side length on
/// both axes so X and Y properties coincide.
///
/// # Formula
/// - side = s/2
/// - A = (3√3/2)·side²
/// - Ix = Iy = (5√3/16)·side⁴
pub fn hexagonal(s: f64) -> SectionGeometry {
    let side = s / 2.0;
    let sqrt3 = 3.0_f64.sqrt();
    let i = 5.0 * sqrt3 / 16.0 * side.powi(4);
    SectionGeometry {
        area: 3.0 * sqrt3 / 2.0 * side * side,
        ix: i,
        iy: i,
        cx: side,
        cy: side,
        centroid_x: side,
        centroid_y: side,
        perimeter: 6.0 * side,
    }
}

// =============================================================================
// FLANGED SECTIONS
// =============================================================================

/// Doubly symmetric I/H-beam
///
/// ```text
///     ┌───────────────┐  ─┬─ tf
///     └─────┐   ┌─────┘
///           │   │ ← tw
///       h   │   │
///     ┌─────┘   └─────┐
///     └───────────────┘
///             b
/// ```
///
/// # Formula
/// - A = 2·b·tf + (h − 2·tf)·tw
/// - Ix = b·h³/12 − (b − tw)·(h − 2·tf)³/12
/// - Iy = 2·tf·b³/12 (web contribution neglected)
///
/// # Example
/// ```rust
/// use section_core::equations::section::i_beam;
///
/// // HEA 200 (cm): h = 19, b = 20, tw = 0.65, tf = 1.0
/// let g = i_beam(19.0, 20.0, 0.65, 1.0);
/// assert!((g.area - 51.05).abs() < 0.01);
/// ```
pub fn i_beam(h: f64, b: f64, tw: f64, tf: f64) -> SectionGeometry {
    let web_h = h - 2.0 * tf;
    SectionGeometry {
        area: 2.0 * b * tf + web_h * tw,
        ix: rectangular_moment_of_inertia(b, h) - rectangular_moment_of_inertia(b - tw, web_h),
        iy: 2.0 * rectangular_moment_of_inertia(tf, b),
        cx: h / 2.0,
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: h / 2.0,
        perimeter: 4.0 * b + 2.0 * h - 2.0 * tw,
    }
}

/// U/C channel
///
/// Uses the single-flange simplification of the channel tables: the area
/// counts one flange plus the remaining web, and Ix adds the flange as a
/// parallel-axis term at (h − tf/2). The centroid is reported at the
/// bounding-box centre; the true shear-centre offset is not computed.
///
/// # Formula
/// - A = b·tf + (h − tf)·tw
/// - Ix = tw·h³/12 + (b − tw)·tf·(h − tf/2)²
/// - Iy = tf·b³/12
pub fn channel(h: f64, b: f64, tw: f64, tf: f64) -> SectionGeometry {
    SectionGeometry {
        area: b * tf + (h - tf) * tw,
        ix: rectangular_moment_of_inertia(tw, h) + (b - tw) * tf * (h - tf / 2.0).powi(2),
        iy: rectangular_moment_of_inertia(tf, b),
        cx: h / 2.0,
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: h / 2.0,
        perimeter: 2.0 * h + 4.0 * b - 2.0 * tw,
    }
}

/// T-beam with the flange on top
///
/// The neutral axis is located from the bottom of the web and both parts are
/// moved to it with the parallel-axis theorem.
///
/// # Formula
/// - A₁ = b·tf at y₁ = h − tf/2, A₂ = (h − tf)·tw at y₂ = (h − tf)/2
/// - ŷ = (A₁·y₁ + A₂·y₂)/A
/// - Ix = Σ (Iᵢ + Aᵢ·(yᵢ − ŷ)²)
/// - Iy = tf·b³/12 + (h − tf)·tw³/12
/// - Sx uses c = max(ŷ, h − ŷ)
pub fn t_beam(h: f64, b: f64, tw: f64, tf: f64) -> SectionGeometry {
    let web_h = h - tf;
    let a_flange = b * tf;
    let a_web = web_h * tw;
    let area = a_flange + a_web;
    let y_flange = h - tf / 2.0;
    let y_web = web_h / 2.0;
    let y_bar = if area != 0.0 {
        (a_flange * y_flange + a_web * y_web) / area
    } else {
        0.0
    };

    let ix = rectangular_moment_of_inertia(b, tf)
        + a_flange * (y_flange - y_bar).powi(2)
        + rectangular_moment_of_inertia(tw, web_h)
        + a_web * (y_web - y_bar).powi(2);

    SectionGeometry {
        area,
        ix,
        iy: rectangular_moment_of_inertia(tf, b) + rectangular_moment_of_inertia(web_h, tw),
        cx: y_bar.max(h - y_bar),
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: y_bar,
        perimeter: 2.0 * (b + h),
    }
}

// =============================================================================
// ANGLES
// =============================================================================

/// Equal leg angle
///
/// Ix = Iy by symmetry about the 45° axis. The table formula below is kept
/// as published for the angle families; the section modulus uses a/√2 as
/// extreme fiber distance.
///
/// # Formula
/// - A = (2a − t)·t
/// - Ix = Iy = t·(a⁴ − (a − t)⁴)/12
pub fn equal_angle(a: f64, t: f64) -> SectionGeometry {
    let area = (2.0 * a - t) * t;
    let i = t * (a.powi(4) - (a - t).powi(4)) / 12.0;
    let c = angle_centroid(a, a, t, area);
    SectionGeometry {
        area,
        ix: i,
        iy: i,
        cx: a / std::f64::consts::SQRT_2,
        cy: a / std::f64::consts::SQRT_2,
        centroid_x: c,
        centroid_y: c,
        perimeter: 4.0 * a,
    }
}

/// Unequal leg angle with vertical leg `a` and horizontal leg `b`
///
/// Simplified: each axis uses the equal-angle expression for its own leg and
/// ignores the rotation of the true principal axes.
///
/// # Formula
/// - A = (a + b − t)·t
/// - Ix = t·(a⁴ − (a − t)⁴)/12
/// - Iy = t·(b⁴ − (b − t)⁴)/12
pub fn unequal_angle(a: f64, b: f64, t: f64) -> SectionGeometry {
    let area = (a + b - t) * t;
    SectionGeometry {
        area,
        ix: t * (a.powi(4) - (a - t).powi(4)) / 12.0,
        iy: t * (b.powi(4) - (b - t).powi(4)) / 12.0,
        cx: a / std::f64::consts::SQRT_2,
        cy: b / std::f64::consts::SQRT_2,
        centroid_x: angle_centroid(b, a, t, area),
        centroid_y: angle_centroid(a, b, t, area),
        perimeter: 2.0 * (a + b),
    }
}

/// Centroid distance from the back of `other` leg, measured along `leg`:
/// t·(leg² + other·t − t²) / (2A)
fn angle_centroid(leg: f64, other: f64, t: f64, area: f64) -> f64 {
    if area == 0.0 {
        return 0.0;
    }
    t * (leg * leg + other * t - t * t) / (2.0 * area)
}

// =============================================================================
// HOLLOW SECTIONS
// Outer shape minus the inner void of the same shape
// =============================================================================

/// Rectangular hollow section
///
/// # Formula
/// - A = h·b − (h − 2t)·(b − 2t)
/// - Ix = [b·h³ − (b − 2t)·(h − 2t)³]/12
/// - Iy = [h·b³ − (h − 2t)·(b − 2t)³]/12
///
/// Perimeter is the outer boundary.
pub fn rhs(h: f64, b: f64, t: f64) -> SectionGeometry {
    let (hi, bi) = (h - 2.0 * t, b - 2.0 * t);
    SectionGeometry {
        area: h * b - hi * bi,
        ix: rectangular_moment_of_inertia(b, h) - rectangular_moment_of_inertia(bi, hi),
        iy: rectangular_moment_of_inertia(h, b) - rectangular_moment_of_inertia(hi, bi),
        cx: h / 2.0,
        cy: b / 2.0,
        centroid_x: b / 2.0,
        centroid_y: h / 2.0,
        perimeter: 2.0 * (h + b),
    }
}

/// Square hollow section
///
/// # Formula
/// - A = a² − (a − 2t)²
/// - Ix = Iy = [a⁴ − (a − 2t)⁴]/12
pub fn shs(a: f64, t: f64) -> SectionGeometry {
    let ai = a - 2.0 * t;
    let i = (a.powi(4) - ai.powi(4)) / 12.0;
    SectionGeometry {
        area: a * a - ai * ai,
        ix: i,
        iy: i,
        cx: a / 2.0,
        cy: a / 2.0,
        centroid_x: a / 2.0,
        centroid_y: a / 2.0,
        perimeter: 4.0 * a,
    }
}

/// Circular hollow section (also used for pipe)
///
/// # Formula
/// - id = od − 2t
/// - A = π·[(od/2)² − (id/2)²]
/// - Ix = Iy = π·(od⁴ − id⁴)/64
pub fn chs(od: f64, t: f64) -> SectionGeometry {
    let id = od - 2.0 * t;
    let i = PI / 64.0 * (od.powi(4) - id.powi(4));
    SectionGeometry {
        area: PI * ((od / 2.0).powi(2) - (id / 2.0).powi(2)),
        ix: i,
        iy: i,
        cx: od / 2.0,
        cy: od / 2.0,
        centroid_x: od / 2.0,
        centroid_y: od / 2.0,
        perimeter: PI * od,
    }
}

// =============================================================================
// SPECIAL SECTIONS (approximate)
// =============================================================================

/// Bulb flat of height `b` and web thickness `t`
///
/// Approximation: a `b × t` web plus a half-disc bulb of radius `t` whose flat
/// face is flush with the top of the web. Lower fidelity than the rolled
/// section tables.
pub fn bulb_flat(b: f64, t: f64) -> SectionGeometry {
    let a_web = b * t;
    let a_bulb = PI * t * t / 2.0;
    let area = a_web + a_bulb;
    let y_web = b / 2.0;
    let y_bulb = b - 4.0 * t / (3.0 * PI);
    let y_bar = if area != 0.0 {
        (a_web * y_web + a_bulb * y_bulb) / area
    } else {
        0.0
    };

    let i_bulb_local = (PI / 8.0 - 8.0 / (9.0 * PI)) * t.powi(4);
    let ix = rectangular_moment_of_inertia(t, b)
        + a_web * (y_web - y_bar).powi(2)
        + i_bulb_local
        + a_bulb * (y_bulb - y_bar).powi(2);

    SectionGeometry {
        area,
        ix,
        iy: rectangular_moment_of_inertia(b, t) + PI * t.powi(4) / 8.0,
        cx: y_bar.max(b - y_bar),
        cy: t,
        centroid_x: t / 2.0,
        centroid_y: y_bar,
        perimeter: 2.0 * b + t + PI * t,
    }
}

/// Half-round bar of diameter `d`, flat side down
///
/// # Formula
/// - r = d/2, ȳ = 4r/(3π)
/// - A = π·r²/2
/// - Ix = (π/8 − 8/(9π))·r⁴
/// - Iy = π·r⁴/8
pub fn half_round(d: f64) -> SectionGeometry {
    let r = d / 2.0;
    let y_bar = 4.0 * r / (3.0 * PI);
    SectionGeometry {
        area: PI * r * r / 2.0,
        ix: (PI / 8.0 - 8.0 / (9.0 * PI)) * r.powi(4),
        iy: PI * r.powi(4) / 8.0,
        cx: r - y_bar,
        cy: r,
        centroid_x: r,
        centroid_y: y_bar,
        perimeter: PI * r + d,
    }
}

// =============================================================================
// PLATES
// =============================================================================

/// Perforated plate with round holes of diameter `hd` on a square pitch `p`
///
/// All flat-plate properties are scaled by the solid fraction
/// φ = 1 − π·hd²/(4p²). Perimeter is the outer boundary.
pub fn perforated_plate(b: f64, t: f64, hd: f64, p: f64) -> SectionGeometry {
    let solid = 1.0 - PI * hd * hd / (4.0 * p * p);
    let plate = flat(b, t);
    SectionGeometry {
        area: plate.area * solid,
        ix: plate.ix * solid,
        iy: plate.iy * solid,
        ..plate
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
