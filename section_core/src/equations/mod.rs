//! # Section Equations
//!
//! Closed-form cross-section formulas, kept in one place so they can be checked
//! against the handbook tables independently of the engine that dispatches to
//! them.
//!
//! ## Modules
//!
//! - [`section`] - Area, moments of inertia, extreme fibers, centroid, perimeter
//!
//! ## Axis Conventions
//!
//! - **X**: horizontal centroidal axis (strong axis for beams in their usual orientation)
//! - **Y**: vertical centroidal axis
//! - **Centroid**: measured from the bottom-left corner of the bounding box

pub mod section;

pub use section::{radius_of_gyration, section_modulus, SectionGeometry};
