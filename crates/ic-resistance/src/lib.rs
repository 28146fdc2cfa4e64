//! ic-resistance: level ice resistance of a ship hull.
//!
//! Implements the Lindqvist decomposition of level ice resistance into
//! crushing, bending and submersion components, each scaled by a
//! speed-dependent multiplier.
//!
//! Every function is pure. Angle combinations that would divide by zero are
//! rejected with [`ResistanceError::DegenerateGeometry`] before evaluation.
//!
//! # Example
//!
//! ```
//! use ic_core::units::m;
//! use ic_resistance::{HullAngles, HullGeometry, IceConditions, level_ice_resistance};
//!
//! let hull = HullGeometry::new(m(100.0), m(20.0), m(8.0));
//! let angles = HullAngles::from_degrees(20.0, 30.0, 40.0);
//! let ice = IceConditions::from_cm_and_knots(100.0, 10.0);
//!
//! let r = level_ice_resistance(&hull, &angles, &ice).unwrap();
//! assert!(r.total > r.components.sum());
//! ```

pub mod common;
pub mod error;
pub mod geometry;
pub mod lindqvist;

// Re-exports
pub use error::{ResistanceError, ResistanceResult};
pub use geometry::{HullAngles, HullGeometry, IceConditions};
pub use lindqvist::{
    LevelIceResistance, ResistanceComponents, compute_lindqvist_components,
    compute_total_resistance, level_ice_resistance,
};
