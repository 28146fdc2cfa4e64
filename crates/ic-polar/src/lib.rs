//! ic-polar: IACS Polar Class design ice loads.
//!
//! Provides:
//! - Polar Class designations PC1..PC7 and their class factor table
//! - Bow geometry at the upper ice waterline
//! - The bow design load pipeline: shape factor, design force, aspect ratio,
//!   line load, pressure, load patch and average pressure
//!
//! # Example
//!
//! ```
//! use ic_polar::{BowGeometry, compute_bow_design_load, lookup_class_factors};
//!
//! let factors = lookup_class_factors("PC5").unwrap();
//! let bow = BowGeometry::from_degrees(150.0, 20.0, 30.0, 20.0, 0.0);
//! let load = compute_bow_design_load(&bow, &factors).unwrap();
//! assert!(load.shape_factor <= 0.60);
//! ```

pub mod bow;
pub mod class;
pub mod error;

// Re-exports for ergonomics
pub use bow::{
    BowGeometry, BowLoadResult, MAX_SHAPE_FACTOR, MIN_ASPECT_RATIO, compute_bow_design_load,
};
pub use class::{CLASS_FACTORS, ClassFactors, PolarClass, lookup_class_factors};
pub use error::{PolarError, PolarResult};
