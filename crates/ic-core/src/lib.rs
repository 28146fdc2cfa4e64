//! ic-core: shared foundation for the ice load calculators.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - constants (physical constants of sea water, ice and gravity)
//! - numeric (Real + tolerances + float helpers)
//! - error (failures of the numeric checks)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::IcError;
pub use numeric::*;
pub use units::*;
