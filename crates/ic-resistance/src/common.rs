//! Common checks for resistance calculations.

use crate::error::{ResistanceError, ResistanceResult};
use ic_core::numeric::{EPSILON_TRIG, Real, ensure_finite, ensure_positive};

/// Ensure a value is finite, returning ResistanceError if not.
pub fn check_finite(value: Real, what: &'static str) -> ResistanceResult<Real> {
    ensure_finite(value, what).map_err(|_| ResistanceError::NonPhysical { what })
}

pub fn check_positive(value: Real, what: &'static str) -> ResistanceResult<Real> {
    ensure_positive(value, what).map_err(|_| ResistanceError::NonPhysical { what })
}

pub fn check_non_negative(value: Real, what: &'static str) -> ResistanceResult<Real> {
    let value = check_finite(value, what)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ResistanceError::NonPhysical { what })
    }
}

/// Ensure a computed denominator is bounded away from zero and positive.
pub fn check_denominator(value: Real, what: &'static str) -> ResistanceResult<Real> {
    if value.is_finite() && value > EPSILON_TRIG {
        Ok(value)
    } else {
        Err(ResistanceError::DegenerateGeometry { what })
    }
}
