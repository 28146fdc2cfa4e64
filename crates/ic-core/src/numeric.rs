use crate::IcError;

/// Floating point type used throughout system
pub type Real = f64;

/// Magnitude below which a trigonometric denominator counts as zero.
pub const EPSILON_TRIG: Real = 1e-9;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, IcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(IcError::NonFinite { what, value: v })
    }
}

/// Fails unless `v` is finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, IcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(IcError::InvalidArg { what })
    }
}
