//! Design ice load on the bow region (IACS UR I2).
//!
//! ## Model
//!
//! With the load location fixed at `x = 0.25 Lui`:
//!
//! ```text
//! fa  = min((0.097 − 0.68 (x/Lui − 0.15)²) α / √β',
//!           1.2 CFF / (sin β' CFC Dui^0.64),
//!           0.60)
//! F   = fa CFC Dui^0.64                [MN]
//! AR  = max(7.46 sin β', 1.3)
//! Q   = F^0.61 CFD / AR^0.35           [MN/m]
//! P   = F^0.22 CFD² AR^0.3             [MPa]
//! b   = F / Q,  w = Q / P              [m]
//! Pavg = F / (b w)                     [MPa]
//! ```
//!
//! In the first shape factor candidate α and β' enter in degrees.

use crate::class::ClassFactors;
use crate::error::{PolarError, PolarResult};
use ic_core::{Real, ensure_positive};
use ic_core::units::{
    Angle, Area, Force, Length, Pressure, as_degrees, deg, m, meganewton, megapascal,
};
use tracing::{debug, trace};

/// Load location as a fraction of the upper ice waterline length.
pub const LOCATION_FRACTION: Real = 0.25;

/// Upper bound on the shape factor fa.
pub const MAX_SHAPE_FACTOR: Real = 0.60;

/// Lower bound on the load patch aspect ratio.
pub const MIN_ASPECT_RATIO: Real = 1.3;

/// Bow geometry at the upper ice waterline (UIWL).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowGeometry {
    /// Upper ice waterline length Lui
    pub lui: Length,
    /// Deadweight at UIWL, Dui, in kilotonnes
    pub deadweight_kt: Real,
    /// Normal frame angle β'
    pub beta_prime: Angle,
    /// Upper ice waterline angle α
    pub alpha: Angle,
    /// Buttock angle γ
    pub gamma: Angle,
}

impl BowGeometry {
    pub fn from_degrees(
        lui_m: Real,
        deadweight_kt: Real,
        beta_prime_deg: Real,
        alpha_deg: Real,
        gamma_deg: Real,
    ) -> Self {
        Self {
            lui: m(lui_m),
            deadweight_kt,
            beta_prime: deg(beta_prime_deg),
            alpha: deg(alpha_deg),
            gamma: deg(gamma_deg),
        }
    }

    pub fn validate(&self) -> PolarResult<()> {
        if !(self.lui.value.is_finite() && self.lui.value > 0.0) {
            return Err(PolarError::DegenerateGeometry {
                what: "upper ice waterline length must be positive",
            });
        }
        if !(self.deadweight_kt.is_finite() && self.deadweight_kt > 0.0) {
            return Err(PolarError::DegenerateGeometry {
                what: "deadweight at UIWL must be positive",
            });
        }
        let beta = as_degrees(self.beta_prime);
        if !(beta.is_finite() && beta > 0.0 && beta <= 90.0 + 1e-9) {
            return Err(PolarError::DegenerateGeometry {
                what: "normal frame angle must lie in (0, 90] degrees",
            });
        }
        let alpha = as_degrees(self.alpha);
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(PolarError::DegenerateGeometry {
                what: "waterline angle must be positive",
            });
        }
        if !self.gamma.value.is_finite() {
            return Err(PolarError::DegenerateGeometry {
                what: "buttock angle must be finite",
            });
        }
        Ok(())
    }
}

/// Bow design load and load patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BowLoadResult {
    /// Load location x from the forward perpendicular
    pub location: Length,
    /// Shape factor fa
    pub shape_factor: Real,
    /// Design force F
    pub force: Force,
    /// Load patch aspect ratio AR
    pub aspect_ratio: Real,
    /// Line load Q in MN/m
    pub line_load_mn_per_m: Real,
    /// Design pressure P
    pub pressure: Pressure,
    /// Load patch width b
    pub patch_width: Length,
    /// Load patch height w
    pub patch_height: Length,
    /// Design average pressure Pavg
    pub average_pressure: Pressure,
}

impl BowLoadResult {
    pub fn patch_area(&self) -> Area {
        self.patch_width * self.patch_height
    }
}

fn check_result(value: Real, what: &'static str) -> PolarResult<Real> {
    ensure_positive(value, what).map_err(|_| PolarError::DegenerateGeometry { what })
}

/// Evaluate the bow design load for `bow` under the given class factors.
pub fn compute_bow_design_load(
    bow: &BowGeometry,
    factors: &ClassFactors,
) -> PolarResult<BowLoadResult> {
    bow.validate()?;
    if !(factors.cfc > 0.0 && factors.cff > 0.0 && factors.cfd > 0.0) {
        return Err(PolarError::DegenerateGeometry {
            what: "class factors CFC, CFF and CFD must be positive",
        });
    }

    let lui = bow.lui.value;
    let x = LOCATION_FRACTION * lui;
    let dui_term = bow.deadweight_kt.powf(0.64);
    let sin_beta = bow.beta_prime.value.sin();
    let beta_deg = as_degrees(bow.beta_prime);
    let alpha_deg = as_degrees(bow.alpha);

    let fa1 = (0.097 - 0.68 * (x / lui - 0.15).powi(2)) * alpha_deg / beta_deg.sqrt();
    let fa2 = 1.2 * factors.cff / (sin_beta * factors.cfc * dui_term);
    let shape_factor = fa1.min(fa2).min(MAX_SHAPE_FACTOR);
    let shape_factor = check_result(shape_factor, "shape factor")?;
    trace!(fa1, fa2, shape_factor, "shape factor candidates");

    let fi = check_result(shape_factor * factors.cfc * dui_term, "design force")?;
    let ari = (7.46 * sin_beta).max(MIN_ASPECT_RATIO);
    let qi = check_result(fi.powf(0.61) * factors.cfd / ari.powf(0.35), "line load")?;
    let pi = check_result(
        fi.powf(0.22) * factors.cfd.powi(2) * ari.powf(0.3),
        "design pressure",
    )?;

    let b = fi / qi;
    let w = qi / pi;
    let pavg = check_result(fi / (b * w), "average pressure")?;

    debug!(fi, ari, qi, pi, b, w, pavg, "bow design load");

    Ok(BowLoadResult {
        location: m(x),
        shape_factor,
        force: meganewton(fi),
        aspect_ratio: ari,
        line_load_mn_per_m: qi,
        pressure: megapascal(pi),
        patch_width: m(b),
        patch_height: m(w),
        average_pressure: megapascal(pavg),
    })
}
