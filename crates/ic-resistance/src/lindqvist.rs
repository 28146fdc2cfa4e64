//! Lindqvist level ice resistance.
//!
//! The resistance of a hull breaking level ice is split into three parts:
//!
//! ```text
//! R_c = 0.5 σ_b h² (tan φ + μ cos φ / cos ψ) / (1 − μ sin φ / cos ψ)
//! R_b = 0.003 σ_b B h^1.5 (tan ψ + μ cos φ / (sin α cos ψ (1 + 1 / cos ψ)))
//! R_s = (ρ_w − ρ_i) g h B (T (B + T) / (B + 2T)
//!       + μ (0.7 L − T / tan φ − B / (4 tan α + T cos φ cos ψ (1 / sin²φ + 1 / tan²α))))
//! ```
//!
//! and each part is scaled by its own speed correction:
//!
//! ```text
//! R_ice = (R_c + R_b)(1 + 1.4 v / √(g h)) + R_s (1 + 9.4 v / √(g L))
//! ```
//!
//! with `v` in metres per second.

use crate::common::{check_denominator, check_non_negative, check_positive};
use crate::error::{ResistanceError, ResistanceResult};
use crate::geometry::{HullAngles, HullGeometry, IceConditions};
use ic_core::constants::{G_MPS2, MU_HULL, RHO_ICE_KGPM3, RHO_WATER_KGPM3, SIGMA_BENDING_PA};
use ic_core::units::{Force, Length, Velocity, newton};
use tracing::{debug, trace};

/// Speed coefficient applied to crushing and bending.
const BREAKING_SPEED_COEFF: f64 = 1.4;

/// Speed coefficient applied to submersion.
const SUBMERSION_SPEED_COEFF: f64 = 9.4;

/// The three Lindqvist force components at zero speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceComponents {
    /// Crushing force R_c
    pub crushing: Force,
    /// Bending force R_b
    pub bending: Force,
    /// Submersion and clearing force R_s
    pub submersion: Force,
}

impl ResistanceComponents {
    pub fn zero() -> Self {
        Self {
            crushing: newton(0.0),
            bending: newton(0.0),
            submersion: newton(0.0),
        }
    }

    /// Sum of the components without speed correction.
    pub fn sum(&self) -> Force {
        self.crushing + self.bending + self.submersion
    }
}

/// Components and speed-corrected total for one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelIceResistance {
    pub components: ResistanceComponents,
    pub total: Force,
}

/// Evaluate crushing, bending and submersion forces for ice of thickness `h_ice`.
///
/// `h_ice` must be strictly positive; open water is handled by
/// [`level_ice_resistance`].
///
/// # Errors
/// - `NonPhysical` for non-positive hull dimensions or thickness, or a
///   component that comes out negative
/// - `DegenerateGeometry` for angles that make a denominator vanish
pub fn compute_lindqvist_components(
    hull: &HullGeometry,
    angles: &HullAngles,
    h_ice: Length,
) -> ResistanceResult<ResistanceComponents> {
    hull.validate()?;
    let h = check_positive(h_ice.value, "ice thickness must be positive")?;
    let t = angles.trig()?;

    let l = hull.length.value;
    let b = hull.breadth.value;
    let d = hull.draft.value;

    let crush_den = check_denominator(
        1.0 - MU_HULL * t.sin_phi / t.cos_psi,
        "crushing denominator 1 - mu*sin(phi)/cos(psi) vanishes",
    )?;
    let rc = 0.5 * SIGMA_BENDING_PA * h.powi(2) * (t.tan_phi + MU_HULL * t.cos_phi / t.cos_psi)
        / crush_den;

    let bend_den = check_denominator(
        t.sin_alpha * t.cos_psi * (1.0 + 1.0 / t.cos_psi),
        "bending denominator sin(alpha)*cos(psi)*(1 + 1/cos(psi)) vanishes",
    )?;
    let rb = 0.003 * SIGMA_BENDING_PA * b * h.powf(1.5)
        * (t.tan_psi + MU_HULL * t.cos_phi / bend_den);

    let clearing_den = check_denominator(
        4.0 * t.tan_alpha
            + d * t.cos_phi
                * t.cos_psi
                * (1.0 / t.sin_phi.powi(2) + 1.0 / t.tan_alpha.powi(2)),
        "submersion friction denominator vanishes",
    )?;
    let friction = MU_HULL * (0.7 * l - d / t.tan_phi - b / clearing_den);
    let rs = (RHO_WATER_KGPM3 - RHO_ICE_KGPM3)
        * G_MPS2
        * h
        * b
        * (d * (b + d) / (b + 2.0 * d) + friction);
    trace!(crush_den, bend_den, clearing_den, friction, "lindqvist terms");

    let rc = check_non_negative(rc, "crushing force is negative")?;
    let rb = check_non_negative(rb, "bending force is negative")?;
    let rs = check_non_negative(rs, "submersion force is negative")?;

    debug!(rc, rb, rs, "lindqvist components");

    Ok(ResistanceComponents {
        crushing: newton(rc),
        bending: newton(rb),
        submersion: newton(rs),
    })
}

/// Apply the speed corrections and sum the components.
///
/// `length` is the hull length L. `h_ice` must be the same non-zero thickness
/// used to compute `components`.
pub fn compute_total_resistance(
    components: &ResistanceComponents,
    length: Length,
    speed: Velocity,
    h_ice: Length,
) -> ResistanceResult<Force> {
    let l = check_positive(length.value, "hull length must be positive")?;
    let v = check_non_negative(speed.value, "ship speed cannot be negative")?;
    let h = check_non_negative(h_ice.value, "ice thickness cannot be negative")?;
    if h == 0.0 {
        return Err(ResistanceError::InvalidArg {
            what: "zero ice thickness has no speed correction; use level_ice_resistance",
        });
    }

    let breaking = components.crushing.value + components.bending.value;
    let breaking_factor = 1.0 + BREAKING_SPEED_COEFF * v / (G_MPS2 * h).sqrt();
    let submersion_factor = 1.0 + SUBMERSION_SPEED_COEFF * v / (G_MPS2 * l).sqrt();

    let r_ice = breaking * breaking_factor + components.submersion.value * submersion_factor;
    let r_ice = check_non_negative(r_ice, "total ice resistance is negative")?;
    debug!(v, breaking_factor, submersion_factor, r_ice, "total ice resistance");
    Ok(newton(r_ice))
}

/// Full level ice resistance for one operating point.
///
/// Ice-free water returns zero components and zero total without
/// evaluating any formula, so hull angles are not checked in that case.
pub fn level_ice_resistance(
    hull: &HullGeometry,
    angles: &HullAngles,
    ice: &IceConditions,
) -> ResistanceResult<LevelIceResistance> {
    ice.validate()?;
    if ice.is_ice_free() {
        debug!("no ice, resistance is zero");
        return Ok(LevelIceResistance {
            components: ResistanceComponents::zero(),
            total: newton(0.0),
        });
    }

    let components = compute_lindqvist_components(hull, angles, ice.thickness)?;
    let total = compute_total_resistance(&components, hull.length, ice.speed, ice.thickness)?;
    Ok(LevelIceResistance { components, total })
}
