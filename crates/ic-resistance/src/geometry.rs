//! Hull, angle and ice inputs of the level ice model.

use crate::common::{check_non_negative, check_positive};
use crate::error::{ResistanceError, ResistanceResult};
use ic_core::numeric::{EPSILON_TRIG, Real};
use ic_core::units::{Angle, Length, Velocity, cm, deg, knots};

/// Main dimensions of the hull at the ice waterline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullGeometry {
    /// Length L
    pub length: Length,
    /// Breadth B
    pub breadth: Length,
    /// Draft T
    pub draft: Length,
}

impl HullGeometry {
    pub fn new(length: Length, breadth: Length, draft: Length) -> Self {
        Self {
            length,
            breadth,
            draft,
        }
    }

    /// Check that every dimension is finite and strictly positive.
    pub fn validate(&self) -> ResistanceResult<()> {
        check_positive(self.length.value, "hull length must be positive")?;
        check_positive(self.breadth.value, "hull breadth must be positive")?;
        check_positive(self.draft.value, "hull draft must be positive")?;
        Ok(())
    }
}

/// Bow angles entering the Lindqvist formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullAngles {
    /// Trim angle φ of the stem
    pub trim: Angle,
    /// Angle ψ between the keel and the direction of motion
    pub keel: Angle,
    /// Angle α between the ship side and the waterline
    pub side: Angle,
}

impl HullAngles {
    pub fn new(trim: Angle, keel: Angle, side: Angle) -> Self {
        Self { trim, keel, side }
    }

    pub fn from_degrees(trim_deg: Real, keel_deg: Real, side_deg: Real) -> Self {
        Self::new(deg(trim_deg), deg(keel_deg), deg(side_deg))
    }

    /// Evaluate and check every trigonometric term the formulas divide by.
    pub(crate) fn trig(&self) -> ResistanceResult<TrigTerms> {
        let phi = self.trim.value;
        let psi = self.keel.value;
        let alpha = self.side.value;

        if !(phi.is_finite() && psi.is_finite() && alpha.is_finite()) {
            return Err(ResistanceError::NonPhysical {
                what: "hull angles must be finite",
            });
        }

        let half_pi = core::f64::consts::FRAC_PI_2;
        if phi <= EPSILON_TRIG || phi >= half_pi - EPSILON_TRIG {
            return Err(ResistanceError::DegenerateGeometry {
                what: "trim angle must lie strictly between 0 and 90 degrees",
            });
        }
        if psi < 0.0 || psi >= half_pi - EPSILON_TRIG {
            return Err(ResistanceError::DegenerateGeometry {
                what: "keel angle must lie in [0, 90) degrees",
            });
        }
        if alpha <= EPSILON_TRIG || alpha > half_pi + EPSILON_TRIG {
            return Err(ResistanceError::DegenerateGeometry {
                what: "side angle must lie in (0, 90] degrees",
            });
        }

        Ok(TrigTerms {
            sin_phi: phi.sin(),
            cos_phi: phi.cos(),
            tan_phi: phi.tan(),
            cos_psi: psi.cos(),
            tan_psi: psi.tan(),
            sin_alpha: alpha.sin(),
            tan_alpha: alpha.tan(),
        })
    }
}

/// Trigonometric values of a checked [`HullAngles`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TrigTerms {
    pub sin_phi: Real,
    pub cos_phi: Real,
    pub tan_phi: Real,
    pub cos_psi: Real,
    pub tan_psi: Real,
    pub sin_alpha: Real,
    pub tan_alpha: Real,
}

/// Level ice the ship is moving through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceConditions {
    /// Level ice thickness h_ice; zero means open water
    pub thickness: Length,
    /// Ship speed
    pub speed: Velocity,
}

impl IceConditions {
    pub fn new(thickness: Length, speed: Velocity) -> Self {
        Self { thickness, speed }
    }

    /// Thickness in centimetres and speed in knots, as read from a log sheet.
    pub fn from_cm_and_knots(thickness_cm: Real, speed_kn: Real) -> Self {
        Self::new(cm(thickness_cm), knots(speed_kn))
    }

    pub fn validate(&self) -> ResistanceResult<()> {
        check_non_negative(self.thickness.value, "ice thickness cannot be negative")?;
        check_non_negative(self.speed.value, "ship speed cannot be negative")?;
        Ok(())
    }

    pub fn is_ice_free(&self) -> bool {
        self.thickness.value == 0.0
    }
}
