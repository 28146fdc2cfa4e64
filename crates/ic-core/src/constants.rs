//! Physical constants shared by the ice models.

use crate::Real;

/// Gravitational acceleration (m/s²)
pub const G_MPS2: Real = 9.81;

/// Density of sea water (kg/m³)
pub const RHO_WATER_KGPM3: Real = 1025.0;

/// Density of ice (kg/m³)
pub const RHO_ICE_KGPM3: Real = 920.0;

/// Friction coefficient between hull plating and ice
pub const MU_HULL: Real = 0.3;

/// Bending strength of level ice (Pa)
pub const SIGMA_BENDING_PA: Real = 500_000.0;
