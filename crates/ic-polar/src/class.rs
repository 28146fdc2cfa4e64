//! IACS Polar Class designations and their class factors.

use crate::error::{PolarError, PolarResult};
use ic_core::Real;
use std::fmt;

/// IACS Polar Class, PC1 being the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolarClass {
    PC1,
    PC2,
    PC3,
    PC4,
    PC5,
    PC6,
    PC7,
}

/// Class factors of one Polar Class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassFactors {
    /// Crushing failure class factor
    pub cfc: Real,
    /// Flexural failure class factor
    pub cff: Real,
    /// Load patch dimensions class factor
    pub cfd: Real,
    /// Displacement class factor (not used by the bow load)
    pub cfdis: Real,
    /// Longitudinal strength class factor (not used by the bow load)
    pub cfl: Real,
}

const fn factors(cfc: Real, cff: Real, cfd: Real, cfdis: Real, cfl: Real) -> ClassFactors {
    ClassFactors {
        cfc,
        cff,
        cfd,
        cfdis,
        cfl,
    }
}

/// Indexed by `PolarClass as usize`.
pub const CLASS_FACTORS: [ClassFactors; 7] = [
    factors(17.69, 68.60, 2.01, 250.0, 7.46),
    factors(9.89, 46.80, 1.75, 210.0, 5.46),
    factors(6.06, 21.17, 1.53, 180.0, 4.17),
    factors(4.50, 13.48, 1.42, 130.0, 3.15),
    factors(3.10, 9.00, 1.31, 70.0, 2.50),
    factors(2.40, 5.49, 1.17, 40.0, 2.37),
    factors(1.80, 4.06, 1.11, 22.0, 1.81),
];

impl PolarClass {
    pub const ALL: [PolarClass; 7] = [
        PolarClass::PC1,
        PolarClass::PC2,
        PolarClass::PC3,
        PolarClass::PC4,
        PolarClass::PC5,
        PolarClass::PC6,
        PolarClass::PC7,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PolarClass::PC1 => "PC1",
            PolarClass::PC2 => "PC2",
            PolarClass::PC3 => "PC3",
            PolarClass::PC4 => "PC4",
            PolarClass::PC5 => "PC5",
            PolarClass::PC6 => "PC6",
            PolarClass::PC7 => "PC7",
        }
    }

    pub fn factors(&self) -> ClassFactors {
        CLASS_FACTORS[*self as usize]
    }
}

impl fmt::Display for PolarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PolarClass {
    type Err = PolarError;

    /// Codes are matched exactly; `"pc1"` or `" PC1"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolarClass::ALL
            .into_iter()
            .find(|class| class.code() == s)
            .ok_or_else(|| PolarError::InvalidClass { code: s.to_string() })
    }
}

/// Class factors for a Polar Class code such as `"PC4"`.
pub fn lookup_class_factors(code: &str) -> PolarResult<ClassFactors> {
    Ok(code.parse::<PolarClass>()?.factors())
}
