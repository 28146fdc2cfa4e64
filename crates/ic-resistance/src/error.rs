//! Error types for level ice resistance calculations.

use thiserror::Error;

/// Errors that can occur while evaluating the Lindqvist model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResistanceError {
    /// An angle combination would divide by zero or flip the sign of a denominator.
    #[error("Degenerate geometry: {what}")]
    DegenerateGeometry { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ResistanceResult<T> = Result<T, ResistanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ResistanceError::DegenerateGeometry {
            what: "keel angle at 90 degrees",
        };
        assert!(err.to_string().contains("keel angle"));
    }
}
