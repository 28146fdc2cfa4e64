//! Polar Class load errors.

use thiserror::Error;

/// Result type for Polar Class operations.
pub type PolarResult<T> = Result<T, PolarError>;

/// Errors that can occur during bow design load calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolarError {
    /// Class code outside PC1..PC7.
    #[error("Invalid Polar Class '{code}', expected one of PC1..PC7")]
    InvalidClass { code: String },

    /// Bow geometry that would divide by zero or raise a negative base to a fractional power.
    #[error("Degenerate geometry: {what}")]
    DegenerateGeometry { what: &'static str },
}
