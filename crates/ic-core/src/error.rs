use thiserror::Error;

/// Failures of the shared numeric checks. Each calculator crate maps these
/// onto its own error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
