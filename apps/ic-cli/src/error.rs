//! Error type for the command line shell.

use ic_polar::PolarError;
use ic_resistance::ResistanceError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Resistance calculation failed: {0}")]
    Resistance(#[from] ResistanceError),

    #[error("Bow load calculation failed: {0}")]
    Polar(#[from] PolarError),

    #[error("Input ended before the calculation was complete")]
    EndOfInput,

    #[error("Invalid log filter: {0}")]
    LogFilter(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
