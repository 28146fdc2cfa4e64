//! Tracing setup for the command line shell.

use crate::error::{CliError, CliResult};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// An explicit `level` wins over `RUST_LOG`; without either the shell logs
/// warnings only. Events go to stderr so reports on stdout stay clean.
pub fn init(level: Option<&str>) -> CliResult<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).map_err(|e| CliError::LogFilter(e.to_string()))?
        }
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
    Ok(())
}
