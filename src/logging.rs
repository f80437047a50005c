//! Diagnostic output for the binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the executable.

use crate::error::{Error, Result};
use tracing::Level;

/// Installs a stderr `fmt` subscriber filtering at `level`.
pub fn init_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::invalid_config(format!("logger init failed: {e}")))
}
