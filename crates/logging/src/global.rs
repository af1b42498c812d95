//! crates/logging/src/global.rs
//! Process-wide facade: one logger instance shared by the whole daemon.
//!
//! The daemon initialises the facility once during startup, before any
//! worker threads exist; every later emit performs an atomic threshold
//! load against the same instance. Emits issued before [`init`] are
//! dropped, since no sink exists yet.

use std::fmt;
use std::sync::OnceLock;

use crate::config::LogConfig;
use crate::levels::Level;
use crate::logger::{Logger, RecordSink};

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Error returned when the facility is initialised more than once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitError;

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("logging facility is already initialized")
    }
}

impl std::error::Error for InitError {}

/// Initialises the process-wide logger.
///
/// Stores the configured verbosity threshold and binds the sink. The
/// persistent-log and output-folder fields of [`LogConfig`] are accepted
/// for their collaborators and left unused by the core.
///
/// # Errors
///
/// Returns [`InitError`] if the facility was already initialised; the
/// existing instance is left untouched.
pub fn init(config: &LogConfig, sink: Box<dyn RecordSink>) -> Result<(), InitError> {
    GLOBAL
        .set(Logger::new(config.verbose_level, sink))
        .map_err(|_| InitError)
}

/// Returns the process-wide logger, if [`init`] has run.
#[must_use]
pub fn try_global() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Starts the facility's background collaborators.
///
/// The core has none, so this trivially succeeds; the entry point exists
/// for lifecycle parity with the rest of the daemon's subsystems.
#[must_use]
pub fn run() -> bool {
    true
}

/// Stops the facility's background collaborators. No-op in this core.
pub fn stop() {}

/// Current process-wide verbosity threshold.
///
/// Before [`init`] the facility has no configuration; the most restrictive
/// threshold is reported.
#[must_use]
pub fn verbose_level() -> Level {
    try_global().map_or(Level::Always, Logger::verbose_level)
}
