//! crates/logging/src/logger.rs
//! The logger context: verbosity gate, emit paths, and the sink seam.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use crate::entry::{self, EmitOutcome};
use crate::fallback;
use crate::header::{CallSite, DRIVER_FIELD_WIDTH, HEADER_WIDTH, MAX_BODY_LEN, Timestamp};
use crate::levels::Level;

/// Destination for fully assembled log lines.
///
/// The facility treats the sink as an opaque, thread-safe external
/// dependency: one complete line per call, always at informational
/// priority (severity is filtered before emission, never forwarded).
/// Write failures stay inside the sink; nothing is surfaced to emitters.
pub trait RecordSink: Send + Sync {
    /// Accepts one complete log line.
    fn write_record(&self, line: &str);
}

impl<S: RecordSink + ?Sized> RecordSink for Arc<S> {
    fn write_record(&self, line: &str) {
        (**self).write_record(line);
    }
}

/// In-memory sink that retains every record it receives.
///
/// Useful for tests and for embedding the facility where no system log
/// exists; production daemons wire up the syslog sink instead.
///
/// # Examples
///
/// ```
/// use logging::{CallSite, Level, Logger, MemorySink, RecordSink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::default());
/// let logger = Logger::new(Level::Info, Box::new(Arc::clone(&sink)));
///
/// let outcome = logger.emit(
///     &CallSite::new("net.c", 42, "Connect"),
///     Level::Error,
///     format_args!("failed: {}", 7),
/// );
/// assert!(outcome.is_emitted());
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Returns a copy of every record received so far.
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Discards all retained records.
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl RecordSink for MemorySink {
    fn write_record(&self, line: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(line.to_owned());
        }
    }
}

/// Level-filtered logger bound to a single sink.
///
/// The threshold is the only shared mutable state: it lives in an atomic,
/// is typically written once at initialisation, and is loaded on every
/// emit. All other per-call state is owned by the call itself, so any
/// number of threads may emit concurrently.
pub struct Logger {
    threshold: AtomicU8,
    sink: Box<dyn RecordSink>,
}

impl Logger {
    /// Creates a logger with the given threshold and sink.
    #[must_use]
    pub fn new(threshold: Level, sink: Box<dyn RecordSink>) -> Self {
        Self {
            threshold: AtomicU8::new(threshold as u8),
            sink,
        }
    }

    /// Current verbosity threshold.
    #[must_use]
    pub fn verbose_level(&self) -> Level {
        // The atomic only ever holds values stored from a Level.
        Level::from_repr(self.threshold.load(Ordering::Relaxed)).unwrap_or(Level::Always)
    }

    /// Replaces the verbosity threshold.
    ///
    /// Supported for late reconfiguration (e.g. from a console command);
    /// emits racing with the store see either the old or the new value.
    pub fn set_verbose_level(&self, threshold: Level) {
        self.threshold.store(threshold as u8, Ordering::Relaxed);
    }

    /// Emits a plain entry: fixed-width header followed by the body.
    pub fn emit(&self, site: &CallSite<'_>, level: Level, args: fmt::Arguments<'_>) -> EmitOutcome {
        self.emit_inner(site, level, None, args)
    }

    /// Emits an extended entry carrying a driver-identifier field.
    ///
    /// The driver field sits between the header and the body, left-justified
    /// and truncated to its fixed slot.
    pub fn emit_with_driver(
        &self,
        site: &CallSite<'_>,
        level: Level,
        driver_id: &str,
        args: fmt::Arguments<'_>,
    ) -> EmitOutcome {
        self.emit_inner(site, level, Some(driver_id), args)
    }

    fn emit_inner(
        &self,
        site: &CallSite<'_>,
        level: Level,
        driver_id: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> EmitOutcome {
        if !level.passes(self.verbose_level()) {
            return EmitOutcome::Filtered;
        }

        let ts = Timestamp::now();
        match entry::render_entry(level, site, driver_id, &ts, args) {
            Ok(line) => {
                self.sink.write_record(&line);
                EmitOutcome::Emitted
            }
            Err(_) => {
                // The sink cannot be trusted when memory is exhausted;
                // report on the side channel and drop the message.
                let capacity =
                    HEADER_WIDTH + driver_id.map_or(0, |_| DRIVER_FIELD_WIDTH) + MAX_BODY_LEN;
                fallback::report(format_args!(
                    "no memory to allocate log line ({capacity} bytes)"
                ));
                EmitOutcome::AllocationFailed
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.verbose_level())
            .finish_non_exhaustive()
    }
}
