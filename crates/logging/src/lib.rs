#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is the fixed-format, level-filtered logging facility of the
//! engine daemon. Callers emit messages tagged with a severity [`Level`],
//! their source location, and optionally a driver identifier; the facility
//! renders a fixed-width header plus bounded message body and hands the
//! complete line to a [`RecordSink`].
//!
//! # Design
//!
//! Emission is synchronous on the caller's thread. A [`Logger`] owns the
//! verbosity threshold (an atomic, written at initialisation) and the sink;
//! the process-wide instance behind [`init`] backs the [`log_print!`] and
//! [`log_print_driver!`] macros. Each entry is one short-lived `String`
//! assembled through named bounded-field operations, so every slot's
//! truncation and padding rule is independently testable.
//!
//! # Invariants
//!
//! - The header is always exactly [`HEADER_WIDTH`] characters; over-length
//!   fields truncate, under-length fields pad.
//! - An entry never exceeds header + optional driver field + body budget.
//! - A message produces exactly one sink write when its level passes the
//!   threshold, and none otherwise.
//! - No failure inside the facility propagates to the caller; it degrades
//!   by dropping messages and reporting on a stderr side channel.
//!
//! # Errors
//!
//! [`Logger::emit`] reports its result as an [`EmitOutcome`] rather than an
//! error: filtering and truncation are normal behaviour, and allocation
//! failure is absorbed after a side-channel report. Only [`init`] returns a
//! `Result`, rejecting double initialisation.
//!
//! # Examples
//!
//! ```
//! use logging::{CallSite, Level, Logger, MemorySink, RecordSink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::default());
//! let logger = Logger::new(Level::Info, Box::new(Arc::clone(&sink)));
//!
//! let outcome = logger.emit(
//!     &CallSite::new("net.c", 42, "Connect"),
//!     Level::Error,
//!     format_args!("failed: {}", 7),
//! );
//! assert!(outcome.is_emitted());
//!
//! let records = sink.records();
//! assert!(records[0].contains("ERROR"));
//! assert!(records[0].ends_with("failed: 7"));
//! ```
//!
//! # See also
//!
//! - `logging-sink` crate for the syslog(3) backend used in production.

mod config;
mod console;
mod entry;
mod fallback;
mod global;
mod header;
mod levels;
mod logger;
mod macros;

pub use config::LogConfig;
pub use console::{WriteFn, console_cmd, persistent_dump, save_to_text_file};
pub use entry::EmitOutcome;
pub use global::{InitError, init, run, stop, try_global, verbose_level};
pub use header::{
    CallSite, DRIVER_FIELD_WIDTH, DRIVER_ID_WIDTH, FILE_WIDTH, FUNC_WIDTH, HEADER_WIDTH,
    LEVEL_WIDTH, LINE_WIDTH, MAX_BODY_LEN, Timestamp, base_file_name,
};
pub use levels::{Level, ParseLevelError};
pub use logger::{Logger, MemorySink, RecordSink};
