#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` is the production output backend for the engine daemon's
//! logging facility: a [`logging::RecordSink`] implementation over
//! syslog(3). The core `logging` crate assembles fixed-format entries and
//! filters by severity; this crate owns the process's syslog connection
//! and forwards every surviving line at informational priority.
//!
//! # Design
//!
//! The syslog FFI follows the POSIX contract directly through `libc`
//! (`openlog`/`syslog`/`closelog`) instead of pulling in a syslog crate.
//! A [`SyslogConfig`] names the facility and ident tag; opening it yields
//! an RAII guard, and [`SyslogSink`] wraps that guard behind the
//! [`logging::RecordSink`] seam so the logger never sees the FFI.
//!
//! # Invariants
//!
//! - Records are forwarded at [`Priority::Info`] regardless of the
//!   level they were emitted at; filtering happened before emission.
//! - A record containing an embedded NUL is dropped, never mangled.
//! - Failed syslog writes are invisible to emitters.
//!
//! # See also
//!
//! - The `logging` crate for entry assembly and the verbosity gate.

#[cfg(unix)]
mod facility;
#[cfg(unix)]
mod syslog;

#[cfg(unix)]
pub use facility::Facility;
#[cfg(unix)]
pub use syslog::{DEFAULT_TAG, Priority, SyslogConfig, SyslogGuard, SyslogSink, send};
