//! crates/logging-sink/src/syslog.rs
//! The syslog(3) connection and the [`RecordSink`] adapter over it.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than a dedicated
//! syslog crate, keeping the dependency graph minimal. The facility's
//! severity filtering happens before emission, so every record leaves at
//! [`Priority::Info`] regardless of the level it was emitted at.

#![allow(unsafe_code)]

use std::ffi::CString;
use std::sync::OnceLock;

use logging::RecordSink;

use crate::facility::Facility;

/// syslog priority levels matching the POSIX severity constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum Priority {
    /// System is unusable (LOG_EMERG).
    Emergency = libc::LOG_EMERG,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = libc::LOG_ALERT,
    /// Critical conditions (LOG_CRIT).
    Critical = libc::LOG_CRIT,
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO); the fixed priority of every
    /// record this sink forwards.
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

/// Default ident string the daemon's records carry.
pub const DEFAULT_TAG: &str = "ghn-engine";

/// Facility and ident passed to `openlog(3)`.
///
/// Constructing a config does not open the connection; call
/// [`SyslogConfig::open`]. One syslog connection exists per process.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use logging_sink::{Facility, SyslogConfig};
///
/// let config = SyslogConfig::new(Facility::Local5, "my-engine");
/// assert_eq!(config.facility(), Facility::Local5);
/// assert_eq!(config.tag(), "my-engine");
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: Facility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and ident tag.
    pub fn new(facility: Facility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// The configured facility.
    #[must_use]
    pub const fn facility(&self) -> Facility {
        self.facility
    }

    /// The configured ident tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Opens the process's syslog connection.
    ///
    /// The returned guard closes the connection on drop. The daemon opens
    /// syslog once during single-threaded startup; `openlog` itself is not
    /// safe against a concurrent `openlog`/`closelog`, so later re-opens
    /// must not race one another.
    pub fn open(&self) -> SyslogGuard {
        // syslog(3) keeps the ident pointer, so the CString must live for
        // the rest of the process; the first opened tag wins.
        static IDENT: OnceLock<CString> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            CString::new(self.tag.as_str()).unwrap_or_else(|_| {
                CString::new(DEFAULT_TAG).expect("default tag contains no NUL bytes")
            })
        });

        // SAFETY: the ident pointer is valid for the process lifetime
        // because it is stored in a static OnceLock.
        unsafe {
            libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
        }

        SyslogGuard { _private: () }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(Facility::default(), DEFAULT_TAG)
    }
}

/// Sends one message to syslog at the given priority.
///
/// Messages containing an embedded NUL cannot cross the C boundary and are
/// dropped; a failed sink write is never surfaced to the emitter.
pub fn send(priority: Priority, message: &str) {
    let Ok(c_message) = CString::new(message) else {
        return;
    };

    // syslog(3) interprets `%` in its format argument; passing the message
    // through `%s` keeps record text from being read as format specifiers.
    static FORMAT: &[u8] = b"%s\0";

    // SAFETY: syslog is callable from multiple threads once openlog has
    // completed; both strings are valid NUL-terminated C strings.
    unsafe {
        libc::syslog(
            priority as libc::c_int,
            FORMAT.as_ptr().cast::<libc::c_char>(),
            c_message.as_ptr(),
        );
    }
}

/// RAII guard over the process's syslog connection.
///
/// Dropping the guard calls `closelog(3)`. While it lives, [`send`] and any
/// [`SyslogSink`] route records to the configured facility.
#[derive(Debug)]
pub struct SyslogGuard {
    _private: (),
}

impl Drop for SyslogGuard {
    fn drop(&mut self) {
        // SAFETY: closelog has no preconditions beyond a prior openlog,
        // which constructing the guard guarantees.
        unsafe {
            libc::closelog();
        }
    }
}

/// [`RecordSink`] that forwards every line to syslog at [`Priority::Info`].
///
/// Owns the connection guard, so the connection stays open for as long as
/// the logger holding the sink lives.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(unix)]
/// # {
/// use logging::{Level, LogConfig};
/// use logging_sink::{SyslogConfig, SyslogSink};
///
/// let sink = SyslogSink::open(&SyslogConfig::default());
/// logging::init(&LogConfig::new("engine", Level::Info), Box::new(sink))
///     .expect("first initialisation");
///
/// logging::log_print!(Level::Error, "modem {} lost", 2);
/// # }
/// ```
#[derive(Debug)]
pub struct SyslogSink {
    _guard: SyslogGuard,
}

impl SyslogSink {
    /// Opens the syslog connection and wraps it as a record sink.
    #[must_use]
    pub fn open(config: &SyslogConfig) -> Self {
        Self {
            _guard: config.open(),
        }
    }
}

impl RecordSink for SyslogSink {
    fn write_record(&self, line: &str) {
        send(Priority::Info, line);
    }
}
