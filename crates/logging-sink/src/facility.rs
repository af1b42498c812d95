//! crates/logging-sink/src/facility.rs
//! syslog(3) facility selection.

use std::fmt;

/// syslog facility the daemon's records are filed under.
///
/// Variants carry the `LOG_*` constants from `<syslog.h>`, so a facility
/// converts to the value `openlog(3)` expects with a plain cast.
/// Configuration files refer to facilities by the lower-case names
/// understood by [`Facility::from_name`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum Facility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER).
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON); the default for the engine daemon.
    Daemon = libc::LOG_DAEMON,
    /// Security and authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

/// Name table shared by parsing and rendering.
const NAMES: [(&str, Facility); 18] = [
    ("kern", Facility::Kern),
    ("user", Facility::User),
    ("mail", Facility::Mail),
    ("daemon", Facility::Daemon),
    ("auth", Facility::Auth),
    ("syslog", Facility::Syslog),
    ("lpr", Facility::Lpr),
    ("news", Facility::News),
    ("uucp", Facility::Uucp),
    ("cron", Facility::Cron),
    ("local0", Facility::Local0),
    ("local1", Facility::Local1),
    ("local2", Facility::Local2),
    ("local3", Facility::Local3),
    ("local4", Facility::Local4),
    ("local5", Facility::Local5),
    ("local6", Facility::Local6),
    ("local7", Facility::Local7),
];

impl Facility {
    /// Parses a facility from its configuration name, case-insensitively.
    ///
    /// Returns `None` for unrecognised names.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use logging_sink::Facility;
    ///
    /// assert_eq!(Facility::from_name("daemon"), Some(Facility::Daemon));
    /// assert_eq!(Facility::from_name("LOCAL3"), Some(Facility::Local3));
    /// assert_eq!(Facility::from_name("printer"), None);
    /// # }
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(candidate, _)| name.eq_ignore_ascii_case(candidate))
            .map(|(_, facility)| *facility)
    }

    /// The facility's configuration name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        // Every variant appears in the table.
        NAMES
            .iter()
            .find(|(_, facility)| *facility == self)
            .map_or("daemon", |(name, _)| name)
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::Daemon
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
