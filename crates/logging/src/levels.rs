//! crates/logging/src/levels.rs
//! Severity levels and the verbosity gate predicate.

use std::fmt;
use std::str::FromStr;

/// Message severity, ordered from most severe to most verbose.
///
/// The numeric representation is part of the facility's contract: a message
/// passes the verbosity gate when its level value is less than or equal to
/// the configured threshold. `Always` therefore survives every threshold
/// while `Debug` only survives the most verbose one.
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(Level::Error.passes(Level::Info));
/// assert!(!Level::Debug.passes(Level::Info));
/// assert_eq!(Level::Warning.as_str(), "WARNING");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Unconditional messages; emitted at every threshold.
    Always = 0,
    /// Error conditions.
    Error = 1,
    /// Warning conditions.
    Warning = 2,
    /// Informational messages.
    Info = 3,
    /// Verbose diagnostics.
    Debug = 4,
}

impl Level {
    /// Canonical short name rendered into the fixed-width level slot.
    ///
    /// Every name is at most seven characters so it fits the header's level
    /// field without truncation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "ALWAYS",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Reconstructs a level from its numeric representation.
    ///
    /// Returns `None` for values outside the enumeration.
    #[must_use]
    pub const fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Always),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            _ => None,
        }
    }

    /// Reports whether a message at this level survives the given threshold.
    ///
    /// The gate is the facility's single filtering point: more severe or
    /// equal passes, strictly more verbose is dropped.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self as u8 <= threshold as u8
    }
}

impl Default for Level {
    /// The default threshold admits errors and unconditional messages only.
    fn default() -> Self {
        Self::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised level name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    name: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level name '{}'", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level from its canonical name, case-insensitively.
    ///
    /// Used by configuration loading and the console command surface, which
    /// both deal in textual level names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALWAYS" => Ok(Self::Always),
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            _ => Err(ParseLevelError { name: s.to_owned() }),
        }
    }
}
