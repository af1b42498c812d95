//! crates/logging/src/config.rs
//! Initialisation parameters for the logging facility.

use std::path::PathBuf;

use crate::levels::Level;

/// Full parameter set accepted at facility initialisation.
///
/// Only `verbose_level` is consumed by the core emission path; the
/// remaining fields configure the persistent-log and file-saving
/// collaborators, which are contract-only stubs in this snapshot. They are
/// accepted and stored so collaborators keep a stable initialisation
/// surface.
///
/// # Examples
///
/// ```
/// use logging::{Level, LogConfig};
///
/// let config = LogConfig::new("engine", Level::Info);
/// assert_eq!(config.verbose_level, Level::Info);
/// assert!(!config.circular);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Name of the component's message queue; reserved for the lifecycle
    /// collaborators.
    pub queue_name: String,
    /// Verbosity threshold applied to every emit call.
    pub verbose_level: Level,
    /// Folder for saved log files; reserved for the file-saving stub.
    pub output_folder: PathBuf,
    /// Line capacity of the persistent log; reserved for its stub.
    pub persistent_num_lines: u32,
    /// Threshold for entries copied into the persistent log; reserved.
    pub persistent_verbose_level: Level,
    /// Whether the persistent log wraps when full; reserved.
    pub circular: bool,
}

impl LogConfig {
    /// Creates a configuration with the given queue name and threshold;
    /// every reserved field takes its default.
    #[must_use]
    pub fn new(queue_name: impl Into<String>, verbose_level: Level) -> Self {
        Self {
            queue_name: queue_name.into(),
            verbose_level,
            ..Self::default()
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            queue_name: String::new(),
            verbose_level: Level::default(),
            output_folder: PathBuf::new(),
            persistent_num_lines: 0,
            persistent_verbose_level: Level::default(),
            circular: false,
        }
    }
}
