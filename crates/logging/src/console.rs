//! crates/logging/src/console.rs
//! Contract-only collaborators: console commands, persistent-log dumping,
//! file-based log saving.
//!
//! These entry points are invoked by the daemon's console and supervision
//! code. In this snapshot they carry no behaviour; their signatures are the
//! contract and must stay stable for those callers.

use std::any::Any;
use std::fmt;

/// Callback receiving chunks of console or dump output.
pub type WriteFn<'a> = &'a mut dyn FnMut(&str);

/// Handles a tokenised console command against the logging facility.
///
/// `context` is an opaque handle owned by the console layer, `write`
/// receives any response text, and `cmd` holds the command tokens.
/// Unimplemented: no command is recognised and `false` is returned.
pub fn console_cmd(_context: Option<&dyn Any>, _write: WriteFn<'_>, _cmd: &[&str]) -> bool {
    false
}

/// Streams the persistent log through `write`.
///
/// Unimplemented: the persistent log does not exist in this core, so the
/// callback is never invoked.
pub fn persistent_dump(_write: WriteFn<'_>) {}

/// Formats a message and appends it to a text file in the output folder.
///
/// `access_mode` uses `fopen`-style mode strings (`"w"`, `"a"`); `max_len`
/// bounds the formatted message. Unimplemented: nothing is written.
pub fn save_to_text_file(
    _file_name: &str,
    _access_mode: &str,
    _max_len: usize,
    _args: fmt::Arguments<'_>,
) {
}
