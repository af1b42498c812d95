//! crates/logging/src/fallback.rs
//! Side-channel diagnostics for faults inside the log subsystem itself.

use std::fmt;

/// Reports a logging-subsystem fault on stderr, bypassing the sink.
///
/// Used when the normal emission path cannot be trusted, e.g. when the
/// entry buffer could not be allocated. Best effort: a failed stderr write
/// is ignored.
pub(crate) fn report(args: fmt::Arguments<'_>) {
    eprintln!("{args}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_accepts_formatted_arguments() {
        // Only exercises the path; stderr content is not captured here.
        report(format_args!("no memory to allocate log line ({} bytes)", 307));
    }
}
