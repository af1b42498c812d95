//! crates/logging/src/entry.rs
//! Per-call entry assembly: bounded body formatting and buffer layout.
//!
//! An entry is a single `String` allocated per emit call, laid out as
//! header, optional driver field, then the formatted body. The body is
//! written through [`BoundedWriter`], a `fmt::Write` adapter that silently
//! stops appending once its character budget is spent, so an over-long
//! message can never grow the entry past its fixed maximum.

use std::collections::TryReserveError;
use std::fmt::{self, Write};

use crate::header::{
    self, CallSite, DRIVER_FIELD_WIDTH, DRIVER_ID_WIDTH, HEADER_WIDTH, MAX_BODY_LEN, Timestamp,
};
use crate::levels::Level;

/// Result of an emit call.
///
/// Exposing the outcome lets tests assert on behaviour instead of on the
/// absence of a side effect. None of the variants is an error for the
/// caller: the facility degrades by dropping messages, never by failing
/// upward.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use = "the outcome reports whether the message reached the sink"]
pub enum EmitOutcome {
    /// The entry was assembled and handed to the sink.
    Emitted,
    /// The message level was more verbose than the configured threshold.
    Filtered,
    /// The entry buffer could not be reserved; reported on the side channel.
    AllocationFailed,
}

impl EmitOutcome {
    /// Reports whether the message reached the sink.
    #[must_use]
    pub const fn is_emitted(self) -> bool {
        matches!(self, Self::Emitted)
    }
}

/// `fmt::Write` adapter that appends at most a fixed number of characters.
///
/// Overflow is swallowed rather than surfaced: formatting always succeeds
/// and the destination simply holds a truncated body. Truncation never
/// splits a code point.
pub(crate) struct BoundedWriter<'a> {
    buf: &'a mut String,
    remaining: usize,
}

impl<'a> BoundedWriter<'a> {
    pub(crate) fn new(buf: &'a mut String, budget: usize) -> Self {
        Self {
            buf,
            remaining: budget,
        }
    }
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.remaining == 0 {
            return Ok(());
        }
        let kept = header::truncate_chars(s, self.remaining);
        self.remaining -= kept.chars().count();
        self.buf.push_str(kept);
        Ok(())
    }
}

/// Assembles a complete entry: header, optional driver field, bounded body.
///
/// The buffer is reserved up front for the fixed layout; reservation is the
/// only fallible step and its failure is returned to the caller instead of
/// aborting the process.
pub(crate) fn render_entry(
    level: Level,
    site: &CallSite<'_>,
    driver_id: Option<&str>,
    ts: &Timestamp,
    args: fmt::Arguments<'_>,
) -> Result<String, TryReserveError> {
    let capacity =
        HEADER_WIDTH + driver_id.map_or(0, |_| DRIVER_FIELD_WIDTH) + MAX_BODY_LEN;

    let mut line = String::new();
    line.try_reserve_exact(capacity)?;

    header::write_header(&mut line, level, site, ts);
    if let Some(id) = driver_id {
        header::push_bracketed_left(&mut line, id, DRIVER_ID_WIDTH);
    }

    let mut body = BoundedWriter::new(&mut line, MAX_BODY_LEN);
    // Truncation is silent; the adapter never reports an error.
    let _ = body.write_fmt(args);

    Ok(line)
}
