//! crates/logging/src/header.rs
//! Fixed-width header layout: field widths, call-site capture, timestamping.
//!
//! Every emitted line starts with the same 106-character header:
//!
//! ```text
//! [  LEVEL][                          file][00000][                    function][HH:MM:SS mmmms]
//! ```
//!
//! Each slot is written through a named bounded append so its truncation and
//! padding rule can be tested on its own. Over-length input truncates to the
//! slot width, under-length input pads; the assembled header is always exactly
//! [`HEADER_WIDTH`] characters no matter what the call site supplies.

use std::fmt::Write as _;

use chrono::{Local, Timelike};

use crate::levels::Level;

/// Width of the level-name slot, in characters.
pub const LEVEL_WIDTH: usize = 7;
/// Width of the source-file slot, in characters.
pub const FILE_WIDTH: usize = 30;
/// Width of the zero-padded line-number slot, in digits.
pub const LINE_WIDTH: usize = 5;
/// Width of the function-name slot, in characters.
pub const FUNC_WIDTH: usize = 40;
/// Brackets around the four text slots plus the `[HH:MM:SS mmmms]` clock.
const PUNCTUATION_WIDTH: usize = 24;

/// Total header width: four bracketed slots plus the clock field.
pub const HEADER_WIDTH: usize =
    LEVEL_WIDTH + FILE_WIDTH + LINE_WIDTH + FUNC_WIDTH + PUNCTUATION_WIDTH;

/// Width of the driver-identifier text inside its brackets, in characters.
pub const DRIVER_ID_WIDTH: usize = 20;
/// Width of the bracketed driver-identifier field.
pub const DRIVER_FIELD_WIDTH: usize = DRIVER_ID_WIDTH + 2;

/// Maximum number of characters of message body kept per entry.
pub const MAX_BODY_LEN: usize = 200;

/// Source location of an emit call.
///
/// The emit macros fill this from `file!()`, `line!()` and the enclosing
/// function name; manual callers construct it directly.
///
/// # Examples
///
/// ```
/// use logging::CallSite;
///
/// let site = CallSite::new("net.c", 42, "Connect");
/// assert_eq!(site.line, 42);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    /// Source file name.
    pub file: &'a str,
    /// One-based source line number.
    pub line: u32,
    /// Enclosing function name.
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from its three components.
    #[must_use]
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/// Local wall-clock instant rendered into the header's clock slot.
///
/// Only the time-of-day components matter to the header; the date is not
/// part of the layout. Sub-second precision is carried as microseconds and
/// reduced to a clamped millisecond value when rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timestamp {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Microseconds within the current second.
    pub micros: u32,
}

impl Timestamp {
    /// Captures the current local time.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            micros: now.timestamp_subsec_micros(),
        }
    }

    /// Milliseconds within the current second, clamped to 999.
    ///
    /// chrono surfaces leap seconds as sub-second values of 1,000,000 µs and
    /// above; the clamp keeps the rendered value inside the three-digit slot.
    #[must_use]
    pub const fn millis(&self) -> u32 {
        let msec = self.micros / 1_000;
        if msec > 999 { 999 } else { msec }
    }
}

/// Strips any directory components from a source path.
///
/// The emit macros feed `file!()` through this so the 30-char file slot
/// holds the file name rather than a truncated repository path. Both Unix
/// and Windows separators are recognised.
#[must_use]
pub fn base_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns the longest prefix of `s` that fits `max` characters.
///
/// Truncation counts characters, never splitting a code point, so a bounded
/// slot stays valid UTF-8 even when fed multi-byte input.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Appends `[text]` with the text right-justified and truncated to `width`.
fn push_bracketed_right(buf: &mut String, text: &str, width: usize) {
    let text = truncate_chars(text, width);
    // String's fmt::Write never fails.
    let _ = write!(buf, "[{text:>width$}]");
}

/// Appends `[text]` with the text left-justified and truncated to `width`.
pub(crate) fn push_bracketed_left(buf: &mut String, text: &str, width: usize) {
    let text = truncate_chars(text, width);
    let _ = write!(buf, "[{text:<width$}]");
}

/// Appends the zero-padded line-number slot.
///
/// Values above 99999 wrap modulo 100000 so the slot keeps its fixed five
/// digits (line 123456 renders as `23456`).
fn push_line_number(buf: &mut String, line: u32) {
    let _ = write!(buf, "[{:0width$}]", line % 100_000, width = LINE_WIDTH);
}

/// Appends the `[HH:MM:SS mmmms]` clock slot.
fn push_clock(buf: &mut String, ts: &Timestamp) {
    let _ = write!(
        buf,
        "[{:02}:{:02}:{:02} {:03}ms]",
        ts.hour,
        ts.minute,
        ts.second,
        ts.millis()
    );
}

/// Assembles the complete fixed-width header into `buf`.
///
/// The output is always exactly [`HEADER_WIDTH`] characters: level, file and
/// function slots pad or truncate, the line number wraps, and the millisecond
/// slot is clamped.
pub fn write_header(buf: &mut String, level: Level, site: &CallSite<'_>, ts: &Timestamp) {
    push_bracketed_right(buf, level.as_str(), LEVEL_WIDTH);
    push_bracketed_right(buf, site.file, FILE_WIDTH);
    push_line_number(buf, site.line);
    push_bracketed_right(buf, site.function, FUNC_WIDTH);
    push_clock(buf, ts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_ts() -> Timestamp {
        Timestamp {
            hour: 13,
            minute: 7,
            second: 59,
            micros: 123_456,
        }
    }

    fn header_for(site: &CallSite<'_>) -> String {
        let mut buf = String::new();
        write_header(&mut buf, Level::Info, site, &fixed_ts());
        buf
    }

    #[test]
    fn header_is_exactly_the_fixed_width() {
        let cases = [
            CallSite::new("net.c", 42, "Connect"),
            CallSite::new("", 0, ""),
            CallSite::new(
                "a_source_file_name_well_beyond_the_thirty_char_slot.c",
                4_294_967_295,
                "a_function_name_that_spills_far_beyond_the_forty_character_slot",
            ),
        ];

        for site in &cases {
            let header = header_for(site);
            assert_eq!(
                header.chars().count(),
                HEADER_WIDTH,
                "width mismatch for {site:?}"
            );
        }
    }

    #[test]
    fn level_slot_is_right_justified() {
        let mut buf = String::new();
        write_header(
            &mut buf,
            Level::Error,
            &CallSite::new("f.c", 1, "f"),
            &fixed_ts(),
        );
        assert!(buf.starts_with("[  ERROR]"));

        let mut buf = String::new();
        write_header(
            &mut buf,
            Level::Warning,
            &CallSite::new("f.c", 1, "f"),
            &fixed_ts(),
        );
        assert!(buf.starts_with("[WARNING]"));
    }

    #[test]
    fn long_file_name_keeps_its_prefix() {
        let long = "this_file_name_is_very_long_indeed.c";
        let header = header_for(&CallSite::new(long, 1, "f"));
        let file_slot: String = header
            .chars()
            .skip(LEVEL_WIDTH + 2)
            .take(FILE_WIDTH + 2)
            .collect();
        assert_eq!(file_slot, format!("[{}]", &long[..FILE_WIDTH]));
    }

    #[test]
    fn short_file_name_pads_on_the_left() {
        let header = header_for(&CallSite::new("net.c", 1, "f"));
        assert!(header.contains("[                         net.c]"));
    }

    #[test]
    fn line_number_zero_pads() {
        let header = header_for(&CallSite::new("net.c", 7, "f"));
        assert!(header.contains("[00007]"));
    }

    #[test]
    fn line_number_wraps_modulo_the_slot() {
        let header = header_for(&CallSite::new("net.c", 123_456, "f"));
        assert!(header.contains("[23456]"));

        let header = header_for(&CallSite::new("net.c", 100_000, "f"));
        assert!(header.contains("[00000]"));
    }

    #[test]
    fn function_slot_truncates_to_forty_chars() {
        let long = "x".repeat(60);
        let header = header_for(&CallSite::new("net.c", 1, &long));
        assert!(header.contains(&format!("[{}]", "x".repeat(FUNC_WIDTH))));
        assert_eq!(header.chars().count(), HEADER_WIDTH);
    }

    #[test]
    fn clock_slot_renders_fixed_layout() {
        let header = header_for(&CallSite::new("net.c", 1, "f"));
        assert!(header.ends_with("[13:07:59 123ms]"));
    }

    #[test]
    fn millis_clamp_to_three_digits() {
        let ts = Timestamp {
            hour: 0,
            minute: 0,
            second: 0,
            micros: 999_500,
        };
        assert_eq!(ts.millis(), 999);

        let leap = Timestamp {
            hour: 23,
            minute: 59,
            second: 59,
            micros: 1_500_000,
        };
        assert_eq!(leap.millis(), 999);

        let zero = Timestamp {
            hour: 0,
            minute: 0,
            second: 0,
            micros: 0,
        };
        assert_eq!(zero.millis(), 0);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut buf = String::new();
        push_bracketed_right(&mut buf, "éééééééééé", 4);
        assert_eq!(buf, "[éééé]");
    }

    #[test]
    fn left_justified_field_pads_on_the_right() {
        let mut buf = String::new();
        push_bracketed_left(&mut buf, "eth0", DRIVER_ID_WIDTH);
        assert_eq!(buf, "[eth0                ]");
        assert_eq!(buf.chars().count(), DRIVER_FIELD_WIDTH);
    }

    #[test]
    fn base_file_name_strips_directories() {
        assert_eq!(base_file_name("crates/logging/src/header.rs"), "header.rs");
        assert_eq!(base_file_name("net.c"), "net.c");
        assert_eq!(base_file_name(r"src\windows\io.rs"), "io.rs");
        assert_eq!(base_file_name(""), "");
    }

    #[test]
    fn timestamp_now_is_within_range() {
        let ts = Timestamp::now();
        assert!(ts.hour < 24);
        assert!(ts.minute < 60);
        assert!(ts.second < 61);
        assert!(ts.millis() <= 999);
    }
}
