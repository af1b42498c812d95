//! crates/logging/src/macros.rs
//! Emit macros capturing the call site the way the daemon's C-era call
//! sites did: file, line, and enclosing function name.

/// Expands to the name of the enclosing function, without its module path.
///
/// # Examples
///
/// ```
/// fn connect() -> &'static str {
///     logging::function_name!()
/// }
/// assert_eq!(connect(), "connect");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn w() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(w);
        let name = name.strip_suffix("::w").unwrap_or(name);
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Emits a plain log entry through the process-wide logger.
///
/// Fire-and-forget: the outcome is discarded, matching the facility's
/// degrade-by-dropping contract. Messages emitted before
/// [`init`](crate::init) are dropped. Use [`Logger::emit`](crate::Logger::emit)
/// directly when the outcome matters.
///
/// # Examples
///
/// ```
/// use logging::{Level, LogConfig, MemorySink};
///
/// let _ = logging::init(
///     &LogConfig::new("engine", Level::Debug),
///     Box::new(MemorySink::default()),
/// );
/// logging::log_print!(Level::Info, "lost {} frames", 3);
/// ```
#[macro_export]
macro_rules! log_print {
    ($level:expr, $($arg:tt)*) => {{
        if let Some(logger) = $crate::try_global() {
            let _ = logger.emit(
                &$crate::CallSite::new(
                    $crate::base_file_name(file!()),
                    line!(),
                    $crate::function_name!(),
                ),
                $level,
                format_args!($($arg)*),
            );
        }
    }};
}

/// Emits an extended log entry carrying a driver-identifier field.
///
/// Same contract as [`log_print!`]; the driver identifier lands in its
/// fixed-width slot between the header and the body.
#[macro_export]
macro_rules! log_print_driver {
    ($level:expr, $driver:expr, $($arg:tt)*) => {{
        if let Some(logger) = $crate::try_global() {
            let _ = logger.emit_with_driver(
                &$crate::CallSite::new(
                    $crate::base_file_name(file!()),
                    line!(),
                    $crate::function_name!(),
                ),
                $level,
                $driver,
                format_args!($($arg)*),
            );
        }
    }};
}
