//! crates/logging/tests/facility_lifecycle.rs
//! Process-wide facade: initialise once, lifecycle trivia, macro capture.
//!
//! The facade holds one logger per process, so everything touching it runs
//! in a single test to keep the ordering deterministic.

use logging::{EmitOutcome, Level, LogConfig, MemorySink};
use std::sync::Arc;

#[test]
fn facility_lifecycle_end_to_end() {
    // Before init: no logger, restrictive threshold, macros drop silently.
    assert!(logging::try_global().is_none());
    assert_eq!(logging::verbose_level(), Level::Always);
    logging::log_print!(Level::Error, "dropped before init");

    let sink = Arc::new(MemorySink::default());
    let config = LogConfig::new("engine-log", Level::Info);
    logging::init(&config, Box::new(Arc::clone(&sink))).expect("first init succeeds");

    // The pre-init emit must not have reached the sink retroactively.
    assert!(sink.records().is_empty());

    // Double initialisation is rejected and leaves the instance untouched.
    let again = logging::init(&config, Box::new(MemorySink::default()));
    assert!(again.is_err());
    assert_eq!(logging::verbose_level(), Level::Info);

    // Lifecycle stubs: trivial success, no side effects.
    assert!(logging::run());
    logging::stop();

    // Macro emission captures this file and the enclosing function name.
    logging::log_print!(Level::Error, "tunnel {} lost", 3);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    let line = &records[0];
    assert!(line.contains("facility_lifecycle.rs"));
    assert!(line.contains("facility_lifecycle_end_to_end"));
    assert!(line.contains("ERROR"));
    assert!(line.ends_with("tunnel 3 lost"));

    // Macro-level filtering honours the configured threshold.
    sink.clear();
    logging::log_print!(Level::Debug, "too verbose");
    assert!(sink.records().is_empty());

    // Extended macro places the driver identifier.
    logging::log_print_driver!(Level::Warning, "plc1", "retrain started");
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].contains("[plc1                ]"));
    assert!(records[0].ends_with("retrain started"));

    // Direct emit through the shared instance reports its outcome.
    sink.clear();
    let logger = logging::try_global().expect("initialised");
    let outcome = logger.emit(
        &logging::CallSite::new("net.c", 42, "Connect"),
        Level::Debug,
        format_args!("failed: {}", 7),
    );
    assert_eq!(outcome, EmitOutcome::Filtered);
    assert!(sink.records().is_empty());

    // Console and persistence collaborators stay contract-only.
    let mut echoed = String::new();
    let mut write = |chunk: &str| echoed.push_str(chunk);
    assert!(!logging::console_cmd(None, &mut write, &["verbose", "debug"]));
    logging::persistent_dump(&mut write);
    logging::save_to_text_file("engine.log", "a", 200, format_args!("unused"));
    assert!(echoed.is_empty());
}
