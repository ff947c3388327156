//! Logging switched off must not change what the program computes.

mod common;

use common::Capture;
use indentlog::{Args, IndentLog, IndentLogExt, Logger, NullLog, or_null};

fn work(log: &dyn IndentLog) -> u32 {
    log.info("starting");
    let doubled = log.checkpoint("double", &Args::new().arg("n", 21), || 21 * 2);
    log.scope("finish", || {
        log.label("Done");
        doubled
    })
}

#[test]
fn null_log_writes_nothing_and_returns_results() {
    let log = NullLog;
    assert_eq!(work(&log), 42);
    assert_eq!(log.depth(), 0);
    assert!(!log.is_allowed(indentlog::LogLevel::Fatal));
}

#[test]
fn or_null_without_logger() {
    assert_eq!(work(or_null(None)), 42);
}

#[test]
fn or_null_with_logger() {
    let capture = Capture::new();
    let logger: Logger = capture.logger(Logger::builder());

    assert_eq!(work(or_null(Some(&logger))), 42);
    assert_eq!(capture.writes()[0], "T  INF  starting");
}

#[test]
fn null_log_try_scope_passes_errors_through() {
    let r: Result<(), &str> = NullLog.try_scope("x", || Err("bad"));
    assert_eq!(r, Err("bad"));
}
