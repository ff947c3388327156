//! indentlog's own diagnostic logger. Sink fallbacks and config problems are
//! reported on stderr in the same line format as everything else.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! entry points (CLI, library users, tests) race to call `init`. Calls made
//! before any `init` get the default set-up.

use crate::config::Config;
use crate::filter::CategoryFilter;
use crate::level::LogLevel;
use crate::logger::{IndentLogExt, Logger};
use crate::output::ConsoleOutput;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

const DEFAULT_LEVELS: [LogLevel; 3] = [LogLevel::Warning, LogLevel::Error, LogLevel::Fatal];

/// Default set-up: warnings and errors on stderr.
pub fn init() {
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(CategoryFilter::only(DEFAULT_LEVELS)));
}

/// Takes the diagnostic categories from `[general] diagnostics`; an empty list
/// switches diagnostics off.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config.diagnostics_filter()));
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

fn build_internal_logger(filter: CategoryFilter) -> Logger {
    Logger::builder()
        .filter(filter)
        .wrap_width(120)
        .output(ConsoleOutput::stderr())
        .build()
}

fn log(level: LogLevel, scope: &str, msg: &str) {
    let logger = INTERNAL_LOGGER.get_or_init(|| build_internal_logger(CategoryFilter::only(DEFAULT_LEVELS)));
    logger.log(level, format_args!("{scope}: {msg}"));
}

/// Startup and resolution details.
pub fn debug(scope: &str, msg: &str) {
    log(LogLevel::Debug, scope, msg);
}

/// Normal milestones, such as a loaded config.
pub fn info(scope: &str, msg: &str) {
    log(LogLevel::Info, scope, msg);
}

/// Recovered problems: fallbacks and skipped config values.
pub fn warn(scope: &str, msg: &str) {
    log(LogLevel::Warning, scope, msg);
}

/// Problems that lost data or aborted an operation.
pub fn error(scope: &str, msg: &str) {
    log(LogLevel::Error, scope, msg);
}
