//! A logger that writes nothing, for code that takes an optional logger.
//!
//! Every facade call on [`NullLog`] is a no-op, but scoped work still runs and
//! its result is still returned.

use super::IndentLog;
use crate::level::LogLevel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLog;

impl IndentLog for NullLog {
    fn is_allowed(&self, _level: LogLevel) -> bool {
        false
    }

    fn banners_enabled(&self) -> bool {
        false
    }

    fn depth(&self) -> usize {
        0
    }

    fn set_depth(&self, _depth: usize) {}

    fn write_block(&self, _code: &str, _lines: &[String], _depth: Option<usize>) {}

    fn write_unstamped(&self, _text: &str) {}
}

/// The given logger, or [`NullLog`] when there is none.
#[must_use]
pub fn or_null(log: Option<&dyn IndentLog>) -> &dyn IndentLog {
    log.unwrap_or(&NullLog)
}
