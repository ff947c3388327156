//! The concrete logger, its builder, and the null object used when logging is off.
//!
//! All logging calls go through the [`IndentLogExt`] facade.

mod builder;
mod facade;
mod from_config;
mod null;

pub use builder::{FileBuilder, LoggerBuilder};
pub use facade::{ARG_CODE, BANNER_CODE, IndentLog, IndentLogExt, SCOPE_CODE};
pub use null::{NullLog, or_null};

use crate::filter::CategoryFilter;
use crate::fmt;
use crate::level::LogLevel;
use crate::output::Output;
use crate::scope::IndentScope;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Writes every record inline, on the calling thread.
///
/// Everything but the depth is fixed at build time. The depth sits behind a
/// mutex that is held only for a single read or update; scopes save and
/// restore it around their work, which assumes one logical call stack per
/// logger. Two threads opening scopes on the same logger will see each other's
/// indentation.
pub struct Logger {
    filter: CategoryFilter,
    indent: Mutex<IndentScope>,
    outputs: Vec<Box<dyn Output>>,
    wrap_width: usize,
    timestamp_format: String,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A poisoned lock only means a panic happened mid-update of a plain integer;
    /// the value is still usable.
    fn indent(&self) -> MutexGuard<'_, IndentScope> {
        self.indent.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// One level deeper. Returns the new depth.
    pub fn increment(&self) -> usize {
        self.indent().increment()
    }

    /// One level shallower, floored at zero. Returns the new depth.
    pub fn decrement(&self) -> usize {
        self.indent().decrement()
    }

    /// Jumps to `depth`, clamping negatives to zero. Returns the new depth.
    pub fn reset(&self, depth: isize) -> usize {
        self.indent().reset(depth)
    }

    /// Fans `text` out to every output. Failures were already handled by the
    /// output; nothing reaches the caller.
    fn append(&self, text: &str) {
        for output in &self.outputs {
            let _ = output.write(text);
        }
    }

    /// Flushes every output.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Number of configured destinations.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

impl IndentLog for Logger {
    fn is_allowed(&self, level: LogLevel) -> bool {
        self.filter.is_allowed(level)
    }

    fn banners_enabled(&self) -> bool {
        self.filter.banners_enabled()
    }

    fn depth(&self) -> usize {
        self.indent().depth()
    }

    fn set_depth(&self, depth: usize) {
        self.indent().restore(depth);
    }

    fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    fn write_block(&self, code: &str, lines: &[String], depth: Option<usize>) {
        let depth = depth.unwrap_or_else(|| self.depth());
        let timestamp = fmt::timestamp(&self.timestamp_format);
        let gutter = fmt::gutter(&timestamp, code, depth);
        self.append(&fmt::render_block(lines, &gutter));
    }

    fn write_unstamped(&self, text: &str) {
        let timestamp = fmt::timestamp(&self.timestamp_format);
        let prefix = fmt::no_timestamp_prefix(&timestamp);
        self.append(&format!("{prefix}{text}"));
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("filter", &self.filter)
            .field("depth", &self.depth())
            .field("outputs", &self.output_count())
            .field("wrap_width", &self.wrap_width)
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}
