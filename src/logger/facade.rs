//! The logging call surface.
//!
//! [`IndentLog`] is the small object-safe core a backend provides: allow-list
//! checks, depth, and two ways of writing. [`IndentLogExt`] builds everything
//! else on top of it and is implemented for every `IndentLog`, trait objects
//! included, so `Logger`, `NullLog` and `&dyn IndentLog` all share one facade.

use crate::fmt::{self, Args};
use crate::level::LogLevel;
use crate::scope::ScopeGuard;
use std::fmt::{Debug, Display};

/// Category column of scope entry and exit lines.
pub const SCOPE_CODE: &str = "---";

/// Category column of key/value rows.
pub const ARG_CODE: &str = "...";

/// Category column of a banner's top border.
pub const BANNER_CODE: &str = "///";

/// Minimal logging capability.
pub trait IndentLog {
    /// Level-specific gate checked before any formatting work.
    fn is_allowed(&self, level: LogLevel) -> bool;

    /// Gate for banners, blank lines and key/value dumps.
    fn banners_enabled(&self) -> bool;

    /// Current nesting depth.
    fn depth(&self) -> usize;

    /// Replaces the nesting depth.
    fn set_depth(&self, depth: usize);

    /// Column width messages are wrapped to.
    fn wrap_width(&self) -> usize {
        fmt::DEFAULT_WIDTH
    }

    /// Writes already-wrapped `lines` as one block with a timestamped gutter.
    /// `depth` overrides the current depth.
    fn write_block(&self, code: &str, lines: &[String], depth: Option<usize>);

    /// Writes one line behind a blank prefix as wide as the gutter at depth zero.
    fn write_unstamped(&self, text: &str);
}

/// The full facade, available on anything that implements [`IndentLog`].
pub trait IndentLogExt: IndentLog {
    /// Wraps `message` and writes it under `code`, without any level check.
    fn write(&self, code: &str, message: &str) {
        let lines = fmt::wrap(message, self.wrap_width());
        self.write_block(code, &lines, None);
    }

    /// Writes `message` under `level`'s code if `level` is allowed. The message is
    /// only formatted after the check passes.
    fn log(&self, level: LogLevel, message: impl Display) {
        if !self.is_allowed(level) {
            return;
        }
        self.write(level.to_code(), &message.to_string());
    }

    fn debug(&self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: impl Display) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }

    fn fatal(&self, message: impl Display) {
        self.log(LogLevel::Fatal, message);
    }

    fn sql(&self, message: impl Display) {
        self.log(LogLevel::Sql, message);
    }

    fn timed(&self, message: impl Display) {
        self.log(LogLevel::Timed, message);
    }

    /// Key/value form: `message` as a header under `level`'s code, then one
    /// `-->` row per entry and a blank line.
    fn log_args(&self, level: LogLevel, message: impl Display, args: &Args) {
        if !self.is_allowed(level) {
            return;
        }
        self.args(&message.to_string(), args, level.to_code());
    }

    fn debug_args(&self, message: impl Display, args: &Args) {
        self.log_args(LogLevel::Debug, message, args);
    }

    fn info_args(&self, message: impl Display, args: &Args) {
        self.log_args(LogLevel::Info, message, args);
    }

    fn warn_args(&self, message: impl Display, args: &Args) {
        self.log_args(LogLevel::Warning, message, args);
    }

    fn error_args(&self, message: impl Display, args: &Args) {
        self.log_args(LogLevel::Error, message, args);
    }

    fn sql_args(&self, message: impl Display, args: &Args) {
        self.log_args(LogLevel::Sql, message, args);
    }

    /// Raw key/value dump under a chosen header code. A blank title skips the
    /// header; empty args stop after it.
    fn args(&self, title: &str, args: &Args, code: &str) {
        if !self.banners_enabled() {
            return;
        }
        if !title.trim().is_empty() {
            self.write(code, title);
        }
        if args.is_empty() {
            return;
        }
        for row in fmt::render_args(args) {
            self.write(ARG_CODE, &row);
        }
        self.blank();
    }

    /// One empty line.
    fn blank(&self) {
        if !self.banners_enabled() {
            return;
        }
        self.write_unstamped("");
    }

    /// `/// title ///` banner. The top border carries the timestamp at depth zero.
    fn label(&self, title: &str) {
        if !self.banners_enabled() {
            return;
        }
        for (i, line) in fmt::render_banner(title, self.wrap_width())
            .into_iter()
            .enumerate()
        {
            match i {
                0 => self.blank(),
                1 => self.write_block(BANNER_CODE, &[line], Some(0)),
                _ => self.write_unstamped(&line),
            }
        }
    }

    /// Writes `>>> title` and opens a scope that closes when the guard drops.
    fn enter_scope(&self, title: &str) -> ScopeGuard<'_, Self> {
        let indent = self.is_allowed(LogLevel::Indent);
        if indent {
            self.write(SCOPE_CODE, &format!(">>> {title}"));
        }
        ScopeGuard::enter(self, title, LogLevel::Indent, indent)
    }

    /// Runs `work` one level deeper, bracketed by `>>> title` and
    /// `<<< title {elapsed}`.
    fn scope<T>(&self, title: &str, work: impl FnOnce() -> T) -> T {
        let _guard = self.enter_scope(title);
        work()
    }

    /// Like [`scope`](Self::scope), then hands the result to `summary` after the
    /// exit line is written.
    fn scope_with_summary<T>(
        &self,
        title: &str,
        work: impl FnOnce() -> T,
        summary: impl FnOnce(&T),
    ) -> T {
        let guard = self.enter_scope(title);
        let ret = work();
        drop(guard);
        summary(&ret);
        ret
    }

    /// Like [`scope`](Self::scope) for fallible work; an `Err` marks the exit
    /// line `(failed)`.
    ///
    /// # Errors
    /// Returns whatever `work` returns.
    fn try_scope<T, E>(&self, title: &str, work: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let mut guard = self.enter_scope(title);
        let ret = work();
        if ret.is_err() {
            guard.mark_failed();
        }
        ret
    }

    /// Dumps `args` under `CHK` and opens a scope whose exit is gated by
    /// `Checkpoint`.
    fn enter_checkpoint(&self, title: &str, args: &Args) -> ScopeGuard<'_, Self> {
        let allowed = self.is_allowed(LogLevel::Checkpoint);
        if allowed {
            self.args(title, args, LogLevel::Checkpoint.to_code());
        }
        ScopeGuard::enter(self, title, LogLevel::Checkpoint, allowed)
    }

    /// Scope that logs its inputs on entry and its result on exit:
    /// `<<< title [result] {elapsed}`. Unit results are left out.
    ///
    /// The result is rendered with `Debug`, so any value can be logged and
    /// strings keep their quotes: `[14]`, `["done"]`, `[Some('x')]`.
    fn checkpoint<T: Debug>(&self, title: &str, args: &Args, work: impl FnOnce() -> T) -> T {
        self.checkpoint_with_summary(title, args, work, |_| {})
    }

    /// [`checkpoint`](Self::checkpoint) with a callback run after the exit line.
    fn checkpoint_with_summary<T: Debug>(
        &self,
        title: &str,
        args: &Args,
        work: impl FnOnce() -> T,
        summary: impl FnOnce(&T),
    ) -> T {
        let mut guard = self.enter_checkpoint(title, args);
        let ret = work();
        if self.is_allowed(LogLevel::Checkpoint) {
            let repr = format!("{ret:?}");
            if repr != "()" {
                guard.set_result(repr);
            }
        }
        drop(guard);
        summary(&ret);
        ret
    }

    /// [`checkpoint`](Self::checkpoint) preceded by a `label` banner.
    fn checkpoint_labeled<T: Debug>(
        &self,
        label: &str,
        title: &str,
        args: &Args,
        work: impl FnOnce() -> T,
    ) -> T {
        if self.is_allowed(LogLevel::Checkpoint) {
            self.label(label);
        }
        self.checkpoint(title, args, work)
    }
}

impl<L: IndentLog + ?Sized> IndentLogExt for L {}
