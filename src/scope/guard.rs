use crate::fmt::elapsed;
use crate::level::LogLevel;
use crate::logger::{IndentLog, SCOPE_CODE};
use std::fmt::Write;
use std::time::Instant;

/// Open scope on a logger. Dropping it closes the scope.
///
/// On drop the depth saved at entry is restored and the exit line
/// `<<< <title> [<result>] {<elapsed>}` is written, provided `exit_level` is
/// allowed. The line is suffixed with `(panicked)` when the guard is dropped
/// during unwinding, or `(failed)` after [`ScopeGuard::mark_failed`].
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct ScopeGuard<'a, L: IndentLog + ?Sized> {
    log: &'a L,
    title: String,
    saved_depth: usize,
    started: Instant,
    exit_level: LogLevel,
    result: Option<String>,
    failed: bool,
}

impl<'a, L: IndentLog + ?Sized> ScopeGuard<'a, L> {
    /// Saves the current depth and, when `indent` is set, nests one level deeper.
    /// The entry line is the caller's business.
    pub fn enter(log: &'a L, title: impl Into<String>, exit_level: LogLevel, indent: bool) -> Self {
        let saved_depth = log.depth();
        if indent {
            log.set_depth(saved_depth.saturating_add(1));
        }

        Self {
            log,
            title: title.into(),
            saved_depth,
            started: Instant::now(),
            exit_level,
            result: None,
            failed: false,
        }
    }

    /// Interpolated into the exit line as `[result]`.
    pub fn set_result(&mut self, result: impl Into<String>) {
        self.result = Some(result.into());
    }

    /// Annotates the exit line with `(failed)`.
    pub const fn mark_failed(&mut self) {
        self.failed = true;
    }

    /// Depth the scope was entered at and will return to.
    #[must_use]
    pub const fn saved_depth(&self) -> usize {
        self.saved_depth
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn exit_message(&self) -> String {
        let mut message = format!("<<< {}", self.title);
        if let Some(result) = &self.result {
            let _ = write!(message, " [{result}]");
        }
        let _ = write!(message, " {{{}}}", elapsed(self.started.elapsed()));
        if std::thread::panicking() {
            message.push_str(" (panicked)");
        } else if self.failed {
            message.push_str(" (failed)");
        }
        message
    }
}

impl<L: IndentLog + ?Sized> Drop for ScopeGuard<'_, L> {
    fn drop(&mut self) {
        self.log.set_depth(self.saved_depth);
        if self.log.is_allowed(self.exit_level) {
            let message = self.exit_message();
            self.log
                .write_block(SCOPE_CODE, &[message], Some(self.saved_depth));
        }
    }
}
