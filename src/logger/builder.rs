//! Stepwise construction of a [`Logger`] and its outputs.

use super::Logger;
use crate::filter::CategoryFilter;
use crate::fmt::{DEFAULT_WIDTH, TIMESTAMP_FORMAT};
use crate::level::LogLevel;
use crate::output::{ConsoleOutput, FileOutput, Output};
use crate::scope::IndentScope;
use std::path::PathBuf;
use std::sync::Mutex;

pub struct LoggerBuilder {
    filter: CategoryFilter,
    outputs: Vec<Box<dyn Output>>,
    wrap_width: usize,
    timestamp_format: String,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Everything allowed, 60 columns, console output unless another is added.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: CategoryFilter::allow_all(),
            outputs: Vec::new(),
            wrap_width: DEFAULT_WIDTH,
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Restricts output to `levels`, on top of any levels already allowed.
    #[must_use]
    pub fn allow(mut self, levels: impl IntoIterator<Item = LogLevel>) -> Self {
        if self.filter.allowed().is_some() {
            for level in levels {
                self.filter.insert(level);
            }
        } else {
            self.filter = CategoryFilter::only(levels);
        }
        self
    }

    /// Drops any allow-list.
    #[must_use]
    pub fn allow_all(mut self) -> Self {
        self.filter = CategoryFilter::allow_all();
        self
    }

    /// Present-but-empty allow-list: no banners, blank lines or key/value dumps.
    #[must_use]
    pub fn silence_banners(mut self) -> Self {
        self.filter = CategoryFilter::silenced();
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Narrow terminals and diff-friendly files want different widths.
    #[must_use]
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// strftime format of the leading timestamp.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn console(mut self) -> Self {
        self.outputs.push(Box::new(ConsoleOutput::stdout()));
        self
    }

    /// File output has its own concerns (path, default file name) needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    /// The built-in backends can't cover every use case.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    /// A logger with no outputs writes to the console.
    #[must_use]
    pub fn build(mut self) -> Logger {
        if self.outputs.is_empty() {
            self.outputs.push(Box::new(ConsoleOutput::stdout()));
        }

        Logger {
            filter: self.filter,
            indent: Mutex::new(IndentScope::new()),
            outputs: self.outputs,
            wrap_width: self.wrap_width,
            timestamp_format: self.timestamp_format,
        }
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    /// Explicit destination instead of `<documents>/logFile.txt`.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = self.output.path(path);
        self
    }

    /// File name under the default directory.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.output = self.output.file_name(name);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
