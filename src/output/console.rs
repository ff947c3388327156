//! Console output. The destination when nothing else is configured, and the
//! fallback when a file can't be written.

use super::Output;
use std::io::{self, Write};

/// Which standard stream a [`ConsoleOutput`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput {
    stream: Stream,
}

impl ConsoleOutput {
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Used for the crate's own diagnostics so they don't mix with log output.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.stream
    }
}

impl Output for ConsoleOutput {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{text}")?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{text}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}
