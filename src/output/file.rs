//! Append-only file output.
//!
//! With no explicit path the destination is resolved on first write to
//! `<documents>/logFile.txt`, and a separator line marks where this process's
//! session starts. Write failures fall back to the console: a log line is never
//! worth failing the caller over.

use super::{ConsoleOutput, Output};
use crate::internal;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name used under the default directory.
pub const DEFAULT_FILE_NAME: &str = "logFile.txt";

/// Written once when the default destination is first resolved.
pub const SESSION_SEPARATOR: &str = "-----------------------------";

#[derive(Debug)]
pub struct FileOutput {
    /// Explicit destination; `None` means resolve the default lazily.
    path: Option<PathBuf>,
    /// Directory of the default destination; `None` means documents or home.
    base_dir: Option<PathBuf>,
    /// File name under the default directory.
    file_name: String,
    resolved: OnceLock<PathBuf>,
    fallback: ConsoleOutput,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    /// Default destination, resolved on first write.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: None,
            base_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            resolved: OnceLock::new(),
            fallback: ConsoleOutput::stdout(),
        }
    }

    /// Explicit destination. No session separator is written to it.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Directory the default destination is resolved in, instead of the user's
    /// documents directory. The destination stays lazy and still gets the
    /// session separator. Ignored when a path is set.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// File name for the default destination. Ignored when a path is set.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// The file being appended to. Resolving the default destination writes the
    /// session separator, so the first call has a side effect.
    pub fn destination(&self) -> &Path {
        if let Some(path) = &self.path {
            return path;
        }

        self.resolved.get_or_init(|| {
            let dir = self.base_dir.clone().unwrap_or_else(default_dir);
            let path = dir.join(&self.file_name);
            internal::debug("FILE", &format!("Resolved log file: {}", path.display()));
            if let Err(e) = append_line(&path, SESSION_SEPARATOR) {
                internal::warn(
                    "FILE",
                    &format!("Failed to start session in {}: {e}", path.display()),
                );
            }
            path
        })
    }
}

/// Documents directory, then home, then the working directory.
fn default_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| {
            dirs.document_dir()
                .unwrap_or_else(|| dirs.home_dir())
                .to_path_buf()
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Single write of `text` plus newline, creating the file and its parents as needed.
fn append_line(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
        internal::debug("FILE", &format!("Created directory: {}", parent.display()));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut content = String::with_capacity(text.len() + 1);
    content.push_str(text);
    content.push('\n');
    file.write_all(content.as_bytes())
}

impl Output for FileOutput {
    fn write(&self, text: &str) -> Result<(), crate::Error> {
        let path = self.destination();
        match append_line(path, text) {
            Ok(()) => Ok(()),
            Err(e) => {
                internal::warn(
                    "FILE",
                    &format!("Cannot append to {}: {e}; using console", path.display()),
                );
                self.fallback.write(text)
            }
        }
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
