//! Configuration struct definitions.

use crate::fmt::{DEFAULT_WIDTH, TIMESTAMP_FORMAT};
use crate::output::DEFAULT_FILE_NAME;
use serde::Deserialize;

/// Settings that apply regardless of destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Allowed categories; absent means everything, empty silences banners.
    pub allowed: Option<Vec<String>>,
    /// Column width messages wrap at.
    pub wrap_width: usize,
    /// strftime format of the leading timestamp.
    pub timestamp_format: String,
    /// Categories of indentlog's own diagnostics.
    pub diagnostics: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            allowed: None,
            wrap_width: DEFAULT_WIDTH,
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            diagnostics: vec!["warning".to_string(), "error".to_string()],
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Explicit log file; `~` is expanded. Absent means the default destination.
    pub path: Option<String>,
    /// File name under the default directory.
    pub file_name: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}
