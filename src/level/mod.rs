//! Log categories and their fixed three-character codes.
//!
//! The code is what lands in the gutter of every line, so the mapping is total in
//! the encode direction. Decoding is lossy: anything unrecognised becomes `Other`.

use std::fmt;
use std::str::FromStr;

/// One variant per category the allow-list can gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Development-time diagnostics.
    Debug,
    /// Normal operational milestones.
    #[default]
    Info,
    /// Key/value dumps that open a checkpoint scope.
    Checkpoint,
    /// Entry and exit lines of a named scope.
    Indent,
    /// Timing measurements.
    Timed,
    /// Non-fatal anomalies.
    Warning,
    /// Failures of the current operation.
    Error,
    /// Failures the process cannot recover from.
    Fatal,
    /// Database statements.
    Sql,
    /// Anything that did not decode to a known code.
    Other,
}

impl LogLevel {
    /// The gutter code, always exactly three characters.
    #[must_use]
    pub const fn to_code(self) -> &'static str {
        match self {
            Self::Debug => "DBG",
            Self::Info => "INF",
            Self::Checkpoint => "CHK",
            Self::Indent => ">>>",
            Self::Timed => "TMR",
            Self::Warning => "WRN",
            Self::Error => "ERR",
            Self::Fatal => "FTL",
            Self::Sql => "SQL",
            Self::Other => "???",
        }
    }

    /// Decodes a gutter code. Short input is space-padded, long input truncated,
    /// and the comparison is case-insensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let normalized: String = code
            .chars()
            .flat_map(char::to_uppercase)
            .chain(std::iter::repeat(' '))
            .take(3)
            .collect();

        match normalized.as_str() {
            "DBG" => Self::Debug,
            "INF" => Self::Info,
            "CHK" => Self::Checkpoint,
            ">>>" => Self::Indent,
            "TMR" => Self::Timed,
            "WRN" => Self::Warning,
            "ERR" => Self::Error,
            "FTL" => Self::Fatal,
            "SQL" => Self::Sql,
            _ => Self::Other,
        }
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Checkpoint => "checkpoint",
            Self::Indent => "indent",
            Self::Timed => "timed",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Sql => "sql",
            Self::Other => "other",
        }
    }

    /// Used by help output, the `codes` CLI command and tests.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Debug,
            Self::Info,
            Self::Checkpoint,
            Self::Indent,
            Self::Timed,
            Self::Warning,
            Self::Error,
            Self::Fatal,
            Self::Sql,
            Self::Other,
        ]
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can report which name was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "dbg" => Ok(Self::Debug),
            "info" | "inf" => Ok(Self::Info),
            "checkpoint" | "chk" => Ok(Self::Checkpoint),
            "indent" | "scope" => Ok(Self::Indent),
            "timed" | "tmr" => Ok(Self::Timed),
            "warning" | "warn" | "wrn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" | "ftl" => Ok(Self::Fatal),
            "sql" => Ok(Self::Sql),
            "other" => Ok(Self::Other),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
