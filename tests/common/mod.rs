//! In-memory output shared by the integration tests.

#![allow(dead_code)]

use indentlog::{Logger, LoggerBuilder, Output};
use std::sync::{Arc, Mutex};

/// Timestamp format that renders as a literal `T`, so gutters are `T  INF  `.
pub const FIXED_TS: &str = "T";

/// Width of the blank prefix that goes with [`FIXED_TS`].
pub const UNSTAMPED: &str = "        ";

#[derive(Clone, Default)]
pub struct Capture {
    writes: Arc<Mutex<Vec<String>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per `Output::write` call.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    /// Physical lines across all writes.
    pub fn lines(&self) -> Vec<String> {
        self.writes()
            .iter()
            .flat_map(|w| w.split('\n').map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    /// Builds a logger on `builder` that writes only into this capture.
    pub fn logger(&self, builder: LoggerBuilder) -> Logger {
        builder.timestamp_format(FIXED_TS).output(self.clone()).build()
    }
}

impl Output for Capture {
    fn write(&self, text: &str) -> Result<(), indentlog::Error> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), indentlog::Error> {
        Ok(())
    }
}
