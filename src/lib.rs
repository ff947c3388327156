//! `indentlog` - Indentation-tracking text logger.
//!
//! Every line gets a fixed-width gutter (timestamp, three-character category,
//! indentation dots) and output nests automatically under named scopes:
//! - scoped blocks with entry/exit lines and elapsed time
//! - checkpoints that dump their inputs and log their result
//! - `/// banner ///` labels and key/value dumps
//! - a static allow-list of categories
//! - file output with console fallback
//!
//! # Example
//!
//! ```
//! use indentlog::{Args, IndentLogExt, LogLevel, Logger};
//!
//! let log = Logger::builder()
//!     .allow([LogLevel::Info, LogLevel::Indent, LogLevel::Checkpoint])
//!     .console()
//!     .build();
//!
//! log.label("Import");
//! let rows = log.scope("load users", || {
//!     log.info("reading users.csv");
//!     42
//! });
//! let total = log.checkpoint("sum", &Args::new().arg("rows", rows), || rows * 2);
//! indentlog::info!(log, "done: {total} rows");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `indentlog` command-line binary

pub mod config;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod scope;

mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use filter::CategoryFilter;
pub use fmt::Args;
pub use level::LogLevel;
pub use logger::{IndentLog, IndentLogExt, Logger, LoggerBuilder, NullLog, or_null};
pub use output::{ConsoleOutput, FileOutput, Output};
pub use scope::{IndentScope, ScopeGuard};
