//! CLI module for indentlog.
//!
//! Shell scripts that share a log file with a program need to append lines in
//! the same format.

pub mod commands;

use crate::level::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// indentlog - Append formatted lines to an indentation log.
#[derive(Parser, Debug)]
#[command(
    name = "indentlog",
    version,
    about = "Append formatted lines to an indentation log"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to append to (overrides the config)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a message under a category.
    Log {
        /// Category name (debug, info, warning, error, fatal, sql, ...)
        level: LogLevel,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Dump key/value pairs under a header.
    Args {
        /// Header line
        title: String,
        /// `key=value` pairs; a bare `key` logs `<nil>`
        pairs: Vec<String>,
    },
    /// Write a `/// title ///` banner.
    Label {
        /// Banner text, joined with spaces
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Write an empty line.
    Blank,
    /// List the category codes.
    Codes,
}

pub use commands::{build_logger, parse_pairs, run};
