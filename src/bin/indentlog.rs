//! Appends lines to an indentation log from shell scripts, so scripts and the
//! programs they drive can share one log file in one format.
//!
//! Usage:
//!   indentlog log <level> <message...>       Log a message
//!   indentlog args <title> [key=value...]    Dump key/value pairs
//!   indentlog label <title...>               Write a banner
//!   indentlog blank                          Write an empty line
//!   indentlog codes                          List category codes
//!
//! `--config <path>` and `--file <path>` apply to every command.

use clap::Parser;
use indentlog::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(&cli)
}
