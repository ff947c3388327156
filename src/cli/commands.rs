//! Subcommand handlers. `main` only parses and dispatches.

use super::{Cli, Command};
use crate::config::Config;
use crate::fmt::Args;
use crate::internal;
use crate::level::LogLevel;
use crate::logger::{IndentLogExt, Logger};
use std::process::ExitCode;

/// Config from `--config` or the default location, with `--file` forcing file output.
///
/// # Errors
/// Fails when the config file exists but can't be read or parsed.
pub fn build_logger(cli: &Cli) -> Result<Logger, crate::Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    internal::init_with_config(&config);

    if let Some(file) = &cli.file {
        config.file.enabled = true;
        config.file.path = Some(file.to_string_lossy().into_owned());
        config.console.enabled = false;
    }

    Ok(Logger::from_config(&config))
}

/// `key=value` becomes a value, a bare `key` becomes `<nil>`.
#[must_use]
pub fn parse_pairs(pairs: &[String]) -> Args {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(value.to_string())),
            None => (pair.clone(), None),
        })
        .collect()
}

/// Runs one parsed command line.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let logger = match build_logger(cli) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match &cli.command {
        Command::Log { level, message } => logger.log(*level, message.join(" ")),
        Command::Args { title, pairs } => {
            logger.args(title, &parse_pairs(pairs), LogLevel::Info.to_code());
        }
        Command::Label { title } => logger.label(&title.join(" ")),
        Command::Blank => logger.blank(),
        Command::Codes => cmd_codes(),
    }

    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("CLI", &format!("Flush failed: {e}"));
            ExitCode::FAILURE
        }
    }
}

fn cmd_codes() {
    for level in LogLevel::all() {
        println!("{}  {}", level.to_code(), level);
    }
}
