//! Logger configuration from indentlog config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Creates a logger from the default config file, falling back to defaults
    /// when it can't be loaded.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("CONFIG", &format!("Using defaults: {e}"));
            Config::default()
        });
        Self::from_config(&config)
    }

    /// Creates a logger from a given config.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = LoggerBuilder::new()
            .filter(config.filter())
            .wrap_width(config.general.wrap_width)
            .timestamp_format(&config.general.timestamp_format);
        let mut outputs: Vec<&str> = Vec::new();

        if config.console.enabled {
            builder = builder.console();
            outputs.push("console");
        }

        if config.file.enabled {
            builder = Self::configure_file(builder, config);
            outputs.push("file");
        }

        if outputs.is_empty() {
            internal::warn("LOGGER", "No outputs enabled, using console");
        } else {
            internal::debug(
                "LOGGER",
                &format!("Outputs enabled: [{}]", outputs.join(", ")),
            );
        }

        builder.build()
    }

    fn configure_file(builder: LoggerBuilder, config: &Config) -> LoggerBuilder {
        let file = builder.file().file_name(&config.file.file_name);
        match config.file_path() {
            Some(path) => {
                internal::debug("FILE", &format!("Log file: {}", path.display()));
                file.path(path).done()
            }
            None => file.done(),
        }
    }
}
