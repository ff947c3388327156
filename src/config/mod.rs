//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle
//! detection, merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::filter::CategoryFilter;
use crate::internal;
use crate::level::LogLevel;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger, so every
/// field is `#[serde(default)]`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Allow-list, wrap width and timestamp shape apply to every destination.
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

/// Scans raw TOML for `source = "..."` directives before parsing, since they
/// are not part of the schema. Returns the extracted paths and the remaining
/// TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// Copies keys from `other` that `target` doesn't have, descending into tables
/// present in both. The including file's values always win.
fn merge_missing(target: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match (target.get_mut(&key), value) {
            (Some(toml::Value::Table(mine)), toml::Value::Table(theirs)) => {
                merge_missing(mine, theirs);
            }
            (Some(_), _) => {}
            (None, value) => {
                target.insert(key, value);
            }
        }
    }
}

impl Config {
    /// Loads `~/.config/indentlog/indentlog.conf` with includes resolved.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let table = Self::load_table(path, &mut HashSet::new())?;
        let config: Self = toml::Value::Table(table).try_into()?;
        Ok(config)
    }

    /// Recursive loader that expands `source = "..."` includes while tracking
    /// visited paths in `seen` to break include cycles.
    fn load_table(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<toml::Table, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(toml::Table::new());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut table: toml::Table = toml_content.parse()?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let included = Self::load_table(source_file, seen)?;
                merge_missing(&mut table, included);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(table)
    }

    /// XDG-style location, `~/.config/indentlog/indentlog.conf` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("indentlog").join("indentlog.conf"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores categories as strings; this turns them into the filter the
    /// logger needs.
    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_names(self.general.allowed.as_deref())
    }

    /// Filter for indentlog's own diagnostics. An empty list means none at all.
    ///
    /// Unknown names are skipped without a report, since the report would go
    /// through the logger this filter is for.
    #[must_use]
    pub fn diagnostics_filter(&self) -> CategoryFilter {
        let names = &self.general.diagnostics;
        if names.is_empty() {
            return CategoryFilter::deny_all();
        }
        CategoryFilter::restricted(names.iter().filter_map(|name| name.parse::<LogLevel>().ok()))
    }

    /// The configured log file with `~` expanded.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}
