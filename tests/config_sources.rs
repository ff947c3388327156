use indentlog::{Config, Error, IndentLogExt, LogLevel, Logger};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();

    let config = Config::load_from(&tmp_dir.path().join("absent.conf")).unwrap();
    assert!(config.general.allowed.is_none());
    assert_eq!(config.general.wrap_width, 60);
    assert!(config.console.enabled);
    assert!(!config.file.enabled);
    assert_eq!(config.file.file_name, "logFile.txt");
}

#[test]
fn load_with_sources_merges_tables() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.conf");
    let child_path = tmp_dir.path().join("child.conf");

    let base_content = format!(
        r#"
source = "{}"

[general]
wrap_width = 40
"#,
        child_path.display()
    );
    fs::write(&base_path, base_content).unwrap();

    fs::write(
        &child_path,
        r#"
[general]
wrap_width = 100
allowed = ["info", "error"]

[file]
enabled = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.general.wrap_width, 40);
    assert_eq!(
        config.general.allowed,
        Some(vec!["info".to_string(), "error".to_string()])
    );
    assert!(config.file.enabled);
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.conf");

    let base_content = format!(
        r#"
source = "{}"

[general]
timestamp_format = "%H:%M"
"#,
        tmp_dir.path().join("missing.conf").display()
    );
    fs::write(&base_path, base_content).unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.general.timestamp_format, "%H:%M");
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.conf");
    let b_path = tmp_dir.path().join("b.conf");

    let a_content = format!(r#"source = "{}""#, b_path.display());
    let b_content = format!(r#"source = "{}""#, a_path.display());
    fs::write(&a_path, a_content).unwrap();
    fs::write(&b_path, b_content).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn syntax_error_is_reported() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.conf");
    fs::write(&path, "[general\nwrap_width = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn filter_from_config() {
    let config: Config = toml::from_str("[general]\nallowed = [\"sql\", \"nonsense\"]\n").unwrap();
    let filter = config.filter();
    assert!(filter.is_allowed(LogLevel::Sql));
    assert!(!filter.is_allowed(LogLevel::Info));
}

#[test]
fn misspelled_allow_list_restricts_every_level() {
    let config: Config = toml::from_str("[general]\nallowed = [\"eror\"]\n").unwrap();
    let filter = config.filter();
    assert!(!filter.is_allowed(LogLevel::Debug));
    assert!(!filter.is_allowed(LogLevel::Error));
    assert!(filter.banners_enabled());
}

#[test]
fn empty_allow_list_keeps_levels_open() {
    let config: Config = toml::from_str("[general]\nallowed = []\n").unwrap();
    let filter = config.filter();
    assert!(filter.is_allowed(LogLevel::Error));
    assert!(!filter.banners_enabled());
}

#[test]
fn diagnostics_default_to_warnings_and_errors() {
    let filter = Config::default().diagnostics_filter();
    assert!(filter.is_allowed(LogLevel::Warning));
    assert!(filter.is_allowed(LogLevel::Error));
    assert!(!filter.is_allowed(LogLevel::Debug));
}

#[test]
fn empty_diagnostics_list_means_no_diagnostics() {
    let config: Config = toml::from_str("[general]\ndiagnostics = []\n").unwrap();
    let filter = config.diagnostics_filter();
    for level in LogLevel::all() {
        assert!(!filter.is_allowed(level), "{level}");
    }
}

#[test]
fn unknown_diagnostics_names_mean_no_diagnostics() {
    let config: Config = toml::from_str("[general]\ndiagnostics = [\"verbose\"]\n").unwrap();
    assert!(!config.diagnostics_filter().is_allowed(LogLevel::Debug));
}

#[test]
fn logger_from_config_writes_to_configured_file() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("from-config.log");
    let conf_path = tmp_dir.path().join("indentlog.conf");

    fs::write(
        &conf_path,
        format!(
            r#"
[general]
allowed = ["info"]
timestamp_format = "T"

[console]
enabled = false

[file]
enabled = true
path = "{}"
"#,
            log_path.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&conf_path).unwrap();
    let logger = Logger::from_config(&config);
    assert_eq!(logger.output_count(), 1);

    logger.debug("hidden");
    logger.info("kept");

    assert_eq!(fs::read_to_string(&log_path).unwrap(), "T  INF  kept\n");
}
