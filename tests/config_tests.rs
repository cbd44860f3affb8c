//! Configuration file loading tests.

mod support;

use edgematch::error::{ConfigError, Error};
use edgematch::infrastructure::config::export::ExportFormat;
use edgematch::infrastructure::config::settings::Config;
use edgematch::infrastructure::config::source::SourceKind;
use support::fixture::write_config;

#[test]
fn full_config_loads_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[unify]
threshold = 0.45
confidence_bonus = 0.1

[source]
kind = "http"
url = "https://listings.example/api"
timeout_secs = 5
retry_max_attempts = 3
retry_backoff_ms = 250

[export]
dir = "reports"
formats = ["json"]
split_by_site = false

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.unify.threshold, 0.45);
    assert_eq!(config.unify.confidence_bonus, 0.1);
    assert_eq!(config.source.kind, SourceKind::Http);
    assert_eq!(config.source.timeout_secs, 5);
    assert_eq!(config.source.retry_max_attempts, 3);
    assert_eq!(config.source.retry_backoff_ms, 250);
    assert_eq!(config.export.dir, "reports");
    assert_eq!(config.export.formats, vec![ExportFormat::Json]);
    assert!(!config.export.split_by_site);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn partial_config_keeps_defaults_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[unify]\nthreshold = 0.5\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.unify.threshold, 0.5);
    assert_eq!(config.unify.confidence_bonus, 0.2);
    assert_eq!(config.source.kind, SourceKind::Sample);
    assert_eq!(config.export.dir, "outputs");
}

#[test]
fn missing_file_is_read_error_for_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn unknown_source_kind_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[source]\nkind = \"ftp\"\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn zero_retry_attempts_are_rejected() {
    let err = Config::parse_toml("[source]\nretry_max_attempts = 0\n").unwrap_err();
    assert!(err.to_string().contains("retry_max_attempts"));
}

#[test]
fn shipped_example_is_valid() {
    let example = include_str!("../config.toml.example");
    let config = Config::parse_toml(example).unwrap();
    assert_eq!(config.unify.threshold, 0.3);
    assert_eq!(config.logging.level, "info");
}
