//! Integration tests for the projboard-config crate.

use std::{fs, path::PathBuf};

use projboard_config::{Config, ConfigError, DEFAULT_LOG_FILE, DEFAULT_ORGANIZATION};
use tempfile::TempDir;

#[test]
fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("projboard.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Organization to browse
            organization: "rust-lang",
            log_file: "projboard-debug.log",
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.organization, "rust-lang");
    assert_eq!(config.log_file, PathBuf::from("projboard-debug.log"));
}

#[test]
fn config_load_from_plain_json_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{"organization": "tokio-rs"}"#).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.organization, "tokio-rs");
    assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/config.json");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn config_load_malformed_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("projboard.json5");
    fs::write(&config_path, "{ organization: ").unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
}

#[test]
fn config_unknown_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("projboard.json");
    fs::write(&config_path, r#"{"organization": "acme", "theme": "dark"}"#).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.organization, "acme");
}

#[test]
fn config_override_beats_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("projboard.json");
    fs::write(&config_path, r#"{"organization": "from-file"}"#).unwrap();

    let config = Config::load_from(&config_path)
        .unwrap()
        .with_organization_override(Some("from-env".to_string()));
    assert_eq!(config.organization, "from-env");
}

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.organization, DEFAULT_ORGANIZATION);
    assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
}
