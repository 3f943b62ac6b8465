//! Configuration Loader Tests
//!
//! Every test uses its own environment prefix so env mutations never leak
//! into a concurrently running test.

use std::env;

use wirebox_domain::{Error, OutputOptionalPolicy};
use wirebox_infrastructure::config::{AppConfig, ConfigLoader, LoggingConfig};
use wirebox_infrastructure::constants::CONFIG_ENV_PREFIX;

fn set_env(key: &str, value: &str) {
    // SAFETY: each key is read only by the test that sets it
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: each key is read only by the test that sets it
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wirebox.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_loader_defaults() {
    let loader = ConfigLoader::default();
    assert_eq!(loader.env_prefix(), CONFIG_ENV_PREFIX);
    assert!(loader.config_path().is_none());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("WIREBOX_TEST_MISSING")
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_values_override_defaults() {
    let (_dir, path) = write_config(
        r#"
[extraction]
output_optional = "reject"

[logging]
level = "debug"
json_format = true
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_TEST_FILE")
        .load()
        .unwrap();

    assert!(!config.extraction.deny_unknown_tags);
    assert_eq!(config.extraction.output_optional, OutputOptionalPolicy::Reject);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.logging.max_files, LoggingConfig::default().max_files);
}

#[test]
fn test_env_overrides_file() {
    let (_dir, path) = write_config("[extraction]\ndeny_unknown_tags = false\n");
    set_env("WIREBOX_TEST_ENV_EXTRACTION__DENY_UNKNOWN_TAGS", "true");
    set_env("WIREBOX_TEST_ENV_LOGGING__LEVEL", "warn");

    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_TEST_ENV")
        .load();

    remove_env("WIREBOX_TEST_ENV_EXTRACTION__DENY_UNKNOWN_TAGS");
    remove_env("WIREBOX_TEST_ENV_LOGGING__LEVEL");

    let config = result.unwrap();
    assert!(config.extraction.deny_unknown_tags);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_invalid_values_are_rejected() {
    let (_dir, path) = write_config("[logging]\nmax_files = 0\n");
    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_TEST_ZERO_FILES")
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));

    let (_dir, path) = write_config("[extraction]\noutput_optional = \"sometimes\"\n");
    let result = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_TEST_BAD_POLICY")
        .load();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = AppConfig::default();
    config.extraction.deny_unknown_tags = true;
    config.logging.level = "trace".to_string();

    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("WIREBOX_TEST_SAVE");
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("wirebox.toml");

    let result = ConfigLoader::new().save_to_file(&AppConfig::default(), &path);
    assert!(matches!(result, Err(Error::Io { .. })));
}
