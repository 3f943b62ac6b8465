//! Structured logging with tracing
//!
//! Configures the global `tracing` subscriber: an env filter, a plain or JSON
//! stdout layer and an optional daily rolling file.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{Level, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wirebox_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::config::validate_logging_config;
use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_ENV_FILTER};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    validate_logging_config(config)?;
    let level = parse_log_level(&config.level)?;
    let filter = build_env_filter(config)?;
    let file_appender = config
        .file_output
        .as_deref()
        .map(|path| build_file_appender(path, config.max_files))
        .transpose()?;

    // The json and plain layers have different types, hence the two branches
    if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stdout)
            .with(file)
            .try_init()
            .config_context("Failed to install log subscriber")?;
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        Registry::default()
            .with(filter)
            .with(stdout)
            .with(file)
            .try_init()
            .config_context("Failed to install log subscriber")?;
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Build the event filter
///
/// `WIREBOX_LOG` takes precedence over the configured level. The configured
/// level is parsed first, so aliases such as `warning` become a plain level
/// directive.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV_FILTER) {
        Ok(filter) => Ok(filter),
        Err(_) => {
            let level = parse_log_level(&config.level)?;
            Ok(EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
        }
    }
}

fn build_file_appender(path: &Path, max_files: usize) -> Result<RollingFileAppender> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(max_files)
        .build(directory)
        .config_context(format!("Failed to open log file in {}", directory.display()))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
