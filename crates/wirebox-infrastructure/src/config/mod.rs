//! Configuration
//!
//! Layered loading: defaults, then `wirebox.toml`, then `WIREBOX_*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config, validate_logging_config};
pub use types::{AppConfig, LoggingConfig};
