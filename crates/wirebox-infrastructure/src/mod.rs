//! # Infrastructure Layer
//!
//! Cross-cutting concerns around the extraction pipeline.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`bootstrap`] | Builds the configured [`Extractor`](wirebox_application::Extractor) |
//! | [`error_ext`] | Context helpers mapping foreign errors into the domain error |
//! | [`constants`] | File names, env prefixes and logging defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{build_extractor, load_extractor};
pub use config::{AppConfig, ConfigLoader, LoggingConfig};
pub use error_ext::ErrorContext;
