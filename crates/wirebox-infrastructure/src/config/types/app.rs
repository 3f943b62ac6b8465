//! Main application configuration

use serde::{Deserialize, Serialize};
use wirebox_domain::value_objects::ExtractionOptions;

use super::logging::LoggingConfig;

/// Root configuration
///
/// ```toml
/// [extraction]
/// deny_unknown_tags = true
/// output_optional = "reject"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tag policies of the extraction pipeline
    #[serde(default)]
    pub extraction: ExtractionOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
