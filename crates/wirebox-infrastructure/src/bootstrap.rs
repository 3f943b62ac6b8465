//! Extraction service bootstrap

use tracing::debug;
use wirebox_application::Extractor;
use wirebox_domain::error::Result;

use crate::config::{AppConfig, ConfigLoader};

/// Build an extractor from loaded configuration
pub fn build_extractor(config: &AppConfig) -> Extractor {
    debug!(
        deny_unknown_tags = config.extraction.deny_unknown_tags,
        output_optional = ?config.extraction.output_optional,
        "Building provider extractor"
    );
    Extractor::new(config.extraction.clone())
}

/// Load configuration with `loader` and build the extractor it describes
pub fn load_extractor(loader: &ConfigLoader) -> Result<Extractor> {
    let config = loader.load()?;
    Ok(build_extractor(&config))
}
