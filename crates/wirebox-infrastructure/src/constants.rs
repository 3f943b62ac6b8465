//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirebox";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER: &str = "WIREBOX_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wirebox";
