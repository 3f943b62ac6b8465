//! Configuration types module

pub mod app;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use logging::LoggingConfig;
