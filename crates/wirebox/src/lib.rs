//! # wirebox
//!
//! Provider-signature extraction for dependency-injection containers.
//!
//! A provider is any callable registered with a container. Extraction turns
//! it into a [`ProviderDescriptor`]: the ordered `(type, key, optional)`
//! inputs it consumes and the `(type, key)` outputs it produces. Structs
//! carrying an [`In`] or [`Out`] marker bundle several inputs or outputs and
//! are flattened field by field.
//!
//! ## Example
//!
//! ```ignore
//! use wirebox::{In, Reflect, extract_provider_descriptor};
//!
//! #[derive(Reflect)]
//! #[reflect(crate = "wirebox::domain")]
//! struct Config;
//!
//! #[derive(Reflect)]
//! #[reflect(crate = "wirebox::domain")]
//! struct Params {
//!     _in: In,
//!     config: Config,
//!     #[wire(key = "primary")]
//!     url: String,
//! }
//!
//! let descriptor = extract_provider_descriptor(|p: Params| -> anyhow::Result<u16> { Ok(80) })?;
//! assert_eq!(descriptor.inputs().len(), 2);
//! assert_eq!(descriptor.outputs().len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Reflection contract, descriptors, options and errors
//! - `application` - The extraction pipeline
//! - `infrastructure` - Configuration, logging and bootstrap

/// Domain layer - reflection contract and descriptor types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Application layer - the extraction pipeline
pub mod application {
    pub use wirebox_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::{Extractor, extract_provider_descriptor};
pub use infrastructure::{AppConfig, ConfigLoader, build_extractor};
pub use wirebox_macros::Reflect;
