//! Domain Value Objects
//!
//! Immutable value objects produced and consumed by provider extraction.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Signature`] | Reflected parameter and return slots of a callable |
//! | [`ProviderInput`] | One value a provider consumes |
//! | [`ProviderOutput`] | One value a provider produces |
//! | [`ProviderDescriptor`] | Ordered inputs and outputs of one provider |
//! | [`ProviderLocation`] | Where a provider was registered |
//! | [`ExtractionOptions`] | Tag policies applied during extraction |

/// Provider descriptor value objects
pub mod descriptor;
/// Extraction options
pub mod options;
/// Callable signature value objects
pub mod signature;

// Re-export commonly used value objects
pub use descriptor::{ProviderDescriptor, ProviderInput, ProviderLocation, ProviderOutput};
pub use options::{ExtractionOptions, OutputOptionalPolicy};
pub use signature::{CallableKind, Signature, SignatureBuilder};
