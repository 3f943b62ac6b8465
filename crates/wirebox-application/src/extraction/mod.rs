//! Provider Descriptor Extraction
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`inspector`] | Enumerate and classify parameter/return slots |
//! | [`flattener`] | Expand aggregates field by field |
//! | [`tags`] | Parse `optional` and `key` tags |
//! | [`validator`] | Structural checks raising typed errors |
//! | [`assembler`] | Combine everything into a descriptor |
//!
//! ## Usage
//!
//! ```ignore
//! use wirebox_application::extract_provider_descriptor;
//!
//! let descriptor = extract_provider_descriptor(|x: i32, y: f64| (x.to_string(), vec![y as u8]))?;
//! assert_eq!(descriptor.inputs().len(), 2);
//! ```

pub mod assembler;
pub mod extractor;
pub mod flattener;
pub mod inspector;
pub mod tags;
pub mod validator;

pub use extractor::Extractor;

use wirebox_domain::error::Result;
use wirebox_domain::ports::IntoProvider;
use wirebox_domain::value_objects::ProviderDescriptor;

/// Extract the descriptor of `provider` with default options
///
/// On failure no descriptor exists: inputs and outputs are absent rather
/// than empty.
#[track_caller]
pub fn extract_provider_descriptor<M, P: IntoProvider<M>>(provider: P) -> Result<ProviderDescriptor> {
    Extractor::default().extract(provider)
}
