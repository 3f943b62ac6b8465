//! # Domain Layer
//!
//! Core types for provider-signature extraction. A provider is a callable
//! registered with a dependency-injection container; its signature declares the
//! values it consumes and the values it produces.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`reflect`] | Static reflection contract: type identity, aggregates, field tags |
//! | [`ports`] | Callable port: converting callables into type-erased providers |
//! | [`value_objects`] | Immutable descriptors, signatures and extraction options |
//! | [`constants`] | Recognised tag names and limits |
//! | [`error`] | Extraction error taxonomy |
//!
//! ## Example
//!
//! ```ignore
//! use wirebox_domain::{IntoProvider, TypeRef};
//!
//! let provider = (|x: i32| x.to_string()).into_provider();
//! assert_eq!(provider.signature().params()[0].ty(), TypeRef::of::<i32>());
//! ```

/// Domain-level constants
pub mod constants;
/// Domain error types
pub mod error;
/// Callable ports
pub mod ports;
/// Static reflection contract
pub mod reflect;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use constants::*;
pub use error::{Error, Result};
pub use ports::{IntoProvider, ProviderFn};
pub use reflect::{
    AggregateInfo, AggregateRole, ErrorSignal, FieldDef, FieldTags, In, Out, Reflect, ReturnTypes,
    TypeInfo, TypeKind, TypeRef,
};
pub use value_objects::*;
