//! Application Layer
//!
//! Provider-signature extraction: turns a callable into an immutable
//! [`ProviderDescriptor`](wirebox_domain::ProviderDescriptor) listing what it
//! consumes and what it produces.
//!
//! ## Pipeline
//!
//! ```text
//! provider ─► Signature Inspector ─► Validator (kind, error position)
//!                    │
//!                    ▼
//!        per slot: Aggregate Flattener ─► Tag Parser ─► Validator (tags)
//!                    │
//!                    ▼
//!            Descriptor Assembler ─► ProviderDescriptor | Error
//! ```

pub mod extraction;

pub use extraction::{Extractor, extract_provider_descriptor};
