//! Domain Port Interfaces
//!
//! | Port | Description |
//! |------|-------------|
//! | [`IntoProvider`] | Converts a callable into a type-erased [`ProviderFn`] |

/// Callable port
pub mod provider;

pub use provider::{IntoProvider, ProviderFn};
