//! wirebox Derive Macros
//!
//! `#[derive(Reflect)]` generates the static reflection contract consumed by
//! provider extraction. What gets generated depends on the type:
//!
//! - a struct with a named field of type `In` becomes an input aggregate,
//! - a struct with a named field of type `Out` becomes an output aggregate,
//! - a type marked `#[reflect(error)]` becomes an error signal,
//! - anything else is an opaque value.
//!
//! # Example
//!
//! ```ignore
//! use wirebox_domain::{In, Out};
//! use wirebox_macros::Reflect;
//!
//! #[derive(Reflect)]
//! struct StructIn {
//!     _in: In,
//!     x: i32,
//!     #[wire(optional = "true")]
//!     y: f64,
//! }
//!
//! #[derive(Reflect)]
//! struct KeyedOut {
//!     _out: Out,
//!     #[wire(key = "theKey")]
//!     x: String,
//! }
//! ```
//!
//! # Attributes
//!
//! - `#[reflect(crate = "path")]` - path of the domain crate (default `::wirebox_domain`)
//! - `#[reflect(error)]` - the type is an error signal
//! - `#[wire(optional = "true")]`, `#[wire(optional)]` - optional input field
//! - `#[wire(key = "name")]` - keyed field
//! - `#[wire(skip)]` - field is not a dependency
//! - `#[wire(other = "value")]` - carried verbatim as a raw tag

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod reflect;

/// Derive the reflection contract for a value, aggregate or error-signal type
#[proc_macro_derive(Reflect, attributes(reflect, wire))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match reflect::expand(&input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
