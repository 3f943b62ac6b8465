//! Static Reflection Contract
//!
//! Rust has no runtime reflection over struct fields, so types describe
//! themselves through [`Reflect`]. The description is what the extraction
//! pipeline inspects at provider-registration time:
//!
//! ```text
//! Reflect::type_info()
//!   └── TypeInfo { ty: TypeRef, kind }
//!         ├── Value          opaque single value
//!         ├── ErrorSignal    failure side channel, never an output
//!         └── Aggregate      bundle of inputs (In) or outputs (Out)
//!               └── fields() -> [FieldDef { name, ty, tags }]
//! ```
//!
//! Implementations are normally generated by `#[derive(Reflect)]`; a struct
//! holding an [`In`] or [`Out`] marker field becomes an aggregate. Hand-written
//! implementations use the builder functions on [`TypeInfo`] and [`FieldDef`].

mod field;
mod impls;
mod markers;
mod returns;
mod type_info;

pub use field::{FieldDef, FieldTags};
pub use markers::{ErrorSignal, In, Out};
pub use returns::ReturnTypes;
pub use type_info::{AggregateInfo, AggregateRole, TypeInfo, TypeKind, TypeRef};

/// A type that can describe itself to the extraction pipeline
///
/// The default implementation describes an opaque plain value, so opting a
/// type in is a one-liner:
///
/// ```ignore
/// struct Database;
/// impl wirebox_domain::Reflect for Database {}
/// ```
pub trait Reflect: 'static {
    /// Describe this type
    fn type_info() -> TypeInfo {
        TypeInfo::value::<Self>()
    }
}
