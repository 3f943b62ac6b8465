//! Aggregate markers and the error-signal capability

use super::Reflect;

/// Marker field declaring a struct as an input aggregate
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Deps {
///     _in: In,
///     db: Database,
///     #[wire(optional = "true")]
///     cache: Cache,
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct In;

/// Marker field declaring a struct as an output aggregate
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Out;

/// Types usable as the error of a `Result` returned by a provider
///
/// Implementors must report [`TypeKind::ErrorSignal`](super::TypeKind) from
/// [`Reflect::type_info`].
pub trait ErrorSignal: Reflect {}
