//! Return-type enumeration

use super::markers::ErrorSignal;
use super::type_info::TypeInfo;
use super::Reflect;

/// Enumerates a callable's return type as declaration-ordered slots
///
/// | Return type | Slots |
/// |-------------|-------|
/// | `()` | none |
/// | `T` | `[T]` |
/// | `(A, B, ..)` | `[A, B, ..]` |
/// | `Result<T, E>` | slots of `T`, then `E` |
///
/// Tuples may hold an error-signal type at any position; whether that
/// position is legal is decided by the extraction pipeline.
pub trait ReturnTypes {
    /// Return slots in declaration order
    fn return_types() -> Vec<TypeInfo>;
}

impl ReturnTypes for () {
    fn return_types() -> Vec<TypeInfo> {
        Vec::new()
    }
}

impl<T: Reflect> ReturnTypes for T {
    fn return_types() -> Vec<TypeInfo> {
        vec![T::type_info()]
    }
}

impl<T: ReturnTypes, E: ErrorSignal> ReturnTypes for Result<T, E> {
    fn return_types() -> Vec<TypeInfo> {
        let mut types = T::return_types();
        types.push(E::type_info());
        types
    }
}

macro_rules! impl_return_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: Reflect),+> ReturnTypes for ($($ty,)+) {
            fn return_types() -> Vec<TypeInfo> {
                vec![$($ty::type_info()),+]
            }
        }
    };
}

impl_return_tuple!(R1);
impl_return_tuple!(R1, R2);
impl_return_tuple!(R1, R2, R3);
impl_return_tuple!(R1, R2, R3, R4);
impl_return_tuple!(R1, R2, R3, R4, R5);
impl_return_tuple!(R1, R2, R3, R4, R5, R6);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7, R8);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7, R8, R9);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7, R8, R9, R10);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11);
impl_return_tuple!(R1, R2, R3, R4, R5, R6, R7, R8, R9, R10, R11, R12);
