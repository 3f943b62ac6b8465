//! Callable Port
//!
//! Any `Fn` whose parameters implement [`Reflect`] and whose return type
//! implements [`ReturnTypes`] converts into a [`ProviderFn`]: its reflected
//! [`Signature`] plus an opaque handle on the callable itself, which the
//! container downcasts when it eventually invokes the provider.
//!
//! Callables without a Rust signature (plugin tables, scripting bridges) are
//! described with [`Signature::builder`] and wrapped with [`ProviderFn::new`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::reflect::{Reflect, ReturnTypes};
use crate::value_objects::Signature;

/// Conversion of a callable into a type-erased provider
///
/// `Marker` only disambiguates the blanket implementations per arity; callers
/// never name it.
pub trait IntoProvider<Marker> {
    /// Reflect the callable's signature and erase its type
    fn into_provider(self) -> ProviderFn;
}

/// A provider with its reflected signature
#[derive(Clone)]
pub struct ProviderFn {
    signature: Signature,
    callable: Arc<dyn Any + Send + Sync>,
}

impl ProviderFn {
    /// Pair a callable with an explicitly described signature
    pub fn new<C: Any + Send + Sync>(signature: Signature, callable: C) -> Self {
        Self {
            signature,
            callable: Arc::new(callable),
        }
    }

    /// Wrap a value that is not callable
    ///
    /// Extraction rejects such providers with `InvalidProviderKind`.
    pub fn opaque<V: Any + Send + Sync>(value: V) -> Self {
        Self::new(Signature::not_callable(std::any::type_name::<V>()), value)
    }

    /// Reflected signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Provider name, for diagnostics
    pub fn name(&self) -> &str {
        self.signature.name()
    }

    /// The wrapped callable
    pub fn callable(&self) -> &(dyn Any + Send + Sync) {
        self.callable.as_ref()
    }

    /// The wrapped callable, if it has type `C`
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        self.callable.downcast_ref::<C>()
    }
}

impl fmt::Debug for ProviderFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFn")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl IntoProvider<()> for ProviderFn {
    fn into_provider(self) -> ProviderFn {
        self
    }
}

macro_rules! impl_into_provider {
    ($($param:ident),*) => {
        impl<Func, Ret, $($param),*> IntoProvider<fn($($param),*) -> Ret> for Func
        where
            Func: Fn($($param),*) -> Ret + Send + Sync + 'static,
            Ret: ReturnTypes,
            $($param: Reflect,)*
        {
            fn into_provider(self) -> ProviderFn {
                let signature = Signature::function(
                    std::any::type_name::<Func>(),
                    vec![$($param::type_info()),*],
                    Ret::return_types(),
                );
                ProviderFn::new(signature, self)
            }
        }
    };
}

impl_into_provider!();
impl_into_provider!(A1);
impl_into_provider!(A1, A2);
impl_into_provider!(A1, A2, A3);
impl_into_provider!(A1, A2, A3, A4);
impl_into_provider!(A1, A2, A3, A4, A5);
impl_into_provider!(A1, A2, A3, A4, A5, A6);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_into_provider!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
