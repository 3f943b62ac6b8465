//! Callable signature value objects

use std::borrow::Cow;
use std::fmt;

use crate::reflect::{Reflect, ReturnTypes, TypeInfo};

/// What kind of value a provider is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallableKind {
    /// Callable with a fixed parameter list
    Function,
    /// Callable accepting an arbitrary number of trailing arguments
    Variadic,
    /// Not a callable at all
    NotCallable,
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Variadic => f.write_str("variadic function"),
            Self::NotCallable => f.write_str("non-callable value"),
        }
    }
}

/// Reflected shape of a provider
#[derive(Debug, Clone)]
pub struct Signature {
    kind: CallableKind,
    name: Cow<'static, str>,
    params: Vec<TypeInfo>,
    returns: Vec<TypeInfo>,
}

impl Signature {
    /// Signature of a fixed-arity function
    pub fn function<N: Into<Cow<'static, str>>>(
        name: N,
        params: Vec<TypeInfo>,
        returns: Vec<TypeInfo>,
    ) -> Self {
        Self {
            kind: CallableKind::Function,
            name: name.into(),
            params,
            returns,
        }
    }

    /// Signature of a value that cannot be called
    pub fn not_callable<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self {
            kind: CallableKind::NotCallable,
            name: name.into(),
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    /// Describe a callable slot by slot
    pub fn builder<N: Into<Cow<'static, str>>>(name: N) -> SignatureBuilder {
        SignatureBuilder {
            signature: Self::function(name, Vec::new(), Vec::new()),
        }
    }

    /// Callable kind
    pub fn kind(&self) -> CallableKind {
        self.kind
    }

    /// Provider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter slots in declaration order
    pub fn params(&self) -> &[TypeInfo] {
        &self.params
    }

    /// Return slots in declaration order
    pub fn returns(&self) -> &[TypeInfo] {
        &self.returns
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == CallableKind::NotCallable {
            return write!(f, "{} ({})", self.name, self.kind);
        }
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if self.kind == CallableKind::Variadic && i + 1 == self.params.len() {
                f.write_str("...")?;
            }
            f.write_str(param.name())?;
        }
        f.write_str(") -> (")?;
        for (i, ret) in self.returns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ret.name())?;
        }
        f.write_str(")")
    }
}

/// Builder for signatures of callables described at runtime
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    signature: Signature,
}

impl SignatureBuilder {
    /// Append a parameter of type `T`
    #[must_use]
    pub fn param<T: Reflect>(mut self) -> Self {
        self.signature.params.push(T::type_info());
        self
    }

    /// Append a trailing variadic parameter of element type `T`
    ///
    /// The slot is recorded as `Vec<T>` and the signature becomes variadic.
    #[must_use]
    pub fn variadic<T: Reflect>(mut self) -> Self {
        self.signature.params.push(<Vec<T> as Reflect>::type_info());
        self.signature.kind = CallableKind::Variadic;
        self
    }

    /// Append the return slots of `R`
    #[must_use]
    pub fn returns<R: ReturnTypes>(mut self) -> Self {
        self.signature.returns.extend(R::return_types());
        self
    }

    /// Finish the signature
    pub fn build(self) -> Signature {
        self.signature
    }
}
