//! Provider descriptor value objects
//!
//! A [`ProviderDescriptor`] is what the container matches on: outputs of one
//! provider satisfy inputs of another when their `(type, key)` pairs agree.

use std::borrow::Cow;
use std::fmt;

use crate::ports::ProviderFn;
use crate::reflect::TypeRef;

/// One value a provider consumes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderInput {
    /// Required type
    pub ty: TypeRef,
    /// Qualifier; empty means unkeyed
    pub key: String,
    /// Whether the container may leave this input unresolved
    pub optional: bool,
}

impl ProviderInput {
    /// Unkeyed, required input of type `ty`
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            key: String::new(),
            optional: false,
        }
    }

    /// Unkeyed, required input of type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeRef::of::<T>())
    }

    /// Set the qualifier
    #[must_use]
    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = key.into();
        self
    }

    /// Set the optional flag
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Whether a qualifier is set
    pub fn is_keyed(&self) -> bool {
        !self.key.is_empty()
    }
}

impl fmt::Display for ProviderInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if self.is_keyed() {
            write!(f, "[key={}]", self.key)?;
        }
        if self.optional {
            f.write_str(" (optional)")?;
        }
        Ok(())
    }
}

/// One value a provider produces
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderOutput {
    /// Produced type
    pub ty: TypeRef,
    /// Qualifier; empty means unkeyed
    pub key: String,
}

impl ProviderOutput {
    /// Unkeyed output of type `ty`
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            key: String::new(),
        }
    }

    /// Unkeyed output of type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeRef::of::<T>())
    }

    /// Set the qualifier
    #[must_use]
    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = key.into();
        self
    }

    /// Whether a qualifier is set
    pub fn is_keyed(&self) -> bool {
        !self.key.is_empty()
    }
}

impl fmt::Display for ProviderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        if self.is_keyed() {
            write!(f, "[key={}]", self.key)?;
        }
        Ok(())
    }
}

/// Where a provider was registered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderLocation {
    name: Cow<'static, str>,
    file: &'static str,
    line: u32,
    column: u32,
}

impl ProviderLocation {
    /// Location of a provider named `name` registered at `caller`
    pub fn new<N: Into<Cow<'static, str>>>(
        name: N,
        caller: &'static std::panic::Location<'static>,
    ) -> Self {
        Self {
            name: name.into(),
            file: caller.file(),
            line: caller.line(),
            column: caller.column(),
        }
    }

    /// Fully qualified provider name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider name without its module path
    ///
    /// Closures keep the name of their enclosing item: `make::{{closure}}`.
    pub fn short_name(&self) -> &str {
        let name: &str = &self.name;
        let path = name.split('<').next().unwrap_or(name);
        let mut segments = path.rsplitn(3, "::");
        let last = segments.next().unwrap_or(path);
        if last != "{{closure}}" {
            return &name[path.len() - last.len()..];
        }
        match segments.next() {
            Some(parent) => &name[path.len() - last.len() - parent.len() - 2..],
            None => name,
        }
    }

    /// Source file of the registration
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Source line of the registration
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source column of the registration
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ProviderLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{}:{})",
            self.short_name(),
            self.file,
            self.line,
            self.column
        )
    }
}

/// Ordered summary of a provider's inputs and outputs
///
/// Built once per registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProviderDescriptor {
    inputs: Vec<ProviderInput>,
    outputs: Vec<ProviderOutput>,
    provider: ProviderFn,
    location: ProviderLocation,
}

impl ProviderDescriptor {
    /// Assemble a descriptor
    pub fn new(
        inputs: Vec<ProviderInput>,
        outputs: Vec<ProviderOutput>,
        provider: ProviderFn,
        location: ProviderLocation,
    ) -> Self {
        Self {
            inputs,
            outputs,
            provider,
            location,
        }
    }

    /// Inputs in parameter order, aggregates expanded in place
    pub fn inputs(&self) -> &[ProviderInput] {
        &self.inputs
    }

    /// Outputs in return order, aggregates expanded in place, error signal elided
    pub fn outputs(&self) -> &[ProviderOutput] {
        &self.outputs
    }

    /// The wrapped provider
    pub fn provider(&self) -> &ProviderFn {
        &self.provider
    }

    /// Registration location
    pub fn location(&self) -> &ProviderLocation {
        &self.location
    }
}

impl fmt::Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.location.short_name())?;
        for (i, input) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{input}")?;
        }
        f.write_str(") -> (")?;
        for (i, output) in self.outputs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{output}")?;
        }
        write!(
            f,
            ") at {}:{}:{}",
            self.location.file, self.location.line, self.location.column
        )
    }
}
