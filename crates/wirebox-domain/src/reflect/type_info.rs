//! Type identity and classification

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::field::FieldDef;

/// Identifier of a type as seen by the container
///
/// Two references are equal when they name the same Rust type; the type name
/// is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
}

impl TypeRef {
    /// Reference the type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying type id
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Which side of a provider an aggregate bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateRole {
    /// Fields are dependencies (parameter position)
    Input,
    /// Fields are products (return position)
    Output,
}

impl fmt::Display for AggregateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Field table of an aggregate type
#[derive(Clone, Copy)]
pub struct AggregateInfo {
    role: AggregateRole,
    fields: fn() -> Vec<FieldDef>,
}

impl AggregateInfo {
    /// Role declared by the aggregate's marker
    pub fn role(&self) -> AggregateRole {
        self.role
    }

    /// Fields in declaration order, marker excluded
    pub fn fields(&self) -> Vec<FieldDef> {
        (self.fields)()
    }
}

impl fmt::Debug for AggregateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateInfo")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Structural classification of a type
#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    /// Opaque single value
    Value,
    /// Reserved failure signal; only valid as the last return
    ErrorSignal,
    /// Bundle of inputs or outputs, flattened field by field
    Aggregate(AggregateInfo),
}

/// Reflected description of a type
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    ty: TypeRef,
    kind: TypeKind,
}

impl TypeInfo {
    /// Describe `T` as an opaque value
    pub fn value<T: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeRef::of::<T>(),
            kind: TypeKind::Value,
        }
    }

    /// Describe `T` as the error signal
    pub fn error_signal<T: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeRef::of::<T>(),
            kind: TypeKind::ErrorSignal,
        }
    }

    /// Describe `T` as an aggregate with the given role and field table
    pub fn aggregate<T: ?Sized + 'static>(role: AggregateRole, fields: fn() -> Vec<FieldDef>) -> Self {
        Self {
            ty: TypeRef::of::<T>(),
            kind: TypeKind::Aggregate(AggregateInfo { role, fields }),
        }
    }

    /// Type identifier
    pub fn ty(&self) -> TypeRef {
        self.ty
    }

    /// Type name, for diagnostics
    pub fn name(&self) -> &'static str {
        self.ty.name()
    }

    /// Structural classification
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this is the reserved error-signal type
    pub fn is_error_signal(&self) -> bool {
        matches!(self.kind, TypeKind::ErrorSignal)
    }

    /// Aggregate field table if this type is an aggregate of `role`
    pub fn aggregate_of(&self, role: AggregateRole) -> Option<AggregateInfo> {
        match self.kind {
            TypeKind::Aggregate(info) if info.role == role => Some(info),
            _ => None,
        }
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl Eq for TypeInfo {}
