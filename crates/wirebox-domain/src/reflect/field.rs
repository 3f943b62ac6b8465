//! Aggregate field descriptors

use super::Reflect;
use super::type_info::TypeInfo;

/// Raw declarative metadata attached to an aggregate field
///
/// Entries keep declaration order. Values are not interpreted here; the tag
/// parser of the application layer decides what is well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags {
    entries: Vec<(&'static str, &'static str)>,
}

impl FieldTags {
    /// Empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first tag named `name`, if present
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| *value)
    }

    /// All `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of declared tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tag was declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, name: &'static str, value: &'static str) {
        self.entries.push((name, value));
    }
}

impl From<&'static [(&'static str, &'static str)]> for FieldTags {
    fn from(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }
}

/// One field of an aggregate
#[derive(Debug, Clone)]
pub struct FieldDef {
    name: &'static str,
    ty: TypeInfo,
    tags: FieldTags,
}

impl FieldDef {
    /// Field `name` of type `T` with no tags
    pub fn of<T: Reflect + ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            ty: T::type_info(),
            tags: FieldTags::new(),
        }
    }

    /// Append the given tags
    #[must_use]
    pub fn tagged(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        for &(name, value) in tags {
            self.tags.push(name, value);
        }
        self
    }

    /// Append one tag
    #[must_use]
    pub fn with_tag(mut self, name: &'static str, value: &'static str) -> Self {
        self.tags.push(name, value);
        self
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared field type
    pub fn ty(&self) -> TypeInfo {
        self.ty
    }

    /// Declared tags
    pub fn tags(&self) -> &FieldTags {
        &self.tags
    }
}
