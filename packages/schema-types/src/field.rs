//! Field descriptors.

use std::fmt;

use crate::types::{FieldType, Type};

/// One slot of a record schema: a field type and an optional name.
///
/// # Equality
///
/// Two descriptors are equal when their types are equal. The name takes no
/// part in equality, so `i32(a)` equals `i32(b)`.
///
/// `Hash` is not implemented: a hash that agreed with this equality would
/// have to ignore the name as well, and no caller needs descriptors as keys.
#[derive(Debug, Clone)]
pub struct FieldDescriptor<T: FieldType = Type> {
    /// Type of the field.
    ty: T,
    /// Name of the field, absent for anonymous fields. Not required to be unique.
    name: Option<String>,
}

impl<T: FieldType> FieldDescriptor<T> {
    /// Creates a descriptor with an optional name.
    pub fn new(ty: T, name: Option<String>) -> Self {
        Self { ty, name }
    }

    /// Creates a named descriptor.
    pub fn named(ty: T, name: impl Into<String>) -> Self {
        Self::new(ty, Some(name.into()))
    }

    /// Creates an anonymous descriptor.
    pub fn anonymous(ty: T) -> Self {
        Self::new(ty, None)
    }

    /// Returns the type of the field.
    pub fn ty(&self) -> T {
        self.ty
    }

    /// Returns the name of the field, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the on-disk width of this field in bytes.
    pub fn byte_len(&self) -> usize {
        self.ty.byte_len()
    }
}

impl<T: FieldType> PartialEq for FieldDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl<T: FieldType> Eq for FieldDescriptor<T> {}

impl<T: FieldType + fmt::Display> fmt::Display for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}({})", self.ty, name),
            None => write!(f, "{}", self.ty),
        }
    }
}
