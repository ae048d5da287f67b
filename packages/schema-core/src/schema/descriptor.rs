//! Ordered, fixed-length list of record fields.
//!
//! A descriptor is built once and never changes afterwards:
//! - Field order is significant and preserved
//! - Field names are optional and need not be unique
//! - Equality compares field types position by position, never names
//! - `merge` builds a new descriptor and leaves its inputs untouched

use std::fmt;
use std::slice;

use schema_types::{FieldDescriptor, FieldType, Type};

use crate::config::{ByteSizeMode, SchemaConfig};
use crate::error::SchemaError;

/// Shape of a fixed-size record.
///
/// `Hash` is not implemented; [`SchemaDescriptor::try_hash`] fails with
/// [`SchemaError::UnsupportedOperation`]. Do not use a descriptor as a map key
/// until a hash over all field types in order exists.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor<T: FieldType = Type> {
    /// Field definitions in declaration order
    fields: Box<[FieldDescriptor<T>]>,
}

impl<T: FieldType> SchemaDescriptor<T> {
    /// Creates a schema from parallel type and name arrays.
    ///
    /// # Arguments
    /// * `types` - Field types in order
    /// * `names` - Field names in order; `None` marks an anonymous field
    ///
    /// # Returns
    /// `Err(SchemaError::InvalidSchema)` if the arrays differ in length,
    /// `Err(SchemaError::EmptySchema)` if they are empty.
    pub fn from_types_and_names(
        types: Vec<T>,
        names: Vec<Option<String>>,
    ) -> Result<Self, SchemaError> {
        if types.len() != names.len() {
            tracing::debug!(
                "Rejecting schema with {} types and {} names",
                types.len(),
                names.len()
            );
            return Err(SchemaError::InvalidSchema {
                types: types.len(),
                names: names.len(),
            });
        }

        if types.is_empty() {
            tracing::debug!("Rejecting schema without fields");
            return Err(SchemaError::EmptySchema);
        }

        Ok(types
            .into_iter()
            .zip(names)
            .map(|(ty, name)| FieldDescriptor::new(ty, name))
            .collect())
    }

    /// Creates a schema of anonymous fields.
    pub fn from_types(types: Vec<T>) -> Result<Self, SchemaError> {
        let names = vec![None; types.len()];
        Self::from_types_and_names(types, names)
    }

    /// Creates a schema from already-built field descriptors.
    ///
    /// Any number of fields is accepted, including none.
    pub fn from_fields(fields: impl IntoIterator<Item = FieldDescriptor<T>>) -> Self {
        fields.into_iter().collect()
    }

    /// Returns the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Returns the field at `index`.
    pub fn field(&self, index: usize) -> Result<&FieldDescriptor<T>, SchemaError> {
        self.fields
            .get(index)
            .ok_or(SchemaError::IndexOutOfRange {
                index,
                field_count: self.fields.len(),
            })
    }

    /// Returns the name of the field at `index`, `None` if it is anonymous.
    pub fn field_name(&self, index: usize) -> Result<Option<&str>, SchemaError> {
        self.field(index).map(FieldDescriptor::name)
    }

    /// Returns the type of the field at `index`.
    pub fn field_type(&self, index: usize) -> Result<T, SchemaError> {
        self.field(index).map(FieldDescriptor::ty)
    }

    /// Finds the first field with the given name.
    ///
    /// Matching is exact. Anonymous fields never match, and a `None` query
    /// always fails.
    ///
    /// # Returns
    /// Index of the first match, or `Err(SchemaError::FieldNotFound)`.
    pub fn index_of_name<'a>(
        &self,
        name: impl Into<Option<&'a str>>,
    ) -> Result<usize, SchemaError> {
        let name = name.into();
        name.and_then(|name| {
            self.fields
                .iter()
                .position(|field| field.name() == Some(name))
        })
        .ok_or_else(|| SchemaError::FieldNotFound {
            name: name.map(str::to_string),
        })
    }

    /// Returns the record size in bytes: the sum of every field's byte length.
    pub fn byte_size(&self) -> usize {
        self.byte_size_with(ByteSizeMode::PerField)
    }

    /// Returns the record size in bytes computed with the given mode.
    pub fn byte_size_with(&self, mode: ByteSizeMode) -> usize {
        match mode {
            ByteSizeMode::PerField => self.fields.iter().map(FieldDescriptor::byte_len).sum(),
            ByteSizeMode::FirstFieldRepeated => self
                .fields
                .first()
                .map_or(0, |first| first.byte_len() * self.fields.len()),
        }
    }

    /// Returns the record size in bytes using the configured mode.
    pub fn record_size(&self, config: &SchemaConfig) -> usize {
        let size = self.byte_size_with(config.byte_size_mode);
        if config.byte_size_mode == ByteSizeMode::FirstFieldRepeated {
            let per_field = self.byte_size();
            if size != per_field {
                tracing::warn!(
                    "Record size {} from first-field-repeated mode differs from per-field size {}",
                    size,
                    per_field
                );
            }
        }
        size
    }

    /// Returns an iterator over the fields in order.
    ///
    /// Each call starts a fresh pass.
    pub fn iter(&self) -> slice::Iter<'_, FieldDescriptor<T>> {
        self.fields.iter()
    }

    /// Concatenates the fields of `first` and `second` into a new schema.
    ///
    /// The first `first.field_count()` fields come from `first`, the rest from
    /// `second`. Neither input is modified.
    pub fn merge(first: &Self, second: &Self) -> Self {
        tracing::trace!(
            "Merging schemas with {} and {} fields",
            first.field_count(),
            second.field_count()
        );
        first.iter().chain(second.iter()).cloned().collect()
    }

    /// Hashing is not supported for schema descriptors.
    ///
    /// Always returns `Err(SchemaError::UnsupportedOperation)`.
    pub fn try_hash(&self) -> Result<u64, SchemaError> {
        Err(SchemaError::UnsupportedOperation { operation: "hash" })
    }
}

impl<T: FieldType> FromIterator<FieldDescriptor<T>> for SchemaDescriptor<T> {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor<T>>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: FieldType> IntoIterator for &'a SchemaDescriptor<T> {
    type Item = &'a FieldDescriptor<T>;
    type IntoIter = slice::Iter<'a, FieldDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Same field count and equal field types at every position. Names are not
/// compared.
impl<T: FieldType> PartialEq for SchemaDescriptor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.field_count() == other.field_count()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.ty() == right.ty())
    }
}

impl<T: FieldType> Eq for SchemaDescriptor<T> {}

impl<T: FieldType + fmt::Display> fmt::Display for SchemaDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}
