//! Schema error types.

use thiserror::Error;

/// Schema construction and lookup errors.
///
/// These are programming errors at the call site. Nothing in this crate
/// retries or recovers from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Parallel type and name arrays differ in length
    #[error("Invalid schema: {types} types but {names} names")]
    InvalidSchema { types: usize, names: usize },

    /// Parallel type and name arrays are empty
    #[error("Invalid schema: at least one field is required")]
    EmptySchema,

    /// Positional access past the last field
    #[error("Field index {index} out of range (field count: {field_count})")]
    IndexOutOfRange { index: usize, field_count: usize },

    /// No field carries the requested name
    #[error("Field '{}' not found", .name.as_deref().unwrap_or("<anonymous>"))]
    FieldNotFound { name: Option<String> },

    /// Operation not supported by this value type
    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: &'static str },
}

impl SchemaError {
    /// Returns `true` for construction-time shape errors.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(
            self,
            SchemaError::InvalidSchema { .. } | SchemaError::EmptySchema
        )
    }
}
