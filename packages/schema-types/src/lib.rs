//! Shared types for record schemas.
//!
//! This crate defines the field type capability, the built-in field types,
//! and the descriptor for a single schema slot.

pub mod field;
pub mod types;

pub use field::FieldDescriptor;
pub use types::{FieldType, Type, STRING_LEN};
