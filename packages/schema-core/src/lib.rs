//! Schema descriptors for fixed-size records.
//!
//! A [`SchemaDescriptor`] is the ordered list of typed, optionally named
//! fields that the record serialization and query layers consult for field
//! count, field types, record width and name resolution.

pub mod config;
pub mod error;
pub mod schema;

pub use config::{ByteSizeMode, SchemaConfig};
pub use error::SchemaError;
pub use schema::SchemaDescriptor;
pub use schema_types::{FieldDescriptor, FieldType, Type};
