//! JSON schema definition files.
//!
//! ```json
//! { "fields": [ { "type": "u64", "name": "id" }, { "type": "string" } ] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use schema_core::{SchemaDescriptor, SchemaError, Type};
use serde::Deserialize;

/// Schema definition as written in a file.
#[derive(Debug, Deserialize)]
pub struct SchemaDefinition {
    /// Field definitions in order
    pub fields: Vec<FieldDefinition>,
}

/// Field definition as written in a file.
#[derive(Debug, Deserialize)]
pub struct FieldDefinition {
    /// Field type
    #[serde(rename = "type")]
    pub ty: Type,
    /// Optional field name
    #[serde(default)]
    pub name: Option<String>,
}

impl SchemaDefinition {
    /// Builds a schema descriptor from this definition.
    pub fn into_schema(self) -> Result<SchemaDescriptor, SchemaError> {
        let (types, names) = self
            .fields
            .into_iter()
            .map(|field| (field.ty, field.name))
            .unzip();
        SchemaDescriptor::from_types_and_names(types, names)
    }
}

/// Reads a definition file and builds its schema.
pub fn load_schema(path: &Path) -> anyhow::Result<SchemaDescriptor> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    let definition: SchemaDefinition = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse schema file {}", path.display()))?;

    tracing::debug!(
        "Loaded {} field definitions from {}",
        definition.fields.len(),
        path.display()
    );

    definition
        .into_schema()
        .with_context(|| format!("invalid schema in {}", path.display()))
}
