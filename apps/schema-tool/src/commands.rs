//! Command implementations.
//!
//! Each command returns its output as a string; `main` prints it.

use std::fmt::Write;
use std::path::Path;

use schema_core::{SchemaConfig, SchemaDescriptor};
use serde::Serialize;

use crate::definition::load_schema;

/// Field row of a schema summary.
#[derive(Debug, Serialize)]
pub struct FieldSummary {
    pub index: usize,
    pub r#type: String,
    pub name: Option<String>,
    pub byte_len: usize,
}

/// Printable summary of a schema.
#[derive(Debug, Serialize)]
pub struct SchemaSummary {
    pub field_count: usize,
    pub byte_size: usize,
    pub byte_size_mode: String,
    pub fields: Vec<FieldSummary>,
}

impl SchemaSummary {
    pub fn new(schema: &SchemaDescriptor, config: &SchemaConfig) -> Self {
        let fields = schema
            .iter()
            .enumerate()
            .map(|(index, field)| FieldSummary {
                index,
                r#type: field.ty().to_string(),
                name: field.name().map(str::to_string),
                byte_len: field.byte_len(),
            })
            .collect();

        Self {
            field_count: schema.field_count(),
            byte_size: schema.record_size(config),
            byte_size_mode: config.byte_size_mode.to_string(),
            fields,
        }
    }

    fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }

        let mut out = String::new();
        for field in &self.fields {
            writeln!(
                out,
                "{:>4}  {:<8} {:<20} {:>5}",
                field.index,
                field.r#type,
                field.name.as_deref().unwrap_or("-"),
                field.byte_len
            )?;
        }
        writeln!(out, "fields: {}", self.field_count)?;
        write!(out, "byte size: {} ({})", self.byte_size, self.byte_size_mode)?;
        Ok(out)
    }
}

/// Describes the schema in `path`.
pub fn inspect(path: &Path, config: &SchemaConfig, json: bool) -> anyhow::Result<String> {
    let schema = load_schema(path)?;
    SchemaSummary::new(&schema, config).render(json)
}

/// Describes the schema formed by `left` followed by `right`.
pub fn merge(
    left: &Path,
    right: &Path,
    config: &SchemaConfig,
    json: bool,
) -> anyhow::Result<String> {
    let left = load_schema(left)?;
    let right = load_schema(right)?;
    let merged = SchemaDescriptor::merge(&left, &right);
    SchemaSummary::new(&merged, config).render(json)
}

/// Returns the index of the first field called `name`.
pub fn lookup(path: &Path, name: &str) -> anyhow::Result<String> {
    let schema = load_schema(path)?;
    Ok(schema.index_of_name(name)?.to_string())
}

/// Reports whether two schemas have the same field types in the same order.
pub fn compare(left: &Path, right: &Path) -> anyhow::Result<String> {
    let left = load_schema(left)?;
    let right = load_schema(right)?;
    let verdict = if left == right { "equal" } else { "not equal" };
    Ok(verdict.to_string())
}
