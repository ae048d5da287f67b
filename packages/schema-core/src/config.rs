//! Schema configuration.

use std::fmt;
use std::str::FromStr;

/// How the record byte size of a schema is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteSizeMode {
    /// Sum of each field's own byte length
    #[default]
    PerField,
    /// Field count times the byte length of the first field.
    ///
    /// Reproduces record sizes computed by older engines that only looked at
    /// the first field. Differs from `PerField` whenever field widths differ.
    FirstFieldRepeated,
}

impl fmt::Display for ByteSizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteSizeMode::PerField => write!(f, "per-field"),
            ByteSizeMode::FirstFieldRepeated => write!(f, "first-field-repeated"),
        }
    }
}

impl FromStr for ByteSizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-field" => Ok(ByteSizeMode::PerField),
            "first-field-repeated" => Ok(ByteSizeMode::FirstFieldRepeated),
            other => Err(format!(
                "unknown byte size mode '{}' (expected 'per-field' or 'first-field-repeated')",
                other
            )),
        }
    }
}

/// Schema configuration.
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    /// Record byte size computation (default: per-field)
    pub byte_size_mode: ByteSizeMode,
}
