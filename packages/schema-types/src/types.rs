//! Type definitions and utilities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum payload length of a [`Type::String`] slot in bytes.
pub const STRING_LEN: usize = 128;

/// Capability of a field type to report its on-disk width.
///
/// Implementations must return the same non-negative length for equal values
/// on every call; record layout is computed from it.
pub trait FieldType: Copy + Eq + fmt::Debug {
    /// Returns the fixed number of bytes a value of this type occupies.
    fn byte_len(&self) -> usize;
}

/// Primitive field types supported by the storage engine.
///
/// Every variant has a fixed width, so a record built from these types has a
/// fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 128-bit signed integer
    I128,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 128-bit unsigned integer
    U128,
    /// 32-bit floating point number
    F32,
    /// 64-bit floating point number
    F64,
    /// Boolean value
    Bool,
    /// UTF-8 string stored in a fixed-width slot
    String,
}

impl Type {
    /// Returns the size in bytes of this type.
    ///
    /// For `Type::String`, this is the 4-byte length prefix plus
    /// [`STRING_LEN`] payload bytes.
    pub fn size(&self) -> usize {
        match self {
            Type::I8 | Type::U8 | Type::Bool => 1,
            Type::I16 | Type::U16 => 2,
            Type::I32 | Type::U32 | Type::F32 => 4,
            Type::I64 | Type::U64 | Type::F64 => 8,
            Type::I128 | Type::U128 => 16,
            Type::String => 4 + STRING_LEN,
        }
    }
}

impl FieldType for Type {
    fn byte_len(&self) -> usize {
        self.size()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::I8 => write!(f, "i8"),
            Type::I16 => write!(f, "i16"),
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::I128 => write!(f, "i128"),
            Type::U8 => write!(f, "u8"),
            Type::U16 => write!(f, "u16"),
            Type::U32 => write!(f, "u32"),
            Type::U64 => write!(f, "u64"),
            Type::U128 => write!(f, "u128"),
            Type::F32 => write!(f, "f32"),
            Type::F64 => write!(f, "f64"),
            Type::Bool => write!(f, "bool"),
            Type::String => write!(f, "string"),
        }
    }
}
