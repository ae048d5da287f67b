//! Record layout tests.
//!
//! Lays out fixed-width records from a schema the way a record serializer
//! does: offsets from field types, record width from the byte size.

use ntest::timeout;

use schema_core::{ByteSizeMode, FieldDescriptor, SchemaConfig, SchemaDescriptor, Type};

/// Byte offset of every field when fields are packed back to back.
fn field_offsets(schema: &SchemaDescriptor) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(schema.field_count());
    let mut offset = 0;
    for i in 0..schema.field_count() {
        offsets.push(offset);
        offset += schema.field_type(i).unwrap().size();
    }
    offsets
}

#[timeout(1000)]
#[test]
fn test_packed_layout_matches_byte_size() {
    let schema = SchemaDescriptor::from_types_and_names(
        vec![Type::U64, Type::String, Type::Bool, Type::F32],
        vec![
            Some("id".to_string()),
            Some("name".to_string()),
            Some("active".to_string()),
            Some("score".to_string()),
        ],
    )
    .unwrap();

    let offsets = field_offsets(&schema);
    assert_eq!(offsets, vec![0, 8, 140, 141]);

    // 8 + 132 + 1 + 4
    assert_eq!(schema.byte_size(), 145);
    assert_eq!(
        offsets[schema.field_count() - 1] + schema.field_type(3).unwrap().size(),
        schema.byte_size()
    );
}

#[timeout(1000)]
#[test]
fn test_encode_record_into_fixed_buffer() {
    let schema = SchemaDescriptor::from_types_and_names(
        vec![Type::U32, Type::I16],
        vec![Some("count".to_string()), Some("delta".to_string())],
    )
    .unwrap();

    let mut record = vec![0u8; schema.byte_size()];
    let offsets = field_offsets(&schema);

    let count = offsets[schema.index_of_name("count").unwrap()];
    record[count..count + 4].copy_from_slice(&7u32.to_le_bytes());
    let delta = offsets[schema.index_of_name("delta").unwrap()];
    record[delta..delta + 2].copy_from_slice(&(-3i16).to_le_bytes());

    assert_eq!(record.len(), 6);
    assert_eq!(u32::from_le_bytes(record[0..4].try_into().unwrap()), 7);
    assert_eq!(i16::from_le_bytes(record[4..6].try_into().unwrap()), -3);
}

#[timeout(1000)]
#[test]
fn test_compatibility_mode_record_size() {
    let schema = SchemaDescriptor::from_fields(vec![
        FieldDescriptor::named(Type::I64, "ts"),
        FieldDescriptor::named(Type::U8, "flags"),
        FieldDescriptor::named(Type::String, "note"),
    ]);
    let config = SchemaConfig {
        byte_size_mode: ByteSizeMode::FirstFieldRepeated,
    };

    assert_eq!(schema.record_size(&config), 24);
    assert_eq!(schema.record_size(&SchemaConfig::default()), 141);
}
