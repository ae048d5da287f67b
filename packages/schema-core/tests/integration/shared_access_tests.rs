//! Shared read-only access tests.

use std::sync::Arc;
use std::thread;

use ntest::timeout;

use schema_core::{SchemaDescriptor, Type};

#[timeout(5000)]
#[test]
fn test_concurrent_readers() {
    let schema = Arc::new(
        SchemaDescriptor::from_types_and_names(
            vec![Type::U64, Type::String, Type::Bool],
            vec![
                Some("id".to_string()),
                Some("name".to_string()),
                Some("active".to_string()),
            ],
        )
        .unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let mut total = 0;
                for _ in 0..1000 {
                    assert_eq!(schema.index_of_name("active").unwrap(), 2);
                    total += schema.byte_size();
                }
                total
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1000 * 141);
    }
    assert_eq!(schema.field_count(), 3);
}

#[timeout(5000)]
#[test]
fn test_merge_from_multiple_threads() {
    let left = Arc::new(SchemaDescriptor::from_types(vec![Type::I32, Type::I64]).unwrap());
    let right = Arc::new(SchemaDescriptor::from_types(vec![Type::F32]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let left = Arc::clone(&left);
            let right = Arc::clone(&right);
            thread::spawn(move || SchemaDescriptor::merge(&left, &right))
        })
        .collect();

    let expected = SchemaDescriptor::from_types(vec![Type::I32, Type::I64, Type::F32]).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(left.field_count(), 2);
    assert_eq!(right.field_count(), 1);
}
