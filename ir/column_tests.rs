use crate::ColumnRef;
use kernel::DataType;
use std::collections::HashMap;

#[test]
fn test_identity_is_the_id() {
    let left = ColumnRef::new(1, "a", DataType::I64, false);
    let right = ColumnRef::new(1, "renamed", DataType::String, true);
    assert_eq!(left, right);
    assert_ne!(left, ColumnRef::new(2, "a", DataType::I64, false));

    // Map lookups follow the id, whatever the display name.
    let mut map = HashMap::new();
    map.insert(left, 0);
    assert_eq!(Some(&0), map.get(&right));
}

#[test]
fn test_ordering() {
    let mut columns = vec![
        ColumnRef::new(3, "c", DataType::I64, false),
        ColumnRef::new(1, "z", DataType::String, true),
        ColumnRef::new(2, "a", DataType::Bool, false),
    ];
    columns.sort();
    assert_eq!(
        vec![1, 2, 3],
        columns.iter().map(|column| column.id).collect::<Vec<_>>()
    );
}

#[test]
fn test_display() {
    let column = ColumnRef::new(1, "col", DataType::I64, false);
    assert_eq!("col#1", column.to_string());
}

#[test]
fn test_serde() {
    let column = ColumnRef::new(7, "col", DataType::F64, true);
    let bytes = bincode::serialize(&column).unwrap();
    let copy: ColumnRef = bincode::deserialize(&bytes).unwrap();
    assert_eq!(column, copy);
    assert_eq!("col", copy.name);
    assert_eq!(DataType::F64, copy.data_type);
    assert!(copy.nullable);
}
