use crate::DataType;

#[test]
fn test_display() {
    let cases = vec![
        (DataType::Bool, "BOOL"),
        (DataType::I64, "INT64"),
        (DataType::F64, "DOUBLE"),
        (
            DataType::Decimal {
                precision: 10,
                scale: 2,
            },
            "DECIMAL(10, 2)",
        ),
        (DataType::Date, "DATE"),
        (DataType::Timestamp, "TIMESTAMP"),
        (DataType::String, "STRING"),
        (
            DataType::Map {
                key: Box::new(DataType::String),
                value: Box::new(DataType::I64),
            },
            "MAP<STRING, INT64>",
        ),
    ];
    for (data_type, expected) in cases {
        assert_eq!(expected, data_type.to_string());
    }
}

#[test]
fn test_predicates() {
    let decimal = DataType::Decimal {
        precision: 10,
        scale: 2,
    };
    assert!(decimal.is_decimal());
    assert!(decimal.is_numeric());
    assert!(DataType::I64.is_numeric());
    assert!(!DataType::I64.is_decimal());
    assert!(!DataType::String.is_numeric());
}
