use crate::{Call, Cast, ColumnRef, Map, Scalar};
use kernel::{DataType, Value};

fn column(id: u32) -> Scalar {
    Scalar::Column(ColumnRef::new(id, "col", DataType::I64, false))
}

fn literal(value: i64) -> Scalar {
    Scalar::Literal(Value::I64(Some(value)))
}

fn call(name: &str, arguments: Vec<Scalar>) -> Scalar {
    Scalar::Call(Box::new(Call::new(name, DataType::I64, arguments)))
}

fn distinct_count(argument: Scalar) -> Scalar {
    let mut count = Call::new("count", DataType::I64, vec![argument]);
    count.is_distinct = true;
    Scalar::Call(Box::new(count))
}

fn map_of(arguments: Vec<Scalar>) -> Scalar {
    let returns = DataType::Map {
        key: Box::new(DataType::I64),
        value: Box::new(DataType::I64),
    };
    Scalar::Map(Box::new(Map::new(returns, arguments).unwrap()))
}

fn cast_of(argument: Scalar) -> Scalar {
    Scalar::Cast(Box::new(Cast::new(DataType::String, argument, false)))
}

#[test]
fn test_display() {
    let cases = vec![
        (literal(1), "1"),
        (Scalar::Literal(Value::I64(None)), "null"),
        (
            Scalar::Literal(Value::String(Some("foo".to_string()))),
            "\"foo\"",
        ),
        (column(1), "col#1"),
        (call("pi", vec![]), "pi()"),
        (call("add", vec![column(1), literal(2)]), "add(col#1, 2)"),
        (distinct_count(column(1)), "count(distinct col#1)"),
        (map_of(vec![column(1), literal(2)]), "col#1,2"),
        (cast_of(column(1)), "cast(col#1 as STRING)"),
    ];
    for (scalar, expected) in cases {
        assert_eq!(expected, scalar.to_string(), "{:?}", scalar);
    }
}

#[test]
fn test_debug_string() {
    let cases = vec![
        (call("add", vec![column(1), literal(2)]), "col#1 + 2"),
        (call("subtract", vec![column(1), literal(2)]), "col#1 - 2"),
        (call("multiply", vec![column(1), literal(2)]), "col#1 * 2"),
        (call("divide", vec![column(1), literal(2)]), "col#1 / 2"),
        // Only the two-argument form prints infix.
        (
            call("add", vec![literal(1), literal(2), literal(3)]),
            "add(1, 2, 3)",
        ),
        (call("add", vec![literal(1)]), "add(1)"),
        // The distinct marker is a display concern, not a debug one.
        (distinct_count(column(1)), "count(col#1)"),
        (call("upper", vec![column(1)]), "upper(col#1)"),
        (
            call(
                "add",
                vec![column(1), call("multiply", vec![column(2), literal(3)])],
            ),
            "col#1 + col#2 * 3",
        ),
        (literal(1), "1"),
        (column(1), "col#1"),
        (map_of(vec![column(1), literal(2)]), "col#1,2"),
        (cast_of(call("add", vec![column(1), literal(2)])), "cast(col#1 + 2 as STRING)"),
    ];
    for (scalar, expected) in cases {
        assert_eq!(expected, scalar.debug_string(), "{:?}", scalar);
    }
}
