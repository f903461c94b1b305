use crate::{
    arithmetic_symbol, is_count_function, is_non_deterministic_function,
    is_nullable_same_with_children_function, FunctionDescriptor, FunctionKind, FunctionRegistry,
};
use kernel::DataType;
use std::sync::Arc;

#[test]
fn test_name_sets_case_insensitive() {
    assert!(is_non_deterministic_function("rand"));
    assert!(is_non_deterministic_function("RAND"));
    assert!(is_non_deterministic_function("Now"));
    assert!(!is_non_deterministic_function("add"));

    assert!(is_nullable_same_with_children_function("Add"));
    assert!(is_nullable_same_with_children_function("mod"));
    assert!(!is_nullable_same_with_children_function("divide"));
    assert!(!is_nullable_same_with_children_function("upper"));

    assert!(is_count_function("count"));
    assert!(is_count_function("COUNT"));
    assert!(!is_count_function("sum"));
}

#[test]
fn test_arithmetic_symbol() {
    let cases = vec![
        ("add", Some("+")),
        ("subtract", Some("-")),
        ("multiply", Some("*")),
        ("divide", Some("/")),
        ("DIVIDE", Some("/")),
        ("mod", None),
        ("upper", None),
    ];
    for (name, expected) in cases {
        assert_eq!(expected, arithmetic_symbol(name), "{}", name);
    }
}

#[test]
fn test_descriptor() {
    let descriptor = FunctionDescriptor {
        name: "count".to_string(),
        argument_types: vec![],
        return_type: DataType::I64,
        nullable: false,
        deterministic: true,
        kind: FunctionKind::Aggregate,
    };
    assert!(!descriptor.is_nullable());
    assert!(descriptor.is_deterministic());
    assert!(descriptor.is_aggregate());

    let scalar = FunctionDescriptor {
        kind: FunctionKind::Scalar,
        ..descriptor.clone()
    };
    assert!(!scalar.is_aggregate());
    assert_ne!(descriptor, scalar);
}

struct UpperOnly;

impl FunctionRegistry for UpperOnly {
    fn resolve(
        &self,
        name: &str,
        argument_types: &[DataType],
    ) -> Option<Arc<FunctionDescriptor>> {
        if name != "upper" {
            return None;
        }
        Some(Arc::new(FunctionDescriptor {
            name: name.to_string(),
            argument_types: argument_types.to_vec(),
            return_type: DataType::String,
            nullable: true,
            deterministic: true,
            kind: FunctionKind::Scalar,
        }))
    }
}

#[test]
fn test_registry_resolution() {
    let registry: Box<dyn FunctionRegistry> = Box::new(UpperOnly);
    let descriptor = registry.resolve("upper", &[DataType::String]).unwrap();
    assert_eq!("upper", descriptor.name);
    assert_eq!(vec![DataType::String], descriptor.argument_types);
    assert!(registry.resolve("lower", &[DataType::String]).is_none());
}
