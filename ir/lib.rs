mod column;
#[cfg(test)]
mod column_tests;
mod column_set;
mod error;
mod function;
#[cfg(test)]
mod function_tests;
mod print;
#[cfg(test)]
mod print_tests;
mod scalar;
mod visitor;

pub use crate::{
    column::ColumnRef,
    column_set::ColumnRefSet,
    error::ExprError,
    function::{
        arithmetic_symbol, is_count_function, is_non_deterministic_function,
        is_nullable_same_with_children_function, FunctionDescriptor, FunctionKind,
        FunctionRegistry,
    },
    scalar::{Call, Cast, Map, PreOrderTraversal, Scalar},
    visitor::ScalarVisitor,
};
