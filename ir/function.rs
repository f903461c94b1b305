use kernel::DataType;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Resolved catalog metadata for a named function.
///
/// Descriptors are immutable once resolved and shared by reference count:
/// cloning a tree shares them instead of copying. Callers that want a
/// detached instance clone the descriptor itself.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub argument_types: Vec<DataType>,
    pub return_type: DataType,
    /// False means the function never returns null, whatever its inputs.
    pub nullable: bool,
    pub deterministic: bool,
    pub kind: FunctionKind,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    Scalar,
    Aggregate,
}

impl FunctionDescriptor {
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn is_aggregate(&self) -> bool {
        self.kind == FunctionKind::Aggregate
    }
}

/// The catalog seam: call names are resolved against table metadata outside
/// this crate, then attached to the Call node.
pub trait FunctionRegistry: Send + Sync {
    fn resolve(&self, name: &str, argument_types: &[DataType])
        -> Option<Arc<FunctionDescriptor>>;
}

// Functions whose results change run to run. Constant folding must leave
// their calls alone.
static NON_DETERMINISTIC_FUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec!["rand", "random", "uuid", "sleep", "now", "current_timestamp"]
        .into_iter()
        .collect()
});

// Functions that return null only when an argument can be null. Divide is
// absent: divide by zero yields null even from non-null operands.
static NULLABLE_SAME_WITH_CHILDREN_FUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| vec!["add", "subtract", "multiply", "mod"].into_iter().collect());

pub fn is_non_deterministic_function(name: &str) -> bool {
    NON_DETERMINISTIC_FUNCTIONS.contains(name.to_ascii_lowercase().as_str())
}

pub fn is_nullable_same_with_children_function(name: &str) -> bool {
    NULLABLE_SAME_WITH_CHILDREN_FUNCTIONS.contains(name.to_ascii_lowercase().as_str())
}

/// Infix symbol for the four basic arithmetic operators, consulted by debug
/// printing.
pub fn arithmetic_symbol(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "add" => Some("+"),
        "subtract" => Some("-"),
        "multiply" => Some("*"),
        "divide" => Some("/"),
        _ => None,
    }
}

pub fn is_count_function(name: &str) -> bool {
    name.eq_ignore_ascii_case("count")
}
