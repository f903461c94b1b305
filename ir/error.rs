use std::fmt;

/// Fatal conditions raised while building or bounding an expression tree.
/// Expected mismatches (equality or equivalence returning false) are plain
/// boolean outcomes, not errors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExprError {
    OddMapChildren { len: usize },
    DepthExceeded { depth: usize, limit: usize },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::OddMapChildren { len } => write!(
                f,
                "map constructor expects key/value pairs, got {} children",
                len
            ),
            ExprError::DepthExceeded { depth, limit } => {
                write!(f, "expression depth {} exceeds limit {}", depth, limit)
            }
        }
    }
}

impl std::error::Error for ExprError {}
