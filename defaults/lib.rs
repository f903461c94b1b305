/// Deepest scalar expression tree the optimizer accepts.
///
/// The driver checks a tree against this limit before rule application.
/// Deeper trees abort optimization of that query instead of overflowing
/// the stack inside traversal, equality, or hashing.
pub const MAX_SCALAR_DEPTH: usize = 1000;
