use crate::{
    is_count_function, is_non_deterministic_function, is_nullable_same_with_children_function,
    ColumnRef, ColumnRefSet, ExprError, FunctionDescriptor,
};
use kernel::{DataType, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash;
use std::sync::Arc;

/// One node of a scalar expression, the unit the optimizer's rewrite rules
/// match, clone, and replace.
///
/// Strict equality and hash are structural: same variant, same
/// self-attributes, pairwise-equal children in order. The relaxed form is
/// [`Scalar::equivalent`]. Trees are exclusively owned by one in-flight
/// plan alternative; a rule that wants to branch clones first.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Scalar {
    Literal(Value),
    Column(ColumnRef),
    Call(Box<Call>),
    Map(Box<Map>),
    Cast(Box<Cast>),
}

/// An n-ary function or operator application.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Call {
    pub name: String,
    pub returns: DataType,
    pub arguments: Vec<Scalar>,
    /// Absent until catalog resolution.
    pub function: Option<Arc<FunctionDescriptor>>,
    pub is_distinct: bool,
    /// A rewrite erased a distinct aggregation here; the flag stays
    /// discoverable for downstream consumers that reconstruct it.
    pub removed_distinct: bool,
    pub ignore_nulls: bool,
    depth: usize,
}

// depth is derived from the children and is not a self-attribute: equality
// and hash ignore it, so a tree with stale depth still matches its rebuilt
// twin.
impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.is_distinct == other.is_distinct
            && self.removed_distinct == other.removed_distinct
            && self.ignore_nulls == other.ignore_nulls
            && self.name == other.name
            && self.returns == other.returns
            && self.function == other.function
            && self.arguments == other.arguments
    }
}

impl hash::Hash for Call {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.is_distinct.hash(state);
        self.ignore_nulls.hash(state);
        self.arguments.hash(state);
    }
}

impl Call {
    pub fn new(name: &str, returns: DataType, arguments: Vec<Scalar>) -> Self {
        let depth = depth_of(&arguments);
        Self {
            name: name.to_string(),
            returns,
            arguments,
            function: None,
            is_distinct: false,
            removed_distinct: false,
            ignore_nulls: false,
            depth,
        }
    }

    pub fn resolved(
        name: &str,
        returns: DataType,
        arguments: Vec<Scalar>,
        function: Arc<FunctionDescriptor>,
        is_distinct: bool,
    ) -> Self {
        let mut call = Self::new(name, returns, arguments);
        call.function = Some(function);
        call.is_distinct = is_distinct;
        call
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_aggregate(&self) -> bool {
        match &self.function {
            Some(function) => function.is_aggregate(),
            None => false,
        }
    }

    pub fn is_count_star(&self) -> bool {
        is_count_function(&self.name) && self.arguments.is_empty()
    }

    pub fn is_nullable(&self) -> bool {
        if let Some(function) = &self.function {
            if !function.is_nullable() {
                return false;
            }
        }
        if is_nullable_same_with_children_function(&self.name) {
            // Decimal arithmetic can overflow to null even from non-null
            // operands.
            self.arguments
                .iter()
                .any(|argument| argument.is_nullable() || argument.data_type().is_decimal())
        } else {
            true
        }
    }

    pub fn is_constant(&self) -> bool {
        if is_non_deterministic_function(&self.name) {
            return false;
        }
        self.arguments.iter().all(Scalar::is_constant)
    }

    /// Relaxed equality across catalog resolutions: the resolved descriptor
    /// and the rewrite bookkeeping flags are not compared.
    pub fn equivalent(&self, other: &Call) -> bool {
        self.arguments.len() == other.arguments.len()
            && self.is_distinct == other.is_distinct
            && self.name == other.name
            && self.returns == other.returns
            && self
                .arguments
                .iter()
                .zip(&other.arguments)
                .all(|(left, right)| left.equivalent(right))
    }
}

/// Constructs a map value from flattened key/value children: key, value,
/// key, value.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Map {
    pub returns: DataType,
    pub arguments: Vec<Scalar>,
    depth: usize,
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.returns == other.returns && self.arguments == other.arguments
    }
}

impl hash::Hash for Map {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.returns.hash(state);
        self.arguments.hash(state);
    }
}

impl Map {
    pub fn new(returns: DataType, arguments: Vec<Scalar>) -> Result<Self, ExprError> {
        if arguments.len() % 2 != 0 {
            return Err(ExprError::OddMapChildren {
                len: arguments.len(),
            });
        }
        let depth = depth_of(&arguments);
        Ok(Self {
            returns,
            arguments,
            depth,
        })
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Converts its child to the result type.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub returns: DataType,
    pub argument: Scalar,
    /// Inserted by type coercion rather than written in the query.
    pub is_implicit: bool,
    depth: usize,
}

impl PartialEq for Cast {
    fn eq(&self, other: &Self) -> bool {
        self.is_implicit == other.is_implicit
            && self.returns == other.returns
            && self.argument == other.argument
    }
}

impl hash::Hash for Cast {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.returns.hash(state);
        self.argument.hash(state);
    }
}

impl Cast {
    pub fn new(returns: DataType, argument: Scalar, is_implicit: bool) -> Self {
        let depth = 1 + argument.depth();
        Self {
            returns,
            argument,
            is_implicit,
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

fn depth_of(arguments: &[Scalar]) -> usize {
    1 + arguments.iter().map(Scalar::depth).max().unwrap_or(0)
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Literal(value) => value.data_type(),
            Scalar::Column(column) => column.data_type.clone(),
            Scalar::Call(call) => call.returns.clone(),
            Scalar::Map(map) => map.returns.clone(),
            Scalar::Cast(cast) => cast.returns.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Scalar::Literal(_) | Scalar::Column(_) => 0,
            Scalar::Call(call) => call.arguments.len(),
            Scalar::Map(map) => map.arguments.len(),
            Scalar::Cast(_) => 1,
        }
    }

    /// 1 + the deepest child, 1 at the leaves. Set at construction; a tree
    /// mutated in place through the index operators keeps its old depth
    /// until rebuilt with [`Scalar::map`] or the rewrite traversals.
    pub fn depth(&self) -> usize {
        match self {
            Scalar::Literal(_) | Scalar::Column(_) => 1,
            Scalar::Call(call) => call.depth,
            Scalar::Map(map) => map.depth,
            Scalar::Cast(cast) => cast.depth,
        }
    }

    /// The optimizer driver calls this before rule application and reports
    /// the error instead of optimizing a runaway tree.
    pub fn check_depth(&self, limit: usize) -> Result<(), ExprError> {
        let depth = self.depth();
        if depth > limit {
            return Err(ExprError::DepthExceeded { depth, limit });
        }
        Ok(())
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Scalar::Literal(value) => value.is_null(),
            Scalar::Column(column) => column.nullable,
            Scalar::Call(call) => call.is_nullable(),
            Scalar::Map(_) => true,
            Scalar::Cast(cast) => cast.argument.is_nullable(),
        }
    }

    pub fn is_constant(&self) -> bool {
        match self {
            Scalar::Literal(_) => true,
            Scalar::Column(_) => false,
            Scalar::Call(call) => call.is_constant(),
            Scalar::Map(map) => map.arguments.iter().all(Scalar::is_constant),
            Scalar::Cast(cast) => cast.argument.is_constant(),
        }
    }

    pub fn used_columns(&self) -> ColumnRefSet {
        let mut set = ColumnRefSet::new();
        self.collect_used_columns(&mut set);
        set
    }

    pub fn collect_used_columns(&self, set: &mut ColumnRefSet) {
        match self {
            Scalar::Literal(_) => {}
            Scalar::Column(column) => {
                set.insert(column.id);
            }
            Scalar::Call(call) => {
                for argument in &call.arguments {
                    argument.collect_used_columns(set)
                }
            }
            Scalar::Map(map) => {
                for argument in &map.arguments {
                    argument.collect_used_columns(set)
                }
            }
            Scalar::Cast(cast) => cast.argument.collect_used_columns(set),
        }
    }

    pub fn is_aggregate(&self) -> bool {
        match self {
            Scalar::Call(call) => call.is_aggregate(),
            _ => false,
        }
    }

    pub fn is_count_star(&self) -> bool {
        match self {
            Scalar::Call(call) => call.is_count_star(),
            _ => false,
        }
    }

    pub fn is_literal(&self) -> bool {
        match self {
            Scalar::Literal(_) => true,
            _ => false,
        }
    }

    pub fn is_null_literal(&self) -> bool {
        match self {
            Scalar::Literal(value) => value.is_null(),
            _ => false,
        }
    }

    pub fn is_column_ref(&self) -> bool {
        match self {
            Scalar::Column(_) => true,
            _ => false,
        }
    }

    pub fn is_just(&self, column: &ColumnRef) -> bool {
        match self {
            Scalar::Column(c) => c == column,
            _ => false,
        }
    }

    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Scalar::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Scalar::Column(column) => Some(column),
            _ => None,
        }
    }

    /// Relaxed equality: Call compares through [`Call::equivalent`]; every
    /// other variant has no relaxed notion and falls back to strict
    /// equality.
    pub fn equivalent(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Call(left), Scalar::Call(right)) => left.equivalent(right),
            (left, right) => left == right,
        }
    }

    /// Rebuilds this node with each child replaced by `f(child)`, refreshing
    /// the stored depth from the new children.
    pub fn map(self, mut f: impl FnMut(Scalar) -> Scalar) -> Scalar {
        match self {
            Scalar::Literal(_) | Scalar::Column(_) => self,
            Scalar::Call(call) => {
                let Call {
                    name,
                    returns,
                    arguments,
                    function,
                    is_distinct,
                    removed_distinct,
                    ignore_nulls,
                    depth: _,
                } = *call;
                let arguments: Vec<Scalar> = arguments.into_iter().map(&mut f).collect();
                let depth = depth_of(&arguments);
                Scalar::Call(Box::new(Call {
                    name,
                    returns,
                    arguments,
                    function,
                    is_distinct,
                    removed_distinct,
                    ignore_nulls,
                    depth,
                }))
            }
            Scalar::Map(map) => {
                let Map {
                    returns,
                    arguments,
                    depth: _,
                } = *map;
                let arguments: Vec<Scalar> = arguments.into_iter().map(&mut f).collect();
                let depth = depth_of(&arguments);
                Scalar::Map(Box::new(Map {
                    returns,
                    arguments,
                    depth,
                }))
            }
            Scalar::Cast(cast) => {
                let Cast {
                    returns,
                    argument,
                    is_implicit,
                    depth: _,
                } = *cast;
                let argument = f(argument);
                let depth = 1 + argument.depth();
                Scalar::Cast(Box::new(Cast {
                    returns,
                    argument,
                    is_implicit,
                    depth,
                }))
            }
        }
    }

    /// Replaces column references per `map`, leaving everything else intact.
    pub fn subst(self, map: &HashMap<ColumnRef, ColumnRef>) -> Self {
        match self {
            Scalar::Column(column) if map.contains_key(&column) => {
                Scalar::Column(map[&column].clone())
            }
            other => other.map(|argument| argument.subst(map)),
        }
    }

    /// Splices `expr` in place of every reference to `column`.
    pub fn inline(self, expr: &Scalar, column: &ColumnRef) -> Self {
        match self {
            Scalar::Column(c) if &c == column => expr.clone(),
            other => other.map(|argument| argument.inline(expr, column)),
        }
    }

    pub fn pre_order(&self) -> PreOrderTraversal {
        PreOrderTraversal { stack: vec![self] }
    }
}

pub struct PreOrderTraversal<'it> {
    stack: Vec<&'it Scalar>,
}

impl<'it> Iterator for PreOrderTraversal<'it> {
    type Item = &'it Scalar;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Children go on the stack last-first so they pop in order.
        for i in 0..next.len() {
            self.stack.push(&next[next.len() - 1 - i]);
        }
        Some(next)
    }
}

impl std::ops::Index<usize> for Scalar {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Scalar::Literal(_) | Scalar::Column(_) => panic!("{}", index),
            Scalar::Call(call) => &call.arguments[index],
            Scalar::Map(map) => &map.arguments[index],
            Scalar::Cast(cast) => {
                if index == 0 {
                    &cast.argument
                } else {
                    panic!("{}", index)
                }
            }
        }
    }
}

impl std::ops::IndexMut<usize> for Scalar {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self {
            Scalar::Literal(_) | Scalar::Column(_) => panic!("{}", index),
            Scalar::Call(call) => &mut call.arguments[index],
            Scalar::Map(map) => &mut map.arguments[index],
            Scalar::Cast(cast) => {
                if index == 0 {
                    &mut cast.argument
                } else {
                    panic!("{}", index)
                }
            }
        }
    }
}
