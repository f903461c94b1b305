use crate::{Call, Cast, ColumnRef, Map, Scalar};
use kernel::Value;

/// One traversal behavior over the scalar variants: pretty-printers,
/// analysis passes, and rewrite rules each implement this once.
///
/// `R` is the traversal result, `C` a mutable context threaded through the
/// walk. Every variant method is required, so adding a variant breaks every
/// visitor at compile time instead of falling through silently. Visitors
/// drive their own recursion by calling [`Scalar::accept`] on children.
pub trait ScalarVisitor<R, C> {
    fn visit_literal(&mut self, value: &Value, context: &mut C) -> R;
    fn visit_column(&mut self, column: &ColumnRef, context: &mut C) -> R;
    fn visit_call(&mut self, call: &Call, context: &mut C) -> R;
    fn visit_map(&mut self, map: &Map, context: &mut C) -> R;
    fn visit_cast(&mut self, cast: &Cast, context: &mut C) -> R;
}

impl Scalar {
    /// Dispatches to the visitor method for this node's variant.
    pub fn accept<R, C>(&self, visitor: &mut impl ScalarVisitor<R, C>, context: &mut C) -> R {
        match self {
            Scalar::Literal(value) => visitor.visit_literal(value, context),
            Scalar::Column(column) => visitor.visit_column(column, context),
            Scalar::Call(call) => visitor.visit_call(call, context),
            Scalar::Map(map) => visitor.visit_map(map, context),
            Scalar::Cast(cast) => visitor.visit_cast(cast, context),
        }
    }

    /// Rewrites leaves first: children are rebuilt, then `visitor` sees this
    /// node holding its new children. Output of `visitor` is not descended
    /// into again.
    pub fn bottom_up_rewrite(self, visitor: &impl Fn(Scalar) -> Scalar) -> Scalar {
        let rebuilt = self.map(|child| child.bottom_up_rewrite(visitor));
        visitor(rebuilt)
    }

    /// Rewrites this node first, then descends into the children of
    /// whatever `visitor` returned.
    pub fn top_down_rewrite(self, visitor: &impl Fn(Scalar) -> Scalar) -> Scalar {
        let rewritten = visitor(self);
        rewritten.map(|child| child.top_down_rewrite(visitor))
    }
}
