use crate::ir::{Expr, ExprBuilder, ExprData, ExprKind};
use crate::{Box, Vec};
use core::ops::Deref;

/// Builder that gives every composite node exclusive ownership of its
/// children through `Box`.
///
/// This is useful for:
/// - Small, short-lived trees
/// - Trees that must outlive any particular arena
/// - Testing (simpler than arena)
///
/// Trees of any depth can be built, evaluated with [`evaluate`] and dropped.
/// Derived `Clone`, `PartialEq`, `Hash` and `Debug` still recurse once per
/// level.
///
/// [`evaluate`]: crate::evaluator::evaluate
///
/// # Example
///
/// ```
/// use arbor_core::{BoxBuilder, ExprBuilder};
///
/// let b = BoxBuilder::new();
/// let product = b.multiplication(b.number(6), b.number(7));
/// assert!(product.is_multiplication(b));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

/// Owned node of a [`BoxBuilder`] tree.
///
/// Dropping releases the subtree with an explicit stack instead of one
/// native call per level.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxedExpr(Box<ExprData<BoxBuilder>>);

impl Deref for BoxedExpr {
    type Target = ExprData<BoxBuilder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for BoxedExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.0.kind, &mut pending);
        while let Some(child) = pending.pop() {
            let mut node = child.into_interned();
            detach_children(&mut node.0.kind, &mut pending);
            // `node` is now a leaf and drops without recursing
        }
    }
}

/// Replace `kind` with a leaf, moving its children onto `pending`.
fn detach_children(kind: &mut ExprKind<BoxBuilder>, pending: &mut Vec<Expr<BoxBuilder>>) {
    match core::mem::replace(kind, ExprKind::Number(0)) {
        ExprKind::Number(_) => {}
        ExprKind::Addition(left, right) | ExprKind::Multiplication(left, right) => {
            pending.push(left);
            pending.push(right);
        }
    }
}

impl ExprBuilder for BoxBuilder {
    type InternedExpr = BoxedExpr;

    fn intern_expr(self, kind: ExprKind<Self>) -> Self::InternedExpr {
        let stats = kind.compute_stats(self);
        BoxedExpr(Box::new(ExprData { kind, stats }))
    }

    fn expr_data(self, expr: &Self::InternedExpr) -> &ExprData<Self> {
        expr
    }
}
