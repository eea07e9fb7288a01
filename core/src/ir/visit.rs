use super::{Expr, ExprBuilder, ExprKind};

/// Trait for visiting expressions.
///
/// Implement this trait to traverse a tree without building a new one.
/// The default implementation handles recursion automatically, visiting the
/// left operand before the right. Recursion uses the call stack, one frame per
/// level of the tree.
///
/// # Example
///
/// ```
/// use arbor_core::{BoxBuilder, Expr, ExprBuilder, ExprKind, ExprVisitor};
///
/// struct Literals(Vec<i64>);
///
/// impl<B: ExprBuilder> ExprVisitor<B> for Literals {
///     fn visit_expr(&mut self, expr: &Expr<B>, builder: B) {
///         if let ExprKind::Number(value) = expr.kind(builder) {
///             self.0.push(*value);
///         }
///         self.super_visit_expr(expr, builder);
///     }
/// }
///
/// let b = BoxBuilder::new();
/// let expr = b.multiplication(b.addition(b.number(5), b.number(4)), b.number(2));
///
/// let mut literals = Literals(Vec::new());
/// literals.visit_expr(&expr, b);
/// assert_eq!(literals.0, vec![5, 4, 2]);
/// ```
pub trait ExprVisitor<B: ExprBuilder> {
    /// Visit an expression.
    ///
    /// Override this to customize behavior for all nodes.
    /// Call `super_visit_expr` to recurse into the children.
    fn visit_expr(&mut self, expr: &Expr<B>, builder: B) {
        self.super_visit_expr(expr, builder)
    }

    /// Default recursion into the children.
    ///
    /// Override `visit_expr` instead of this method.
    fn super_visit_expr(&mut self, expr: &Expr<B>, builder: B) {
        match expr.kind(builder) {
            ExprKind::Number(_) => {}
            ExprKind::Addition(left, right) | ExprKind::Multiplication(left, right) => {
                self.visit_expr(left, builder);
                self.visit_expr(right, builder);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArenaBuilder, BoxBuilder};
    use bumpalo::Bump;

    struct OperatorCounter {
        additions: usize,
        multiplications: usize,
    }

    impl<B: ExprBuilder> ExprVisitor<B> for OperatorCounter {
        fn visit_expr(&mut self, expr: &Expr<B>, builder: B) {
            match expr.kind(builder) {
                ExprKind::Addition(_, _) => self.additions += 1,
                ExprKind::Multiplication(_, _) => self.multiplications += 1,
                ExprKind::Number(_) => {}
            }
            self.super_visit_expr(expr, builder);
        }
    }

    #[test]
    fn test_counts_operators() {
        let b = BoxBuilder::new();
        // (2 + 3) * (4 + 5)
        let expr = b.multiplication(
            b.addition(b.number(2), b.number(3)),
            b.addition(b.number(4), b.number(5)),
        );

        let mut counter = OperatorCounter {
            additions: 0,
            multiplications: 0,
        };
        counter.visit_expr(&expr, b);
        assert_eq!(counter.additions, 2);
        assert_eq!(counter.multiplications, 1);
    }

    /// Visitor that overrides nothing still walks the whole tree.
    struct Silent;

    impl<B: ExprBuilder> ExprVisitor<B> for Silent {}

    #[test]
    fn test_default_visitor_terminates() {
        let arena = Bump::new();
        let b = ArenaBuilder::new(&arena);
        let expr = b.addition(b.number(1), b.multiplication(b.number(2), b.number(3)));
        Silent.visit_expr(&expr, b);
    }
}
