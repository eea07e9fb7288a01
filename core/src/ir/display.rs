use super::{Expr, ExprBuilder, ExprKind, ExprVisitor};
use crate::String;
use core::fmt::Write;

/// Binding strength of a node, used to decide where parentheses go.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Atom,
}

/// Visitor that formats expressions as infix text.
///
/// Parentheses are emitted only where the tree shape differs from what
/// left-associative `*`-over-`+` precedence would read back.
pub struct ExprFormatter<B: ExprBuilder> {
    output: String,
    builder: B,
}

impl<B: ExprBuilder> ExprFormatter<B> {
    pub fn new(builder: B) -> Self {
        Self {
            output: String::new(),
            builder,
        }
    }

    pub fn format(expr: &Expr<B>, builder: B) -> String {
        let mut formatter = Self::new(builder);
        formatter.visit_expr(expr, builder);
        formatter.output
    }

    fn precedence(expr: &Expr<B>, builder: B) -> Precedence {
        match expr.kind(builder) {
            // Binds like a product so only `x * (-y)` gets parentheses
            ExprKind::Number(value) if *value < 0 => Precedence::Product,
            ExprKind::Number(_) => Precedence::Atom,
            ExprKind::Addition(_, _) => Precedence::Sum,
            ExprKind::Multiplication(_, _) => Precedence::Product,
        }
    }

    fn operand(&mut self, expr: &Expr<B>, needs_parens: bool) {
        if needs_parens {
            self.output.push('(');
            self.visit_expr(expr, self.builder);
            self.output.push(')');
        } else {
            self.visit_expr(expr, self.builder);
        }
    }

    fn binary(&mut self, op: &str, prec: Precedence, left: &Expr<B>, right: &Expr<B>) {
        let builder = self.builder;
        // Left-associative: the right operand needs parens at equal precedence
        self.operand(left, Self::precedence(left, builder) < prec);
        let _ = write!(self.output, " {} ", op);
        self.operand(right, Self::precedence(right, builder) <= prec);
    }
}

impl<B: ExprBuilder> ExprVisitor<B> for ExprFormatter<B> {
    fn visit_expr(&mut self, expr: &Expr<B>, builder: B) {
        match expr.kind(builder) {
            ExprKind::Number(value) => {
                let _ = write!(self.output, "{}", value);
            }
            ExprKind::Addition(left, right) => self.binary("+", Precedence::Sum, left, right),
            ExprKind::Multiplication(left, right) => {
                self.binary("*", Precedence::Product, left, right)
            }
        }
    }
}

/// Extension trait to add display methods to `Expr`.
pub trait ExprDisplay<B: ExprBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: ExprBuilder> ExprDisplay<B> for Expr<B> {
    fn display(&self, builder: B) -> String {
        ExprFormatter::format(self, builder)
    }
}
