//! Core evaluation logic.

use super::{
    BinaryOp, EvalError, EvaluatorOptions, Strategy,
    operators::{eval_binary_int, eval_binary_wrapping},
};
use crate::{
    Vec,
    ir::{Expr, ExprBuilder, ExprKind},
};
use core::convert::Infallible;
use tracing::{debug, trace};

/// Evaluator for expression trees built by `B`.
pub struct Evaluator<B: ExprBuilder> {
    options: EvaluatorOptions,
    builder: B,
    depth: usize,
}

impl<B: ExprBuilder> Evaluator<B> {
    /// Create a new evaluator with the given options.
    pub fn new(builder: B, options: EvaluatorOptions) -> Self {
        Self {
            options,
            builder,
            depth: 0,
        }
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, expr: &Expr<B>) -> Result<i64, EvalError> {
        let stats = expr.stats(self.builder);
        let strategy = self.resolve_strategy(stats.depth);
        debug!(
            depth = stats.depth,
            size = stats.size,
            ?strategy,
            overflow = ?self.options.overflow,
            "evaluating expression"
        );

        match strategy {
            Strategy::WorkList => {
                let policy = self.options.overflow;
                eval_worklist(self.builder, expr, |op, left, right| {
                    eval_binary_int(op, left, right, policy)
                })
            }
            // Auto is already resolved to one of the concrete strategies
            Strategy::Recursive | Strategy::Auto => self.eval_expr(expr),
        }
    }

    /// Pick the concrete traversal for a tree of the given depth.
    fn resolve_strategy(&self, tree_depth: usize) -> Strategy {
        match self.options.strategy {
            Strategy::Auto if tree_depth <= self.options.max_depth => {
                trace!(tree_depth, max_depth = self.options.max_depth, "auto: recursive");
                Strategy::Recursive
            }
            Strategy::Auto => {
                trace!(tree_depth, max_depth = self.options.max_depth, "auto: work-list");
                Strategy::WorkList
            }
            strategy => strategy,
        }
    }

    /// Evaluate an expression node recursively.
    pub(crate) fn eval_expr(&mut self, expr: &Expr<B>) -> Result<i64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth + 1,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &Expr<B>) -> Result<i64, EvalError> {
        let (op, left, right) = match expr.kind(self.builder) {
            ExprKind::Number(value) => return Ok(*value),
            ExprKind::Addition(left, right) => (BinaryOp::Add, left, right),
            ExprKind::Multiplication(left, right) => (BinaryOp::Mul, left, right),
        };

        let left = self.eval_expr(left)?;
        let right = self.eval_expr(right)?;
        eval_binary_int(op, left, right, self.options.overflow)
    }
}

/// Pending work for the explicit-stack traversal.
enum Frame<'e, B: ExprBuilder> {
    /// Evaluate this subtree and push its value.
    Enter(&'e Expr<B>),
    /// Pop two values (right on top) and push the result.
    Apply(BinaryOp),
}

/// Post-order evaluation on heap-allocated stacks.
///
/// Operands are combined in the same order as the recursive strategy (left
/// subtree fully before right), so a failing `apply` reports the same error.
pub(super) fn eval_worklist<B, E>(
    builder: B,
    expr: &Expr<B>,
    mut apply: impl FnMut(BinaryOp, i64, i64) -> Result<i64, E>,
) -> Result<i64, E>
where
    B: ExprBuilder,
{
    let depth = expr.stats(builder).depth;
    let mut frames: Vec<Frame<'_, B>> = Vec::with_capacity(depth + 1);
    frames.push(Frame::Enter(expr));
    let mut operands: Vec<i64> = Vec::with_capacity(depth);

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(e) => match e.kind(builder) {
                ExprKind::Number(value) => operands.push(*value),
                ExprKind::Addition(left, right) => {
                    frames.push(Frame::Apply(BinaryOp::Add));
                    frames.push(Frame::Enter(right));
                    frames.push(Frame::Enter(left));
                }
                ExprKind::Multiplication(left, right) => {
                    frames.push(Frame::Apply(BinaryOp::Mul));
                    frames.push(Frame::Enter(right));
                    frames.push(Frame::Enter(left));
                }
            },
            Frame::Apply(op) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    unreachable!("operator applied without both operands")
                };
                operands.push(apply(op, left, right)?);
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => unreachable!("evaluation must leave exactly one value"),
    }
}

/// Stack-safe evaluation with wrapping arithmetic. Cannot fail.
pub(super) fn eval_total<B: ExprBuilder>(builder: B, expr: &Expr<B>) -> i64 {
    let result = eval_worklist(builder, expr, |op, left, right| {
        Ok::<i64, Infallible>(eval_binary_wrapping(op, left, right))
    });
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
