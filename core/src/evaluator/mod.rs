//! Evaluator for arithmetic expression trees.
//!
//! The evaluator maps an [`Expr`] to its integer value by structural
//! recursion on the node kind: a `Number` yields its literal, `Addition` and
//! `Multiplication` combine the values of their operands.
//!
//! ## Design Principles
//!
//! - **Pure**: Evaluation has no side effects and the same tree always yields
//!   the same result
//! - **Stack-safe**: [`evaluate`] runs on an explicit work-list, so tree depth
//!   is bounded by memory rather than by the call stack
//! - **Explicit overflow**: Integer overflow wraps by default; callers can
//!   choose saturation or a checked error through [`EvaluatorOptions`]
//!
//! ## Example
//!
//! ```
//! use arbor_core::{BoxBuilder, ExprBuilder};
//! use arbor_core::evaluator::{self, EvalError, EvaluatorOptions, OverflowPolicy};
//!
//! let b = BoxBuilder::new();
//! let expr = b.addition(b.number(i64::MAX), b.number(1));
//!
//! // Default: wrapping
//! assert_eq!(evaluator::evaluate(b, &expr), i64::MIN);
//!
//! // Checked: overflow is an error
//! let options = EvaluatorOptions {
//!     overflow: OverflowPolicy::Checked,
//!     ..Default::default()
//! };
//! let result = evaluator::eval_with_options(b, &expr, &options);
//! assert!(matches!(result, Err(EvalError::Overflow { .. })));
//! ```

mod error;
mod eval;
mod operators;
mod options;


pub use error::EvalError;
pub use eval::Evaluator;
pub use operators::BinaryOp;
pub use options::{EvaluatorOptions, OverflowPolicy, Strategy};

use crate::ir::{Expr, ExprBuilder};

/// Evaluate an expression with wrapping arithmetic.
///
/// Total: never fails, never panics, and uses constant call-stack space
/// regardless of tree depth.
///
/// ## Example
///
/// ```
/// use arbor_core::{ArenaBuilder, ExprBuilder, evaluator::evaluate};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let b = ArenaBuilder::new(&arena);
///
/// // (5 + 4) * 2
/// let expr = b.multiplication(b.addition(b.number(5), b.number(4)), b.number(2));
/// assert_eq!(evaluate(b, &expr), 18);
/// ```
pub fn evaluate<B: ExprBuilder>(builder: B, expr: &Expr<B>) -> i64 {
    eval::eval_total(builder, expr)
}

/// Evaluate an expression with custom overflow policy, strategy and depth limit.
///
/// ## Returns
///
/// The resulting value, or an evaluation error if the chosen policy reports
/// overflow or the recursive strategy runs out of depth.
pub fn eval_with_options<B: ExprBuilder>(
    builder: B,
    expr: &Expr<B>,
    options: &EvaluatorOptions,
) -> Result<i64, EvalError> {
    Evaluator::new(builder, *options).eval(expr)
}
