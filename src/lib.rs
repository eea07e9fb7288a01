//! Arbor - immutable arithmetic expression trees and their evaluator
//!
//! # Overview
//!
//! An expression is either an integer literal or the sum or product of two
//! sub-expressions. Trees are built through a builder, which decides how the
//! nodes are stored, and evaluated to an `i64`.
//!
//! # Quick Start
//!
//! ```
//! use arbor::{ArenaBuilder, ExprBuilder, evaluate};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let b = ArenaBuilder::new(&arena);
//!
//! // (5 + 4) * 2
//! let sum = b.addition(b.number(5), b.number(4));
//! let product = b.multiplication(sum, b.number(2));
//!
//! assert_eq!(evaluate(b, &product), 18);
//! ```
//!
//! # Storage
//!
//! - [`BoxBuilder`]: every node owns its children through `Box`
//! - [`ArenaBuilder`]: nodes live in a `bumpalo::Bump` and are freed together
//!
//! # Evaluation
//!
//! [`evaluate`] is total: it wraps on overflow and never exhausts the call
//! stack. [`eval`] takes [`EvaluatorOptions`] and reports problems through
//! [`Error`], which implements [`miette::Diagnostic`].

mod error;

pub use bumpalo::Bump;
pub use error::Error;

// Re-export the expression IR and builders
pub use arbor_core::ir;
pub use arbor_core::{
    ArenaBuilder, BoxBuilder, Expr, ExprBuilder, ExprData, ExprDisplay, ExprFormatter, ExprKind,
    ExprStats, ExprVisitor, convert_expr, exprs_equal,
};

// Re-export the evaluator
pub use arbor_core::evaluator::{
    self, BinaryOp, EvalError, Evaluator, EvaluatorOptions, OverflowPolicy, Strategy, evaluate,
};

/// Evaluate an expression with the given options.
///
/// Like [`evaluator::eval_with_options`], but returns the diagnostic
/// [`Error`] type.
///
/// # Example
///
/// ```
/// use arbor::{BoxBuilder, Error, EvaluatorOptions, ExprBuilder, OverflowPolicy, eval};
///
/// let b = BoxBuilder::new();
/// let expr = b.multiplication(b.number(i64::MAX), b.number(2));
///
/// let options = EvaluatorOptions {
///     overflow: OverflowPolicy::Checked,
///     ..Default::default()
/// };
/// assert!(matches!(eval(b, &expr, &options), Err(Error::Overflow(_))));
/// ```
pub fn eval<B: ExprBuilder>(
    builder: B,
    expr: &Expr<B>,
    options: &EvaluatorOptions,
) -> Result<i64, Error> {
    Ok(evaluator::eval_with_options(builder, expr, options)?)
}
