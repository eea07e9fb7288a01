//! Arbor core: immutable arithmetic expression trees and their evaluator.
//!
//! Expressions are built through an [`ExprBuilder`], which decides how nodes
//! are stored (boxed children or arena references). The evaluator walks any
//! tree built by any builder.
//!
//! # Example
//!
//! ```
//! use arbor_core::{ExprBuilder, BoxBuilder, evaluator};
//!
//! let b = BoxBuilder::new();
//!
//! // (5 + 4) * 2
//! let sum = b.addition(b.number(5), b.number(4));
//! let product = b.multiplication(sum, b.number(2));
//!
//! assert_eq!(evaluator::evaluate(b, &product), 18);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, string::String, vec, vec::Vec};

// Intermediate Representation - builder-agnostic expression trees
pub mod ir;

// Concrete builder implementations
pub mod arena_builder;
pub mod box_builder;

pub mod evaluator;

pub use ir::{
    Expr, ExprData, ExprDisplay, ExprFormatter, ExprBuilder, ExprKind, ExprStats, ExprVisitor,
    convert_expr, exprs_equal,
};

pub use arena_builder::ArenaBuilder;
pub use box_builder::{BoxBuilder, BoxedExpr};
