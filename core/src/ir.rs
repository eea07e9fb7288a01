//! Intermediate Representation (IR) for arithmetic expressions.
//!
//! This module contains the generic, builder-agnostic representation of
//! expression trees. The IR is parameterized by the `ExprBuilder` trait, which
//! allows different implementations to choose how nodes are built and stored
//! in memory.
//!
//! ## Structure
//!
//! - **Core types**: `ExprKind`, `Expr` - the logical structure of expressions
//! - **ExprBuilder trait**: Abstract interface for node construction and storage
//! - **Generic algorithms**: Visitor, cross-builder comparison and conversion
//! - **Display**: Infix pretty-printing

pub mod builder;
pub mod display;
pub mod expr;
pub mod view;
pub mod visit;

pub use builder::ExprBuilder;
pub use display::{ExprDisplay, ExprFormatter};
pub use expr::{Expr, ExprData, ExprKind, ExprStats};
pub use view::{convert_expr, exprs_equal};
pub use visit::ExprVisitor;
