//! ExprBuilder trait - unified node construction and storage abstraction.
//!
//! This trait combines:
//! - High-level constructors (`number()`, `addition()`, `multiplication()`)
//! - Low-level storage management (allocation, stats caching)
//! - Pluggable storage strategies (arena, box)

use crate::{Expr, ExprData, ExprKind};
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over expression construction and storage.
///
/// The builder pattern separates:
/// - **What an expression is** (`ExprKind<B>`) - the logical structure
/// - **How nodes are stored** (`B::InternedExpr`) - the representation
/// - **How to construct nodes** (`B::number()`, `B::addition()`, ...) - the API
///
/// Builders must be `Copy` so they can be passed around cheaply.
///
/// # Example
///
/// ```
/// use arbor_core::{ArenaBuilder, ExprBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let b = ArenaBuilder::new(&arena);
///
/// let sum = b.addition(b.number(1), b.number(2));
/// assert!(sum.is_addition(b));
/// ```
pub trait ExprBuilder: Copy + Clone + Debug + Eq {
    /// The internal representation of a stored node.
    ///
    /// Could be:
    /// - `&'arena ExprData<B>` (arena)
    /// - `BoxedExpr`, an owning `Box<ExprData<B>>` (box)
    type InternedExpr: Clone + Debug + Eq + Hash;

    // ========================================================================
    // High-level constructors (ergonomic API)
    // ========================================================================

    /// Construct an integer literal leaf.
    fn number(self, value: i64) -> Expr<Self> {
        ExprKind::Number(value).intern(self)
    }

    /// Construct the sum of two sub-expressions.
    fn addition(self, left: Expr<Self>, right: Expr<Self>) -> Expr<Self> {
        ExprKind::Addition(left, right).intern(self)
    }

    /// Construct the product of two sub-expressions.
    fn multiplication(self, left: Expr<Self>, right: Expr<Self>) -> Expr<Self> {
        ExprKind::Multiplication(left, right).intern(self)
    }

    // ========================================================================
    // Low-level internals (implementation details)
    // ========================================================================

    /// Store an expression kind, returning its interned representation.
    ///
    /// The implementation is responsible for:
    /// 1. Computing the stats via `kind.compute_stats(self)`
    /// 2. Wrapping the kind in `ExprData { kind, stats }`
    /// 3. Storing the data and returning a handle
    fn intern_expr(self, kind: ExprKind<Self>) -> Self::InternedExpr;

    /// Retrieve the node data (kind + stats) for an interned expression.
    fn expr_data(self, expr: &Self::InternedExpr) -> &ExprData<Self>;
}
