use super::ExprBuilder;
use core::fmt;

/// Structural properties of a node, computed once when it is interned.
///
/// Caching these at construction avoids repeated recursive traversals: the
/// evaluator can decide whether a tree fits in the recursion budget without
/// walking it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ExprStats {
    /// Longest path from this node to a leaf, counting both ends. A leaf has depth 1.
    pub depth: usize,

    /// Number of nodes in the subtree rooted here, including this one.
    pub size: usize,
}

impl ExprStats {
    /// Stats of a single leaf.
    pub const LEAF: ExprStats = ExprStats { depth: 1, size: 1 };

    /// Stats of a binary node. Both counters saturate at `usize::MAX`, which
    /// arena trees with shared subtrees can reach.
    fn binary(left: ExprStats, right: ExprStats) -> Self {
        Self {
            depth: left.depth.max(right.depth).saturating_add(1),
            size: 1usize.saturating_add(left.size).saturating_add(right.size),
        }
    }
}

/// Data for a node: kind + cached stats.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ExprData<B: ExprBuilder> {
    /// The actual expression structure
    pub kind: ExprKind<B>,

    /// Cached properties for efficient queries
    pub stats: ExprStats,
}

/// Logical structure of an expression.
///
/// This is generic over the builder so the same kind works with different
/// storage strategies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprKind<B: ExprBuilder> {
    /// Integer literal
    Number(i64),

    /// Sum of two sub-expressions
    Addition(Expr<B>, Expr<B>),

    /// Product of two sub-expressions
    Multiplication(Expr<B>, Expr<B>),
}

impl<B: ExprBuilder> ExprKind<B> {
    /// Compute stats for this kind from its children's cached stats.
    ///
    /// This is called by the builder during node creation to build the
    /// `ExprData`. It never recurses past the immediate children.
    pub fn compute_stats(&self, builder: B) -> ExprStats {
        match self {
            ExprKind::Number(_) => ExprStats::LEAF,
            ExprKind::Addition(left, right) | ExprKind::Multiplication(left, right) => {
                ExprStats::binary(left.stats(builder), right.stats(builder))
            }
        }
    }

    /// Intern this kind into an `Expr` handle.
    pub fn intern(self, builder: B) -> Expr<B> {
        Expr::new(builder.intern_expr(self))
    }

    /// Children of this node, left first. Leaves have none.
    pub fn children(&self) -> Option<(&Expr<B>, &Expr<B>)> {
        match self {
            ExprKind::Number(_) => None,
            ExprKind::Addition(left, right) | ExprKind::Multiplication(left, right) => {
                Some((left, right))
            }
        }
    }
}

/// Handle to a stored expression node.
///
/// This is a lightweight wrapper around the builder's representation. Use the
/// builder that created it to look up the node data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Expr<B: ExprBuilder> {
    interned: B::InternedExpr,
}

// Implement Copy when InternedExpr is Copy (e.g., for ArenaBuilder)
impl<B: ExprBuilder> Copy for Expr<B> where B::InternedExpr: Copy {}

impl<B: ExprBuilder> Expr<B> {
    /// Create a new expression from an interned handle.
    pub fn new(interned: B::InternedExpr) -> Self {
        Self { interned }
    }

    /// Get the interned representation (for internal use).
    pub fn interned(&self) -> &B::InternedExpr {
        &self.interned
    }

    /// Consume the handle, returning the interned representation.
    pub fn into_interned(self) -> B::InternedExpr {
        self.interned
    }

    /// Get the full node data (kind + stats).
    pub fn data(&self, builder: B) -> &ExprData<B> {
        builder.expr_data(&self.interned)
    }

    /// Get the expression kind.
    pub fn kind(&self, builder: B) -> &ExprKind<B> {
        &self.data(builder).kind
    }

    /// Get the cached stats.
    pub fn stats(&self, builder: B) -> ExprStats {
        self.data(builder).stats
    }

    /// Returns the literal value if this is a `Number` leaf.
    pub fn as_number(&self, builder: B) -> Option<i64> {
        match self.kind(builder) {
            ExprKind::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_number(&self, builder: B) -> bool {
        matches!(self.kind(builder), ExprKind::Number(_))
    }

    pub fn is_addition(&self, builder: B) -> bool {
        matches!(self.kind(builder), ExprKind::Addition(_, _))
    }

    pub fn is_multiplication(&self, builder: B) -> bool {
        matches!(self.kind(builder), ExprKind::Multiplication(_, _))
    }
}

impl<B: ExprBuilder> fmt::Debug for Expr<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({:?})", self.interned)
    }
}
