use crate::ir::{ExprBuilder, ExprData, ExprKind};
use bumpalo::Bump;

/// Builder that allocates nodes in a `Bump` arena.
///
/// Children are referenced as `&'arena ExprData`, so handles are `Copy` and
/// a whole tree is released at once when the arena drops. No deduplication
/// is performed; building the same subtree twice allocates it twice.
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
/// let sum = b.addition(b.number(4), b.number(1));
/// let expr = b.multiplication(b.number(4), sum);
/// assert_eq!(expr.stats(b).size, 5);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Manual implementations since Bump doesn't implement PartialEq/Eq/Hash
// We use pointer equality - two builders are equal if they point to the same arena
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }

    /// Bytes currently allocated by the backing arena.
    pub fn allocated_bytes(&self) -> usize {
        self.arena.allocated_bytes()
    }
}

impl<'arena> ExprBuilder for ArenaBuilder<'arena> {
    type InternedExpr = &'arena ExprData<Self>;

    fn intern_expr(self, kind: ExprKind<Self>) -> Self::InternedExpr {
        let stats = kind.compute_stats(self);
        self.arena.alloc(ExprData { kind, stats })
    }

    fn expr_data(self, expr: &Self::InternedExpr) -> &ExprData<Self> {
        expr
    }
}
