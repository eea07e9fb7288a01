//! Configuration options for the evaluator.

/// How `+` and `*` behave when the exact result does not fit in `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound (`i64::MAX + 1 == i64::MIN`).
    #[default]
    Wrapping,

    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,

    /// Fail with `EvalError::Overflow`.
    Checked,
}

/// Traversal used to walk the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Structural recursion on the call stack, bounded by `max_depth`.
    Recursive,

    /// Explicit heap-allocated work-list. Safe for trees of any depth.
    WorkList,

    /// `Recursive` when the tree's cached depth fits in `max_depth`,
    /// `WorkList` otherwise.
    #[default]
    Auto,
}

/// Configuration options for expression evaluation.
///
/// # Example
///
/// ```
/// use arbor_core::evaluator::{EvaluatorOptions, OverflowPolicy, Strategy};
///
/// let options = EvaluatorOptions {
///     overflow: OverflowPolicy::Checked,
///     strategy: Strategy::Recursive,
///     max_depth: 500,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Arithmetic overflow behavior.
    ///
    /// Default: `Wrapping`
    pub overflow: OverflowPolicy,

    /// Tree traversal.
    ///
    /// Default: `Auto`
    pub strategy: Strategy,

    /// Maximum recursion depth for `Strategy::Recursive`.
    ///
    /// `Strategy::Auto` recurses on any tree whose depth fits in this limit,
    /// so a very large value (e.g. `usize::MAX`) lets deep trees exhaust the
    /// native stack. Keep it within what the calling thread's stack can hold.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            overflow: OverflowPolicy::default(),
            strategy: Strategy::default(),
            max_depth: 1000,
        }
    }
}
