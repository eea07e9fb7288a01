//! Evaluation errors.
//!
//! Trees built through a builder are always well formed, so evaluation can
//! only fail when the caller opts into a policy that reports a problem:
//!
//! - **Arithmetic errors**: `OverflowPolicy::Checked` surfaces integer
//!   overflow instead of wrapping or saturating.
//! - **Resource exceeded errors**: `Strategy::Recursive` refuses to recurse
//!   past `max_depth`.

use super::BinaryOp;

/// Error returned by [`eval_with_options`](super::eval_with_options).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// An operation overflowed `i64` under `OverflowPolicy::Checked`.
    #[error("Integer overflow: {left} {op} {right} does not fit in 64 bits")]
    Overflow { op: BinaryOp, left: i64, right: i64 },

    /// Recursive evaluation would exceed the configured depth limit.
    #[error("Evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    /// Returns true for errors caused by resource limits rather than arithmetic.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, EvalError::StackOverflow { .. })
    }
}
