//! Binary operator implementations.

use super::{EvalError, OverflowPolicy};
use core::fmt;

/// The arithmetic operators an expression node can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Mul => write!(f, "*"),
        }
    }
}

/// Evaluate a binary operation on two integers with wrapping arithmetic.
///
/// Never fails and never panics.
pub(super) fn eval_binary_wrapping(op: BinaryOp, left: i64, right: i64) -> i64 {
    match op {
        BinaryOp::Add => left.wrapping_add(right),
        BinaryOp::Mul => left.wrapping_mul(right),
    }
}

/// Evaluate a binary operation on two integers under the given overflow policy.
pub(super) fn eval_binary_int(
    op: BinaryOp,
    left: i64,
    right: i64,
    policy: OverflowPolicy,
) -> Result<i64, EvalError> {
    match policy {
        OverflowPolicy::Wrapping => Ok(eval_binary_wrapping(op, left, right)),
        OverflowPolicy::Saturating => Ok(match op {
            BinaryOp::Add => left.saturating_add(right),
            BinaryOp::Mul => left.saturating_mul(right),
        }),
        OverflowPolicy::Checked => {
            let result = match op {
                BinaryOp::Add => left.checked_add(right),
                BinaryOp::Mul => left.checked_mul(right),
            };
            result.ok_or_else(|| {
                tracing::debug!(%op, left, right, "integer overflow");
                EvalError::Overflow { op, left, right }
            })
        }
    }
}
