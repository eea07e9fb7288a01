//! Cross-builder operations for expressions.
//!
//! This module provides functions for:
//! - Structural comparison of expressions across different builders
//! - Conversion between builder representations
//!
//! Both walk the tree with an explicit stack, so they are safe on trees of
//! any depth.

use super::{Expr, ExprBuilder, ExprKind};
use crate::{Vec, vec};

/// Structurally compare two expressions from potentially different builders.
///
/// Returns `true` if the expressions have the same shape and the same
/// literals, regardless of which builders were used to create them.
///
/// # Example
///
/// ```
/// use arbor_core::{exprs_equal, ArenaBuilder, BoxBuilder, ExprBuilder};
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let ab = ArenaBuilder::new(&arena);
/// let bb = BoxBuilder::new();
///
/// let e1 = ab.addition(ab.number(1), ab.number(2));
/// let e2 = bb.addition(bb.number(1), bb.number(2));
///
/// assert!(exprs_equal(&e1, ab, &e2, bb));
/// ```
pub fn exprs_equal<B1: ExprBuilder, B2: ExprBuilder>(
    expr1: &Expr<B1>,
    builder1: B1,
    expr2: &Expr<B2>,
    builder2: B2,
) -> bool {
    let mut pending = vec![(expr1, expr2)];

    while let Some((e1, e2)) = pending.pop() {
        // Cached stats differ whenever the shapes differ
        if e1.stats(builder1) != e2.stats(builder2) {
            return false;
        }

        match (e1.kind(builder1), e2.kind(builder2)) {
            (ExprKind::Number(v1), ExprKind::Number(v2)) => {
                if v1 != v2 {
                    return false;
                }
            }
            (ExprKind::Addition(l1, r1), ExprKind::Addition(l2, r2))
            | (ExprKind::Multiplication(l1, r1), ExprKind::Multiplication(l2, r2)) => {
                pending.push((r1, r2));
                pending.push((l1, l2));
            }
            _ => return false,
        }
    }

    true
}

enum ConvertFrame<'e, Src: ExprBuilder> {
    Enter(&'e Expr<Src>),
    BuildAddition,
    BuildMultiplication,
}

/// Rebuild an expression in another builder.
///
/// The result is structurally equal to the input (see [`exprs_equal`]).
///
/// # Example
///
/// ```
/// use arbor_core::{convert_expr, exprs_equal, ArenaBuilder, BoxBuilder, ExprBuilder};
/// use bumpalo::Bump;
///
/// let bb = BoxBuilder::new();
/// let boxed = bb.multiplication(bb.number(3), bb.number(4));
///
/// let arena = Bump::new();
/// let ab = ArenaBuilder::new(&arena);
/// let in_arena = convert_expr(&boxed, bb, ab);
///
/// assert!(exprs_equal(&boxed, bb, &in_arena, ab));
/// ```
pub fn convert_expr<Src: ExprBuilder, Dst: ExprBuilder>(
    expr: &Expr<Src>,
    src: Src,
    dst: Dst,
) -> Expr<Dst> {
    let mut frames = vec![ConvertFrame::Enter(expr)];
    let mut built: Vec<Expr<Dst>> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            ConvertFrame::Enter(e) => match e.kind(src) {
                ExprKind::Number(value) => built.push(dst.number(*value)),
                ExprKind::Addition(left, right) => {
                    frames.push(ConvertFrame::BuildAddition);
                    frames.push(ConvertFrame::Enter(right));
                    frames.push(ConvertFrame::Enter(left));
                }
                ExprKind::Multiplication(left, right) => {
                    frames.push(ConvertFrame::BuildMultiplication);
                    frames.push(ConvertFrame::Enter(right));
                    frames.push(ConvertFrame::Enter(left));
                }
            },
            ConvertFrame::BuildAddition => {
                let (left, right) = pop_operands(&mut built);
                built.push(dst.addition(left, right));
            }
            ConvertFrame::BuildMultiplication => {
                let (left, right) = pop_operands(&mut built);
                built.push(dst.multiplication(left, right));
            }
        }
    }

    match built.pop() {
        Some(result) if built.is_empty() => result,
        _ => unreachable!("conversion must produce exactly one root"),
    }
}

/// Pop the two most recent results, returned in (left, right) order.
fn pop_operands<T>(built: &mut Vec<T>) -> (T, T) {
    // Children are entered left first, so the right operand is on top
    match (built.pop(), built.pop()) {
        (Some(right), Some(left)) => (left, right),
        _ => unreachable!("binary node converted without both operands"),
    }
}
