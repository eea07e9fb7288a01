//! Integration tests for arbor-core.
//!
//! These tests verify that construction, inspection, display and evaluation
//! work together across both ArenaBuilder and BoxBuilder.

use arbor_core::evaluator::{self, EvalError, EvaluatorOptions, OverflowPolicy, Strategy};
use arbor_core::{
    ArenaBuilder, BoxBuilder, Expr, ExprBuilder, ExprDisplay, ExprKind, ExprVisitor,
    convert_expr, exprs_equal,
};
use bumpalo::Bump;
use pretty_assertions::assert_eq;

/// Build `(5 + 4) * 2` with any builder.
fn tutorial<B: ExprBuilder>(b: B) -> Expr<B> {
    let five = b.number(5);
    let four = b.number(4);
    let sum = b.addition(five, four);
    b.multiplication(sum, b.number(2))
}

#[test]
fn test_tutorial_with_both_builders() {
    let arena = Bump::new();
    let ab = ArenaBuilder::new(&arena);
    let bb = BoxBuilder::new();

    let in_arena = tutorial(ab);
    let boxed = tutorial(bb);

    assert_eq!(evaluator::evaluate(ab, &in_arena), 18);
    assert_eq!(evaluator::evaluate(bb, &boxed), 18);
    assert!(exprs_equal(&in_arena, ab, &boxed, bb));
    assert_eq!(in_arena.display(ab), "(5 + 4) * 2");
    assert_eq!(boxed.display(bb), "(5 + 4) * 2");
}

#[test]
fn test_pattern_match_on_tree() {
    let b = BoxBuilder::new();
    let expr = tutorial(b);

    let ExprKind::Multiplication(sum, two) = expr.kind(b) else {
        panic!("expected a multiplication at the root");
    };
    assert_eq!(two.as_number(b), Some(2));

    match sum.kind(b) {
        ExprKind::Addition(left, right) => {
            assert_eq!(left.as_number(b), Some(5));
            assert_eq!(right.as_number(b), Some(4));
        }
        other => panic!("expected an addition, got {:?}", other),
    }
}

#[test]
fn test_converted_tree_evaluates_the_same() {
    let bb = BoxBuilder::new();
    let boxed = bb.addition(
        bb.multiplication(bb.number(-3), bb.number(8)),
        bb.addition(bb.number(100), bb.multiplication(bb.number(7), bb.number(7))),
    );

    let arena = Bump::new();
    let ab = ArenaBuilder::new(&arena);
    let converted = convert_expr(&boxed, bb, ab);

    assert_eq!(
        evaluator::evaluate(ab, &converted),
        evaluator::evaluate(bb, &boxed)
    );
    assert_eq!(evaluator::evaluate(ab, &converted), 125);
}

#[test]
fn test_deep_tree_end_to_end() {
    let arena = Bump::new();
    let b = ArenaBuilder::new(&arena);

    let depth = 100_000;
    let mut tree = b.number(1);
    for _ in 1..depth {
        tree = b.addition(b.number(1), tree);
    }

    assert_eq!(evaluator::evaluate(b, &tree), depth as i64);

    // The recursive strategy refuses, the default options do not
    let recursive = EvaluatorOptions {
        strategy: Strategy::Recursive,
        ..Default::default()
    };
    assert_eq!(
        evaluator::eval_with_options(b, &tree, &recursive),
        Err(EvalError::StackOverflow {
            depth: 1001,
            max_depth: 1000
        })
    );
    assert_eq!(
        evaluator::eval_with_options(b, &tree, &EvaluatorOptions::default()),
        Ok(depth as i64)
    );

    // Converting also runs on an explicit stack
    let copy = convert_expr(&tree, b, b);
    assert!(exprs_equal(&tree, b, &copy, b));
}

#[test]
fn test_checked_overflow_through_public_api() {
    let b = BoxBuilder::new();
    let expr = b.multiplication(b.number(i64::MIN), b.number(-1));
    let options = EvaluatorOptions {
        overflow: OverflowPolicy::Checked,
        ..Default::default()
    };

    let err = evaluator::eval_with_options(b, &expr, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Integer overflow: -9223372036854775808 * -1 does not fit in 64 bits"
    );
}

/// Collects literals in evaluation order.
struct Literals(Vec<i64>);

impl<B: ExprBuilder> ExprVisitor<B> for Literals {
    fn visit_expr(&mut self, expr: &Expr<B>, builder: B) {
        if let Some(value) = expr.as_number(builder) {
            self.0.push(value);
        }
        self.super_visit_expr(expr, builder);
    }
}

#[test]
fn test_visitor_sees_literals_left_to_right() {
    let arena = Bump::new();
    let b = ArenaBuilder::new(&arena);
    let expr = b.addition(
        b.multiplication(b.number(1), b.number(2)),
        b.addition(b.number(3), b.multiplication(b.number(4), b.number(5))),
    );

    let mut literals = Literals(Vec::new());
    literals.visit_expr(&expr, b);
    assert_eq!(literals.0, vec![1, 2, 3, 4, 5]);
    assert_eq!(expr.stats(b).size, 9);
}
