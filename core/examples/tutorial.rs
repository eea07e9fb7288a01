//! Builds `(5 + 4) * 2` in an arena, prints it, and evaluates it.
//!
//! Run with: `cargo run --example tutorial` in the core/ directory.

use arbor_core::evaluator::evaluate;
use arbor_core::{ArenaBuilder, ExprBuilder, ExprDisplay};
use bumpalo::Bump;

fn main() {
    let arena = Bump::new();
    let b = ArenaBuilder::new(&arena);

    let five = b.number(5);
    let four = b.number(4);
    let sum = b.addition(five, four);
    let product = b.multiplication(sum, b.number(2));

    println!("{} = {}", product.display(b), evaluate(b, &product));
}
