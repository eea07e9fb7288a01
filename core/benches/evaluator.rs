//! Benchmarks for the arbor evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. strategies: Recursive vs work-list evaluation of the same tree
//! 2. builders: Tree construction + evaluation with arena vs box storage

use arbor_core::evaluator::{EvaluatorOptions, Strategy, eval_with_options, evaluate};
use arbor_core::{ArenaBuilder, BoxBuilder, Expr, ExprBuilder};
use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Build a balanced tree with `2^levels` leaves, alternating `+` and `*`.
fn balanced<B: ExprBuilder>(b: B, levels: u32, seed: i64) -> Expr<B> {
    if levels == 0 {
        return b.number(seed % 7 - 3);
    }
    let left = balanced(b, levels - 1, seed * 2 + 1);
    let right = balanced(b, levels - 1, seed * 2 + 2);
    if levels % 2 == 0 {
        b.addition(left, right)
    } else {
        b.multiplication(left, right)
    }
}

/// Generate `1 + (1 + (1 + ... + 1))` with `n` leaves.
fn right_chain<B: ExprBuilder>(b: B, n: usize) -> Expr<B> {
    let mut acc = b.number(1);
    for _ in 1..n {
        acc = b.addition(b.number(1), acc);
    }
    acc
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    // Sizes chosen to stay under default stack depth limit (1000)
    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));

        let arena = Bump::new();
        let b = ArenaBuilder::new(&arena);
        let tree = right_chain(b, size);

        for strategy in [Strategy::Recursive, Strategy::WorkList] {
            let options = EvaluatorOptions {
                strategy,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), size),
                &tree,
                |bench, tree| {
                    bench.iter(|| {
                        let value = eval_with_options(black_box(b), black_box(tree), &options)
                            .expect("Eval failed");
                        black_box(value)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("builders");

    for levels in [6u32, 10, 14] {
        group.throughput(Throughput::Elements(1 << levels));

        group.bench_with_input(BenchmarkId::new("arena", levels), &levels, |bench, &levels| {
            bench.iter(|| {
                let arena = Bump::new();
                let b = ArenaBuilder::new(&arena);
                let tree = balanced(b, levels, 0);
                black_box(evaluate(b, &tree))
            })
        });

        group.bench_with_input(BenchmarkId::new("box", levels), &levels, |bench, &levels| {
            bench.iter(|| {
                let b = BoxBuilder::new();
                let tree = balanced(b, levels, 0);
                black_box(evaluate(b, &tree))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_builders);
criterion_main!(benches);
