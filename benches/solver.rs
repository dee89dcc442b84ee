//! Benchmarks for the Hua Rong Dao solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huarong::grid::Board;
use huarong::moves::successors;
use huarong::persistence::parse_board;
use huarong::solver::{best_first, depth_first, SearchLimits};

/// The traditional opening layout.
const CLASSIC: &str = "^11^\nv11v\n^<>^\nv22v\n2..2";

fn classic() -> Board {
    parse_board(CLASSIC).expect("classic layout parses")
}

/// Benchmark a full best-first solve of the classic layout.
fn bench_best_first(c: &mut Criterion) {
    let board = classic();
    let mut group = c.benchmark_group("classic");
    group.sample_size(10);
    group.bench_function("best_first", |b| {
        b.iter(|| best_first(black_box(&board), SearchLimits::UNLIMITED))
    });
    group.bench_function("depth_first", |b| {
        b.iter(|| depth_first(black_box(&board), SearchLimits::UNLIMITED))
    });
    group.finish();
}

/// Benchmark generating the successors of one board.
fn bench_successors(c: &mut Criterion) {
    let board = classic();

    c.bench_function("successors", |b| b.iter(|| successors(black_box(&board))));
}

/// Benchmark packing a board into its signature.
fn bench_signature(c: &mut Criterion) {
    let board = classic();

    c.bench_function("signature", |b| b.iter(|| black_box(&board).signature()));
}

criterion_group!(benches, bench_best_first, bench_successors, bench_signature);
criterion_main!(benches);
