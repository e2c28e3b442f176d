//! Benchmark for fp-primer: IO composition, Maybe chains and folds.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fp_primer::control::Maybe;
use fp_primer::effect::IO;
use fp_primer::typeclass::{fold_left, fold_right};
use std::hint::black_box;

// =============================================================================
// IO Benchmarks
// =============================================================================

fn benchmark_io_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_chain");

    group.bench_function("map_5", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .map(|x| x + 1)
                .map(|x| x * 2)
                .map(|x| x + 3)
                .map(|x| x * 4)
                .map(|x| x + 5);
            black_box(io.run())
        });
    });

    group.bench_function("bind_5", |bencher| {
        bencher.iter(|| {
            let io = IO::pure(1)
                .bind(|x| IO::pure(x + 1))
                .bind(|x| IO::pure(x * 2))
                .bind(|x| IO::pure(x + 3))
                .bind(|x| IO::pure(x * 4))
                .bind(|x| IO::pure(x + 5));
            black_box(io.run())
        });
    });

    // Build once, run repeatedly
    let prebuilt = IO::pure(1).map(|x| x + 1).bind(|x| IO::pure(x * 2));
    group.bench_function("rerun_prebuilt", |bencher| {
        bencher.iter(|| black_box(prebuilt.run()));
    });

    group.finish();
}

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_bind");

    group.bench_function("bind_5_some", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(64))
                .bind(|x: i32| Maybe::some(x / 2))
                .bind(|x| Maybe::some(x - 1))
                .bind(|x| Maybe::some(x * 3))
                .bind(|x| Maybe::some(x + 7))
                .bind(|x| Maybe::some(x % 11));
            black_box(result.get_or_else(0))
        });
    });

    group.bench_function("bind_5_short_circuit", |bencher| {
        bencher.iter(|| {
            let result = Maybe::some(black_box(64))
                .bind(|_: i32| Maybe::<i32>::none())
                .bind(|x| Maybe::some(x - 1))
                .bind(|x| Maybe::some(x * 3))
                .bind(|x| Maybe::some(x + 7))
                .bind(|x| Maybe::some(x % 11));
            black_box(result.get_or_else(0))
        });
    });

    group.finish();
}

// =============================================================================
// Fold Benchmarks
// =============================================================================

fn benchmark_folds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("fold_left", size), &values, |bencher, values| {
            bencher.iter(|| black_box(fold_left(|a, x| a + x, 0_i64, values)));
        });

        group.bench_with_input(BenchmarkId::new("fold_right", size), &values, |bencher, values| {
            bencher.iter(|| black_box(fold_right(|x, a| x + a, 0_i64, values)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_io_chain, benchmark_maybe_bind, benchmark_folds);

criterion_main!(benches);
