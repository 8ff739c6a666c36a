//! Benchmarks for Hopfield training and recall.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engram::prelude::*;

/// Deterministic pseudo-random bit pattern.
fn pattern(size: usize, seed: u64) -> Vec<bool> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            // Simple LCG for deterministic "random" bits
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            (state >> 16) & 1 == 1
        })
        .collect()
}

fn bench_hopfield_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("hopfield_train");

    for size in [16, 64, 128].iter() {
        let p = pattern(*size, 42);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut net = HopfieldNetwork::new(size).unwrap();
                net.train(black_box(&p)).unwrap();
                net
            });
        });
    }

    group.finish();
}

fn bench_hopfield_present(c: &mut Criterion) {
    let mut group = c.benchmark_group("hopfield_present");

    for size in [16, 64, 128, 256].iter() {
        let mut net = HopfieldNetwork::new(*size).unwrap();
        for seed in 0..4 {
            net.train(&pattern(*size, seed)).unwrap();
        }
        let probe = pattern(*size, 7);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| net.present(black_box(&probe)).unwrap());
        });
    }

    group.finish();
}

fn bench_matrix_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_multiply");

    for size in [8, 32, 64].iter() {
        let a = Matrix::random(*size, *size, Some(1)).unwrap();
        let b = Matrix::random(*size, *size, Some(2)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| math::multiply(black_box(&a), black_box(&b)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hopfield_train,
    bench_hopfield_present,
    bench_matrix_multiply
);
criterion_main!(benches);
