//! # Factorial Benchmarks
//!
//! Compares cache hits and misses across the factorial implementations.
//! Hits should be O(1); misses cost one multiplication per new entry.
//!
//! Run: `cargo bench --bench factorial_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kata_core::{factorial, factorial_rec, BigFactorialCache, BoundedFactorialCache};

/// 64-bit variants on the shared domain 0..=20
fn bench_fixed_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial_fixed_width");

    group.bench_function("iterative_20", |b| {
        b.iter(|| factorial(black_box(20)))
    });

    group.bench_function("recursive_20", |b| {
        b.iter(|| factorial_rec(black_box(20)))
    });

    let mut warm = BoundedFactorialCache::new();
    warm.factorial(20).unwrap();
    group.bench_function("bounded_hit_20", |b| {
        b.iter(|| warm.factorial(black_box(20)))
    });

    group.bench_function("bounded_cold_20", |b| {
        b.iter(|| BoundedFactorialCache::new().factorial(black_box(20)))
    });

    group.finish();
}

/// Arbitrary precision: warm hit vs. filling a fresh table
fn bench_big(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial_big");

    for n in [50i64, 500, 2_000] {
        let warm = BigFactorialCache::new();
        warm.factorial(n).unwrap();

        group.bench_with_input(BenchmarkId::new("hit", n), &n, |b, &n| {
            b.iter(|| warm.factorial(black_box(n)))
        });

        group.bench_with_input(BenchmarkId::new("cold", n), &n, |b, &n| {
            b.iter(|| BigFactorialCache::new().factorial(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixed_width, bench_big);
criterion_main!(benches);
