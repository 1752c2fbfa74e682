//! # Sieve Benchmarks
//!
//! The table is rebuilt on every call: cost is O(N log log N) in time and
//! N+1 bytes of memory.
//!
//! Run: `cargo bench --bench sieve_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kata_core::largest_prime_up_to;

fn bench_largest_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("largest_prime_up_to");

    for max in [1_000i64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(max), &max, |b, &max| {
            b.iter(|| largest_prime_up_to(black_box(max)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_largest_prime);
criterion_main!(benches);
