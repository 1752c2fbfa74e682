//! # LinkedStack Benchmarks
//!
//! Push/pop churn should reuse freed arena slots instead of growing.
//!
//! Run: `cargo bench --bench stack_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kata_structures::LinkedStack;

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_stack");

    group.bench_function("push_1k", |b| {
        b.iter(|| {
            let mut stack = LinkedStack::new();
            for i in 0..1_000u32 {
                stack.push(black_box(i));
            }
            stack
        })
    });

    group.bench_function("churn_1k", |b| {
        let mut stack = LinkedStack::new();
        b.iter(|| {
            for i in 0..1_000u32 {
                stack.push(black_box(i));
                black_box(stack.pop().ok());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stack);
criterion_main!(benches);
