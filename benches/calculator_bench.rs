//! Calorie calculator benchmarks.
//!
//! The estimator is a handful of multiplications; this bench exists to keep
//! it that way (the projection hash is the only part that could quietly grow).

use criterion::{criterion_group, criterion_main, Criterion};
use fitpro_core::calculator::{estimate, Activity, Intensity};
use std::hint::black_box;

fn estimate_bench(c: &mut Criterion) {
    c.bench_function("estimate_running_hour", |b| {
        b.iter(|| {
            black_box(estimate(
                black_box(70.0),
                black_box(60.0),
                Activity::Running,
                Intensity::Moderate,
            ))
        })
    });
}

criterion_group!(calculator_benches, estimate_bench);
criterion_main!(calculator_benches);
