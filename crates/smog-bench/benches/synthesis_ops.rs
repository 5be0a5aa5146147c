//! Criterion benchmarks for the full synthesis pipeline.

use criterion::{criterion_group, criterion_main, Criterion};
use smog_bench::{concentrated_profile, hull_section_profiles, reference_profile};
use smog_synth::synthesize;

/// Benchmark: 64-point synthesis with a raised CoG.
fn bench_synthesize_64(c: &mut Criterion) {
    let cfg = reference_profile();
    c.bench_function("synthesize_64", |b| {
        b.iter(|| std::hint::black_box(synthesize(std::hint::black_box(&cfg)).unwrap()));
    });
}

/// Benchmark: 125-point synthesis where most points get pinned.
fn bench_synthesize_125_pinned(c: &mut Criterion) {
    let cfg = concentrated_profile();
    c.bench_function("synthesize_125_pinned", |b| {
        b.iter(|| std::hint::black_box(synthesize(std::hint::black_box(&cfg)).unwrap()));
    });
}

/// Benchmark: one 720-point hull section.
fn bench_synthesize_720(c: &mut Criterion) {
    let cfg = hull_section_profiles().swap_remove(3);
    let mut group = c.benchmark_group("synthesize_720");
    group.sample_size(20);
    group.bench_function("midship_section", |b| {
        b.iter(|| std::hint::black_box(synthesize(std::hint::black_box(&cfg)).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_synthesize_64,
    bench_synthesize_125_pinned,
    bench_synthesize_720
);
criterion_main!(benches);
