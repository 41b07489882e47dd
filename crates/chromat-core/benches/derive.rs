//! Derivation and Composition Benchmarks
//!
//! Derivation runs once per color space, so these mostly guard against
//! accidental regressions such as repeated inversion inside a chain.

use chromat_core::{
    ChromaticAdaptationMethod, Chromaticity, Matrix3x3, StandardSpace, TransformChain,
    build_chromatic_adaptation, build_rgb_to_xyz, compose, white_point,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn generate_rgb_data(count: usize) -> Vec<[f64; 3]> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            [t, (t * 2.0) % 1.0, (t * 3.0) % 1.0]
        })
        .collect()
}

// ============================================================================
// Derivation
// ============================================================================

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    let primaries = StandardSpace::Ap1.primaries();
    group.bench_function("build_rgb_to_xyz", |b| {
        b.iter(|| {
            build_rgb_to_xyz(
                black_box(primaries.red),
                black_box(primaries.green),
                black_box(primaries.blue),
                black_box(primaries.white),
            )
        })
    });

    group.bench_function("build_chromatic_adaptation", |b| {
        b.iter(|| {
            build_chromatic_adaptation(
                black_box(white_point::D65.chromaticity),
                black_box(Chromaticity::new(0.32168, 0.33767)),
            )
        })
    });

    group.bench_function("memoized_matrices", |b| {
        b.iter(|| black_box(StandardSpace::Srgb).matrices())
    });

    group.bench_function("chain_srgb_to_ap1", |b| {
        b.iter(|| {
            TransformChain::between_standard(
                black_box(StandardSpace::Srgb),
                black_box(StandardSpace::Ap1),
                ChromaticAdaptationMethod::Bradford,
            )
        })
    });

    group.finish();
}

// ============================================================================
// Composition and application
// ============================================================================

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    let chain = TransformChain::between_standard(
        StandardSpace::Srgb,
        StandardSpace::Ap1,
        ChromaticAdaptationMethod::Bradford,
    )
    .expect("standard spaces derive");
    let steps: Vec<Matrix3x3> = chain.steps().iter().map(|s| s.matrix).collect();
    let combined = chain.matrix();

    for size in [100, 10000].iter() {
        let input = generate_rgb_data(*size);
        let mut output = vec![[0.0f64; 3]; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("combined", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = combined.multiply_vec(*inp);
                }
            })
        });

        // Baseline: every step applied separately
        group.bench_with_input(BenchmarkId::new("stepwise", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = steps.iter().fold(*inp, |v, m| m.multiply_vec(v));
                }
            })
        });
    }

    group.bench_function("compose_3", |b| b.iter(|| compose(black_box(&steps))));

    group.finish();
}

criterion_group!(benches, bench_derive, bench_apply);

criterion_main!(benches);
