use std::f64::consts::TAU;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fourier_core::{SampleDomain, SeriesParameters};
use fourier_series::{ComplexSeriesEvaluator, Preset, RealSeriesEvaluator};

fn bench_evaluators(c: &mut Criterion) {
    let preset = Preset::Square { amplitude: 1.0 };
    let domain = SampleDomain::linspace(-TAU, TAU, 1000).expect("domain");
    let complex = preset.complex_source();
    let (cosine, sine) = preset.real_sources();

    let mut group = c.benchmark_group("series_throughput");
    for order in [10i64, 100, 1000] {
        let params = SeriesParameters::new(order, TAU);
        group.bench_with_input(BenchmarkId::new("complex", order), &params, |b, params| {
            let evaluator = ComplexSeriesEvaluator::new();
            b.iter(|| evaluator.evaluate(&complex, params, &domain).expect("complex"));
        });
        group.bench_with_input(BenchmarkId::new("real", order), &params, |b, params| {
            let evaluator = RealSeriesEvaluator::new();
            b.iter(|| evaluator.evaluate(&cosine, &sine, params, &domain).expect("real"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluators);
criterion_main!(benches);
