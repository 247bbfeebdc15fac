//! Benchmarks for the period search methods.

use anofox_periodogram::core::{ObservationSeries, RunState, ScanParameters};
use anofox_periodogram::periodogram::{
    Method, PeriodSearch, SpectralWindowNormalization, TopHitLimit, TopHitSet, TrigKernel,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_series(n: usize, period: f64) -> ObservationSeries {
    // quasi-random gaps between 0.5 and 1.5 time units
    let mut t = 0.0;
    let times: Vec<f64> = (0..n)
        .map(|i| {
            t += 0.5 + ((i * 7919) % 1000) as f64 / 1000.0;
            t
        })
        .collect();
    let mags = times
        .iter()
        .map(|t| 10.0 + (2.0 * std::f64::consts::PI * t / period).sin())
        .collect();
    ObservationSeries::from_columns(times, mags).unwrap()
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_search_methods");
    group.sample_size(20);

    let frequency_scan = ScanParameters::new(0.01, 0.5, 0.001);
    let period_scan = ScanParameters::new(2.0, 50.0, 0.1);

    for size in [100, 400, 1600].iter() {
        let series = generate_series(*size, 7.3);

        group.bench_with_input(BenchmarkId::new("AoV", size), size, |b, _| {
            let search = PeriodSearch::new(Method::aov());
            b.iter(|| search.run(black_box(&series), &period_scan, &RunState::new()))
        });

        group.bench_with_input(BenchmarkId::new("Deeming", size), size, |b, _| {
            let search = PeriodSearch::new(Method::deeming());
            b.iter(|| search.run(black_box(&series), &frequency_scan, &RunState::new()))
        });

        group.bench_with_input(BenchmarkId::new("SpectralWindow", size), size, |b, _| {
            let search =
                PeriodSearch::new(Method::spectral_window(SpectralWindowNormalization::Deeming));
            b.iter(|| search.run(black_box(&series), &frequency_scan, &RunState::new()))
        });

        group.bench_with_input(BenchmarkId::new("DCDFT", size), size, |b, _| {
            let search = PeriodSearch::new(Method::dcdft());
            b.iter(|| search.run(black_box(&series), &frequency_scan, &RunState::new()))
        });

        group.bench_with_input(BenchmarkId::new("MultiHarmonic3", size), size, |b, _| {
            let search = PeriodSearch::new(Method::multi_harmonic(3));
            b.iter(|| search.run(black_box(&series), &frequency_scan, &RunState::new()))
        });
    }

    group.finish();
}

fn bench_trig_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig_kernels");
    let series = generate_series(1000, 7.3);
    let params = ScanParameters::new(0.01, 0.5, 0.0005);

    for kernel in [TrigKernel::Direct, TrigKernel::HalfAngleTangent] {
        group.bench_function(kernel.name(), |b| {
            let search = PeriodSearch::new(Method::deeming().with_kernel(kernel));
            b.iter(|| search.run(black_box(&series), &params, &RunState::new()))
        });
    }

    group.finish();
}

fn bench_top_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_hits");
    let series = generate_series(400, 7.3);
    let analysis = PeriodSearch::new(Method::deeming())
        .run(&series, &ScanParameters::new(0.001, 1.0, 0.0001), &RunState::new())
        .unwrap();

    for limit in [TopHitLimit::AtMost(20), TopHitLimit::Unbounded] {
        let label = format!("{:?}", limit);
        group.bench_function(label, |b| {
            b.iter(|| TopHitSet::extract(black_box(&analysis.results), limit))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_methods, bench_trig_kernels, bench_top_hits);
criterion_main!(benches);
