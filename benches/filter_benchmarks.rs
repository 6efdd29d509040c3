//! Filter Benchmarks
//!
//! Performance benchmarks for filter design and zero-phase filtering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eeg_filter::dsp::{design_bandpass, design_notch, filtfilt};
use eeg_filter::signal::SyntheticEeg;
use eeg_filter::{Pipeline, PipelineConfig};

fn benchmark_design(c: &mut Criterion) {
    c.bench_function("design_notch", |b| {
        b.iter(|| design_notch(black_box(60.0), 256.0, 30.0).unwrap())
    });
    c.bench_function("design_bandpass_order5", |b| {
        b.iter(|| design_bandpass(black_box(8.0), 30.0, 256.0, 5).unwrap())
    });
}

fn benchmark_filtfilt(c: &mut Criterion) {
    let matrix = SyntheticEeg::default().generate(1, 256 * 60, 256.0, 0).unwrap();
    let coeffs = design_bandpass(8.0, 30.0, 256.0, 5).unwrap();

    c.bench_function("filtfilt_bandpass_60s", |b| {
        b.iter(|| filtfilt(&coeffs, black_box(matrix.channel(0))).unwrap())
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let config = PipelineConfig::default();
    let matrix = SyntheticEeg::default().from_config(&config).unwrap();
    let pipeline = Pipeline::from_config(&config);

    c.bench_function("pipeline_default_3x1024", |b| {
        b.iter(|| pipeline.run(black_box(&matrix)).unwrap())
    });
}

criterion_group!(benches, benchmark_design, benchmark_filtfilt, benchmark_pipeline);
criterion_main!(benches);
