//! Benchmarks for AWB-RS operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use awb_balance::{BalanceParams, balance};
use awb_core::{Algorithm, ImageBuf};
use awb_transfer::srgb;

/// Deterministic pseudo-random test image (no RNG dependency needed here).
fn synthetic_image(width: u32, height: u32) -> ImageBuf {
    let plane_len = (width * height) as usize;
    let mut data = Vec::with_capacity(plane_len * 3);
    for c in 0..3u64 {
        for i in 0..plane_len as u64 {
            let h = (i ^ (c << 17)).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            data.push((h >> 40) as f32 / (1u64 << 24) as f32);
        }
    }
    ImageBuf::from_planes(width, height, data).unwrap()
}

/// Benchmark transfer function EOTF/OETF operations.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("srgb_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::oetf(black_box(x))).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark quantile estimation.
fn bench_quantile(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile");

    for size in [10_000usize, 100_000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| ((i * 2654435761) % 4096) as f32).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("p95", size), &values, |b, v| {
            b.iter(|| awb_stats::quantile(black_box(v), 0.95))
        });
    }

    group.finish();
}

/// Benchmark the three estimators end to end on a fixed-size image.
fn bench_estimators(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimators");

    let img = synthetic_image(512, 512);
    let params = BalanceParams::default();
    group.throughput(Throughput::Elements(img.plane_len() as u64));

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.as_str(), |b| {
            b.iter(|| balance(black_box(&img), algorithm, &params).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_quantile, bench_estimators);
criterion_main!(benches);
