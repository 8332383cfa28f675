// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_unistroke::RecognizerConfig;
use understory_unistroke::normalize::{normalize, resample};
use understory_unistroke::vectorize::vectorize;

fn zigzag(samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let x = i as f64 * 3.0;
            let y = if i % 2 == 0 { 0.0 } else { 40.0 } + (i as f64 * 0.1).sin();
            Point::new(x, y)
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("unistroke/normalize");
    let config = RecognizerConfig::default();

    for samples in [32usize, 256, 2_048] {
        let points = zigzag(samples);
        group.throughput(Throughput::Elements(samples as u64));

        group.bench_with_input(BenchmarkId::new("resample", samples), &points, |b, points| {
            b.iter(|| black_box(resample(black_box(points), config.point_count)));
        });

        group.bench_with_input(BenchmarkId::new("normalize", samples), &points, |b, points| {
            b.iter(|| black_box(normalize(black_box(points), &config)));
        });

        group.bench_with_input(
            BenchmarkId::new("normalize+vectorize", samples),
            &points,
            |b, points| {
                b.iter(|| {
                    let path = normalize(black_box(points), &config).expect("valid stroke");
                    black_box(vectorize(&path))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
