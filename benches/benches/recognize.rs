// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use std::f64::consts::TAU;
use understory_unistroke::{Metric, Recognizer};

/// A closed Lissajous-style stroke; `k` varies the shape.
fn stroke(k: usize, samples: usize) -> Vec<Point> {
    let a = 1.0 + (k % 5) as f64;
    let b = 2.0 + (k % 3) as f64;
    let phase = k as f64 * 0.37;
    (0..samples)
        .map(|i| {
            let t = TAU * i as f64 / samples as f64;
            Point::new(
                100.0 + 80.0 * (a * t + phase).sin(),
                100.0 + 60.0 * (b * t).cos(),
            )
        })
        .collect()
}

fn recognizer_with(templates: usize) -> Recognizer {
    let mut recognizer = Recognizer::new();
    for k in 0..templates {
        recognizer
            .add_template(format!("shape-{k}"), &stroke(k, 48))
            .expect("generated strokes are not degenerate");
    }
    recognizer
}

fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("unistroke/recognize");

    // Rotation search runs a golden-section search per template, so it is
    // expected to be far slower per template than the closed form.
    for templates in [16usize, 64, 256] {
        let recognizer = recognizer_with(templates);
        let input = stroke(7, 120);
        group.throughput(Throughput::Elements(templates as u64));

        for metric in [Metric::RotationSearch, Metric::Protractor] {
            group.bench_with_input(
                BenchmarkId::new(format!("{metric:?}"), templates),
                &input,
                |b, input| {
                    b.iter(|| black_box(recognizer.recognize_with(black_box(input), metric)));
                },
            );
        }
    }

    group.finish();
}

fn bench_n_best(c: &mut Criterion) {
    let mut group = c.benchmark_group("unistroke/n_best");
    let recognizer = recognizer_with(256);
    let input = stroke(11, 120);

    for limit in [1usize, 8, 64] {
        group.bench_with_input(BenchmarkId::new("protractor", limit), &limit, |b, &limit| {
            b.iter(|| {
                black_box(recognizer.recognize_n_best(
                    black_box(&input),
                    Metric::Protractor,
                    limit,
                ))
            });
        });
    }

    group.finish();
}

fn bench_add_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("unistroke/add_template");

    for samples in [16usize, 128, 1_024] {
        let points = stroke(3, samples);
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &points, |b, points| {
            b.iter(|| {
                let mut recognizer = Recognizer::new();
                black_box(recognizer.add_template("shape", black_box(points)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recognize, bench_n_best, bench_add_template);
criterion_main!(benches);
