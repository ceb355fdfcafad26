//! Construction throughput for both engines on seeded random inputs.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deltri::core::algorithms::bowyer_watson::triangulate_bowyer;
use deltri::core::algorithms::de_berg::triangulate_berg;
use deltri::core::algorithms::insertion::TriangulateOptions;
use deltri::geometry::point_generation::generate_random_points_seeded;
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 500, 2000];
const SEED: u64 = 42;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation_creation");
    for size in SIZES {
        let points = generate_random_points_seeded(size, (-100.0, 100.0), SEED).unwrap();

        group.bench_with_input(BenchmarkId::new("bowyer_watson", size), &points, |b, points| {
            b.iter(|| {
                let tri =
                    triangulate_bowyer(black_box(points), TriangulateOptions::default()).unwrap();
                black_box(tri)
            });
        });

        group.bench_with_input(BenchmarkId::new("de_berg", size), &points, |b, points| {
            b.iter(|| {
                let (tri, dag) =
                    triangulate_berg(black_box(points), TriangulateOptions::default()).unwrap();
                black_box((tri, dag))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction);
criterion_main!(benches);
