//! Criterion benchmarks for polygon transforms.
//! Focus sizes: n in {3, 6, 64, 1024} vertices.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygons::prelude::*;

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for &n in &[3usize, 6, 64, 1024] {
        group.bench_with_input(BenchmarkId::new("rotate_centre", n), &n, |b, &n| {
            b.iter_batched(
                || Polygon::ngon(n, 1.0).unwrap(),
                |mut p| p.rotate_centre(0.3),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("area", n), &n, |b, &n| {
            let p = Polygon::ngon(n, 1.0).unwrap();
            b.iter(|| p.area())
        });
    }
    group.bench_function("symmetric_rescale", |b| {
        b.iter_batched(
            || {
                let mut r = Polygon::rectangle(3.0, 1.0).unwrap();
                r.rotate_centre(0.7);
                r
            },
            |mut r| r.rescale(2.0, 0.5),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
