/// Benchmark module for the grid aggregator.
/// Measures aggregation throughput over synthetic point clouds of
/// increasing size and bin granularity.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vgcharts::types::Point;
use vgcharts::utils::aggregate_grid;

/// Generate a deterministic cloud of weighted points spread over a
/// [-100, 100] square, weights in [0, 1].
fn synthetic_points(count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(0.0..1.0),
            )
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_aggregation");

    for &size in &[1_000usize, 10_000, 100_000] {
        let points = synthetic_points(size);

        group.bench_function(format!("aggregate_{}_points", size), |b| {
            b.iter(|| aggregate_grid(black_box(&points), 5.0, 5.0));
        });
    }

    // Finer bins mean more distinct cells and more map churn
    let points = synthetic_points(50_000);
    for &bin in &[0.5f64, 5.0, 50.0] {
        group.bench_function(format!("aggregate_50000_points_bin_{}", bin), |b| {
            b.iter(|| aggregate_grid(black_box(&points), bin, bin));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_aggregation
);
criterion_main!(benches);
