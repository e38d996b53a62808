//! Criterion micro-benchmarks for the feature pipeline passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petri_bench::{bench_observations, bench_scene};
use petri_features::{Pipeline, TargetTable};
use petri_grid::{BinPolicy, GridPartition};
use petri_scene::Geometry;

/// Benchmark: fit grid edges to 20K observations.
fn bench_partition_fit(c: &mut Criterion) {
    let set = bench_observations(20, 1000);
    c.bench_function("partition_fit_20k", |b| {
        b.iter(|| {
            let grid = GridPartition::fit(&set, 8, BinPolicy::HalfOpen).unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: locate every observation once on an 8^3 grid.
fn bench_locate_20k(c: &mut Criterion) {
    let set = bench_observations(20, 1000);
    let grid = GridPartition::fit(&set, 8, BinPolicy::HalfOpen).unwrap();
    c.bench_function("locate_20k", |b| {
        b.iter(|| {
            for row in set.iter() {
                black_box(grid.locate(&row.position));
            }
        });
    });
}

/// Benchmark: build the target table for 20 timesteps of 1000 rows.
fn bench_target_build(c: &mut Criterion) {
    let set = bench_observations(20, 1000);
    let grid = GridPartition::fit(&set, 4, BinPolicy::HalfOpen).unwrap();
    let geometry = Geometry::resolve(&bench_scene()).unwrap();
    c.bench_function("target_build_20x1000", |b| {
        b.iter(|| {
            let targets = TargetTable::build(&set, &grid, &geometry, 1);
            black_box(&targets);
        });
    });
}

/// Benchmark: the full serial pipeline, end to end.
fn bench_full_run_serial(c: &mut Criterion) {
    let set = bench_observations(20, 1000);
    let scene = bench_scene();
    c.bench_function("full_run_serial_20x1000", |b| {
        b.iter(|| {
            let result = Pipeline::new(4, 1).run(&set, &scene).unwrap();
            black_box(&result);
        });
    });
}

/// Benchmark: the same run fanned out over four workers.
fn bench_full_run_parallel(c: &mut Criterion) {
    let set = bench_observations(20, 1000);
    let scene = bench_scene();
    c.bench_function("full_run_parallel_20x1000", |b| {
        b.iter(|| {
            let result = Pipeline::new(4, 1)
                .with_workers(4)
                .run(&set, &scene)
                .unwrap();
            black_box(&result);
        });
    });
}

criterion_group!(
    benches,
    bench_partition_fit,
    bench_locate_20k,
    bench_target_build,
    bench_full_run_serial,
    bench_full_run_parallel,
);
criterion_main!(benches);
