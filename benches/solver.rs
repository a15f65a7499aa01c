use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use rs_nbody::models::{PointSet, Vec3};
use rs_nbody::solver::{direct_sum, solve, solve_with_workers};
use rs_nbody::utils::SolverConfig;

fn random_cloud(n: usize, side: f32, seed: u64) -> PointSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let positions = (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(0.0..side),
                rng.gen_range(0.0..side),
                rng.gen_range(0.0..side),
            )
        })
        .collect();
    PointSet::new(positions)
}

pub fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiled_solver");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(30);

    let points = random_cloud(4096, 100.0, 42);
    let cut = 40.0;

    for tile in [64_usize, 128, 256] {
        let config = SolverConfig::new(cut, tile).expect("valid config");
        group.bench_with_input(BenchmarkId::new("tile", tile), &config, |b, config| {
            b.iter(|| solve(&points, config).expect("solve failed"))
        });
    }

    let config = SolverConfig::new(cut, 128).expect("valid config");
    group.bench_function("tile_128_single_worker", |b| {
        b.iter(|| solve_with_workers(&points, &config, 1).expect("solve failed"))
    });

    group.bench_function("direct_sum", |b| {
        b.iter(|| direct_sum(&points, cut * cut))
    });

    group.finish();
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
