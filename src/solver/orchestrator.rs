use std::time::{Duration, Instant};

use log::debug;
use rayon::prelude::*;

use crate::models::{PointSet, Vec3};
use crate::solver::ForceAccumulator;
use crate::tiles::{process_tile_pair, PairScratch, TileDecomposition};
use crate::utils::{NBodyError, SolverConfig};

/// The result of a solve: total potential energy, one force per particle,
/// and the time spent in tile processing plus reduction.
#[derive(Debug, Clone)]
pub struct Solution {
    pub energy: f64,
    pub forces: Vec<Vec3>,
    pub elapsed: Duration,
}

/// Runs the tiled solver with one worker slot per available thread.
///
/// # Example
/// ```
/// use rs_nbody::models::{PointSet, Vec3};
/// use rs_nbody::solver::solve;
/// use rs_nbody::utils::SolverConfig;
///
/// let points = PointSet::new(vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
/// ]);
/// let config = SolverConfig::new(2.0, 1).unwrap();
/// let solution = solve(&points, &config).unwrap();
/// assert!((solution.energy - 1.0).abs() < 1e-6);
/// ```
pub fn solve(points: &PointSet, config: &SolverConfig) -> Result<Solution, NBodyError> {
    solve_with_workers(points, config, rayon::current_num_threads())
}

/// Runs the tiled solver with an explicit worker count.
///
/// The tile-pair schedule is split into at most `workers` contiguous chunks.
/// Each chunk owns one force buffer and one scratch matrix for its whole
/// lifetime, so no two tasks ever write the same slot. Energies combine
/// through an associative sum; forces go through the accumulator's
/// per-particle reduction once every pair has been processed.
///
/// # Arguments
/// * `points` - The particle positions.
/// * `config` - Validated cutoff and tile size.
/// * `workers` - Number of worker slots. Zero is treated as one.
///
/// # Returns
/// The solve result, or an error when the input is empty or the tile size
/// does not fit it.
pub fn solve_with_workers(
    points: &PointSet,
    config: &SolverConfig,
    workers: usize,
) -> Result<Solution, NBodyError> {
    if points.is_empty() {
        return Err(NBodyError::EmptyInput);
    }
    let n = points.len();
    let decomposition = TileDecomposition::new(n, config.tile)?;
    let schedule = decomposition.pair_schedule();
    let workers = workers.max(1).min(schedule.len());
    let chunk_len = schedule.len().div_ceil(workers);

    let mut accumulator = ForceAccumulator::new(workers, n);
    let positions = points.as_slice();

    let started = Instant::now();
    let energy: f64 = accumulator
        .buffers_mut()
        .par_iter_mut()
        .zip(schedule.par_chunks(chunk_len))
        .map(|(buffer, pairs)| {
            let mut scratch = PairScratch::new();
            let mut chunk_energy = 0.0;
            for pair in pairs {
                chunk_energy += process_tile_pair(positions, pair, config.cut2, buffer, &mut scratch);
            }
            chunk_energy
        })
        .sum();
    let forces = accumulator.reduce();
    let elapsed = started.elapsed();

    debug!(
        "processed {} tile pairs across {} workers in {:?}",
        schedule.len(),
        workers,
        elapsed
    );

    Ok(Solution { energy, forces, elapsed })
}

/// Reference all-pairs solver used to validate the tiled path.
///
/// Visits each unordered pair once with the same cutoff and self-pair policy
/// as the tile kernel. Quadratic with no blocking; intended for tests and
/// benchmarks rather than production inputs.
pub fn direct_sum(points: &PointSet, cut2: f32) -> (f64, Vec<Vec3>) {
    let positions = points.as_slice();
    let mut forces = vec![Vec3::zero(); positions.len()];
    let mut energy = 0.0_f64;
    for p in 0..positions.len() {
        for q in 0..p {
            let d2 = (positions[p] - positions[q]).norm_sq();
            if d2 == 0.0 || d2 > cut2 {
                continue;
            }
            let rinv = 1.0 / d2.sqrt();
            energy += f64::from(rinv);
            let force = (positions[p] - positions[q]) * (rinv * rinv * rinv);
            forces[p] += force;
            forces[q] -= force;
        }
    }
    (energy, forces)
}
