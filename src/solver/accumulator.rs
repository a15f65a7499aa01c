use rayon::prelude::*;

use crate::models::Vec3;

/// Per-worker force buffers and the reduction that folds them into a single
/// force per particle.
///
/// Every buffer spans all `n` particles so a worker can accumulate into any
/// tile it is handed. Buffers are handed out by worker slot, never looked up
/// through thread identity, so the scheme holds for any pool size including
/// one.
#[derive(Debug)]
pub struct ForceAccumulator {
    buffers: Vec<Vec<Vec3>>,
}

impl ForceAccumulator {
    /// Allocates `workers` zero-initialized buffers of `n` force slots each.
    pub fn new(workers: usize, n: usize) -> Self {
        ForceAccumulator {
            buffers: vec![vec![Vec3::zero(); n]; workers],
        }
    }

    /// The per-worker buffers, one exclusively borrowed slice per slot.
    pub fn buffers_mut(&mut self) -> &mut [Vec<Vec3>] {
        &mut self.buffers
    }

    /// Sums every buffer per particle index into the final force vector.
    ///
    /// Must run after all tile processing has completed. Each output index
    /// is produced by exactly one task from reads only, so the phase needs
    /// no locking.
    pub fn reduce(&self) -> Vec<Vec3> {
        let n = self.buffers.first().map_or(0, Vec::len);
        (0..n)
            .into_par_iter()
            .map(|i| {
                let mut sum = Vec3::zero();
                for buffer in &self.buffers {
                    sum += buffer[i];
                }
                sum
            })
            .collect()
    }
}
