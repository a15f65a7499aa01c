use crate::models::Vec3;
use crate::tiles::TilePair;

/// Reusable scratch matrix for one worker.
///
/// The kernel stores one squared distance (later one force magnitude) per
/// cell of the current tile pair. Reusing the allocation across schedule
/// entries keeps the hot loop free of allocator traffic.
#[derive(Debug, Default)]
pub struct PairScratch {
    cells: Vec<f32>,
}

impl PairScratch {
    pub fn new() -> Self {
        PairScratch { cells: Vec::new() }
    }

    /// A row-major `rows x cols` view, grown on demand. Contents are stale
    /// until overwritten.
    fn matrix(&mut self, rows: usize, cols: usize) -> &mut [f32] {
        let len = rows * cols;
        if self.cells.len() < len {
            self.cells.resize(len, 0.0);
        }
        &mut self.cells[..len]
    }
}

/// Accumulates the interactions of one tile pair into `forces` and returns
/// the pair's energy contribution.
///
/// Works on the `a.len x b.len` block of the interaction matrix in three
/// passes so each stays tight over the scratch rows: squared distances
/// first, then the cutoff test and force magnitudes, then the per-row force
/// accumulation. A diagonal pair visits every interaction twice, so its
/// magnitudes are half-scaled per visit and its energy is halved once before
/// returning.
///
/// Pairs at exactly the squared cutoff interact; pairs beyond it and
/// coincident points contribute exactly zero.
///
/// # Arguments
/// * `points` - All positions; the pair's tiles index into this slice.
/// * `pair` - The tile pair to process.
/// * `cut2` - Squared cutoff distance.
/// * `forces` - The executing worker's whole force buffer, one slot per point.
/// * `scratch` - The worker's scratch storage, reused across calls.
///
/// # Returns
/// The summed energy of the pair, to be combined by the caller.
pub fn process_tile_pair(
    points: &[Vec3],
    pair: &TilePair,
    cut2: f32,
    forces: &mut [Vec3],
    scratch: &mut PairScratch,
) -> f64 {
    let (a, b) = (pair.a, pair.b);
    let normalize = if pair.diagonal { 0.5 } else { 1.0 };
    let cells = scratch.matrix(a.len, b.len);

    for i in 0..a.len {
        let p = points[a.start + i];
        let row = &mut cells[i * b.len..(i + 1) * b.len];
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (p - points[b.start + j]).norm_sq();
        }
    }

    let mut energy = 0.0_f64;
    for cell in cells.iter_mut() {
        let d2 = *cell;
        let rinv = if d2 == 0.0 || d2 > cut2 { 0.0 } else { 1.0 / d2.sqrt() };
        energy += f64::from(rinv);
        *cell = rinv * rinv * rinv * normalize;
    }

    for i in 0..a.len {
        let p = points[a.start + i];
        let row = &cells[i * b.len..(i + 1) * b.len];
        let mut force_i = Vec3::zero();
        for (j, &mag) in row.iter().enumerate() {
            let force_j = (p - points[b.start + j]) * mag;
            force_i += force_j;
            forces[b.start + j] -= force_j;
        }
        forces[a.start + i] += force_i;
    }

    if pair.diagonal {
        energy / 2.0
    } else {
        energy
    }
}
