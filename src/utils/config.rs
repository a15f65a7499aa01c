use crate::utils::NBodyError;

/// Validated solver parameters.
///
/// The cutoff radius is squared once at construction so the kernel can work
/// with squared distances throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Squared cutoff distance. Pairs farther apart contribute nothing.
    pub cut2: f32,
    /// Slice length used by the domain decomposition.
    pub tile: usize,
}

impl SolverConfig {
    /// Creates a validated configuration.
    ///
    /// # Arguments
    /// * `cut` - The maximum interaction distance. Must not be negative.
    /// * `tile` - The tile side length. Must be nonzero.
    ///
    /// # Returns
    /// A `SolverConfig` holding the squared cutoff, or
    /// `NBodyError::InvalidArgument` if a parameter is out of range.
    pub fn new(cut: f32, tile: usize) -> Result<Self, NBodyError> {
        if cut < 0.0 {
            return Err(NBodyError::InvalidArgument("cut must not be negative"));
        }
        if tile == 0 {
            return Err(NBodyError::InvalidArgument("tile must be greater than zero"));
        }
        Ok(SolverConfig { cut2: cut * cut, tile })
    }
}
