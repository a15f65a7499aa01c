use crate::models::Vec3;

/// An ordered, immutable collection of 3D points.
///
/// Indices are stable for the lifetime of the set; forces computed by the
/// solver line up with these indices one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: Vec<Vec3>,
}

impl PointSet {
    /// Wraps a list of positions, preserving their order.
    pub fn new(positions: Vec<Vec3>) -> Self {
        PointSet { positions }
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The positions as a slice, indexed `0..len`.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.positions
    }
}
