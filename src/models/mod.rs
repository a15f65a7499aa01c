mod vector3;
mod point_set;

pub use vector3::*;
pub use point_set::*;
