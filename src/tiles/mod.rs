mod decomposition;
mod kernel;

pub use decomposition::*;
pub use kernel::*;
