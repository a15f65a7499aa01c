mod accumulator;
mod orchestrator;

pub use accumulator::*;
pub use orchestrator::*;
