mod stream;

pub use stream::*;

#[cfg(test)]
mod stream_tests;
