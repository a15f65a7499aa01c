use std::error::Error;
use std::fmt;
use std::io;

/// Represents errors that can occur while configuring or running a solve.
#[derive(Debug)]
pub enum NBodyError {
    /// Indicates a rejected parameter (e.g., a negative cutoff or a zero tile size).
    InvalidArgument(&'static str),
    /// Indicates that the input contained no complete points.
    EmptyInput,
    /// Indicates a tile size that leaves no usable subdivisions.
    TileTooLarge,
    /// Indicates a failure on the underlying point or force streams.
    Io(io::Error),
}

impl fmt::Display for NBodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NBodyError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            NBodyError::EmptyInput => write!(f, "no points found in input"),
            NBodyError::TileTooLarge => write!(f, "tile is too big for input size"),
            NBodyError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for NBodyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NBodyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for NBodyError {
    fn from(err: io::Error) -> Self {
        NBodyError::Io(err)
    }
}
