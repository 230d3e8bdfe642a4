use thiserror::Error;

/// Failures reported by complex arithmetic and by vector access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required argument was absent.
    #[error("invalid argument: {0} is missing")]
    InvalidArgument(&'static str),

    /// The divisor has a squared magnitude of exactly zero.
    #[error("division by zero")]
    DivideByZero,

    #[error("index {index} out of bounds for vector of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

//--------------------------------------------------------------------------------------------------
