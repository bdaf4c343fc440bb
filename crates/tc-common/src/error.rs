//! Error types for the shared data model.

use thiserror::Error;

/// Errors raised while constructing or combining gridded data.
#[derive(Error, Debug)]
pub enum GridError {
    /// The data length or paired-array shape does not match.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// The flat data length does not match the declared shape.
    #[error("data length {len} does not match shape {shape:?}")]
    LengthMismatch { len: usize, shape: (usize, usize) },

    /// A grid with zero rows or columns.
    #[error("grid must have at least one row and one column, got {0:?}")]
    EmptyGrid((usize, usize)),
}

/// Result type for shared data-model operations.
pub type Result<T> = std::result::Result<T, GridError>;
