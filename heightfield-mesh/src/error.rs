//! Conversion pipeline errors

use thiserror::Error;

/// Pipeline result type
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion pipeline errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pixel buffer dimensions: {rows}x{cols} with {samples} samples")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        samples: usize,
    },

    #[error("invalid mesh configuration: {0}")]
    InvalidConfiguration(String),

    #[error("mesh construction cancelled")]
    Cancelled,
}
