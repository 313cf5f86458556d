//! Error types for alphatrim-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every failure is reported synchronously, before any scan or copy runs,
//! and no partial result is ever returned alongside an error.

use thiserror::Error;

/// alphatrim core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sample data does not match the declared dimensions
    #[error("invalid pixel buffer: {len} samples do not describe a {width}x{height} RGBA image")]
    InvalidBuffer { width: u32, height: u32, len: usize },

    /// Crop or scan bounds are reversed or outside the buffer
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two buffers were expected to have the same size
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type alias for alphatrim core operations
pub type Result<T> = std::result::Result<T, Error>;
