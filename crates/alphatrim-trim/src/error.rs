//! Error types for alphatrim-trim

use thiserror::Error;

/// Errors that can occur while trimming
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrimError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] alphatrim_core::Error),
}

/// Result type for trim operations
pub type TrimResult<T> = Result<T, TrimError>;
