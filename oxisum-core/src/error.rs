//! Error types for OxiSum operations.
//!
//! Two conditions exist: the input source could not be read (`Io`), and a
//! caller-supplied parameter violated a precondition (`InvalidChunkSize`).
//! The CRC update itself cannot fail. The core never logs; it returns a
//! result and leaves user-facing reporting to the caller.

use std::io;
use thiserror::Error;

/// The main error type for OxiSum operations.
#[derive(Debug, Error)]
pub enum OxiSumError {
    /// I/O error from the underlying input source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Chunk size for streamed reads must be at least one byte.
    /// Detected before any read is attempted.
    #[error("invalid chunk size: {size} (must be at least 1 byte)")]
    InvalidChunkSize {
        /// The rejected chunk size.
        size: usize,
    },
}

/// Result type alias for OxiSum operations.
pub type Result<T> = std::result::Result<T, OxiSumError>;

impl OxiSumError {
    /// Create an invalid chunk size error.
    pub fn invalid_chunk_size(size: usize) -> Self {
        Self::InvalidChunkSize { size }
    }
}
