//! Error types for huffarc operations.
//!
//! This module provides one error type covering all failure modes of the
//! codec: I/O errors from the CLI layer, misuse of the construction API,
//! and malformed archives detected during decompression.

use std::io;
use thiserror::Error;

/// The main error type for huffarc operations.
#[derive(Debug, Error)]
pub enum HuffArcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Operation called with input it is not defined for.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the misuse.
        message: String,
    },

    /// Unexpected end of archive data.
    #[error("Unexpected end of data: expected {expected} more bytes")]
    UnexpectedEof {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// Corrupted data in an archive.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset where corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Tree has too many internal nodes for the single-byte numbering
    /// domain of the archive format.
    #[error("Alphabet overflow: {count} internal nodes exceed the limit of 255")]
    AlphabetOverflow {
        /// Number of internal nodes in the offending tree.
        count: usize,
    },
}

/// Result type alias for huffarc operations.
pub type Result<T> = std::result::Result<T, HuffArcError>;

impl HuffArcError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an alphabet overflow error.
    pub fn alphabet_overflow(count: usize) -> Self {
        Self::AlphabetOverflow { count }
    }
}
