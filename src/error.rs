//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use thiserror::Error;

/// Main error type for genotensor operations
#[derive(Error, Debug)]
pub enum TensorError {
    /// Array extents that must agree do not (call pattern vs ploidy, block vs region)
    #[error("Shape mismatch in {context}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        context: String,
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// Chunk specification errors (zero-sized chunks, wrong number of axes)
    #[error("Invalid chunks: {message}")]
    InvalidChunks { message: String },

    /// Genotype call patterns that cannot be expressed as allele counts
    #[error("Invalid call: {message}")]
    InvalidCall { message: String },

    /// Configuration errors (bad dataset shapes, bounds)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Thread pool construction failures
    #[error("Thread pool error: {message}")]
    ThreadPool { message: String },

    /// I/O errors (config file unreadable)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using TensorError
pub type Result<T> = std::result::Result<T, TensorError>;

impl TensorError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        context: impl Into<String>,
        expected: impl Into<Vec<usize>>,
        found: impl Into<Vec<usize>>,
    ) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid chunks error
    pub fn invalid_chunks(message: impl Into<String>) -> Self {
        Self::InvalidChunks {
            message: message.into(),
        }
    }

    /// Create an invalid call error
    pub fn invalid_call(message: impl Into<String>) -> Self {
        Self::InvalidCall {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a thread pool error
    pub fn thread_pool(message: impl Into<String>) -> Self {
        Self::ThreadPool {
            message: message.into(),
        }
    }
}
