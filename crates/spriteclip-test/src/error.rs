//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// A pattern row had the wrong width, or the pattern was empty
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spriteclip_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
