//! Error types for spriteclip-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// spriteclip core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid samples-per-pixel value
    #[error("invalid samples per pixel: {0} (expected 3 or 4)")]
    InvalidSpp(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Rectangle does not fit inside the image
    #[error("rectangle ({x}, {y}, {w}, {h}) outside image {width}x{height}")]
    RectOutOfBounds {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for spriteclip core operations
pub type Result<T> = std::result::Result<T, Error>;
