//! Error types for spriteclip-region

use thiserror::Error;

/// Errors that can occur during blob detection
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spriteclip_core::Error),

    /// Requested region does not lie inside the source image
    #[error("region ({x}, {y}, {w}, {h}) outside source {width}x{height}")]
    RegionOutOfBounds {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        width: u32,
        height: u32,
    },

    /// Label looked up before it was registered with the equivalence table
    #[error("label {0} was never registered")]
    UnregisteredLabel(u32),

    /// Label ids exhausted
    #[error("label id space exhausted")]
    LabelOverflow,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
