//! spriteclip-region - Blob detection for sprite sheets
//!
//! This crate finds the sprites on a sheet by connected-component labeling
//! with a configurable neighbourhood:
//!
//! - **Labels** - Provisional ids minted while scanning
//! - **Equivalence table** - Union-find that keeps the smallest id of each class
//! - **Scanner** - First pass, labels foreground pixels from their causal window
//! - **Assembler** - Second pass, folds resolved pixels into blobs
//! - **Detector** - Runs both passes and returns one [`Blob`] per sprite
//!
//! # Examples
//!
//! ```
//! use spriteclip_region::{BlobDetector, DetectOptions};
//! use spriteclip_core::{Box, Pix, PixMut};
//!
//! let mut pm = PixMut::new(16, 16).unwrap();
//! for x in 2..6 {
//!     pm.set_pixel(x, 3, 0x00ff00ff).unwrap();
//! }
//! pm.set_pixel(12, 12, 0x00ff00ff).unwrap();
//! let pix: Pix = pm.into();
//!
//! let mut detector = BlobDetector::with_options(DetectOptions::new().with_window_radius(2));
//! let blobs = detector.detect(&pix, &Box::new_unchecked(0, 0, 16, 16)).unwrap();
//!
//! assert_eq!(blobs.len(), 2);
//! assert_eq!(blobs[0].name(), "sprite_1");
//! assert_eq!(blobs[0].bounds(), Box::new_unchecked(2, 3, 4, 1));
//! ```

pub mod assemble;
pub mod blob;
pub mod detect;
pub mod equiv;
pub mod error;
pub mod label;
pub mod scan;

// Re-export core types
pub use spriteclip_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use assemble::RegionAssembler;
pub use blob::Blob;
pub use detect::{
    AnchorPolicy, BlobDetector, DEFAULT_WINDOW_RADIUS, DetectOptions, detect, detect_with_options,
};
pub use equiv::EquivalenceTable;
pub use label::{Label, LabelGenerator};
pub use scan::{LabelGrid, RegionScanner, validate_region};
