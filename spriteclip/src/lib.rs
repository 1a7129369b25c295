//! spriteclip - Sprite extraction for Rust
//!
//! Finds the individual sprites on a sprite sheet by blob detection and
//! exports their bounding boxes and anchors.
//!
//! # Overview
//!
//! - Image I/O (PNG, BMP, JPEG, GIF, WebP, TGA)
//! - Connected-component blob detection with a tunable merge radius
//! - Sprite sheet XML export
//!
//! # Example
//!
//! ```
//! use spriteclip::{Box, PixMut, Pix};
//! use spriteclip::region::detect;
//!
//! let mut pm = PixMut::new(8, 8).unwrap();
//! pm.set_pixel(3, 4, 0xffffffff).unwrap();
//! let pix: Pix = pm.into();
//!
//! let blobs = detect(&pix, &Box::new_unchecked(0, 0, 8, 8), 8).unwrap();
//! assert_eq!(blobs[0].to_record().offset_x, 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use spriteclip_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use spriteclip_io as io;
pub use spriteclip_region as region;
