//! spriteclip-test - Regression test framework for spriteclip
//!
//! Integration tests under each crate's `tests/` directory drive a
//! [`RegParams`]: every comparison bumps an index, failures are collected
//! and reported together by [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```ignore
//! use spriteclip_test::RegParams;
//!
//! let mut rp = RegParams::new("blobdetect");
//! rp.compare_values(2.0, blobs.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: tracing filter for test output (default `info`)

mod error;
mod params;
mod pattern;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use pattern::{PATTERN_BACKGROUND, PATTERN_FOREGROUND, pix_from_pattern};

use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // spriteclip-test is at crates/spriteclip-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
