//! Blob detection entry points
//!
//! [`BlobDetector`] is the per-run context: it owns the label counter and
//! the equivalence table, runs the scan and assembly passes in order, and
//! keeps the clips found by the last [`find_clips`](BlobDetector::find_clips)
//! call. Detectors share nothing, so independent regions can be processed
//! on separate threads with one detector each.
//!
//! # Examples
//!
//! ```
//! use spriteclip_core::{Box, PixMut, Pix};
//! use spriteclip_region::detect;
//!
//! let mut pm = PixMut::new(5, 5).unwrap();
//! pm.set_pixel(1, 1, 0xff0000ff).unwrap();
//! pm.set_pixel(3, 3, 0xff0000ff).unwrap();
//! let pix: Pix = pm.into();
//!
//! let region = Box::new_unchecked(0, 0, 5, 5);
//! assert_eq!(detect(&pix, &region, 1).unwrap().len(), 2);
//! assert_eq!(detect(&pix, &region, 8).unwrap().len(), 1);
//! ```

use crate::assemble::RegionAssembler;
use crate::blob::Blob;
use crate::equiv::EquivalenceTable;
use crate::error::RegionResult;
use crate::label::LabelGenerator;
use crate::scan::{RegionScanner, validate_region};
use spriteclip_core::{Box, PixelSource, Point};

/// Default neighbourhood radius.
pub const DEFAULT_WINDOW_RADIUS: u32 = 8;

/// Where each blob's anchor ends up after assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPolicy {
    /// First member pixel in row-major scan order
    #[default]
    FirstPixel,
    /// Top-left corner of the bounding box
    TopLeft,
}

/// Options for blob detection
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Neighbourhood radius: pixels up to this far apart on both axes are
    /// joined. Larger values merge more, never less.
    pub window_radius: u32,
    /// Keep every member pixel in each blob
    pub retain_points: bool,
    /// Anchor placement
    pub anchor: AnchorPolicy,
    /// Background color; `None` asks the source
    pub background: Option<u32>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            window_radius: DEFAULT_WINDOW_RADIUS,
            retain_points: false,
            anchor: AnchorPolicy::FirstPixel,
            background: None,
        }
    }
}

impl DetectOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbourhood radius
    pub fn with_window_radius(mut self, radius: u32) -> Self {
        self.window_radius = radius;
        self
    }

    /// Keep or drop member pixels
    pub fn with_retained_points(mut self, retain: bool) -> Self {
        self.retain_points = retain;
        self
    }

    /// Set the anchor policy
    pub fn with_anchor(mut self, anchor: AnchorPolicy) -> Self {
        self.anchor = anchor;
        self
    }

    /// Override the background color
    pub fn with_background(mut self, background: u32) -> Self {
        self.background = Some(background);
        self
    }
}

/// Reusable blob detector.
///
/// Label numbering continues across calls until [`reset`](Self::reset),
/// so blobs from successive runs get distinct names. Geometry never
/// depends on that state.
#[derive(Debug, Default)]
pub struct BlobDetector {
    options: DetectOptions,
    labels: LabelGenerator,
    table: EquivalenceTable,
    clips: Vec<Blob>,
}

impl BlobDetector {
    /// Create a detector with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with the given options.
    pub fn with_options(options: DetectOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Current options.
    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Change the neighbourhood radius for subsequent runs.
    pub fn set_window_radius(&mut self, radius: u32) {
        self.options.window_radius = radius;
    }

    /// Clips stored by the last [`find_clips`](Self::find_clips).
    pub fn clips(&self) -> &[Blob] {
        &self.clips
    }

    /// Take the stored clips, leaving none behind.
    pub fn take_clips(&mut self) -> Vec<Blob> {
        std::mem::take(&mut self.clips)
    }

    /// Forget stored clips, restart label numbering and clear the
    /// equivalence table.
    pub fn reset(&mut self) {
        self.clips.clear();
        self.table.clear();
        self.labels.reset();
    }

    /// Detect the blobs inside `region` of `source`.
    ///
    /// Blobs are returned in the order their first pixel was met in a
    /// row-major walk, with image coordinates. A zero-area or all-background region yields no blobs.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegionError::RegionOutOfBounds`] if `region` does
    /// not lie inside the source.
    pub fn detect<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        region: &Box,
    ) -> RegionResult<Vec<Blob>> {
        validate_region(source, region)?;
        if region.is_empty() {
            return Ok(Vec::new());
        }

        let background = self
            .options
            .background
            .unwrap_or_else(|| source.background());

        // Earlier runs' labels are never looked up again
        self.table.restart_at(self.labels.peek());

        let mut scanner =
            RegionScanner::new(&mut self.labels, &mut self.table, self.options.window_radius);
        let grid = scanner.scan(source, region, background)?;
        let merges = scanner.merge_count();

        let mut blobs = RegionAssembler::new()
            .with_retained_points(self.options.retain_points)
            .assemble(&grid, &mut self.table)?;

        if self.options.anchor == AnchorPolicy::TopLeft {
            for blob in &mut blobs {
                let (min_x, min_y, _, _) = blob.extent();
                blob.set_anchor(Point::new(min_x, min_y));
            }
        }

        tracing::debug!(
            "detected {} blobs in region ({}, {}, {}, {}): {} labeled pixels, {} merges, radius {}",
            blobs.len(),
            region.x,
            region.y,
            region.w,
            region.h,
            grid.labeled_count(),
            merges,
            self.options.window_radius
        );

        Ok(blobs)
    }

    /// Detect blobs and store them as this detector's clips.
    ///
    /// Returns the stored clips.
    ///
    /// # Errors
    ///
    /// Same as [`detect`](Self::detect); on error the previous clips are
    /// kept.
    pub fn find_clips<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        region: &Box,
    ) -> RegionResult<&[Blob]> {
        self.clips = self.detect(source, region)?;
        Ok(&self.clips)
    }
}

/// Detect blobs with a fresh detector and the given neighbourhood radius.
///
/// # Errors
///
/// Returns [`crate::RegionError::RegionOutOfBounds`] if `region` does not
/// lie inside the source.
pub fn detect<S: PixelSource + ?Sized>(
    source: &S,
    region: &Box,
    window_radius: u32,
) -> RegionResult<Vec<Blob>> {
    detect_with_options(
        source,
        region,
        &DetectOptions::new().with_window_radius(window_radius),
    )
}

/// Detect blobs with a fresh detector and explicit options.
///
/// # Errors
///
/// Returns [`crate::RegionError::RegionOutOfBounds`] if `region` does not
/// lie inside the source.
pub fn detect_with_options<S: PixelSource + ?Sized>(
    source: &S,
    region: &Box,
    options: &DetectOptions,
) -> RegionResult<Vec<Blob>> {
    BlobDetector::with_options(options.clone()).detect(source, region)
}
