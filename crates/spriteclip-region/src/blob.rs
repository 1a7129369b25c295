//! Blob - one detected sprite
//!
//! A blob accumulates the geometry of every pixel whose label resolves to
//! the same representative. The extent is tracked as explicit inclusive
//! min/max coordinates that are written back on every added pixel, so it
//! is always the tightest rectangle around the pixels seen so far and only
//! ever grows.

use crate::label::Label;
use spriteclip_core::{Box, Point, Pta, SpriteRecord};
use std::fmt;

/// A connected foreground region.
///
/// Identity is the representative label: two blobs compare equal when
/// their labels do, regardless of geometry.
#[derive(Debug, Clone)]
pub struct Blob {
    label: Label,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    anchor: Point,
    pixel_count: usize,
    points: Option<Pta>,
}

impl Blob {
    /// Create a blob holding the single pixel (x, y), which becomes its
    /// anchor.
    pub fn new(label: Label, x: u32, y: u32) -> Self {
        Self {
            label,
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
            anchor: Point::new(x, y),
            pixel_count: 1,
            points: None,
        }
    }

    /// Like [`Blob::new`], but also remember every member pixel.
    pub fn with_points(label: Label, x: u32, y: u32) -> Self {
        let mut points = Pta::new();
        points.push(x, y);
        Self {
            points: Some(points),
            ..Self::new(label, x, y)
        }
    }

    /// Add pixel (x, y), growing the extent to include it.
    pub fn extend(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
        if let Some(points) = self.points.as_mut() {
            points.push(x, y);
        }
    }

    /// Representative label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Name used for export.
    pub fn name(&self) -> String {
        self.label.to_string()
    }

    /// Bounding box with inclusive pixel counts as width and height.
    pub fn bounds(&self) -> Box {
        Box::from_extent(
            self.min_x as i32,
            self.min_y as i32,
            self.max_x as i32,
            self.max_y as i32,
        )
    }

    /// Inclusive extent `(min_x, min_y, max_x, max_y)`.
    pub fn extent(&self) -> (u32, u32, u32, u32) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Anchor point in image coordinates.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Move the anchor.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }

    /// Number of member pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Member pixels in the order they were added, when retained.
    pub fn points(&self) -> Option<&Pta> {
        self.points.as_ref()
    }

    /// Check whether (x, y) falls inside the bounding box.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Flatten into the export record; the anchor becomes relative to the
    /// bounding-box origin.
    pub fn to_record(&self) -> SpriteRecord {
        let b = self.bounds();
        SpriteRecord {
            name: self.name(),
            offset_x: b.x,
            offset_y: b.y,
            width: b.w,
            height: b.h,
            anchor_x: self.anchor.x as i32 - b.x,
            anchor_y: self.anchor.y as i32 - b.y,
        }
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Blob {}

impl std::hash::Hash for Blob {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        writeln!(f, "Data dump for clip {}", self.label)?;
        writeln!(
            f,
            "Bounding box x: {}, y: {}, w: {}, h: {}",
            b.x, b.y, b.w, b.h
        )?;
        writeln!(f, "Anchor point x: {}, y: {}", self.anchor.x, self.anchor.y)?;
        writeln!(f, "Pixels: {}", self.pixel_count)
    }
}
