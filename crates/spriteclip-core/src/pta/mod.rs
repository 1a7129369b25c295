//! Point, Pta - Pixel coordinates and point arrays
//!
//! `Pta` stores integer pixel positions in insertion order. Blob detection
//! uses it to retain the member pixels of a sprite when asked to.
//!
//! # Storage layout
//!
//! Points are stored as separate X and Y vectors (SoA layout).

/// A pixel position in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Array of points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pta {
    /// X coordinates
    x: Vec<u32>,
    /// Y coordinates
    y: Vec<u32>,
}

impl Pta {
    /// Create a new empty Pta.
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<Point> {
        Some(Point::new(*self.x.get(index)?, *self.y.get(index)?))
    }

    /// Append a point.
    pub fn push(&mut self, x: u32, y: u32) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Linear search for a point.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.iter().any(|p| p.x == x && p.y == y)
    }

    /// Inclusive extent `(min_x, min_y, max_x, max_y)` of all points.
    ///
    /// Returns `None` when empty.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let min_x = *self.x.iter().min()?;
        let max_x = *self.x.iter().max()?;
        let min_y = *self.y.iter().min()?;
        let max_y = *self.y.iter().max()?;
        Some((min_x, min_y, max_x, max_y))
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }
}

impl FromIterator<Point> for Pta {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut pta = Pta::new();
        for p in iter {
            pta.push(p.x, p.y);
        }
        pta
    }
}
