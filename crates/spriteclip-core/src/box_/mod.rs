//! Box - Rectangle regions
//!
//! A `Box` describes both the region handed to blob detection and the
//! bounding box reported for every detected sprite.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A simple Copy type since it's small and frequently copied.
/// `right()` and `bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the box covering the inclusive pixel extent
    /// `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// The corners may be given in either order.
    pub fn from_extent(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        let (x0, x1) = if min_x <= max_x {
            (min_x, max_x)
        } else {
            (max_x, min_x)
        };
        let (y0, y1) = if min_y <= max_y {
            (min_y, max_y)
        } else {
            (max_y, min_y)
        };
        Self {
            x: x0,
            y: y0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &Box) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check whether the box lies entirely inside a `width x height` image.
    ///
    /// Nothing is adjusted: a box that sticks out on any side fails.
    /// Empty boxes pass as long as their origin is inside the closed
    /// image extent.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        if self.x < 0 || self.y < 0 || self.w < 0 || self.h < 0 {
            return false;
        }
        let right = self.x as i64 + self.w as i64;
        let bottom = self.y as i64 + self.h as i64;
        right <= width as i64 && bottom <= height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_new_rejects_negative() {
        assert!(Box::new(0, 0, -1, 3).is_err());
        assert!(Box::new(0, 0, 3, -1).is_err());
        assert!(Box::new(-4, -4, 0, 0).is_ok());
    }

    #[test]
    fn test_from_extent_inclusive() {
        let b = Box::from_extent(1, 1, 3, 3);
        assert_eq!(b, Box::new_unchecked(1, 1, 3, 3));

        let single = Box::from_extent(2, 2, 2, 2);
        assert_eq!((single.w, single.h), (1, 1));

        let swapped = Box::from_extent(5, 7, 2, 3);
        assert_eq!(swapped, Box::new_unchecked(2, 3, 4, 5));
    }

    #[test]
    fn test_contains_and_overlap() {
        let b = Box::new_unchecked(2, 2, 3, 3);
        assert!(b.contains_point(2, 2));
        assert!(b.contains_point(4, 4));
        assert!(!b.contains_point(5, 4));
        assert!(b.contains_box(&Box::new_unchecked(3, 3, 1, 2)));
        assert!(!b.contains_box(&Box::new_unchecked(3, 3, 3, 1)));
    }

    #[test]
    fn test_fits_within() {
        assert!(Box::new_unchecked(0, 0, 5, 5).fits_within(5, 5));
        assert!(Box::new_unchecked(5, 5, 0, 0).fits_within(5, 5));
        assert!(!Box::new_unchecked(1, 0, 5, 5).fits_within(5, 5));
        assert!(!Box::new_unchecked(-1, 0, 2, 2).fits_within(5, 5));
        assert!(!Box::new_unchecked(0, 0, i32::MAX, 1).fits_within(5, 5));
    }
}
