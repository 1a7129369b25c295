//! ASCII pattern images
//!
//! Tests describe small sheets as rows of characters: `.` is background,
//! `#` is the default foreground colour and any other character maps to a
//! colour of its own, so touching sprites of different colours can be
//! drawn side by side.

use crate::error::{TestError, TestResult};
use spriteclip_core::{Pix, PixMut, color};

/// Pixel value for `.`: fully transparent black.
pub const PATTERN_BACKGROUND: u32 = 0x0000_0000;

/// Pixel value for `#`: opaque black.
pub const PATTERN_FOREGROUND: u32 = 0x0000_00ff;

fn pixel_for(c: char) -> u32 {
    match c {
        '.' => PATTERN_BACKGROUND,
        '#' => PATTERN_FOREGROUND,
        other => {
            let v = other as u32 as u8;
            color::compose_rgb(v, 255 - v, 128)
        }
    }
}

/// Build an image from rows of equal length.
pub fn pix_from_pattern(rows: &[&str]) -> TestResult<Pix> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    if width == 0 || height == 0 {
        return Err(TestError::InvalidPattern("empty pattern".to_string()));
    }

    let mut pm = PixMut::new(width, height)?;
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() as u32 != width {
            return Err(TestError::InvalidPattern(format!(
                "row {} has {} columns, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }
        for (x, c) in row.chars().enumerate() {
            pm.set_pixel_unchecked(x as u32, y as u32, pixel_for(c));
        }
    }
    Ok(pm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_pixels() {
        let pix = pix_from_pattern(&[".#", "a."]).unwrap();
        assert_eq!((pix.width(), pix.height()), (2, 2));
        assert_eq!(pix.get_pixel(0, 0), Some(PATTERN_BACKGROUND));
        assert_eq!(pix.get_pixel(1, 0), Some(PATTERN_FOREGROUND));
        let a = pix.get_pixel(0, 1).unwrap();
        assert_ne!(a, PATTERN_BACKGROUND);
        assert_ne!(a, PATTERN_FOREGROUND);
    }

    #[test]
    fn test_ragged_pattern_rejected() {
        assert!(pix_from_pattern(&["..", "."]).is_err());
        assert!(pix_from_pattern(&[]).is_err());
        assert!(pix_from_pattern(&[""]).is_err());
    }
}
