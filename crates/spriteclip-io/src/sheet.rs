//! Sprite sheets
//!
//! A [`SpriteSheet`] is a decoded image plus the name it is exported under
//! and its colour key. The colour key is the pixel at (0, 0) unless set
//! explicitly; it doubles as the background for blob detection.

use crate::{IoResult, read_image};
use spriteclip_core::{Box, Pix, PixelSource, color};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SpriteSheet {
    name: String,
    pix: Pix,
    background: u32,
}

impl SpriteSheet {
    /// Load a sheet from disk. The name is the file name without directories.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let pix = read_image(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_pix(name, pix))
    }

    /// Wrap an already decoded image.
    pub fn from_pix(name: impl Into<String>, pix: Pix) -> Self {
        let background = pix.get_pixel_unchecked(0, 0);
        Self {
            name: name.into(),
            pix,
            background,
        }
    }

    /// Replace the colour key.
    pub fn with_background(mut self, background: u32) -> Self {
        self.background = background;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.pix.width()
    }

    pub fn height(&self) -> u32 {
        self.pix.height()
    }

    pub fn pix(&self) -> &Pix {
        &self.pix
    }

    /// Background pixel value (`0xRRGGBBAA`).
    pub fn background(&self) -> u32 {
        self.background
    }

    /// Colour key as `(r, g, b)`.
    pub fn color_key(&self) -> (u8, u8, u8) {
        color::extract_rgb(self.background)
    }

    /// The whole sheet as a region.
    pub fn full_region(&self) -> Box {
        Box::new_unchecked(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Copy the pixels under `bounds` into a new image.
    pub fn cutout(&self, bounds: &Box) -> IoResult<Pix> {
        Ok(self.pix.clip_rectangle(bounds)?)
    }
}

impl PixelSource for SpriteSheet {
    fn width(&self) -> u32 {
        self.pix.width()
    }

    fn height(&self) -> u32 {
        self.pix.height()
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> u32 {
        self.pix.get_pixel_unchecked(x, y)
    }

    fn background(&self) -> u32 {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spriteclip_core::PixMut;

    fn sheet() -> SpriteSheet {
        let mut pm = PixMut::new(4, 3).unwrap();
        pm.set_all(color::compose_rgb(255, 0, 255));
        pm.set_rgb(2, 1, 10, 20, 30).unwrap();
        SpriteSheet::from_pix("hero.png", pm.into())
    }

    #[test]
    fn test_color_key_from_origin() {
        let s = sheet();
        assert_eq!(s.color_key(), (255, 0, 255));
        assert_eq!(PixelSource::background(&s), s.background());
        assert!(!s.is_foreground(s.background()));
        assert!(s.is_foreground(s.pixel_at(2, 1)));
    }

    #[test]
    fn test_dimensions_and_region() {
        let s = sheet();
        assert_eq!(s.name(), "hero.png");
        assert_eq!((s.width(), s.height()), (4, 3));
        assert_eq!(s.full_region(), Box::new_unchecked(0, 0, 4, 3));
    }

    #[test]
    fn test_background_override() {
        let s = sheet().with_background(0);
        assert_eq!(s.color_key(), (0, 0, 0));
        assert!(s.is_foreground(s.pixel_at(0, 0)));
    }

    #[test]
    fn test_cutout() {
        let s = sheet();
        let cut = s.cutout(&Box::new_unchecked(2, 1, 1, 1)).unwrap();
        assert_eq!(cut.get_rgb(0, 0), Some((10, 20, 30)));
        assert!(s.cutout(&Box::new_unchecked(3, 2, 2, 2)).is_err());
    }
}
