//! Pixel source capability
//!
//! Blob detection only needs to read pixels and know which color is the
//! background. `PixelSource` captures exactly that, so detection can run
//! over a decoded [`Pix`], a loaded sprite sheet, or any other raster.

use crate::pix::Pix;

/// Read-only access to a raster of packed `0xRRGGBBAA` pixels.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel value at (x, y). Callers stay within `width() x height()`.
    fn pixel_at(&self, x: u32, y: u32) -> u32;

    /// Reference background color.
    ///
    /// Defaults to the pixel at the top-left corner of the full image.
    fn background(&self) -> u32 {
        self.pixel_at(0, 0)
    }

    /// A pixel is foreground when it differs from the background.
    #[inline]
    fn is_foreground(&self, pixel: u32) -> bool {
        pixel != self.background()
    }
}

impl PixelSource for Pix {
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn pixel_at(&self, x: u32, y: u32) -> u32 {
        self.get_pixel_unchecked(x, y)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> u32 {
        (**self).pixel_at(x, y)
    }

    fn background(&self) -> u32 {
        (**self).background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pix::PixMut;

    #[test]
    fn test_background_is_top_left() {
        let mut pm = PixMut::new(3, 3).unwrap();
        pm.set_all(0x00ff00ff);
        pm.set_pixel(1, 1, 0xff0000ff).unwrap();
        let pix: Pix = pm.into();

        assert_eq!(pix.background(), 0x00ff00ff);
        assert!(!pix.is_foreground(pix.pixel_at(0, 2)));
        assert!(pix.is_foreground(pix.pixel_at(1, 1)));
    }

    #[test]
    fn test_reference_forwards() {
        let pix = Pix::new(2, 5).unwrap();
        let r = &pix;
        assert_eq!(PixelSource::width(&r), 2);
        assert_eq!(PixelSource::height(&r), 5);
        assert_eq!(r.background(), 0);
    }
}
