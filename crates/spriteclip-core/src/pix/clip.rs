//! Rectangle extraction
//!
//! Copies a sub-rectangle out of a sheet, e.g. to cut one sprite out.

use super::{Pix, PixMut};
use crate::box_::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract the pixels inside `rect` as a new image.
    ///
    /// Unlike a clipping crop, the rectangle must lie entirely inside
    /// the image; it is never silently shrunk. The samples-per-pixel
    /// value of the source is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an empty rectangle and
    /// [`Error::RectOutOfBounds`] if the rectangle sticks out of the image.
    ///
    /// ```
    /// use spriteclip_core::{Box, Pix};
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let cut = pix.clip_rectangle(&Box::new_unchecked(10, 20, 50, 40)).unwrap();
    /// assert_eq!(cut.width(), 50);
    /// assert_eq!(cut.height(), 40);
    /// ```
    pub fn clip_rectangle(&self, rect: &Box) -> Result<Pix> {
        if rect.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                rect.w, rect.h
            )));
        }
        if !rect.fits_within(self.width(), self.height()) {
            return Err(Error::RectOutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: self.width(),
                height: self.height(),
            });
        }

        let (x0, y0) = (rect.x as u32, rect.y as u32);
        let (w, h) = (rect.w as u32, rect.h as u32);

        let mut pixd = PixMut::new(w, h)?;
        pixd.set_spp(self.spp())?;

        for dy in 0..h {
            let src = &self.row_data(y0 + dy)[x0 as usize..(x0 + w) as usize];
            let start = dy as usize * w as usize;
            pixd.data_mut()[start..start + w as usize].copy_from_slice(src);
        }

        Ok(pixd.into())
    }
}
