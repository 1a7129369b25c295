//! Non-PNG raster formats through the `image` crate
//!
//! BMP, JPEG, GIF (first frame), WebP and TGA decode to RGBA. Images
//! without an alpha channel come back with `spp == 3`.

use crate::format::ImageFormat;
use crate::{IoError, IoResult};
use image::{ExtendedColorType, ImageReader};
use spriteclip_core::{Pix, PixMut, color};
use std::io::{Cursor, Seek, Write};

fn codec_format(format: ImageFormat) -> image::ImageFormat {
    match format {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Bmp => image::ImageFormat::Bmp,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        ImageFormat::Gif => image::ImageFormat::Gif,
        ImageFormat::WebP => image::ImageFormat::WebP,
        ImageFormat::Tga => image::ImageFormat::Tga,
    }
}

/// Decode an in-memory image of the given format.
pub fn read_raster(data: &[u8], format: ImageFormat) -> IoResult<Pix> {
    let mut reader = ImageReader::new(Cursor::new(data));
    reader.set_format(codec_format(format));
    let decoded = reader
        .decode()
        .map_err(|e| IoError::DecodeError(format!("{:?} decode error: {}", format, e)))?;

    let spp = if decoded.color().has_alpha() { 4 } else { 3 };
    let rgba = decoded.to_rgba8();

    let mut pix_mut = PixMut::new(rgba.width(), rgba.height())?;
    pix_mut.set_spp(spp)?;
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        pix_mut.set_pixel_unchecked(x, y, color::compose_rgba(r, g, b, a));
    }
    Ok(pix_mut.into())
}

/// Encode `pix` in the given format.
///
/// JPEG has no alpha channel, so it is always written as RGB.
pub fn write_raster<W: Write + Seek>(pix: &Pix, writer: &mut W, format: ImageFormat) -> IoResult<()> {
    let with_alpha = pix.spp() == 4 && format != ImageFormat::Jpeg;
    let samples = if with_alpha { 4 } else { 3 };

    let mut buf = Vec::with_capacity(pix.data().len() * samples);
    for &pixel in pix.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        buf.extend_from_slice(&[r, g, b]);
        if with_alpha {
            buf.push(a);
        }
    }

    let color_type = if with_alpha {
        ExtendedColorType::Rgba8
    } else {
        ExtendedColorType::Rgb8
    };
    image::write_buffer_with_format(
        writer,
        &buf,
        pix.width(),
        pix.height(),
        color_type,
        codec_format(format),
    )
    .map_err(|e| IoError::EncodeError(format!("{:?} encode error: {}", format, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(spp: u32) -> Pix {
        let mut pm = PixMut::new(4, 3).unwrap();
        pm.set_spp(spp).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                pm.set_rgb(x, y, (x * 60) as u8, (y * 80) as u8, 200).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_bmp_roundtrip() {
        let pix = sample(3);
        let mut out = Cursor::new(Vec::new());
        write_raster(&pix, &mut out, ImageFormat::Bmp).unwrap();
        let back = read_raster(out.get_ref(), ImageFormat::Bmp).unwrap();
        assert_eq!((back.width(), back.height()), (4, 3));
        assert_eq!(back.data(), pix.data());
    }

    #[test]
    fn test_tga_keeps_alpha() {
        let mut pm = PixMut::new(2, 2).unwrap();
        pm.set_rgba(1, 1, 10, 20, 30, 128).unwrap();
        let pix: Pix = pm.into();
        let mut out = Cursor::new(Vec::new());
        write_raster(&pix, &mut out, ImageFormat::Tga).unwrap();
        let back = read_raster(out.get_ref(), ImageFormat::Tga).unwrap();
        assert_eq!(back.spp(), 4);
        assert_eq!(back.get_rgba(1, 1), Some((10, 20, 30, 128)));
    }

    #[test]
    fn test_jpeg_written_as_rgb() {
        let pix = sample(4);
        let mut out = Cursor::new(Vec::new());
        write_raster(&pix, &mut out, ImageFormat::Jpeg).unwrap();
        let back = read_raster(out.get_ref(), ImageFormat::Jpeg).unwrap();
        assert_eq!(back.spp(), 3);
        assert_eq!((back.width(), back.height()), (4, 3));
    }

    #[test]
    fn test_corrupt_data() {
        assert!(matches!(
            read_raster(b"BM not really", ImageFormat::Bmp),
            Err(IoError::DecodeError(_))
        ));
    }
}
