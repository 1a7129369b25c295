//! spriteclip-io - Image I/O and sprite sheet export
//!
//! - **Decoding** - PNG through `png`, other raster formats through `image`
//! - **Format sniffing** - magic numbers, with an extension fallback
//! - **Sprite sheets** - a decoded image with its name and colour key
//! - **XML export** - the sprite sheet description document
//!
//! # Examples
//!
//! ```
//! use spriteclip_core::{Pix, PixMut, SpriteRecord};
//! use spriteclip_io::{SpriteSheet, sheet_to_xml};
//!
//! let pix: Pix = PixMut::new(8, 8).unwrap().into();
//! let sheet = SpriteSheet::from_pix("hero.png", pix);
//! let record = SpriteRecord {
//!     name: "sprite_1".to_string(),
//!     offset_x: 1,
//!     offset_y: 2,
//!     width: 3,
//!     height: 4,
//!     anchor_x: 0,
//!     anchor_y: 0,
//! };
//! let xml = sheet_to_xml(&sheet, "idle", &[record]);
//! assert!(xml.contains("<offset_x>1</offset_x>"));
//! ```

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "raster-formats")]
pub mod raster;
pub mod sheet;
pub mod xml;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use sheet::SpriteSheet;
pub use xml::{XmlExporter, sheet_to_xml};

use spriteclip_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Read an image from a file path
///
/// The format is sniffed from the header; the extension is only used for
/// formats without a signature.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let format = detect_format_from_bytes(&data)
        .or_else(|err| ImageFormat::from_path(path).ok_or(err))?;
    let pix = decode(&data, format)?;
    tracing::debug!(
        "read {}: {}x{} {:?}",
        path.display(),
        pix.width(),
        pix.height(),
        format
    );
    Ok(pix)
}

/// Read an image from memory
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    decode(data, format)
}

/// Read an image of a known format from memory
pub fn read_image_format(data: &[u8], format: ImageFormat) -> IoResult<Pix> {
    decode(data, format)
}

fn decode(data: &[u8], format: ImageFormat) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(Cursor::new(data)),
        #[cfg(feature = "raster-formats")]
        other => raster::read_raster(data, other),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image to a file path
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(pix, &mut writer, format)?;
    writer.flush()?;
    tracing::debug!("wrote {}: {}x{}", path.display(), pix.width(), pix.height());
    Ok(())
}

/// Write an image to memory
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_image_to(pix, &mut cursor, format)?;
    Ok(cursor.into_inner())
}

fn write_image_to<W: Write + Seek>(pix: &Pix, writer: &mut W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::write_png(pix, writer),
        #[cfg(feature = "raster-formats")]
        other => raster::write_raster(pix, writer, other),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spriteclip_core::PixMut;

    fn sample() -> Pix {
        let mut pm = PixMut::new(3, 2).unwrap();
        pm.set_rgba(0, 0, 1, 2, 3, 4).unwrap();
        pm.set_rgba(2, 1, 250, 251, 252, 253).unwrap();
        pm.into()
    }

    #[test]
    fn test_mem_roundtrip_png() {
        let pix = sample();
        let bytes = write_image_mem(&pix, ImageFormat::Png).unwrap();
        assert_eq!(detect_format_from_bytes(&bytes).unwrap(), ImageFormat::Png);
        let back = read_image_mem(&bytes).unwrap();
        assert_eq!(back.data(), pix.data());
    }

    #[test]
    fn test_file_roundtrip_png() {
        let dir = std::env::temp_dir().join("spriteclip_io_lib_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.png");
        let pix = sample();
        write_image(&pix, &path, ImageFormat::Png).unwrap();
        let back = read_image(&path).unwrap();
        assert_eq!(back.data(), pix.data());
    }

    #[test]
    fn test_tga_read_by_extension() {
        let dir = std::env::temp_dir().join("spriteclip_io_lib_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sheet.tga");
        let pix = sample();
        write_image(&pix, &path, ImageFormat::Tga).unwrap();
        let back = read_image(&path).unwrap();
        assert_eq!(back.get_rgba(2, 1), Some((250, 251, 252, 253)));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/sheet.png"),
            Err(IoError::Io(_))
        ));
    }

    #[test]
    fn test_read_unknown_bytes() {
        assert!(matches!(
            read_image_mem(b"definitely not an image"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
