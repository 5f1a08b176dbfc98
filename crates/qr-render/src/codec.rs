//! PNG decode/encode and file helpers.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::Result;

/// Decode PNG bytes into an RGBA bitmap.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    Ok(img.to_rgba8())
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Load an image file and convert it to RGBA.
///
/// The format is detected from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
    Ok(img.to_rgba8())
}

/// Save a bitmap as a PNG file, creating missing parent directories.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    img.save_with_format(path, ImageFormat::Png)?;
    debug!(path = %path.display(), "Saved PNG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;
    use image::Rgba;

    #[test]
    fn test_png_bytes_decode_back() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 128]));

        let bytes = encode_png(&img).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
        assert_eq!(decode_png(&bytes).unwrap(), img);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_png(b"not a png").unwrap_err();
        assert!(matches!(err, RenderError::Codec(_)));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("qr-render-codec-{}", std::process::id()));
        let path = dir.join("nested").join("out.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));

        save_png(&img, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), img);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_ignores_file_extension() {
        let dir = std::env::temp_dir().join(format!("qr-render-ext-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let bytes = encode_png(&img).unwrap();

        for name in ["logo", "logo.img"] {
            let path = dir.join(name);
            std::fs::write(&path, &bytes).unwrap();
            assert_eq!(load_image(&path).unwrap(), img, "loading {name}");
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join("qr-render-definitely-missing.png");
        assert!(load_image(&path).is_err());
    }
}
