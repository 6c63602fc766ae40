//! PNG encoding through the `image` crate.
//!
//! Only the `png` feature of `image` is compiled in. Output is RGBA8,
//! lossless, with the codec's default compression and filtering.

use super::backend::{EncodeError, EncoderBackend, check_rgba_len};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust PNG encoder.
pub struct PngBackend;

impl PngBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn write_png<W: Write>(
    writer: W,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), image::ImageError> {
    PngEncoder::new(writer).write_image(pixels, width, height, ExtendedColorType::Rgba8)
}

impl EncoderBackend for PngBackend {
    fn encode_rgba(
        &self,
        path: &Path,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<(), EncodeError> {
        check_rgba_len(pixels, width, height)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_png(&mut writer, pixels, width, height).map_err(|e| {
            EncodeError::Encode(format!("Failed to encode {}: {}", path.display(), e))
        })?;
        writer.flush()?;
        Ok(())
    }

    fn encode_rgba_to_vec(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, EncodeError> {
        check_rgba_len(pixels, width, height)?;
        let mut out = Vec::new();
        write_png(&mut out, pixels, width, height)
            .map_err(|e| EncodeError::Encode(e.to_string()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn checker(size: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                if (x + y) % 2 == 0 {
                    pixels.extend_from_slice(&[200, 10, 30, 255]);
                } else {
                    pixels.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
        }
        pixels
    }

    #[test]
    fn in_memory_png_decodes_to_same_pixels() {
        let pixels = checker(9);
        let png = PngBackend::new().encode_rgba_to_vec(&pixels, 9, 9).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (9, 9));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn file_png_round_trips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("checker.png");
        let pixels = checker(5);

        PngBackend::new().encode_rgba(&path, &pixels, 5, 5).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn missing_directory_is_io_error() {
        let result = PngBackend::new().encode_rgba(
            Path::new("/nonexistent/dir/out.png"),
            &[0; 4],
            1,
            1,
        );
        assert!(matches!(result, Err(EncodeError::Io(_))));
    }

    #[test]
    fn wrong_buffer_length_is_rejected_before_io() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("short.png");
        let result = PngBackend::new().encode_rgba(&path, &[0; 3], 1, 1);
        assert!(matches!(result, Err(EncodeError::BufferSize { .. })));
        assert!(!path.exists());
    }
}
