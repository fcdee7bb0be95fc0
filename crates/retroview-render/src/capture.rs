//! Saving blitted frames to image files.

use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Saves tightly-packed RGBA pixel data to a PNG file.
///
/// # Errors
/// Returns an error if the data does not match the dimensions or the file
/// cannot be written.
pub fn save_png(
    path: impl AsRef<Path>,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<(), CaptureError> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, pixels.to_vec())
            .ok_or(CaptureError::InvalidImageData)?;
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}

/// Encodes tightly-packed RGBA pixel data as a PNG in memory.
///
/// # Errors
/// Returns an error if the data does not match the dimensions.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, CaptureError> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, pixels.to_vec())
            .ok_or(CaptureError::InvalidImageData)?;
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Error type for capture operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("pixel data does not match the given dimensions")]
    InvalidImageData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_roundtrip() {
        let pixels = vec![255u8; 4 * 4 * 4];
        let png = encode_png(&pixels, 4, 4).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn test_encode_rejects_mismatched_dimensions() {
        let pixels = vec![0u8; 16];
        assert!(matches!(
            encode_png(&pixels, 4, 4),
            Err(CaptureError::InvalidImageData)
        ));
    }
}
