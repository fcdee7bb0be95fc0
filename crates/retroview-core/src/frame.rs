//! CPU-side framebuffer holding quantized texels.

use crate::color::QuantizedColor;
use crate::error::{CoreError, CoreResult};

/// A fixed-extent framebuffer of [`QuantizedColor`] texels.
///
/// The extent matches the double-resolution output surface of the console:
/// 512 texels wide, up to 478 rows. A frame that uses fewer rows (the common
/// case) still uploads against this full-height texture; the blit pass is
/// told which fraction of the height is live through its extent uniform.
#[derive(Debug, Clone)]
pub struct FrameImage(Box<[QuantizedColor; Self::MAX_PIXELS]>);

impl Default for FrameImage {
    fn default() -> Self {
        Self(
            vec![QuantizedColor::BLACK; Self::MAX_PIXELS]
                .try_into()
                .unwrap(),
        )
    }
}

impl FrameImage {
    /// Width of the framebuffer in texels.
    pub const WIDTH: u16 = 512;
    /// Maximum number of live rows (interlaced, overscan).
    pub const MAX_HEIGHT: u16 = 478;
    /// Minimum number of live rows (progressive, no overscan).
    pub const MIN_HEIGHT: u16 = 224;
    /// Total texel count.
    pub const MAX_PIXELS: usize = Self::WIDTH as usize * Self::MAX_HEIGHT as usize;

    /// Creates a black frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one texel.
    ///
    /// # Errors
    /// Returns [`CoreError::PixelOutOfBounds`] if the coordinate lies outside
    /// the frame.
    pub fn set(&mut self, x: u16, y: u16, color: QuantizedColor) -> CoreResult<()> {
        if x >= Self::WIDTH || y >= Self::MAX_HEIGHT {
            return Err(CoreError::PixelOutOfBounds {
                x,
                y,
                width: Self::WIDTH,
                height: Self::MAX_HEIGHT,
            });
        }
        self.0[usize::from(x) | (usize::from(y) * usize::from(Self::WIDTH))] = color;
        Ok(())
    }

    /// Reads one texel, or `None` outside the frame.
    pub fn get(&self, x: u16, y: u16) -> Option<QuantizedColor> {
        if x >= Self::WIDTH || y >= Self::MAX_HEIGHT {
            return None;
        }
        Some(self.0[usize::from(x) | (usize::from(y) * usize::from(Self::WIDTH))])
    }

    /// Overwrites the top `rows` rows from raw RGBA bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::DimensionMismatch`] if `src` is not exactly
    /// `rows * WIDTH * 4` bytes, or if `rows` exceeds [`Self::MAX_HEIGHT`].
    pub fn copy_rows(&mut self, src: &[u8], rows: u16) -> CoreResult<()> {
        let expected = usize::from(rows) * usize::from(Self::WIDTH) * 4;
        if rows > Self::MAX_HEIGHT || src.len() != expected {
            return Err(CoreError::DimensionMismatch {
                expected,
                actual: src.len(),
            });
        }
        let texels = usize::from(rows) * usize::from(Self::WIDTH);
        bytemuck::cast_slice_mut(&mut self.0[..texels]).copy_from_slice(src);
        Ok(())
    }

    /// Byte view of the whole frame, suitable for a direct texture upload.
    pub fn pixels_rgba(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_opaque_black() {
        let frame = FrameImage::new();
        let bytes = frame.pixels_rgba();
        assert_eq!(bytes.len(), FrameImage::MAX_PIXELS * 4);
        assert_eq!(&bytes[..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[bytes.len() - 4..], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut frame = FrameImage::new();
        let color = QuantizedColor {
            red: 31,
            green: 15,
            blue: 7,
            alpha: 255,
        };
        frame.set(511, 477, color).unwrap();
        assert_eq!(frame.get(511, 477), Some(color));

        // The byte view places the texel at the expected offset.
        let offset = (511 + 477 * 512) * 4;
        assert_eq!(&frame.pixels_rgba()[offset..offset + 4], &[31, 15, 7, 255]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut frame = FrameImage::new();
        assert!(frame.set(512, 0, QuantizedColor::BLACK).is_err());
        assert!(frame.set(0, 478, QuantizedColor::BLACK).is_err());
        assert_eq!(frame.get(512, 0), None);
    }

    #[test]
    fn test_copy_rows_validates_length() {
        let mut frame = FrameImage::new();
        let row = vec![9u8; 512 * 4];
        frame.copy_rows(&row, 1).unwrap();
        assert_eq!(
            frame.get(0, 0),
            Some(QuantizedColor {
                red: 9,
                green: 9,
                blue: 9,
                alpha: 9
            })
        );
        // Row 1 untouched.
        assert_eq!(frame.get(0, 1), Some(QuantizedColor::BLACK));

        assert!(frame.copy_rows(&row, 2).is_err());
        assert!(frame.copy_rows(&row[..100], 1).is_err());
    }
}
