//! Quantized 5-bit color model and its fixed linear expansion.
//!
//! Retro console video hardware stores color as 15-bit BGR words with five
//! bits per channel (0-31). The framebuffer keeps those raw 5-bit values in
//! ordinary 8-bit channels, so a texture read through an 8-bit-normalized
//! path yields `value / 255` instead of `value / 31`. Multiplying by
//! [`EXPAND_FACTOR`] restores the intended full-scale value; it is the single
//! color transformation the blit pass performs.

use glam::Vec4;

/// Maximum value of a 5-bit color channel.
pub const CHANNEL_MAX: u8 = 31;

/// Fixed linear factor restoring full scale from a truncated 8-bit read.
pub const EXPAND_FACTOR: f32 = 255.0 / 31.0;

/// Expands one normalized channel value read from quantized storage.
///
/// Exactly `v * 255/31`; no gamma or color-space conversion.
#[inline]
pub fn expand_channel(v: f32) -> f32 {
    v * EXPAND_FACTOR
}

/// Expands all four channels of a sampled color, alpha included.
///
/// CPU mirror of the fragment stage arithmetic.
#[inline]
pub fn expand_rgba(color: Vec4) -> Vec4 {
    color * EXPAND_FACTOR
}

/// A 15-bit BGR555 color word as stored in console palette memory.
///
/// Channels occupy the low 15 bits, red in the lowest five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb15(pub u16);

impl Rgb15 {
    const MASK: u16 = CHANNEL_MAX as u16;

    /// Red channel (0-31).
    #[inline]
    pub fn red(self) -> u8 {
        (self.0 & Self::MASK) as u8
    }

    /// Green channel (0-31).
    #[inline]
    pub fn green(self) -> u8 {
        ((self.0 >> 5) & Self::MASK) as u8
    }

    /// Blue channel (0-31).
    #[inline]
    pub fn blue(self) -> u8 {
        ((self.0 >> 10) & Self::MASK) as u8
    }

    /// Packs three 5-bit channels into a color word. Values are masked to 5 bits.
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(
            (u16::from(red) & Self::MASK)
                | ((u16::from(green) & Self::MASK) << 5)
                | ((u16::from(blue) & Self::MASK) << 10),
        )
    }
}

/// One framebuffer texel: raw 5-bit channel values in 8-bit storage.
///
/// The alpha field is always 255 so the frame can be uploaded directly as
/// RGBA texel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct QuantizedColor {
    /// Red, 0-31.
    pub red: u8,
    /// Green, 0-31.
    pub green: u8,
    /// Blue, 0-31.
    pub blue: u8,
    /// Always 255.
    pub alpha: u8,
}

impl QuantizedColor {
    /// All channels zero, opaque.
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 255,
    };

    /// Builds a texel from a 15-bit palette word.
    pub fn from_rgb15(word: Rgb15) -> Self {
        Self {
            red: word.red(),
            green: word.green(),
            blue: word.blue(),
            alpha: 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_expand_is_exact_linear_scale() {
        // A channel storing 1 reads back as 1/255 and must expand to 1/31.
        let v = 1.0 / 255.0;
        let expanded = expand_channel(v);
        assert!((expanded - 1.0 / 31.0).abs() < 1e-7, "got {expanded}");

        // Channel 31 (the 5-bit maximum) must expand to full scale.
        let v = 31.0 / 255.0;
        assert!((expand_channel(v) - 1.0).abs() < 1e-6);

        assert_eq!(expand_channel(0.0), 0.0);
    }

    #[test]
    fn test_expand_not_idempotent() {
        // Applying the expansion twice must differ from applying it once,
        // so a double-application bug is detectable.
        let v = 10.0 / 255.0;
        let once = expand_channel(v);
        let twice = expand_channel(once);
        assert!((once - twice).abs() > 1e-3);
    }

    #[test]
    fn test_expand_rgba_covers_alpha() {
        let c = expand_rgba(Vec4::new(0.0, 1.0 / 255.0, 31.0 / 255.0, 31.0 / 255.0));
        assert_eq!(c.x, 0.0);
        assert!((c.y - 1.0 / 31.0).abs() < 1e-7);
        assert!((c.z - 1.0).abs() < 1e-6);
        assert!((c.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb15_decode() {
        let white = Rgb15(0x7FFF);
        assert_eq!(white.red(), 31);
        assert_eq!(white.green(), 31);
        assert_eq!(white.blue(), 31);

        let red = Rgb15(0x001F);
        assert_eq!(red.red(), 31);
        assert_eq!(red.green(), 0);
        assert_eq!(red.blue(), 0);

        let blue = Rgb15(0x7C00);
        assert_eq!(blue.blue(), 31);
        assert_eq!(blue.red(), 0);
    }

    #[test]
    fn test_from_channels_masks_to_five_bits() {
        let word = Rgb15::from_channels(255, 32, 63);
        assert_eq!(word.red(), CHANNEL_MAX);
        assert_eq!(word.green(), 0);
        assert_eq!(word.blue(), CHANNEL_MAX);
    }

    #[test]
    fn test_rgb15_roundtrip_through_texel() {
        let word = Rgb15::from_channels(5, 17, 31);
        let texel = QuantizedColor::from_rgb15(word);
        assert_eq!(texel.red, 5);
        assert_eq!(texel.green, 17);
        assert_eq!(texel.blue, 31);
        assert_eq!(texel.alpha, 255);
    }

    proptest! {
        #[test]
        fn prop_expand_linear(a in 0.0f32..1.0, b in 0.0f32..1.0, k in 0.0f32..4.0) {
            // Linearity: expand(a + k*b) == expand(a) + k*expand(b).
            let lhs = expand_channel(a + k * b);
            let rhs = expand_channel(a) + k * expand_channel(b);
            prop_assert!((lhs - rhs).abs() < 1e-3);
        }

        #[test]
        fn prop_expand_restores_five_bit_scale(raw in 0u8..=CHANNEL_MAX) {
            let read = f32::from(raw) / 255.0;
            let expanded = expand_channel(read);
            let expected = f32::from(raw) / 31.0;
            prop_assert!((expanded - expected).abs() < 1e-6);
        }
    }
}
