//! Viewport fitting for the display blit.

use glam::Vec2;

/// Target rectangle for the blit, in output-surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    /// Top-left corner.
    pub pos: Vec2,
    /// Width and height.
    pub size: Vec2,
}

/// Computes the centered rectangle the image should occupy in a viewport.
///
/// The image keeps its aspect ratio. With `integer_scaling`, upscale factors
/// are floored to whole numbers so texels map to whole pixel blocks;
/// downscaling stays fractional either way. Returns `None` when the viewport
/// is too small for a meaningful scale, in which case the host should skip
/// the draw.
pub fn fit_viewport(
    viewport_pos: Vec2,
    viewport_size: Vec2,
    image_size: Vec2,
    integer_scaling: bool,
) -> Option<ViewportRect> {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return None;
    }

    let mut scale = (viewport_size / image_size).min_element();
    if integer_scaling && scale > 1.0 {
        scale = scale.floor();
    }
    if scale < f32::EPSILON {
        log::debug!("viewport {viewport_size} too small for image {image_size}, skipping blit");
        return None;
    }

    let size = image_size * scale;
    let pos = (viewport_pos + (viewport_size - size) * 0.5).round();
    Some(ViewportRect { pos, size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_upscale() {
        // A 256x224 image in a 800x600 viewport: scale 600/224 = 2.67,
        // floored to 2.
        let rect = fit_viewport(
            Vec2::ZERO,
            Vec2::new(800.0, 600.0),
            Vec2::new(256.0, 224.0),
            true,
        )
        .unwrap();
        assert_eq!(rect.size, Vec2::new(512.0, 448.0));
        assert_eq!(rect.pos, Vec2::new(144.0, 76.0));
    }

    #[test]
    fn test_fractional_upscale_when_disabled() {
        let rect = fit_viewport(
            Vec2::ZERO,
            Vec2::new(800.0, 600.0),
            Vec2::new(256.0, 224.0),
            false,
        )
        .unwrap();
        // 600/224 of 224 fills the viewport height.
        assert!((rect.size.y - 600.0).abs() < 1e-3);
        assert_eq!(rect.pos.y, 0.0);
    }

    #[test]
    fn test_fractional_downscale() {
        let rect = fit_viewport(
            Vec2::ZERO,
            Vec2::new(128.0, 112.0),
            Vec2::new(256.0, 224.0),
            true,
        )
        .unwrap();
        assert_eq!(rect.size, Vec2::new(128.0, 112.0));
        assert_eq!(rect.pos, Vec2::ZERO);
    }

    #[test]
    fn test_offset_viewport_centers() {
        let rect = fit_viewport(
            Vec2::new(100.0, 50.0),
            Vec2::new(512.0, 448.0),
            Vec2::new(256.0, 224.0),
            true,
        )
        .unwrap();
        assert_eq!(rect.size, Vec2::new(512.0, 448.0));
        assert_eq!(rect.pos, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_collapsed_viewport_skips_draw() {
        assert!(fit_viewport(Vec2::ZERO, Vec2::ZERO, Vec2::new(256.0, 224.0), true).is_none());
        assert!(fit_viewport(Vec2::ZERO, Vec2::new(800.0, 600.0), Vec2::ZERO, true).is_none());
    }
}
