//! Reference math for the fullscreen-triangle blit.
//!
//! These functions compute exactly what the vertex stage of `blit.wgsl`
//! computes, on the CPU. The pass draws three vertices with no vertex buffer;
//! each ordinal is mapped to a unit-square corner, inflated into an oversized
//! clip-space triangle, and given a flipped, extent-scaled texture coordinate.
//! Keeping the arithmetic here lets tests pin it down without a GPU.

use glam::{Vec2, Vec4};

/// Unit-square corner for a vertex ordinal.
///
/// Ordinals 0, 1, 2 yield (0,0), (1,0), (0,1); the fourth corner is
/// deliberately never produced. Ordinals outside {0,1,2} violate the
/// 3-vertex draw-call contract.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn unit_corner(ordinal: u32) -> Vec2 {
    debug_assert!(ordinal < 3, "blit draws exactly 3 vertices");
    Vec2::new((ordinal & 1) as f32, (ordinal >> 1) as f32)
}

/// Clip-space position for a vertex ordinal.
///
/// `corner * 4 - 1` per axis puts the triangle at (-1,-1), (3,-1), (-1,3):
/// it overshoots the clip volume on two sides so that the clipped portion
/// covers the viewport exactly once without a second triangle.
#[inline]
pub fn clip_position(ordinal: u32) -> Vec4 {
    let pos = unit_corner(ordinal) * 4.0 - 1.0;
    Vec4::new(pos.x, pos.y, 0.0, 1.0)
}

/// Texture coordinate for a vertex ordinal, scaled by the image extent.
///
/// The pre-flip coordinate is `corner * 2`, matching the oversized position
/// so the visible interpolated range is [0,1] squared after clipping. The y
/// axis is flipped to reconcile clip-space orientation with texture storage
/// order, then the result is scaled component-wise by `extent`.
#[inline]
pub fn texture_coord(ordinal: u32, extent: Vec2) -> Vec2 {
    let mut coord = unit_corner(ordinal) * 2.0;
    coord.y = 1.0 - coord.y;
    coord * extent
}
