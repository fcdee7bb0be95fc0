//! Core error types.

use thiserror::Error;

/// Errors from framebuffer and configuration operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Source data does not match the framebuffer dimensions.
    #[error("dimension mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch {
        /// Number of bytes the operation expected.
        expected: usize,
        /// Number of bytes actually supplied.
        actual: usize,
    },

    /// Pixel coordinate outside the framebuffer extent.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} frame")]
    PixelOutOfBounds {
        /// X coordinate of the offending pixel.
        x: u16,
        /// Y coordinate of the offending pixel.
        y: u16,
        /// Framebuffer width.
        width: u16,
        /// Framebuffer height.
        height: u16,
    },
}

/// A specialized Result type for core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
