//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
///
/// The blit pass itself is total over its inputs; these errors all come from
/// host-side resource acquisition and readback.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create wgpu adapter.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// GPU buffer mapping failed during readback.
    #[error("buffer mapping failed: {0}")]
    BufferMapFailed(#[from] wgpu::BufferAsyncError),

    /// Readback did not complete.
    #[error("readback failed: {0}")]
    ReadbackFailed(String),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
