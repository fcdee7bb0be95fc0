//! Core types for retroview.
//!
//! This crate provides the GPU-free half of retroview:
//! - The quantized 5-bit color model and its fixed linear expansion
//! - [`FrameImage`], the CPU-side framebuffer uploaded to the display texture
//! - Reference math for the fullscreen-triangle blit (vertex positions and
//!   texture coordinates, exactly as the shader computes them)
//! - Viewport fitting with pixel-perfect integer scaling
//! - Display configuration options

// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod frame;
pub mod fullscreen;
pub mod options;
pub mod viewport;

pub use color::{expand_channel, expand_rgba, QuantizedColor, Rgb15, CHANNEL_MAX, EXPAND_FACTOR};
pub use error::{CoreError, CoreResult};
pub use frame::FrameImage;
pub use fullscreen::{clip_position, texture_coord, unit_corner};
pub use options::{DisplayOptions, FilterMode};
pub use viewport::{fit_viewport, ViewportRect};
