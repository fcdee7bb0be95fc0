//! Rendering backend for retroview.
//!
//! This crate provides the wgpu side of retroview:
//! - [`BlitPass`], the fullscreen-triangle pass that draws the quantized
//!   framebuffer and expands its 5-bit channels to full scale
//! - [`DisplayTexture`], the GPU copy of the framebuffer and its sampler
//! - [`OffscreenTarget`], a headless target with CPU readback
//! - PNG capture of blitted frames

// Documentation lints - internal functions don't need exhaustive panic docs
#![allow(clippy::missing_panics_doc)]

pub mod blit_pass;
pub mod capture;
pub mod display_texture;
pub mod error;
pub mod offscreen;

pub use blit_pass::{BlitPass, BlitUniforms};
pub use capture::{encode_png, save_png, CaptureError};
pub use display_texture::DisplayTexture;
pub use error::{RenderError, RenderResult};
pub use offscreen::OffscreenTarget;

/// WGSL source of the blit shader, exposed for host-side validation.
pub const BLIT_SHADER_SOURCE: &str = include_str!("shaders/blit.wgsl");
