//! Display texture holding the uploaded framebuffer.

use glam::Vec2;
use retroview_core::{DisplayOptions, FilterMode, FrameImage};

/// GPU-side copy of the framebuffer plus its sampler.
///
/// The texture is allocated once at the framebuffer's maximum extent; frames
/// that use fewer rows upload only their live rows and report the occupied
/// fraction for the blit extent uniform.
pub struct DisplayTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl DisplayTexture {
    /// Creates the display texture and its sampler.
    #[must_use]
    pub fn new(device: &wgpu::Device, options: &DisplayOptions) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Display Texture"),
            size: wgpu::Extent3d {
                width: u32::from(FrameImage::WIDTH),
                height: u32::from(FrameImage::MAX_HEIGHT),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let filter = match options.filter {
            FilterMode::Nearest => wgpu::FilterMode::Nearest,
            FilterMode::Linear => wgpu::FilterMode::Linear,
        };
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Display Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        log::debug!(
            "created {}x{} display texture",
            FrameImage::WIDTH,
            FrameImage::MAX_HEIGHT
        );

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Uploads the top `rows` rows of a frame.
    ///
    /// Returns the fraction of the texture the live frame occupies, which is
    /// what the blit pass expects as its extent uniform. `rows` beyond the
    /// texture height is clamped; zero rows uploads nothing and yields a
    /// zero-height extent (a defined, degenerate blit).
    pub fn upload(&self, queue: &wgpu::Queue, frame: &FrameImage, rows: u16) -> Vec2 {
        let rows = clamp_rows(rows);

        if rows > 0 {
            let bytes_per_row = u32::from(FrameImage::WIDTH) * 4;
            let byte_count = usize::from(rows) * usize::from(FrameImage::WIDTH) * 4;
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &self.texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &frame.pixels_rgba()[..byte_count],
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(bytes_per_row),
                    rows_per_image: None,
                },
                wgpu::Extent3d {
                    width: u32::from(FrameImage::WIDTH),
                    height: u32::from(rows),
                    depth_or_array_layers: 1,
                },
            );
        }

        live_extent(rows)
    }

    /// View of the display texture.
    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Sampler configured from the display options.
    #[must_use]
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}

/// Clamps a row count to the texture height.
fn clamp_rows(rows: u16) -> u16 {
    if rows > FrameImage::MAX_HEIGHT {
        log::warn!(
            "frame upload of {rows} rows clamped to {}",
            FrameImage::MAX_HEIGHT
        );
        FrameImage::MAX_HEIGHT
    } else {
        rows
    }
}

/// Fraction of the texture that `rows` live rows occupy.
fn live_extent(rows: u16) -> Vec2 {
    Vec2::new(1.0, f32::from(rows) / f32::from(FrameImage::MAX_HEIGHT))
}
