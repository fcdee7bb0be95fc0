//! Fullscreen blit pass for the quantized framebuffer.
//!
//! The pass draws a single oversized triangle (3 vertices, no vertex buffer)
//! whose clipped portion covers the target exactly once, samples the display
//! texture at a flipped, extent-scaled coordinate, and expands the sampled
//! 5-bit channel values to full scale. All arithmetic lives in
//! `shaders/blit.wgsl`; [`retroview_core::fullscreen`] mirrors it on the CPU.

use glam::Vec2;
use retroview_core::ViewportRect;
use wgpu::util::DeviceExt;

/// GPU representation of the blit uniforms.
///
/// Padded to 16 bytes for uniform-buffer layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlitUniforms {
    /// Fraction of the display texture occupied by the live frame.
    pub image_extent: [f32; 2],
    _padding: [u32; 2],
}

impl BlitUniforms {
    /// Builds uniforms for a given extent.
    pub fn new(extent: Vec2) -> Self {
        Self {
            image_extent: extent.to_array(),
            _padding: [0; 2],
        }
    }
}

/// Blit render resources.
pub struct BlitPass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
}

impl BlitPass {
    /// Creates a new blit pass targeting `output_format`.
    #[must_use]
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Blit Bind Group Layout"),
            entries: &[
                // Display texture
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // Sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                // Extent uniform, consumed by the vertex stage
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Blit Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: output_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Blit Uniform Buffer"),
            contents: bytemuck::cast_slice(&[BlitUniforms::new(Vec2::ONE)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        log::debug!("created blit pipeline for {output_format:?}");

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
        }
    }

    /// Updates the extent uniform.
    ///
    /// `extent` is the fraction of the display texture the live frame
    /// occupies; a full-texture frame passes (1, 1). The host must not
    /// interleave this write with an in-flight draw that should see the old
    /// value. A degenerate extent collapses the sampled region but stays
    /// well-defined.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, extent: Vec2) {
        if extent.x <= 0.0 || extent.y <= 0.0 {
            log::warn!("degenerate image extent {extent}; blit will sample a single texel");
        }
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[BlitUniforms::new(extent)]),
        );
    }

    /// Creates a bind group pairing the pass with a display texture.
    #[must_use]
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        texture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Blit Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
            ],
        })
    }

    /// Records the blit into an already-open render pass.
    ///
    /// When `viewport` is set, the draw is restricted to that rectangle
    /// (integer-scaled presentation); otherwise it covers the full target.
    /// Issues exactly the 3-vertex, single-instance, non-indexed draw the
    /// shader is written for.
    pub fn draw(
        &self,
        render_pass: &mut wgpu::RenderPass<'_>,
        bind_group: &wgpu::BindGroup,
        viewport: Option<ViewportRect>,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        if let Some(rect) = viewport {
            render_pass.set_viewport(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, 0.0, 1.0);
        }
        render_pass.draw(0..3, 0..1);
    }

    /// Renders the blit as its own pass onto `output_view`, clearing to black.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
        bind_group: &wgpu::BindGroup,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Blit Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        self.draw(&mut render_pass, bind_group, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_are_padded_to_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<BlitUniforms>(), 16);
        let uniforms = BlitUniforms::new(Vec2::new(1.0, 0.5));
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 16);
        // Extent occupies the first eight bytes, padding stays zero.
        assert_eq!(&bytes[8..], &[0; 8]);
    }
}
