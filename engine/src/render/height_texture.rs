//! Height Field GPU Texture
//!
//! GPU mirror of the height field for the snow surface shader: an R32Float
//! texture with a bilinear clamp-to-edge sampler, uploaded in full after
//! stamping. The CPU field stays authoritative; this is display state only.
//!
//! R32Float filtering requires `Features::FLOAT32_FILTERABLE`; the headless
//! context in [`gpu_context`](super::gpu_context) requests it.

use crate::field::FieldView;

/// Height field texture and associated GPU resources.
pub struct HeightFieldTexture {
    /// The GPU texture holding the snow depth grid
    pub texture: wgpu::Texture,
    /// Texture view for shader access
    pub view: wgpu::TextureView,
    /// Bilinear clamp-to-edge sampler
    pub sampler: wgpu::Sampler,
    /// Bind group for shader access (texture + sampler)
    pub bind_group: wgpu::BindGroup,
    /// Bind group layout (needed for pipeline creation)
    pub bind_group_layout: wgpu::BindGroupLayout,
    resolution: u32,
}

impl HeightFieldTexture {
    /// Create the texture pair of resources for a `resolution` x
    /// `resolution` field. The texture starts zeroed; call
    /// [`upload`](Self::upload) after the first sample.
    pub fn new(device: &wgpu::Device, resolution: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Snow Height Texture"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R32Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Snow Height Texture View"),
            ..Default::default()
        });

        // Bilinear + clamp so edge cells extend past the surface border
        // instead of wrapping depressions around.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Snow Height Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Snow Height Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Snow Height Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            view,
            sampler,
            bind_group,
            bind_group_layout,
            resolution,
        }
    }

    /// Texture resolution (matches the field it mirrors).
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Upload the full grid from a field view.
    ///
    /// The view's resolution must match the texture's.
    pub fn upload(&self, queue: &wgpu::Queue, field: &FieldView) {
        assert_eq!(
            field.resolution() as u32,
            self.resolution,
            "field resolution must match the texture it mirrors"
        );

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(field.cells()),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.resolution),
                rows_per_image: Some(self.resolution),
            },
            wgpu::Extent3d {
                width: self.resolution,
                height: self.resolution,
                depth_or_array_layers: 1,
            },
        );
    }
}
