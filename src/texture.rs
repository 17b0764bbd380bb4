use anyhow::{Context, Result};
use std::path::Path;

/// A GPU texture plus the view and sampler the scene pipeline binds.
pub struct Texture {
    pub raw: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Decodes an image file and uploads it as an sRGB texture.
    pub fn from_file(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
    ) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to decode texture {}", path.display()))?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!(
            "loaded texture {} ({}x{})",
            path.display(),
            width,
            height
        );
        Ok(Self::from_rgba8(device, queue, &rgba, width, height, Some(&path.display().to_string())))
    }

    /// Two-tone checkerboard, used when no texture file is supplied so the
    /// demo runs without assets on disk.
    pub fn checkerboard(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        cells: u32,
        cell_px: u32,
        dark: [u8; 4],
        light: [u8; 4],
    ) -> Self {
        let size = cells * cell_px;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let cell = (x / cell_px + y / cell_px) % 2;
                let color = if cell == 0 { dark } else { light };
                pixels.extend_from_slice(&color);
            }
        }
        Self::from_rgba8(device, queue, &pixels, size, size, Some("checkerboard"))
    }

    /// 1x1 single-color texture; the unlit light marker samples pure white.
    pub fn solid(device: &wgpu::Device, queue: &wgpu::Queue, color: [u8; 4]) -> Self {
        Self::from_rgba8(device, queue, &color, 1, 1, Some("solid color"))
    }

    fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let raw = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &raw,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = raw.create_view(&wgpu::TextureViewDescriptor::default());
        // Repeat wrap + nearest filtering: the ground UVs run past 1.0 to
        // tile, and the reference sampler state is nearest on both filters.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { raw, view, sampler }
    }

    /// Depth attachment matching the surface size. Recreated on resize.
    pub fn depth(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let size = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let raw = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = raw.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        Self { raw, view, sampler }
    }
}
