//! 2D texture implementation.

use wgpu::util::DeviceExt;

/// A 2D texture holding RGBA8 data.
pub struct Texture2D {
    /// Texture width.
    width: u32,
    /// Texture height.
    height: u32,
    /// The GPU texture.
    texture: wgpu::Texture,
    /// Texture view.
    view: wgpu::TextureView,
}

impl Texture2D {
    /// Create a new texture from RGBA8 data.
    /// Uses wgpu's create_texture_with_data which handles row alignment
    /// automatically.
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[u8],
        width: u32,
        height: u32,
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label,
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            data,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            width,
            height,
            texture,
            view,
        }
    }

    /// Create a solid color texture (1x1).
    pub fn from_color(device: &wgpu::Device, queue: &wgpu::Queue, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba8(device, queue, &[r, g, b, a], 1, 1, Some("Solid Color Texture"))
    }

    /// Create a white texture (1x1).
    pub fn white(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self::from_color(device, queue, 255, 255, 255, 255)
    }

    /// Overwrite the full texture contents with new RGBA8 data.
    /// Frames whose length does not match the texture extent are
    /// dropped; stream dimensions can wobble while a capture settles.
    pub fn write(&self, queue: &wgpu::Queue, data: &[u8]) {
        if data.len() != (self.width * self.height * 4) as usize {
            return;
        }

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }

    /// Get texture width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get texture height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Aspect as height / width, the shape the cover factors expect.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// Get the texture view.
    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Get the underlying texture.
    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }
}
