//! Texture sampler configuration.

/// A texture sampler.
pub struct Sampler {
    sampler: wgpu::Sampler,
}

impl Sampler {
    /// Create a linear-filtering, clamp-to-edge sampler — the screen
    /// shader clamps its distorted coordinates, so edges must not wrap.
    pub fn linear(device: &wgpu::Device) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Linear Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self { sampler }
    }

    /// The underlying wgpu sampler.
    #[inline]
    pub fn raw(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}
