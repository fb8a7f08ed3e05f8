//! Typed uniform block for the screen shader.

use crate::math::Vector4;
use bytemuck::{Pod, Zeroable};

/// Uniform inputs the frame loop stages for the screen shader, one
/// field per uniform the shader program declares. Writing through a
/// fixed struct instead of a name/value bag means a mismatch against
/// the shader's declarations fails at the type level, not at runtime.
///
/// Layout matches the WGSL `ScreenUniforms` block: four scalars then a
/// vec4, 32 bytes total.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Monotonic time in milliseconds. Frozen while a live feed plays.
    pub time: f32,
    /// Panel-controlled distortion amount. Frozen while a live feed
    /// plays.
    pub progress: f32,
    /// Horizontal parallax offset derived from the pointer.
    pub offset: f32,
    /// 1.0 when the bound texture is a live video feed, else 0.0.
    pub is_video: f32,
    /// Viewport width, height, and aspect-cover factors.
    pub resolution: [f32; 4],
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenUniforms {
    /// Create a zeroed uniform block.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            progress: 0.0,
            offset: 0.0,
            is_video: 0.0,
            resolution: [0.0; 4],
        }
    }

    /// Flag whether the bound texture is a live video feed.
    pub fn set_is_video(&mut self, live: bool) {
        self.is_video = if live { 1.0 } else { 0.0 };
    }

    /// Whether the live-feed flag is set.
    #[inline]
    pub fn is_video(&self) -> bool {
        self.is_video > 0.5
    }

    /// Stage the viewport's resolution payload.
    pub fn set_resolution(&mut self, resolution: Vector4) {
        self.resolution = resolution.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_32_bytes() {
        assert_eq!(std::mem::size_of::<ScreenUniforms>(), 32);
    }

    #[test]
    fn test_video_flag_roundtrip() {
        let mut uniforms = ScreenUniforms::new();
        assert!(!uniforms.is_video());
        uniforms.set_is_video(true);
        assert_eq!(uniforms.is_video, 1.0);
        assert!(uniforms.is_video());
        uniforms.set_is_video(false);
        assert!(!uniforms.is_video());
    }

    #[test]
    fn test_new_is_zeroed() {
        let uniforms = ScreenUniforms::new();
        assert_eq!(bytemuck::bytes_of(&uniforms), &[0u8; 32]);
    }
}
