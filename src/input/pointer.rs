//! Pointer sampling into a normalized look offset.

use crate::core::Viewport;
use crate::math::Vector2;

/// Maintains the live "desired look direction" offset.
///
/// Each pointer event fully determines the new offset: the transform
/// reads only the event and viewport, never the previous offset, and
/// rapid events simply overwrite each other (last write wins, no
/// queuing). The offset stays at zero until the first event arrives.
pub struct PointerSampler {
    /// Current offset. Zero until the first pointer event.
    offset: Vector2,
    /// Per-axis scale applied to the re-centered pointer position.
    scale: Vector2,
}

impl Default for PointerSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerSampler {
    /// Default per-axis scale. Tuned empirically; useful values sit
    /// roughly between 0.005 and 0.04.
    pub const DEFAULT_SCALE: f32 = 0.02;

    /// Create a sampler with the default scale.
    pub fn new() -> Self {
        Self::with_scale(Self::DEFAULT_SCALE, Self::DEFAULT_SCALE)
    }

    /// Create a sampler with explicit per-axis scales.
    pub fn with_scale(scale_x: f32, scale_y: f32) -> Self {
        Self {
            offset: Vector2::ZERO,
            scale: Vector2::new(scale_x, scale_y),
        }
    }

    /// Transform one pointer event against the viewport: x is measured
    /// from the horizontal center, y from the bottom edge (negative
    /// inside the viewport), both scaled by the sampler's constants.
    ///
    /// Deterministic in its arguments and not clamped: events outside
    /// the viewport produce proportionally larger offsets.
    pub fn sample(&self, event_x: f32, event_y: f32, viewport: &Viewport) -> Vector2 {
        Vector2::new(
            (event_x - viewport.width() as f32 / 2.0) * self.scale.x,
            (event_y - viewport.height() as f32) * self.scale.y,
        )
    }

    /// Commit a pointer event: sample it and overwrite the stored
    /// offset.
    pub fn pointer_moved(&mut self, event_x: f32, event_y: f32, viewport: &Viewport) {
        self.offset = self.sample(event_x, event_y, viewport);
    }

    /// The most recently committed offset.
    #[inline]
    pub fn offset(&self) -> Vector2 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_defaults_to_zero() {
        assert_eq!(PointerSampler::new().offset(), Vector2::ZERO);
    }

    #[test]
    fn test_sample_is_deterministic() {
        let sampler = PointerSampler::new();
        let viewport = Viewport::new(1280, 720);
        let a = sampler.sample(123.0, 456.0, &viewport);
        let b = sampler.sample(123.0, 456.0, &viewport);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_centers_and_scales() {
        // pointer dead center horizontally, mid-height on an 800x600
        // viewport: x lands on zero, y on (300 - 600) * 0.02 = -6
        let sampler = PointerSampler::new();
        let viewport = Viewport::new(800, 600);
        let offset = sampler.sample(400.0, 300.0, &viewport);
        assert_eq!(offset, Vector2::new(0.0, -6.0));
    }

    #[test]
    fn test_pointer_moved_overwrites_previous_offset() {
        let mut sampler = PointerSampler::new();
        let viewport = Viewport::new(800, 600);
        sampler.pointer_moved(0.0, 0.0, &viewport);
        sampler.pointer_moved(400.0, 300.0, &viewport);
        assert_eq!(sampler.offset(), Vector2::new(0.0, -6.0));
    }

    #[test]
    fn test_out_of_viewport_events_are_not_clamped() {
        let sampler = PointerSampler::new();
        let viewport = Viewport::new(800, 600);
        let offset = sampler.sample(8000.0, 600.0, &viewport);
        assert_eq!(offset.x, (8000.0 - 400.0) * 0.02);
        assert_eq!(offset.y, 0.0);
    }
}
