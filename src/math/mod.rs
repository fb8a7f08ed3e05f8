//! # Math Module
//!
//! Math primitives for the demo core: the vectors that carry pointer
//! offsets, camera positions, and the shader's resolution payload, plus
//! the 4x4 matrix behind the camera's view and projection transforms.
//!
//! The types interop with `glam` while keeping a Three.js-like API.

mod vector2;
mod vector3;
mod vector4;
mod matrix4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
pub use matrix4::Matrix4;

/// Common math constants and utilities.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// Degrees to radians conversion factor.
    pub const DEG2RAD: f32 = PI / 180.0;
    /// Small epsilon for floating point comparisons.
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * consts::DEG2RAD
}

/// Clamp a value between min and max.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// One easing step: move `current` a fixed fraction of the remaining
/// distance toward `target`. For gain in (0, 1) repeated application
/// converges without ever overshooting.
#[inline]
pub fn ease_toward(current: f32, target: f32, gain: f32) -> f32 {
    current + (target - current) * gain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_ease_toward_single_step() {
        // gain 0.05, 10 toward 0 covers one twentieth of the distance
        assert_eq!(ease_toward(10.0, 0.0, 0.05), 9.5);
    }

    #[test]
    fn test_ease_toward_converges_without_overshoot() {
        let mut x = 10.0;
        let mut previous = x;
        for _ in 0..10 {
            x = ease_toward(x, 0.0, 0.05);
            assert!(x < previous);
            assert!(x > 0.0);
            previous = x;
        }
        // ten ticks leave 0.95^10 of the original distance
        assert!((x - 10.0 * 0.95f32.powi(10)).abs() < 1e-4);
        assert!((x - 5.9874).abs() < 1e-3);
    }
}
