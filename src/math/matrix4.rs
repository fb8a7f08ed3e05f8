//! 4x4 Matrix implementation.

use super::Vector3;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 4x4 matrix stored in column-major order.
/// Used for the camera's view and projection transforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    /// Matrix elements in column-major order.
    pub elements: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create from a column-major array.
    #[inline]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Convert to nested column arrays, the layout uniform buffers expect.
    #[inline]
    pub fn to_cols_2d(&self) -> [[f32; 4]; 4] {
        let e = &self.elements;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
    }

    /// Create a view matrix (look-at).
    /// Returns the inverse of the camera transform.
    pub fn look_at(eye: &Vector3, target: &Vector3, up: &Vector3) -> Self {
        let f = (*target - *eye).normalized(); // forward
        let r = f.cross(up).normalized(); // right
        let u = r.cross(&f); // up

        // Orthonormal basis: inverse of the rotation is its transpose,
        // translation is -dot(axis, eye) per axis.
        Self {
            elements: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(eye), -u.dot(eye), f.dot(eye), 1.0,
            ],
        }
    }

    /// Create a perspective projection matrix.
    /// Uses wgpu/Vulkan depth range (0 to 1).
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();

        Self {
            elements: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, far / (near - far), -1.0,
                0.0, 0.0, (near * far) / (near - far), 0.0,
            ],
        }
    }

    /// Multiply this matrix by another.
    pub fn multiply(&self, other: &Matrix4) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut out = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }

        Self { elements: out }
    }

    /// Transform a point (w = 1) by this matrix, without the
    /// perspective divide.
    pub fn transform_point(&self, p: &Vector3) -> Vector3 {
        let e = &self.elements;
        Vector3::new(
            e[0] * p.x + e[4] * p.y + e[8] * p.z + e[12],
            e[1] * p.x + e[5] * p.y + e[9] * p.z + e[13],
            e[2] * p.x + e[6] * p.y + e[10] * p.z + e[14],
        )
    }

    /// Check if the matrix is approximately equal to another.
    pub fn approx_eq(&self, other: &Matrix4, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

impl From<glam::Mat4> for Matrix4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            elements: m.to_cols_array(),
        }
    }
}

impl From<Matrix4> for glam::Mat4 {
    fn from(m: Matrix4) -> Self {
        glam::Mat4::from_cols_array(&m.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_multiply() {
        let m = Matrix4::IDENTITY.multiply(&Matrix4::IDENTITY);
        assert!(m.approx_eq(&Matrix4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vector3::new(0.0, 2.0, 30.0);
        let view = Matrix4::look_at(&eye, &Vector3::new(0.0, 5.0, 5.0), &Vector3::UP);
        let transformed = view.transform_point(&eye);
        assert!(transformed.approx_eq(&Vector3::ZERO, 1e-5));
    }

    #[test]
    fn test_look_at_target_on_negative_z() {
        let eye = Vector3::new(0.0, 0.0, 10.0);
        let target = Vector3::new(0.0, 0.0, 0.0);
        let view = Matrix4::look_at(&eye, &target, &Vector3::UP);
        let transformed = view.transform_point(&target);
        // view space looks down -Z
        assert!(transformed.x.abs() < 1e-5);
        assert!(transformed.y.abs() < 1e-5);
        assert!((transformed.z + 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = Matrix4::perspective(1.0, 16.0 / 9.0, 1.0, 100.0);
        // points on the near plane map to depth 0 after the divide
        let e = &proj.elements;
        let near_z = e[10] * -1.0 + e[14];
        assert!(near_z.abs() < 1e-5);
    }
}
