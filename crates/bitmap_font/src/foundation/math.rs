//! Math utilities and types
//!
//! Provides the vector and matrix types used for text geometry.

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type (texture coordinates)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (vertex positions)
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type (model transforms)
pub type Mat4 = Matrix4<f32>;

/// Extension methods for `Mat4`
pub trait Mat4Ext {
    /// Create a translation matrix
    fn translation(x: f32, y: f32, z: f32) -> Self;

    /// Transform a position (w = 1) by this matrix
    fn transform_position(&self, position: &Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::new_translation(&Vec3::new(x, y, z))
    }

    fn transform_position(&self, position: &Vec3) -> Vec3 {
        let p = nalgebra::Point3::from(*position);
        self.transform_point(&p).coords
    }
}
