//! Math utilities and types
//!
//! Provides the fundamental math types for the simulation plus the
//! orientation helpers used to aim the camera.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Rotation3, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Compute Euler angles (radians) that orient a viewer at `viewer` to face
/// `target`.
///
/// The result is an `(x, y, z)` rotation triple: pitch about X, yaw about Y,
/// zero roll. It is a pure function of its inputs; the caller applies the
/// rotation. With a zero Z offset the yaw collapses to the `atan2(0, _)`
/// branches (0 facing +X, pi facing -X).
pub fn look_at_angles(viewer: Vec3, target: Vec3) -> Vec3 {
    let delta = viewer - target;
    let yaw = delta.z.atan2(delta.x);
    let mut pitch = delta.z.atan2(delta.y);
    if delta.z > 0.0 {
        pitch = -pitch;
    }
    Vec3::new(-constants::HALF_PI - pitch, constants::HALF_PI - yaw, 0.0)
}
