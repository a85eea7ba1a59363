//! Fixed-viewpoint camera and pick-ray construction
//!
//! The camera is aimed when it is built and never re-aimed: orientation is
//! derived from the viewer/target pair in [`Camera::aimed_at`] and the type
//! exposes no way to recompute it afterwards.

use crate::foundation::math::{look_at_angles, utils, Rotation3, Vec3};

/// A world-space ray, used for pick queries
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray start point
    pub origin: Vec3,
    /// Normalized ray direction
    pub direction: Vec3,
}

/// Perspective camera with a fixed position and orientation
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    /// Euler orientation (radians): pitch about X, yaw about Y, roll about Z
    orientation: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Distance to the near clipping plane
    pub near: f32,
    /// Distance to the far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a camera at `position` facing `target`.
    ///
    /// The orientation is computed here, exactly once, from the viewpoint
    /// delta.
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `target` - Point the camera faces
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Viewport aspect ratio (width / height)
    /// * `near` - Near clipping plane distance
    /// * `far` - Far clipping plane distance
    pub fn aimed_at(
        position: Vec3,
        target: Vec3,
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let orientation = look_at_angles(position, target);
        log::debug!(
            "camera at {:?} aimed with orientation {:?} (radians)",
            position,
            orientation
        );
        Self {
            position,
            orientation,
            fov_y: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler orientation in radians, fixed at construction
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Build the world-space ray passing through a point on the view plane.
    ///
    /// `ndc_x`/`ndc_y` are normalized device coordinates in `[-1, 1]` with
    /// (-1, -1) at the top-left of the viewport.
    pub fn pick_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let tan_half_fov = (self.fov_y * 0.5).tan();
        // View space: camera looks down -Z, +Y up, +X right.
        let local = Vec3::new(ndc_x * tan_half_fov * self.aspect, -ndc_y * tan_half_fov, -1.0);

        let rotation = Rotation3::from_axis_angle(&Vec3::y_axis(), self.orientation.y)
            * Rotation3::from_axis_angle(&Vec3::x_axis(), self.orientation.x)
            * Rotation3::from_axis_angle(&Vec3::z_axis(), self.orientation.z);

        Ray {
            origin: self.position,
            direction: (rotation * local).normalize(),
        }
    }
}
