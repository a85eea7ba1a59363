//! Ballistic motion
//!
//! The engine simulates unconstrained rigid bodies only: an impulse at
//! spawn, gravity every frame, no collision response. That is the entire
//! contract the game needs — objects are launched, arc, and fall past the
//! kill floor.

use crate::foundation::math::Vec3;

/// Velocity-carrying body attached to a scene node
#[derive(Debug, Clone, Default)]
pub struct RigidBody {
    /// Current linear velocity
    pub velocity: Vec3,
}

impl RigidBody {
    /// Create a body at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an instantaneous impulse (direct velocity change, unit mass)
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    /// Advance one semi-implicit Euler step and return the displacement to
    /// apply to the owning node's position.
    pub fn step(&mut self, gravity: Vec3, dt: f32) -> Vec3 {
        self.velocity += gravity * dt;
        self.velocity * dt
    }
}
