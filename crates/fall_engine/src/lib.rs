//! # Fall Engine
//!
//! A headless game core for falling-object tap games.
//!
//! The engine owns the scene object store and the per-frame tick, and
//! exposes the narrow primitives a tap game needs:
//!
//! - **Scene management**: generational-keyed node store with an
//!   `alive -> fading -> removed` lifecycle
//! - **Simulation stepping**: ballistic motion under gravity, advanced by an
//!   explicit per-frame tick so tests can drive synthetic frame sequences
//! - **Tap picking**: screen point to pick ray to ordered object hits
//! - **Deferred events**: time-scheduled removals delivered by the tick,
//!   replacing fire-and-forget animation callbacks
//!
//! Rendering, windowing, collision resolution, and asset loading are
//! deliberately absent; a front end drives the engine through
//! [`Application`] and [`AppEvent`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fall_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _dt: f32) -> Result<(), AppError> {
//!         // Per-frame game logic
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GameConfig::default();
//!     let mut game = MyGame;
//!     Engine::run(config, &mut game)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, AppEvent, Application},
        config::{Config, ConfigError, GameConfig},
        engine::{Engine, EngineError},
        foundation::math::{Vec3, Point3},
        input::{picking::hit_test, TouchState},
        scene::{camera::Camera, FadeState, NodeKey, Scene, SceneNode, Tag},
    };
}
