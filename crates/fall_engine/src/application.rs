//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create a game using the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is initialized. Use this to set up
    /// initial game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame after the engine has advanced the simulation.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called for each host event delivered this frame (touches, resizes).
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        let _ = (engine, event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the engine is shutting down.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Host events delivered to the application
///
/// The host is expected to enqueue one `TouchBegan` per gesture — the first
/// touch of a multi-touch set; additional simultaneous touches are ignored
/// at the source. An empty touch set produces no event at all.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A touch landed at the given screen coordinates (pixels)
    TouchBegan {
        /// X coordinate in pixels from the left
        x: f64,
        /// Y coordinate in pixels from the top
        y: f64,
    },

    /// The viewport changed size
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// The host asked the game to quit
    CloseRequested,
}
