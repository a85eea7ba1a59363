//! Core engine implementation
//!
//! The engine owns every subsystem and the frame tick. All scene mutation
//! happens on the thread driving [`Engine::step`] — spawns, kill-floor
//! fades, tap fades, and scheduled removals are serialized by the tick, so
//! no locking exists anywhere in the crate.

use std::collections::VecDeque;
use std::time::Duration;

use thiserror::Error;

use crate::{
    application::{AppError, AppEvent, Application},
    config::GameConfig,
    events::{Event, EventKind, EventQueue},
    foundation::{math::Vec3, time::Timer},
    input::TouchState,
    scene::{camera::Camera, FadeState, NodeKey, Scene, SceneNode},
};

/// Main engine struct
///
/// Coordinates the scene store, event queue, touch state, and frame timing.
pub struct Engine {
    /// Scene store and camera
    pub scene: Scene,

    /// Immediate + deferred engine events
    pub events: EventQueue,

    /// Touch position and viewport mapping
    pub touch: TouchState,

    /// Frame timing for the real-time loop
    timer: Timer,

    /// Engine configuration
    config: GameConfig,

    /// Cosmetic background color, settable by the game as tap feedback
    background: Vec3,

    /// Host events waiting to be dispatched to the application
    pending: VecDeque<AppEvent>,

    /// Simulation clock in seconds, advanced by `step`
    sim_time: f64,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        log::info!("Initializing engine...");

        let camera = Camera::aimed_at(
            config.camera.position,
            config.camera.target,
            config.camera.fov_degrees,
            config.aspect(),
            config.camera.near,
            config.camera.far,
        );
        let scene = Scene::new(camera);
        let touch = TouchState::new(config.engine.window_width, config.engine.window_height);

        Ok(Self {
            scene,
            events: EventQueue::new(),
            touch,
            timer: Timer::new(),
            config,
            background: Vec3::zeros(),
            pending: VecDeque::new(),
            sim_time: 0.0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: GameConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let frame_budget = Duration::from_secs_f32(1.0 / engine.config.engine.frame_rate);

        while engine.running {
            engine.timer.update();
            let delta_time = engine.timer.delta_time();

            engine.step(delta_time);
            engine
                .dispatch_pending(app)
                .map_err(|e| EngineError::Application(format!("App event: {e}")))?;
            app.update(&mut engine, delta_time)
                .map_err(|e| EngineError::Application(format!("App update: {e}")))?;

            if let Some(limit) = engine.config.engine.max_run_seconds {
                if engine.sim_time >= limit {
                    log::info!("Run limit of {limit}s reached");
                    engine.running = false;
                }
            }

            std::thread::sleep(frame_budget);
        }

        app.cleanup(&mut engine);
        log::info!("Engine shutdown complete");
        Ok(())
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Integrates every body, advances running fades, then delivers due
    /// events — which is where scheduled removals leave the scene. Removal
    /// events whose node already vanished are silently dropped (stale keys
    /// never resolve).
    pub fn step(&mut self, dt: f32) {
        self.sim_time += f64::from(dt);
        let now = self.sim_time;
        let gravity = self.config.world.gravity;

        for (_, node) in self.scene.iter_mut() {
            let displacement = node.body.step(gravity, dt);
            node.position += displacement;

            if let FadeState::FadingOut {
                started_at,
                duration,
                from_opacity,
            } = node.fade
            {
                let progress = ((now - started_at) as f32 / duration).clamp(0.0, 1.0);
                node.opacity = from_opacity * (1.0 - progress);
            }
        }

        for event in self.events.drain_due(now) {
            match event.kind {
                EventKind::RemoveNode => {
                    if self.scene.remove(event.node).is_some() {
                        log::debug!("removed node {:?} at t={:.3}", event.node, now);
                    }
                }
                EventKind::NodeSpawned | EventKind::FadeStarted => {
                    log::trace!("{:?} for node {:?}", event.kind, event.node);
                }
            }
        }
    }

    /// Add a node to the scene
    pub fn spawn(&mut self, node: SceneNode) -> NodeKey {
        let key = self.scene.insert(node);
        self.events
            .send(Event::new(EventKind::NodeSpawned, key, self.sim_time));
        log::debug!("spawned node {:?} at t={:.3}", key, self.sim_time);
        key
    }

    /// Start fading a node out over `duration` seconds, scheduling its
    /// removal at the end of the fade.
    ///
    /// Returns `true` if the fade was newly started. Calling again while a
    /// fade is running is a no-op, as is calling with a stale key.
    pub fn fade_out(&mut self, key: NodeKey, duration: f32) -> bool {
        let now = self.sim_time;
        match self.scene.get_mut(key) {
            Some(node) if !node.is_fading() => {
                node.fade = FadeState::FadingOut {
                    started_at: now,
                    duration,
                    from_opacity: node.opacity,
                };
            }
            _ => return false,
        }

        self.events.send(Event::new(EventKind::FadeStarted, key, now));
        self.events.post(
            now + f64::from(duration),
            Event::new(EventKind::RemoveNode, key, now),
        );
        log::debug!("fade started on node {:?} over {duration}s", key);
        true
    }

    /// Enqueue a host event for dispatch on the next frame
    pub fn push_event(&mut self, event: AppEvent) {
        self.pending.push_back(event);
    }

    /// Dispatch pending host events to the application, handling the
    /// engine-level ones (close, resize) along the way.
    pub fn dispatch_pending<T: Application>(&mut self, app: &mut T) -> Result<(), AppError> {
        while let Some(event) = self.pending.pop_front() {
            match event {
                AppEvent::CloseRequested => self.quit(),
                AppEvent::WindowResized { width, height } => {
                    self.touch.update_window_size(width, height);
                }
                AppEvent::TouchBegan { .. } => {}
            }
            app.handle_event(self, event)?;
        }
        Ok(())
    }

    /// Current simulation time in seconds
    pub fn now(&self) -> f64 {
        self.sim_time
    }

    /// Engine configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current background feedback color
    pub fn background(&self) -> Vec3 {
        self.background
    }

    /// Set the background feedback color
    pub fn set_background(&mut self, color: Vec3) {
        self.background = color;
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Application error surfaced through the main loop
    #[error("Application error: {0}")]
    Application(String),
}
