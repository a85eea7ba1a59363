//! Configuration system
//!
//! All tunables of the simulation live here, serializable to TOML or RON
//! through the [`Config`] trait. Defaults encode the shipped game feel:
//! one spawn every 0.6 s, a 13.5-unit launch, a kill floor at y = -2.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Format dispatch on extension
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Spawn cadence and launch parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Seconds between consecutive spawns
    pub interval: f32,

    /// Magnitude bound for the random sideways launch components
    pub lateral_impulse: f32,

    /// Fixed upward launch component
    pub vertical_impulse: f32,

    /// Where new objects appear
    pub spawn_position: Vec3,

    /// Half-size of a spawned object's bounds
    pub half_extents: Vec3,

    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval: 0.6,
            lateral_impulse: 1.0,
            vertical_impulse: 13.5,
            spawn_position: Vec3::zeros(),
            half_extents: Vec3::new(0.5, 0.5, 0.5),
            seed: None,
        }
    }
}

/// World simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Gravitational acceleration applied to every body
    pub gravity: Vec3,

    /// Objects whose Y coordinate drops below this are removed
    pub kill_floor: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.8, 0.0),
            kill_floor: -2.0,
        }
    }
}

/// Camera placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera faces (orientation is fixed at startup)
    pub target: Vec3,

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Near clipping plane distance
    pub near: f32,

    /// Far clipping plane distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::zeros(),
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Fade-and-remove timings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FadeConfig {
    /// Fade length when the kill-floor sweep removes an object
    pub cleanup_duration: f32,

    /// Fade length when the player taps an object
    pub tap_duration: f32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            cleanup_duration: 0.5,
            tap_duration: 0.1,
        }
    }
}

/// Engine loop behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Target frames per second for the real-time loop
    pub frame_rate: f32,

    /// Viewport width in pixels (touch mapping)
    pub window_width: u32,

    /// Viewport height in pixels (touch mapping)
    pub window_height: u32,

    /// Stop the loop after this many simulated seconds; `None` runs until
    /// quit
    pub max_run_seconds: Option<f64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            frame_rate: 60.0,
            window_width: 414,
            window_height: 896,
            max_run_seconds: None,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    /// Spawn cadence and launch parameters
    pub spawn: SpawnConfig,

    /// World simulation parameters
    pub world: WorldConfig,

    /// Camera placement
    pub camera: CameraConfig,

    /// Fade-and-remove timings
    pub fade: FadeConfig,

    /// Engine loop behavior
    pub engine: EngineSettings,
}

impl GameConfig {
    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spawn.seed = Some(seed);
        self
    }

    /// Bound the real-time loop's run length
    pub fn with_max_run_seconds(mut self, seconds: f64) -> Self {
        self.engine.max_run_seconds = Some(seconds);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.spawn.interval <= 0.0 {
            return Err("Spawn interval must be positive".to_string());
        }
        if self.fade.cleanup_duration <= 0.0 || self.fade.tap_duration <= 0.0 {
            return Err("Fade durations must be positive".to_string());
        }
        if self.engine.frame_rate <= 0.0 {
            return Err("Frame rate must be positive".to_string());
        }
        if self.engine.window_width == 0 || self.engine.window_height == 0 {
            return Err("Window dimensions must be non-zero".to_string());
        }
        if self.camera.far <= self.camera.near {
            return Err("Camera far plane must lie beyond the near plane".to_string());
        }
        Ok(())
    }

    /// Viewport aspect ratio (width / height)
    pub fn aspect(&self) -> f32 {
        self.engine.window_width as f32 / self.engine.window_height as f32
    }
}

impl Config for GameConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_is_rejected() {
        let mut config = GameConfig::default();
        config.spawn.interval = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_clip_planes_are_rejected() {
        let mut config = GameConfig::default();
        config.camera.far = config.camera.near;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_round_trip_preserves_tunables() {
        let config = GameConfig::default().with_seed(7);
        let text = toml::to_string_pretty(&config).unwrap();
        let reloaded: GameConfig = toml::from_str(&text).unwrap();

        assert_eq!(reloaded.spawn.interval, config.spawn.interval);
        assert_eq!(reloaded.spawn.seed, Some(7));
        assert_eq!(reloaded.world.kill_floor, config.world.kill_floor);
        assert_eq!(reloaded.camera.position, config.camera.position);
    }
}
