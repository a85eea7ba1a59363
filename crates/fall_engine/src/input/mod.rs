//! Touch input state and hit testing
//!
//! Converts screen-space touch coordinates to Normalized Device Coordinates
//! for ray casting, and resolves taps against the scene.

pub mod picking;

pub use picking::{hit_test, Hit};

/// Touch state for pick operations
#[derive(Debug, Clone)]
pub struct TouchState {
    /// Current screen-space X position (pixels)
    pub screen_x: f64,
    /// Current screen-space Y position (pixels)
    pub screen_y: f64,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
}

impl TouchState {
    /// Create a new touch state for a window of the given size
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            screen_x: 0.0,
            screen_y: 0.0,
            window_width,
            window_height,
        }
    }

    /// Convert screen coordinates to Normalized Device Coordinates (NDC)
    ///
    /// NDC range: `[-1, 1]` where:
    /// - X: -1 = left, +1 = right
    /// - Y: -1 = top, +1 = bottom
    pub fn screen_to_ndc(&self) -> (f32, f32) {
        let ndc_x = (self.screen_x / f64::from(self.window_width)) as f32 * 2.0 - 1.0;
        let ndc_y = (self.screen_y / f64::from(self.window_height)) as f32 * 2.0 - 1.0;
        (ndc_x, ndc_y)
    }

    /// Update the touch position from an input event
    pub fn update_position(&mut self, x: f64, y: f64) {
        self.screen_x = x;
        self.screen_y = y;
    }

    /// Update the window size (keeps NDC conversion accurate after resize)
    pub fn update_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }
}

impl Default for TouchState {
    fn default() -> Self {
        Self::new(414, 896)
    }
}
