//! Horizontal scene camera

use serde::{Deserialize, Serialize};

/// Cumulative horizontal scroll of the scene
///
/// Only moves forward, and only while the hero is being carried to the next
/// resting position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneCamera {
    offset: f32,
}

impl SceneCamera {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Scroll forward; negative distances are ignored
    pub fn advance(&mut self, distance: f32) {
        self.offset += distance.max(0.0);
    }

    /// Offset for a background layer moving at `factor` of the scene speed
    pub fn parallax_offset(&self, factor: f32) -> f32 {
        self.offset * factor
    }

    /// Map a world `x` to screen space, given where world 0 sits on screen
    pub fn world_to_screen(&self, x: f32, origin_x: f32) -> f32 {
        origin_x + x - self.offset
    }
}
