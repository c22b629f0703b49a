//! Stick Hero - A stick-bridging platform arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (phase machine, stick collision, layout generation)
//! - `game`: Frame-driven session driver wrapping the simulation
//! - `renderer`: Backend-agnostic triangle lists built from a game snapshot
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod renderer;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{FrameTicket, Game, LoopControl};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical play area; the first platform and hero are laid out inside it
    pub const CANVAS_WIDTH: f32 = 375.0;
    pub const CANVAS_HEIGHT: f32 = 375.0;
    pub const PLATFORM_HEIGHT: f32 = 100.0;

    /// Hero footprint
    pub const HERO_WIDTH: f32 = 17.0;
    pub const HERO_HEIGHT: f32 = 30.0;
    /// How far the hero stands from the platform edge while waiting
    pub const HERO_DISTANCE_FROM_EDGE: f32 = 10.0;
    /// Resting screen position of the hero, measured from the canvas left edge
    pub const PADDING_X: f32 = 100.0;
    /// Width of the centered perfect zone on every platform
    pub const PERFECT_AREA_SIZE: f32 = 10.0;
    /// How long the perfect pulse stays up (ms)
    pub const PERFECT_PULSE_MS: f32 = 1000.0;
    /// How far below the platform top the hero falls before the run ends
    pub const FALL_DEPTH: f32 = 100.0;

    /// Phase rates, in milliseconds per unit (or per degree for turning)
    pub const STRETCHING_SPEED: f32 = 4.0;
    pub const TURNING_SPEED: f32 = 4.0;
    pub const WALKING_SPEED: f32 = 4.0;
    pub const TRANSITIONING_SPEED: f32 = 2.0;
    pub const FALLING_SPEED: f32 = 2.0;

    /// Stick rotation when it lies flat across the gap
    pub const STICK_DOWN_DEGREES: f32 = 90.0;
    /// Stick rotation once it has fallen into the gap
    pub const STICK_FALLEN_DEGREES: f32 = 180.0;

    /// The first platform is always the same; its right edge matches PADDING_X
    pub const FIRST_PLATFORM_X: f32 = 50.0;
    pub const FIRST_PLATFORM_WIDTH: f32 = 50.0;
    /// Platforms generated on top of the first one at session start
    pub const INITIAL_PLATFORMS: usize = 4;
    pub const INITIAL_TREES: usize = 10;

    /// Generator ranges (integer resolution, max exclusive)
    pub const PLATFORM_GAP: (u32, u32) = (40, 200);
    pub const PLATFORM_WIDTH: (u32, u32) = (20, 100);
    pub const TREE_GAP: (u32, u32) = (30, 150);

    /// The background moves slower than the hero
    pub const BACKGROUND_SPEED_MULTIPLIER: f32 = 0.2;

    /// Frame length used by the headless demo (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Sine of an angle given in degrees
#[inline]
pub fn sin_degrees(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cos_degrees(degrees: f32) -> f32 {
    degrees.to_radians().cos()
}
