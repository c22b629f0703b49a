//! Game balance and layout tuning
//!
//! Every gameplay constant lives here so a session can be built from JSON
//! overrides. Missing fields fall back to the compiled-in defaults.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Half-open integer range `[min, max)` sampled by the layout generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRange {
    pub min: u32,
    pub max: u32,
}

impl SpanRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a whole number uniformly from the range
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f32 {
        rng.random_range(self.min..self.max) as f32
    }

    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }
}

impl From<(u32, u32)> for SpanRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

/// Data-driven game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Height of the host viewport; the fall limit grows with the margin
    /// below the canvas
    pub viewport_height: f32,
    pub platform_height: f32,
    pub first_platform_x: f32,
    pub first_platform_width: f32,
    pub initial_platforms: usize,
    pub initial_trees: usize,
    pub platform_gap: SpanRange,
    pub platform_width: SpanRange,
    pub tree_gap: SpanRange,

    // === Hero ===
    pub hero_width: f32,
    pub hero_height: f32,
    pub hero_distance_from_edge: f32,
    pub padding_x: f32,
    pub fall_depth: f32,

    // === Scoring ===
    pub perfect_area_size: f32,
    pub perfect_pulse_ms: f32,

    // === Rates (ms per unit / degree) ===
    pub stretching_speed: f32,
    pub turning_speed: f32,
    pub walking_speed: f32,
    pub transitioning_speed: f32,
    pub falling_speed: f32,

    // === Background ===
    pub parallax: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            viewport_height: CANVAS_HEIGHT,
            platform_height: PLATFORM_HEIGHT,
            first_platform_x: FIRST_PLATFORM_X,
            first_platform_width: FIRST_PLATFORM_WIDTH,
            initial_platforms: INITIAL_PLATFORMS,
            initial_trees: INITIAL_TREES,
            platform_gap: PLATFORM_GAP.into(),
            platform_width: PLATFORM_WIDTH.into(),
            tree_gap: TREE_GAP.into(),

            hero_width: HERO_WIDTH,
            hero_height: HERO_HEIGHT,
            hero_distance_from_edge: HERO_DISTANCE_FROM_EDGE,
            padding_x: PADDING_X,
            fall_depth: FALL_DEPTH,

            perfect_area_size: PERFECT_AREA_SIZE,
            perfect_pulse_ms: PERFECT_PULSE_MS,

            stretching_speed: STRETCHING_SPEED,
            turning_speed: TURNING_SPEED,
            walking_speed: WALKING_SPEED,
            transitioning_speed: TRANSITIONING_SPEED,
            falling_speed: FALLING_SPEED,

            parallax: BACKGROUND_SPEED_MULTIPLIER,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON, then repair values the simulation
    /// cannot run with
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace unusable values with defaults
    pub fn sanitize(&mut self) {
        let defaults = Tuning::default();

        for (name, range, fallback) in [
            ("platform_gap", &mut self.platform_gap, defaults.platform_gap),
            ("platform_width", &mut self.platform_width, defaults.platform_width),
            ("tree_gap", &mut self.tree_gap, defaults.tree_gap),
        ] {
            if range.is_empty() {
                log::warn!("Empty {} range {:?}, using {:?}", name, range, fallback);
                *range = fallback;
            }
        }

        for (name, rate, fallback) in [
            ("stretching_speed", &mut self.stretching_speed, defaults.stretching_speed),
            ("turning_speed", &mut self.turning_speed, defaults.turning_speed),
            ("walking_speed", &mut self.walking_speed, defaults.walking_speed),
            ("transitioning_speed", &mut self.transitioning_speed, defaults.transitioning_speed),
            ("falling_speed", &mut self.falling_speed, defaults.falling_speed),
        ] {
            if rate.is_nan() || *rate <= 0.0 {
                log::warn!("Non-positive {} {}, using {}", name, rate, fallback);
                *rate = fallback;
            }
        }

        if self.initial_platforms == 0 {
            log::warn!("No initial platforms, using {}", defaults.initial_platforms);
            self.initial_platforms = defaults.initial_platforms;
        }

        if self.viewport_height < self.canvas_height {
            self.viewport_height = self.canvas_height;
        }
    }

    /// Hero depth at which a fall ends the run
    pub fn fall_limit(&self) -> f32 {
        self.platform_height + self.fall_depth + (self.viewport_height - self.canvas_height) / 2.0
    }

    /// Vertical margin between the top of the viewport and the canvas
    pub fn canvas_margin_y(&self) -> f32 {
        (self.viewport_height - self.canvas_height) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_default_fall_limit() {
        let tuning = Tuning::default();
        assert_eq!(tuning.fall_limit(), 200.0);

        let tall = Tuning {
            viewport_height: 775.0,
            ..Default::default()
        };
        assert_eq!(tall.fall_limit(), 400.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "walking_speed": 2.0, "initial_trees": 3 }"#).unwrap();
        assert_eq!(tuning.walking_speed, 2.0);
        assert_eq!(tuning.initial_trees, 3);
        assert_eq!(tuning.turning_speed, TURNING_SPEED);
        assert_eq!(tuning.platform_gap, SpanRange::new(40, 200));
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let json = r#"{
            "platform_gap": { "min": 50, "max": 50 },
            "falling_speed": 0.0,
            "viewport_height": 10.0,
            "initial_platforms": 0
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.platform_gap, SpanRange::new(40, 200));
        assert_eq!(tuning.initial_platforms, INITIAL_PLATFORMS);
        assert_eq!(tuning.falling_speed, FALLING_SPEED);
        assert_eq!(tuning.viewport_height, tuning.canvas_height);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ walking_speed: }").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning {
            perfect_area_size: 6.0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_span_sample_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SpanRange::new(20, 100);
        for _ in 0..500 {
            let value = range.sample(&mut rng);
            assert!((20.0..100.0).contains(&value));
            assert_eq!(value, value.trunc());
        }
    }

    #[test]
    fn test_span_sample_near_u32_max() {
        let mut rng = Pcg32::seed_from_u64(7);
        let range = SpanRange::new(u32::MAX - 10, u32::MAX);
        for _ in 0..100 {
            assert!(range.sample(&mut rng) >= (u32::MAX - 10) as f32);
        }
    }
}
