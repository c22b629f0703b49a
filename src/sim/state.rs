//! Game state and core simulation types
//!
//! One `GameState` holds everything a session needs; a restart rebuilds it
//! in a single assignment so no half-reset state is ever observable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::SceneCamera;
use super::collision::{StickHit, resolve_hit};
use super::generate::{generate_platform, generate_tree};
use crate::consts::{STICK_DOWN_DEGREES, STICK_FALLEN_DEGREES};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Hero stands at the edge, waiting for the player to press
    Waiting,
    /// Stick grows while the press is held
    Stretching,
    /// Stick swings down toward the next platform
    Turning,
    /// Hero walks along the stick
    Walking,
    /// Camera scrolls so the reached platform ends up at the resting position
    Transitioning,
    /// Stick missed; hero drops until the run ends
    Falling,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Stretching => "stretching",
            GamePhase::Turning => "turning",
            GamePhase::Walking => "walking",
            GamePhase::Transitioning => "transitioning",
            GamePhase::Falling => "falling",
        }
    }

    /// Whether frames advance the world in this phase
    pub fn is_running(&self) -> bool {
        !matches!(self, GamePhase::Waiting)
    }
}

/// A horizontal span on the ground line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
}

impl Platform {
    pub const fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Open-interval test; the edges themselves are not part of the platform
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        self.x < x && x < self.right()
    }
}

/// A stick anchored at the right edge of a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    /// Anchor point on the ground line
    pub x: f32,
    pub length: f32,
    /// Degrees; 0 is upright, 90 lies across the gap, 180 hangs into it
    pub rotation: f32,
}

impl Stick {
    pub const fn new(x: f32) -> Self {
        Self {
            x,
            length: 0.0,
            rotation: 0.0,
        }
    }

    /// Horizontal reach of the tip once the stick lies flat
    #[inline]
    pub fn far_x(&self) -> f32 {
        self.x + self.length
    }

    pub fn is_down(&self) -> bool {
        self.rotation == STICK_DOWN_DEGREES
    }

    pub fn has_fallen(&self) -> bool {
        self.rotation >= STICK_FALLEN_DEGREES
    }
}

/// Tree palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeColor {
    Olive,
    Moss,
    Lime,
}

impl TreeColor {
    pub const ALL: [TreeColor; 3] = [TreeColor::Olive, TreeColor::Moss, TreeColor::Lime];
}

/// A background tree (purely visual)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub x: f32,
    pub color: TreeColor,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// `x` on the ground line, `y` as depth below it (only grows while falling)
    pub pos: Vec2,
}

impl Hero {
    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
        }
    }
}

/// Notable things that happened during a tick, drained by UI observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    Scored { points: u32, perfect: bool, total: u32 },
    Missed { far_x: f32 },
    GameOver { score: u32 },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Platforms in increasing `x` order; only ever appended to
    pub platforms: Vec<Platform>,
    /// Sticks that already bridged a gap, frozen at 90 degrees
    placed_sticks: Vec<Stick>,
    /// The one stick still subject to stretching and rotation
    stick: Stick,
    pub trees: Vec<Tree>,
    pub hero: Hero,
    pub camera: SceneCamera,
    /// Remaining time of the perfect pulse (ms)
    pub perfect_ms: f32,
    /// Set once the hero has fallen past the fall limit
    pub game_over: bool,
    /// Simulated time (ms)
    pub time_ms: f64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.sanitize();
        log::info!("New session with seed {}", seed);
        Self::from_rng(seed, tuning, Pcg32::seed_from_u64(seed))
    }

    /// Lay out a fresh session: the fixed first platform, the generated ones
    /// after it, the first stick and the background trees
    fn from_rng(seed: u64, tuning: Tuning, mut rng: Pcg32) -> Self {
        let first = Platform::new(tuning.first_platform_x, tuning.first_platform_width);

        let mut platforms = Vec::with_capacity(tuning.initial_platforms + 1);
        platforms.push(first);
        for _ in 0..tuning.initial_platforms {
            let platform = generate_platform(&platforms, &tuning, &mut rng);
            platforms.push(platform);
        }

        let mut trees = Vec::with_capacity(tuning.initial_trees);
        for _ in 0..tuning.initial_trees {
            let tree = generate_tree(&trees, &tuning, &mut rng);
            trees.push(tree);
        }

        let hero = Hero::new(first.right() - tuning.hero_distance_from_edge);

        Self {
            seed,
            tuning,
            rng,
            phase: GamePhase::Waiting,
            score: 0,
            platforms,
            placed_sticks: Vec::new(),
            stick: Stick::new(first.right()),
            trees,
            hero,
            camera: SceneCamera::default(),
            perfect_ms: 0.0,
            game_over: false,
            time_ms: 0.0,
            events: Vec::new(),
        }
    }

    /// Full reset. The RNG stream carries on, so a run of restarts is still
    /// reproducible from the original seed.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        let was = self.phase;
        *self = Self::from_rng(self.seed, self.tuning.clone(), rng);
        log::info!("Session restarted (was {})", was.as_str());
        self.events.push(GameEvent::Restarted);
    }

    /// Reset with a new seed
    pub fn restart_with_seed(&mut self, seed: u64) {
        *self = Self::from_rng(seed, self.tuning.clone(), Pcg32::seed_from_u64(seed));
        log::info!("Session restarted with seed {}", seed);
        self.events.push(GameEvent::Restarted);
    }

    /// Begin stretching. Returns false (and does nothing) outside `Waiting`.
    pub fn press_down(&mut self) -> bool {
        if self.phase != GamePhase::Waiting || self.game_over {
            return false;
        }
        self.set_phase(GamePhase::Stretching);
        true
    }

    /// Stop stretching and let the stick swing. Returns false outside `Stretching`.
    pub fn release(&mut self) -> bool {
        if self.phase != GamePhase::Stretching {
            return false;
        }
        self.set_phase(GamePhase::Turning);
        true
    }

    /// The stick currently being stretched or swung
    pub fn active_stick(&self) -> &Stick {
        &self.stick
    }

    pub fn active_stick_mut(&mut self) -> &mut Stick {
        &mut self.stick
    }

    /// All sticks in placement order, the active one last
    pub fn sticks(&self) -> impl Iterator<Item = &Stick> {
        self.placed_sticks.iter().chain(std::iter::once(&self.stick))
    }

    pub fn stick_count(&self) -> usize {
        self.placed_sticks.len() + 1
    }

    /// Resolve where the active stick lands (it must be lying flat)
    pub fn landing(&self) -> StickHit {
        resolve_hit(&self.stick, &self.platforms, self.tuning.perfect_area_size)
    }

    /// The first platform past the active stick's anchor
    pub fn next_platform(&self) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.x > self.stick.x)
    }

    /// True while the perfect-landing pulse is up
    pub fn perfect_hit(&self) -> bool {
        self.perfect_ms > 0.0
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("Phase {} -> {}", from.as_str(), to.as_str());
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Count a landing: +1, or +2 and the perfect pulse
    pub(crate) fn award(&mut self, perfect: bool) {
        let points = if perfect { 2 } else { 1 };
        self.score += points;
        if perfect {
            self.perfect_ms = self.tuning.perfect_pulse_ms;
        }
        log::info!(
            "Landed{}: +{} (score {})",
            if perfect { " perfectly" } else { "" },
            points,
            self.score
        );
        self.events.push(GameEvent::Scored {
            points,
            perfect,
            total: self.score,
        });
    }

    /// Grow the layout after a successful landing: one platform, two trees
    pub(crate) fn extend_layout(&mut self) {
        let platform = generate_platform(&self.platforms, &self.tuning, &mut self.rng);
        self.platforms.push(platform);
        for _ in 0..2 {
            let tree = generate_tree(&self.trees, &self.tuning, &mut self.rng);
            self.trees.push(tree);
        }
    }

    /// Freeze the active stick and start a new one at `anchor_x`
    pub(crate) fn place_stick(&mut self, anchor_x: f32) {
        let placed = std::mem::replace(&mut self.stick, Stick::new(anchor_x));
        self.placed_sticks.push(placed);
    }

    pub(crate) fn end_run(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        log::info!("Game over with score {}", self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    pub(crate) fn decay_perfect(&mut self, dt: f32) {
        self.perfect_ms = (self.perfect_ms - dt).max(0.0);
    }
}
