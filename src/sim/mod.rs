//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit elapsed time only (no clocks)
//! - Seeded RNG only
//! - Append-only layout, active stick kept apart from placed ones
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod generate;
pub mod state;
pub mod tick;

pub use camera::SceneCamera;
pub use clock::FrameClock;
pub use collision::{StickHit, resolve_hit};
pub use generate::{generate_platform, generate_tree};
pub use state::{GameEvent, GamePhase, GameState, Hero, Platform, Stick, Tree, TreeColor};
pub use tick::{TickInput, advance, tick};
