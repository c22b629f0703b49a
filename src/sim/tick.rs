//! Phase-driven simulation tick
//!
//! One call advances whichever quantity the current phase owns by an
//! explicit elapsed time. No clocks, no scheduling; see `game` for that.

use super::autopilot;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::{STICK_DOWN_DEGREES, STICK_FALLEN_DEGREES};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Press (mouse down / touch start)
    pub press: bool,
    /// Release (mouse up / touch end)
    pub release: bool,
    /// Throw the session away and lay out a new one
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Apply input, then advance the game state by `dt` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.restart {
        state.restart();
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot::steer(state, &mut input);
    }

    if input.press {
        state.press_down();
    }
    if input.release {
        state.release();
    }

    advance(state, dt);
}

/// Advance the current phase by `dt` milliseconds
pub fn advance(state: &mut GameState, dt: f32) {
    state.time_ms += f64::from(dt);

    // The run is over; nothing moves until a restart
    if state.game_over {
        return;
    }

    state.decay_perfect(dt);

    match state.phase {
        GamePhase::Waiting => {}
        GamePhase::Stretching => {
            let rate = state.tuning.stretching_speed;
            state.active_stick_mut().length += dt / rate;
        }
        GamePhase::Turning => turn(state, dt),
        GamePhase::Walking => walk(state, dt),
        GamePhase::Transitioning => scroll(state, dt),
        GamePhase::Falling => fall(state, dt),
    }
}

fn turn(state: &mut GameState, dt: f32) {
    let rate = state.tuning.turning_speed;
    let stick = state.active_stick_mut();
    stick.rotation += dt / rate;
    if stick.rotation < STICK_DOWN_DEGREES {
        return;
    }
    stick.rotation = STICK_DOWN_DEGREES;

    let hit = state.landing();
    if hit.is_hit() {
        state.award(hit.perfect);
        state.extend_layout();
    } else {
        let far_x = state.active_stick().far_x();
        log::info!("Stick missed, tip at x={}", far_x);
        state.push_event(GameEvent::Missed { far_x });
    }

    state.set_phase(GamePhase::Walking);
}

fn walk(state: &mut GameState, dt: f32) {
    state.hero.pos.x += dt / state.tuning.walking_speed;

    // Stop at the far platform's edge, or at the tip of a stick that missed
    let (limit, next) = match state.landing().platform {
        Some(platform) => (
            platform.right() - state.tuning.hero_distance_from_edge,
            GamePhase::Transitioning,
        ),
        None => (
            state.active_stick().far_x() + state.tuning.hero_width,
            GamePhase::Falling,
        ),
    };

    if state.hero.pos.x >= limit {
        state.hero.pos.x = limit;
        state.set_phase(next);
    }
}

fn scroll(state: &mut GameState, dt: f32) {
    state.camera.advance(dt / state.tuning.transitioning_speed);

    let platform = state
        .landing()
        .platform
        .expect("transitioning is only entered after a landing");

    if state.camera.offset() > platform.right() - state.tuning.padding_x {
        state.place_stick(platform.right());
        state.set_phase(GamePhase::Waiting);
    }
}

fn fall(state: &mut GameState, dt: f32) {
    let rate = state.tuning.turning_speed;
    let stick = state.active_stick_mut();
    if !stick.has_fallen() {
        stick.rotation = (stick.rotation + dt / rate).min(STICK_FALLEN_DEGREES);
    }

    state.hero.pos.y += dt / state.tuning.falling_speed;
    if state.hero.pos.y > state.tuning.fall_limit() {
        state.end_run();
    }
}
