//! Idle/demo mode player
//!
//! Presses as soon as the hero is waiting and lets go once the stick would
//! reach a point near the middle of the next platform. The aim sways with
//! time so the demo mixes perfect and ordinary landings.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Release this far short of the aim point; a frame of growth usually
/// closes the gap
const AIM_LEAD: f32 = 2.5;

/// Fraction of the platform width the aim point sways by
const SWAY: f32 = 0.3;

/// Fill in the press/release the autopilot wants for this tick
pub fn steer(state: &GameState, input: &mut TickInput) {
    if state.game_over {
        return;
    }

    match state.phase {
        GamePhase::Waiting => input.press = true,
        GamePhase::Stretching => {
            if let Some(aim) = aim_point(state) {
                if state.active_stick().far_x() >= aim - AIM_LEAD {
                    input.release = true;
                }
            }
        }
        _ => {}
    }
}

/// Where the autopilot wants the stick tip to come down
pub fn aim_point(state: &GameState) -> Option<f32> {
    let target = state.next_platform()?;
    let sway = ((state.time_ms * 0.003).sin() as f32) * target.width * SWAY;
    Some(target.center() + sway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::sim::tick::tick;

    #[test]
    fn test_presses_while_waiting() {
        let state = GameState::new(4);
        let mut input = TickInput::default();
        steer(&state, &mut input);
        assert!(input.press);
        assert!(!input.release);
    }

    #[test]
    fn test_releases_near_target() {
        let mut state = GameState::new(4);
        state.press_down();
        let aim = aim_point(&state).unwrap();
        let target = *state.next_platform().unwrap();
        assert!(target.contains(aim));

        let mut input = TickInput::default();
        steer(&state, &mut input);
        assert!(!input.release);

        let anchor = state.active_stick().x;
        state.active_stick_mut().length = aim - anchor;
        steer(&state, &mut input);
        assert!(input.release);
    }

    #[test]
    fn test_demo_keeps_landing() {
        let mut state = GameState::new(2024);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        // One simulated minute at 60 Hz
        for _ in 0..3600 {
            tick(&mut state, &input, FRAME_MS as f32);
        }
        assert!(!state.game_over);
        assert_ne!(state.phase, GamePhase::Falling);
        assert!(state.score >= 10, "score {}", state.score);
    }
}
