//! Frame-driven session driver
//!
//! Hosts (browser `requestAnimationFrame`, the headless demo) hand frame
//! timestamps to [`Game::frame`] and schedule another frame only while it
//! answers [`LoopControl::Continue`]. Frames are tagged with a
//! [`FrameTicket`]; a restart invalidates every ticket handed out before it.

use crate::sim::{FrameClock, GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Whether the host should keep delivering frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    /// Stop scheduling frames until an input re-arms the loop
    Idle,
}

/// Identifies the session a scheduled frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameTicket(pub u32);

/// Game instance holding the session and its frame clock
pub struct Game {
    state: GameState,
    clock: FrameClock,
    session: u32,
    idle_mode: bool,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            clock: FrameClock::new(),
            session: 0,
            idle_mode: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ticket for frames scheduled against the current session
    pub fn ticket(&self) -> FrameTicket {
        FrameTicket(self.session)
    }

    /// Press. Returns a ticket when the host has to start delivering frames.
    pub fn press_down(&mut self) -> Option<FrameTicket> {
        if !self.state.press_down() {
            return None;
        }
        self.clock.disarm();
        Some(self.ticket())
    }

    pub fn release(&mut self) -> bool {
        self.state.release()
    }

    /// Full reset; frames already scheduled for the old session are dropped.
    /// Returns the new session's ticket when the host has to keep delivering
    /// frames (the autopilot is on).
    pub fn restart(&mut self) -> Option<FrameTicket> {
        self.session = self.session.wrapping_add(1);
        self.clock.disarm();
        self.state.restart();
        self.wants_frames().then(|| self.ticket())
    }

    /// Turn the autopilot on or off. Returns a ticket when the host has to
    /// start delivering frames.
    pub fn set_idle_mode(&mut self, idle_mode: bool) -> Option<FrameTicket> {
        self.idle_mode = idle_mode;
        log::info!("Idle mode: {}", idle_mode);
        if idle_mode && !self.state.game_over {
            self.clock.disarm();
            return Some(self.ticket());
        }
        None
    }

    /// The host viewport changed height; the fall limit follows it
    pub fn set_viewport_height(&mut self, height: f32) {
        self.state.tuning.viewport_height = height.max(self.state.tuning.canvas_height);
    }

    /// Run one animation frame
    pub fn frame(&mut self, ticket: FrameTicket, timestamp: f64) -> LoopControl {
        if ticket != self.ticket() {
            log::debug!("Dropping frame for stale session {}", ticket.0);
            return LoopControl::Idle;
        }

        if let Some(dt) = self.clock.advance(timestamp) {
            let input = TickInput {
                idle_mode: self.idle_mode,
                ..Default::default()
            };
            tick(&mut self.state, &input, dt);
        }

        if self.wants_frames() {
            LoopControl::Continue
        } else {
            self.clock.disarm();
            LoopControl::Idle
        }
    }

    /// Frames are needed while something moves: a running phase, the
    /// autopilot, or a perfect pulse still counting down
    fn wants_frames(&self) -> bool {
        if self.state.game_over {
            return false;
        }
        self.idle_mode || self.state.phase.is_running() || self.state.perfect_hit()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::sim::GamePhase;

    /// Deliver frames until the game goes idle, returning the last timestamp
    fn run_until_idle(game: &mut Game, ticket: FrameTicket, mut now: f64, limit: usize) -> f64 {
        for _ in 0..limit {
            now += FRAME_MS;
            if game.frame(ticket, now) == LoopControl::Idle {
                return now;
            }
        }
        panic!("game never went idle");
    }

    #[test]
    fn test_waiting_is_idle() {
        let mut game = Game::new(1);
        let ticket = game.ticket();
        assert_eq!(game.frame(ticket, 0.0), LoopControl::Idle);
        assert_eq!(game.state().phase, GamePhase::Waiting);
    }

    #[test]
    fn test_first_frame_after_press_is_still() {
        let mut game = Game::new(1);
        let ticket = game.press_down().unwrap();
        assert!(game.press_down().is_none());

        assert_eq!(game.frame(ticket, 10_000.0), LoopControl::Continue);
        assert_eq!(game.state().active_stick().length, 0.0);

        assert_eq!(game.frame(ticket, 10_040.0), LoopControl::Continue);
        assert_eq!(game.state().active_stick().length, 10.0);
    }

    #[test]
    fn test_miss_runs_to_game_over_then_idles() {
        let mut game = Game::new(1);
        let ticket = game.press_down().unwrap();
        game.frame(ticket, 0.0);
        game.frame(ticket, 40.0);
        assert!(game.release());

        run_until_idle(&mut game, ticket, 40.0, 10_000);
        assert!(game.state().game_over);
        assert_eq!(game.state().phase, GamePhase::Falling);
        assert!(
            game.drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::GameOver { .. }))
        );
    }

    #[test]
    fn test_restart_drops_stale_frames() {
        let mut game = Game::new(1);
        let old = game.press_down().unwrap();
        game.frame(old, 0.0);
        game.frame(old, 100.0);

        assert_eq!(game.restart(), None);
        assert_ne!(game.ticket(), old);
        let stick = *game.state().active_stick();
        assert_eq!(game.frame(old, 200.0), LoopControl::Idle);
        assert_eq!(*game.state().active_stick(), stick);
        assert_eq!(game.state().phase, GamePhase::Waiting);
    }

    #[test]
    fn test_loop_rearms_after_landing() {
        let mut game = Game::new(5);
        let target = *game.state().next_platform().unwrap();
        let ticket = game.press_down().unwrap();

        // Stretch the stick to the middle of the next platform
        let length = target.center() - game.state().active_stick().x;
        game.frame(ticket, 0.0);
        game.frame(ticket, f64::from(length) * 4.0);
        game.release();

        let now = run_until_idle(&mut game, ticket, f64::from(length) * 4.0, 10_000);
        assert_eq!(game.state().phase, GamePhase::Waiting);
        assert_eq!(game.state().score, 2);
        assert!(!game.state().perfect_hit());

        let again = game.press_down().unwrap();
        assert_eq!(again, ticket);
        assert_eq!(game.frame(again, now + 5_000.0), LoopControl::Continue);
        assert_eq!(game.state().active_stick().length, 0.0);
    }

    #[test]
    fn test_idle_mode_keeps_running() {
        let mut game = Game::new(8);
        let ticket = game.set_idle_mode(true).unwrap();
        let mut now = 0.0;
        for _ in 0..1200 {
            now += FRAME_MS;
            assert_eq!(game.frame(ticket, now), LoopControl::Continue);
        }
        assert!(game.state().score > 0);
    }

    #[test]
    fn test_restart_in_idle_mode_hands_out_new_ticket() {
        let mut game = Game::new(8);
        let old = game.set_idle_mode(true).unwrap();
        game.frame(old, 0.0);
        game.frame(old, 16.0);

        let ticket = game.restart().unwrap();
        assert_ne!(ticket, old);
        assert_eq!(game.frame(old, 32.0), LoopControl::Idle);

        let mut now = 32.0;
        for _ in 0..1200 {
            now += FRAME_MS;
            assert_eq!(game.frame(ticket, now), LoopControl::Continue);
        }
        assert!(game.state().score > 0);
    }

    #[test]
    fn test_session_from_unsanitized_tuning() {
        use crate::tuning::SpanRange;

        let tuning = Tuning {
            platform_gap: SpanRange::new(50, 50),
            initial_platforms: 0,
            ..Default::default()
        };
        let mut game = Game::with_tuning(1, tuning);
        assert_eq!(game.state().platforms.len(), 5);
        assert!(game.state().next_platform().is_some());

        let ticket = game.set_idle_mode(true).unwrap();
        let mut now = 0.0;
        for _ in 0..1200 {
            now += FRAME_MS;
            game.frame(ticket, now);
        }
        assert!(game.state().score > 0);
    }
}
