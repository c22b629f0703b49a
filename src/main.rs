//! Stick Hero entry point
//!
//! Natively this runs a headless demo session with the autopilot playing;
//! the browser build starts from `web::start` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use stick_hero::consts::FRAME_MS;
    use stick_hero::sim::GameEvent;
    use stick_hero::{Game, LoopControl, Tuning};

    /// Two simulated minutes at 60 Hz
    const DEMO_FRAMES: usize = 60 * 120;

    env_logger::init();
    log::info!("Stick Hero (native) starting...");

    // Usage: stick-hero [seed] [tuning.json]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let tuning = args.next().map_or_else(Tuning::default, |path| load_tuning(&path));

    let mut game = Game::with_tuning(seed, tuning);
    let Some(ticket) = game.set_idle_mode(true) else {
        log::error!("Autopilot could not start");
        return;
    };

    let mut now = 0.0;
    let mut perfect = 0u32;
    for _ in 0..DEMO_FRAMES {
        now += FRAME_MS;
        let control = game.frame(ticket, now);

        for event in game.drain_events() {
            match event {
                GameEvent::Scored { perfect: true, .. } => perfect += 1,
                GameEvent::GameOver { score } => log::info!("Run ended at {}", score),
                _ => {}
            }
        }

        if control == LoopControl::Idle {
            break;
        }
    }

    let state = game.state();
    println!(
        "seed {}: score {} ({} perfect) over {:.1}s, {} platforms, phase {}",
        seed,
        state.score,
        perfect,
        state.time_ms / 1000.0,
        state.platforms.len(),
        state.phase.as_str()
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> stick_hero::Tuning {
    use stick_hero::Tuning;

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read {}: {}; using default tuning", path, e);
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning in {}: {}; using defaults", path, e);
            Tuning::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
