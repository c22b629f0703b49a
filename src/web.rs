//! Browser binding
//!
//! JavaScript owns the DOM, the canvas and the event listeners; it forwards
//! presses and animation frames here and reads back score, phase and
//! vertices.

use wasm_bindgen::prelude::*;

use crate::game::{FrameTicket, Game, LoopControl};
use crate::renderer::{Vertex, Viewport, build_scene};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
    log::info!("Stick Hero starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    viewport: Viewport,
}

#[wasm_bindgen]
impl WebGame {
    /// New session sized to the current window; `tuning_json` may override
    /// any tuning value
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, tuning_json: Option<String>) -> Result<WebGame, JsValue> {
        let mut tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        tuning.viewport_height = height.max(tuning.canvas_height);

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        Ok(WebGame {
            game: Game::with_tuning(seed, tuning),
            viewport: Viewport::new(width, height),
        })
    }

    /// Mouse down / touch start. Returns a frame ticket when the page has to
    /// start the animation loop.
    pub fn press_down(&mut self) -> Option<u32> {
        self.game.press_down().map(|ticket| ticket.0)
    }

    /// Mouse up / touch end
    pub fn release(&mut self) {
        self.game.release();
    }

    /// Full reset. Returns a new frame ticket when the page has to keep the
    /// animation loop going (idle mode).
    pub fn restart(&mut self) -> Option<u32> {
        self.game.restart().map(|ticket| ticket.0)
    }

    pub fn set_idle_mode(&mut self, idle_mode: bool) -> Option<u32> {
        self.game.set_idle_mode(idle_mode).map(|ticket| ticket.0)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.game.set_viewport_height(height);
    }

    /// Run one animation frame. Returns whether to request another.
    pub fn frame(&mut self, ticket: u32, timestamp: f64) -> bool {
        self.game.frame(FrameTicket(ticket), timestamp) == LoopControl::Continue
    }

    pub fn score(&self) -> u32 {
        self.game.state().score
    }

    pub fn perfect_hit(&self) -> bool {
        self.game.state().perfect_hit()
    }

    pub fn game_over(&self) -> bool {
        self.game.state().game_over
    }

    pub fn phase(&self) -> String {
        self.game.state().phase.as_str().to_string()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.game
            .state()
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Interleaved `[x, y, r, g, b, a]` triangle list for the current frame
    pub fn vertices(&self) -> js_sys::Float32Array {
        let vertices = build_scene(self.game.state(), self.viewport);
        js_sys::Float32Array::from(Vertex::as_floats(&vertices))
    }
}
