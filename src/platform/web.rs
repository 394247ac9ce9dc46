//! Browser bindings
//!
//! The JavaScript host owns the canvas and the animation loop. Each frame it
//! calls `step`, draws from `snapshot`, and reacts to the returned events
//! (sounds, wallet credit, menus).

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::cheats::CheatSet;
use crate::config::GameConfig;
use crate::levels::{Level, builtin_level};
use crate::sim::{FrameInput, GamePhase, Playthrough};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    super::init_logging();
    log::info!("dash-sim {} loaded", env!("CARGO_PKG_VERSION"));
}

/// A playthrough driven from JavaScript
#[wasm_bindgen]
pub struct WasmGame {
    game: Playthrough,
    cheats: CheatSet,
    /// Jump pressed since the last step
    pending_jump: bool,
}

impl WasmGame {
    fn start(level: Level, config: GameConfig) -> Self {
        Self {
            game: Playthrough::with_entropy(Arc::new(level), config),
            cheats: CheatSet::default(),
            pending_jump: false,
        }
    }
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a built-in level with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(level_id: u32) -> Result<WasmGame, JsError> {
        let config = GameConfig::default();
        let level = builtin_level(level_id, &config)?;
        Ok(Self::start(level, config))
    }

    /// Start a custom level; an empty config document means defaults
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(level_json: &str, config_json: &str) -> Result<WasmGame, JsError> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json)?
        };
        let level = Level::from_json(level_json)?;
        Ok(Self::start(level, config))
    }

    /// Queue a jump for the next step
    pub fn jump(&mut self) {
        self.pending_jump = true;
    }

    /// Replace the active cheats from a JSON object of booleans
    #[wasm_bindgen(js_name = setCheats)]
    pub fn set_cheats(&mut self, json: &str) -> Result<(), JsError> {
        self.cheats = serde_json::from_str(json)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setTrailColor)]
    pub fn set_trail_color(&mut self, color: &str) {
        self.game.set_trail_color(color);
    }

    /// Advance one frame; returns the frame's events as a JSON array
    pub fn step(&mut self) -> Result<String, JsError> {
        let input = FrameInput {
            jump: std::mem::take(&mut self.pending_jump),
            cheats: self.cheats,
        };
        let events = self.game.step(&input);
        Ok(serde_json::to_string(&events)?)
    }

    /// Everything the renderer needs, as JSON
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.snapshot())?)
    }

    pub fn retry(&mut self) {
        self.pending_jump = false;
        self.game.retry();
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.game.phase == GamePhase::Playing
    }

    pub fn attempts(&self) -> u32 {
        self.game.stats.attempts
    }

    pub fn progress(&self) -> f32 {
        self.game.stats.progress
    }
}
