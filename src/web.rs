//! Browser bindings
//!
//! The JavaScript side owns the canvas, the keyboard/touch listeners and the
//! `requestAnimationFrame` loop. Each frame it hands the sheet inputs and
//! the frame timestamp to `WebSession::frame` and reads back a JSON
//! `HudSnapshot` to draw.

use wasm_bindgen::prelude::*;

use crate::hud::HudSnapshot;
use crate::sim::{ControlInput, Level, Session, SessionEvent, autopilot};
use crate::{SessionConfig, frame_dt};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Zeilcursus Simulator gestart!");
}

/// One play session as seen from JavaScript
#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    last_time: Option<f64>,
    /// Autopilot plays the sheets (attract/demo mode)
    idle_mode: bool,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new(level: u8) -> WebSession {
        let config = SessionConfig {
            level,
            ..Default::default()
        };
        Self::with_config(&config)
    }

    /// Build a session from a JSON `SessionConfig`
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<WebSession, JsValue> {
        let config = SessionConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(&config))
    }

    fn with_config(config: &SessionConfig) -> WebSession {
        WebSession {
            session: Session::new(config),
            last_time: None,
            idle_mode: false,
        }
    }

    /// Advance one animation frame; returns true once the boat ran aground
    pub fn frame(&mut self, timestamp: f64, steer: f32, mainsail_adjust: f32, jib_adjust: f32) -> bool {
        if self.session.is_game_over() {
            return true;
        }

        let dt = frame_dt(self.last_time, timestamp);
        self.last_time = Some(timestamp);

        let input = if self.idle_mode {
            autopilot(&self.session.boat, &self.session.wind, self.session.level)
        } else {
            ControlInput {
                steer,
                mainsail_adjust,
                jib_adjust,
            }
        };

        let events = self.session.tick(&input, dt);
        if events.contains(&SessionEvent::RanAground) {
            log::info!("Game over after {:.1}s", self.session.elapsed);
        }
        self.session.is_game_over()
    }

    /// Current HUD state as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&HudSnapshot::from_session(&self.session)).unwrap_or_default()
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.last_time = None;
    }

    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&mut self, level: u8) {
        self.session.set_level(Level::from_number(level));
        self.last_time = None;
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[wasm_bindgen(js_name = setIdleMode)]
    pub fn set_idle_mode(&mut self, idle: bool) {
        self.idle_mode = idle;
    }
}
