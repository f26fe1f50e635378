//! Zeilcursus - an arcade sailing trainer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trim evaluation, boat physics, island check)
//! - `hud`: Read-only feedback derived from the boat for the HUD layer
//! - `config`: Session configuration loaded from JSON
//! - `web`: Browser bindings (wasm32 only)

pub mod config;
pub mod hud;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, ConfigResult, SessionConfig};
pub use hud::{CoachMessage, HudSnapshot, PointOfSail};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    use std::f32::consts::FRAC_PI_4;

    /// Largest frame step the caller may hand to the simulation
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Step used for the very first frame (no previous timestamp)
    pub const FIRST_FRAME_DT: f32 = 0.016;

    /// Sheet speed in trim percent per second
    pub const SAIL_TRIM_SPEED: f32 = 50.0;
    /// Half-width of the no-go zone (45 degrees)
    pub const NO_GO_ANGLE: f32 = FRAC_PI_4;
    /// Jib must be eased to this trim (or below) to release a backed jib
    pub const JIB_BAK_RELEASE_THRESHOLD: f32 = 8.0;

    pub const MIN_TRIM: f32 = 0.0;
    pub const MAX_TRIM: f32 = 100.0;
    /// Trim of both sails when a boat is launched
    pub const NEUTRAL_TRIM: f32 = 50.0;

    /// Turn rate limits (rad/s)
    pub const MAX_TURN_RATE: f32 = 1.2;
    /// Hull damping on the turn rate, per second (same for all levels)
    pub const TURN_DAMPING: f32 = 2.5;
    /// Turn rates below this snap to zero
    pub const TURN_RATE_EPSILON: f32 = 0.01;

    /// Boat speed limits (m/s)
    pub const MAX_BOAT_SPEED: f32 = 4.5;
    pub const MIN_BOAT_SPEED: f32 = -0.5;

    /// Default island (world meters)
    pub const ISLAND_RADIUS: f32 = 60.0;
    /// Extra clearance before the hull touches the shore
    pub const ISLAND_SHORE_MARGIN: f32 = 5.0;

    /// Default start position (world meters, south of the island)
    pub const START_X: f32 = 0.0;
    pub const START_Y: f32 = 100.0;

    /// Default wind force (flavor only)
    pub const DEFAULT_WIND_FORCE: f32 = 5.0;
}

/// Normalize an angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Unit vector for a compass heading (0 = north/up, clockwise, y grows down)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}

/// Clamp a raw frame interval (milliseconds) into a simulation step
///
/// The first frame has no previous timestamp and uses a nominal 60 Hz step.
pub fn frame_dt(last_ms: Option<f64>, now_ms: f64) -> f32 {
    match last_ms {
        Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, consts::MAX_FRAME_DT),
        None => consts::FIRST_FRAME_DT,
    }
}
