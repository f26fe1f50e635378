//! Boat state and core simulation types
//!
//! One `BoatState` exists per play session. It is replaced, never reset in
//! place, when the player restarts or switches level.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::trim::{SailEval, SailState};
use crate::consts::*;

/// Difficulty level, each one hands the player another control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Level {
    /// Mainsail only, the jib trims itself
    #[default]
    Mainsail,
    /// Mainsail and jib
    BothSails,
    /// Steering by trim asymmetry, jib can stand backed after a tack or gybe
    FokBak,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Mainsail, Level::BothSails, Level::FokBak];

    /// Level from its 1-based number; anything unknown plays as level 1
    pub fn from_number(n: u8) -> Self {
        match n {
            1 => Level::Mainsail,
            2 => Level::BothSails,
            3 => Level::FokBak,
            other => {
                log::warn!("Unknown level {}, falling back to level 1", other);
                Level::Mainsail
            }
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Level::Mainsail => 1,
            Level::BothSails => 2,
            Level::FokBak => 3,
        }
    }

    /// Whether the player sheets the jib
    pub fn player_trims_jib(&self) -> bool {
        !matches!(self, Level::Mainsail)
    }

    /// Whether a jib can stand backed
    pub fn has_fok_bak(&self) -> bool {
        matches!(self, Level::FokBak)
    }

    /// Weights of (mainsail, jib) in the boat's total drive
    pub fn sail_weights(&self) -> (f32, f32) {
        match self {
            Level::Mainsail => (0.85, 0.15),
            Level::BothSails | Level::FokBak => (0.6, 0.4),
        }
    }
}

/// Side the sails stand on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SailSide {
    /// Sails out to port, wind over starboard (relative angle > 0)
    Port,
    /// Sails out to starboard, wind over port or dead ahead
    Starboard,
}

impl SailSide {
    /// Side for a relative wind angle (positive = wind from the right)
    pub fn for_relative_wind(relative_wind_angle: f32) -> Self {
        if relative_wind_angle > 0.0 {
            SailSide::Port
        } else {
            SailSide::Starboard
        }
    }

    /// -1 for port, +1 for starboard
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            SailSide::Port => -1.0,
            SailSide::Starboard => 1.0,
        }
    }
}

/// What the boat is doing this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SailingPhase {
    #[default]
    Sailing,
    /// Pointing into the no-go zone, no drive
    InIrons,
}

/// The player's boat (a Valk open keelboat)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatState {
    /// World position in meters
    pub pos: Vec2,
    /// Compass heading (radians, 0 = north, clockwise), kept in (-π, π]
    pub heading: f32,
    /// Speed through the water (m/s), negative when drifting backwards
    pub speed: f32,
    /// Turn rate (rad/s)
    pub turn_rate: f32,
    /// Sheet positions in percent (0 = fully eased, 100 = fully sheeted)
    pub mainsail_trim: f32,
    pub jib_trim: f32,
    pub sail_side: SailSide,
    /// Side of the previous tick, `None` until a side is known
    #[serde(default)]
    pub prev_sail_side: Option<SailSide>,
    /// Jib stands backed on the old side
    pub jib_bak: bool,
    pub phase: SailingPhase,
    /// Per-sail feedback from the last tick
    pub mainsail: SailEval,
    pub jib: SailEval,
    /// Smoothed heel and leeway
    pub heel: f32,
    pub drift: f32,
    /// Last computed ideal trim (0 while in irons)
    pub optimal_trim: f32,
    /// Wind angle relative to the bow, and its magnitude
    pub relative_wind_angle: f32,
    pub abs_wind_angle: f32,
}

impl Default for BoatState {
    fn default() -> Self {
        Self::new(Vec2::new(START_X, START_Y))
    }
}

impl BoatState {
    /// A fresh boat facing north with neutral trim
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            speed: 0.0,
            turn_rate: 0.0,
            mainsail_trim: NEUTRAL_TRIM,
            jib_trim: NEUTRAL_TRIM,
            sail_side: SailSide::Starboard,
            prev_sail_side: Some(SailSide::Starboard),
            jib_bak: false,
            phase: SailingPhase::Sailing,
            mainsail: SailEval::default(),
            jib: SailEval::default(),
            heel: 0.0,
            drift: 0.0,
            optimal_trim: NEUTRAL_TRIM,
            relative_wind_angle: 0.0,
            abs_wind_angle: 0.0,
        }
    }

    pub fn adjust_mainsail(&mut self, delta: f32) {
        self.mainsail_trim = (self.mainsail_trim + delta).clamp(MIN_TRIM, MAX_TRIM);
    }

    pub fn adjust_jib(&mut self, delta: f32) {
        self.jib_trim = (self.jib_trim + delta).clamp(MIN_TRIM, MAX_TRIM);
    }

    pub fn mainsail_state(&self) -> SailState {
        self.mainsail.state
    }

    pub fn jib_state(&self) -> SailState {
        self.jib.state
    }

    pub fn mainsail_error(&self) -> f32 {
        self.mainsail.error
    }

    pub fn jib_error(&self) -> f32 {
        self.jib.error
    }

    pub fn is_in_irons(&self) -> bool {
        self.phase == SailingPhase::InIrons
    }

    /// Jib is backed and still sheeted hard enough to push the bow
    pub fn jib_pushing(&self) -> bool {
        self.jib_bak && self.jib_trim > JIB_BAK_RELEASE_THRESHOLD
    }

    /// True when every clamp invariant holds
    pub fn is_valid(&self) -> bool {
        (MIN_TRIM..=MAX_TRIM).contains(&self.mainsail_trim)
            && (MIN_TRIM..=MAX_TRIM).contains(&self.jib_trim)
            && (MIN_BOAT_SPEED..=MAX_BOAT_SPEED).contains(&self.speed)
            && self.turn_rate.abs() <= MAX_TURN_RATE
            && self.heading > -std::f32::consts::PI
            && self.heading <= std::f32::consts::PI
    }
}
