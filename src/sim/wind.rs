//! Constant wind for a session

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_WIND_FORCE;
use crate::normalize_angle;

/// Wind, read-only for the duration of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind blows FROM (radians, 0 = north, clockwise)
    pub direction: f32,
    /// Wind force (Beaufort, flavor only)
    pub force: f32,
}

impl Default for Wind {
    /// Northerly force 5
    fn default() -> Self {
        Self {
            direction: 0.0,
            force: DEFAULT_WIND_FORCE,
        }
    }
}

impl Wind {
    pub fn new(direction: f32, force: f32) -> Self {
        Self {
            direction: normalize_angle(direction),
            force,
        }
    }

    pub fn from_degrees(direction_deg: f32, force: f32) -> Self {
        Self::new(direction_deg.to_radians(), force)
    }

    pub fn direction_degrees(&self) -> f32 {
        self.direction.to_degrees()
    }

    /// Direction the air moves TOWARD (used for wind streaks)
    pub fn blow_direction(&self) -> f32 {
        normalize_angle(self.direction + std::f32::consts::PI)
    }
}
