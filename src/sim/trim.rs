//! Sail trim evaluation
//!
//! Turns a sail's trim and the wind angle into the one feedback value the
//! rest of the game consumes: speed, heel and the HUD all read the same
//! `SailEval` instead of re-deriving it.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::NO_GO_ANGLE;

/// Allowed deviation (trim percent) before a sail counts as mistrimmed
pub const TRIM_TOLERANCE: f32 = 15.0;
/// Deviation beyond the tolerance at which a mistrim is at full severity
const SEVERITY_RANGE: f32 = 40.0;

/// Qualitative sail state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SailState {
    #[default]
    Ok,
    /// Under-trimmed, the sail flutters ("killen")
    TooLoose,
    /// Over-trimmed, the boat heels ("hellen")
    TooTight,
}

/// Result of evaluating one sail for one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SailEval {
    pub state: SailState,
    /// Drive contribution, -0.3 (backed jib) up to 1.0
    pub efficiency: f32,
    /// Severity of the deviation, 0..=1
    pub error: f32,
}

impl Default for SailEval {
    fn default() -> Self {
        Self {
            state: SailState::Ok,
            efficiency: 1.0,
            error: 0.0,
        }
    }
}

impl SailEval {
    /// A sail that is luffing completely (no-go zone)
    pub fn stalled() -> Self {
        Self {
            state: SailState::TooLoose,
            efficiency: 0.0,
            error: 1.0,
        }
    }

    /// A backed jib: shown as wrong and actively brakes the boat
    pub fn backed() -> Self {
        Self {
            state: SailState::TooLoose,
            efficiency: -0.3,
            error: 1.0,
        }
    }

    pub fn is_too_tight(&self) -> bool {
        self.state == SailState::TooTight
    }

    pub fn is_too_loose(&self) -> bool {
        self.state == SailState::TooLoose
    }
}

/// Ideal trim for an absolute wind angle
///
/// 90% at the edge of the no-go zone, falling linearly to 10% dead downwind,
/// clamped to [5, 95].
pub fn optimal_trim(abs_wind_angle: f32) -> f32 {
    let t = (abs_wind_angle - NO_GO_ANGLE) / (PI - NO_GO_ANGLE);
    (90.0 - t * 80.0).clamp(5.0, 95.0)
}

/// Compare a trim with the optimal trim
pub fn evaluate_sail(trim: f32, optimal: f32) -> SailEval {
    let diff = trim - optimal;
    let abs_diff = diff.abs();

    if abs_diff <= TRIM_TOLERANCE {
        let error = abs_diff / TRIM_TOLERANCE;
        return SailEval {
            state: SailState::Ok,
            efficiency: 1.0 - error * 0.3,
            error,
        };
    }

    let severity = ((abs_diff - TRIM_TOLERANCE) / SEVERITY_RANGE).min(1.0);
    if diff < 0.0 {
        SailEval {
            state: SailState::TooLoose,
            efficiency: (0.3 - severity * 0.3).max(0.0),
            error: severity,
        }
    } else {
        SailEval {
            state: SailState::TooTight,
            efficiency: (0.5 - severity * 0.4).max(0.1),
            error: severity,
        }
    }
}
