//! Per-frame boat physics
//!
//! One `update` call advances a boat by `dt`. The three levels share this
//! code path and only branch where their control surfaces differ: which
//! sheets the player holds, how trim steers the boat, and whether the jib
//! can stand backed.

use std::f32::consts::{FRAC_PI_3, FRAC_PI_6};

use serde::{Deserialize, Serialize};

use super::state::{BoatState, Level, SailSide, SailingPhase};
use super::trim::{SailEval, evaluate_sail, optimal_trim};
use super::wind::Wind;
use crate::consts::*;
use crate::{heading_vector, normalize_angle};

/// Rate at which the level 1 jib follows the optimal trim (per second)
const JIB_AUTO_TRIM_RATE: f32 = 3.0;
/// Extra turn acceleration from a backed jib (rad/s²)
const BAK_TURN_PUSH: f32 = 0.8;
/// Fraction of speed lost per unit of backed jib trim
const BAK_DRAG: f32 = 0.7;
/// Low-pass rates for heel and leeway (per second)
const HEEL_RATE: f32 = 4.0;
const DRIFT_RATE: f32 = 2.0;
/// Speed the boat sags back to in irons before it starts going backwards
const IRONS_STALL_SPEED: f32 = 0.1;
/// Backwards acceleration while in irons ("deinzen")
const IRONS_BACKING_ACCEL: f32 = 0.3;
/// Momentum of a 600 kg keelboat: slower to gain speed than to lose it
const ACCEL_RATE: f32 = 0.4;
const DECEL_RATE: f32 = 0.6;

/// Control input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Rudder intent from the input layer (-1..=1). The boat steers by trim
    /// only, so physics ignores this; renderers may show it.
    pub steer: f32,
    /// +1 sheets in ("aantrekken"), -1 eases ("vieren")
    pub mainsail_adjust: f32,
    /// Same for the jib; ignored at level 1
    pub jib_adjust: f32,
}

/// Advance the boat by `dt` seconds
///
/// `dt` must already be clamped by the caller (see [`crate::frame_dt`]).
pub fn update(boat: &mut BoatState, wind: &Wind, input: &ControlInput, dt: f32, level: Level) {
    // Sheets
    boat.adjust_mainsail(input.mainsail_adjust.clamp(-1.0, 1.0) * SAIL_TRIM_SPEED * dt);
    if level.player_trims_jib() {
        boat.adjust_jib(input.jib_adjust.clamp(-1.0, 1.0) * SAIL_TRIM_SPEED * dt);
    }

    // Wind angle, taken before this tick's turn
    let relative_wind_angle = normalize_angle(wind.direction - boat.heading);
    let abs_wind_angle = relative_wind_angle.abs();
    boat.relative_wind_angle = relative_wind_angle;
    boat.abs_wind_angle = abs_wind_angle;

    let new_side = SailSide::for_relative_wind(relative_wind_angle);
    update_fok_bak(boat, new_side, level);
    boat.sail_side = new_side;
    boat.prev_sail_side = Some(new_side);

    steer(boat, level, dt);

    if abs_wind_angle < NO_GO_ANGLE {
        drift_in_irons(boat, dt);
    } else {
        sail(boat, level, dt);
    }

    boat.speed = boat.speed.clamp(MIN_BOAT_SPEED, MAX_BOAT_SPEED);

    // Leeway pushes the track off the heading, away from the wind
    let move_angle = boat.heading + boat.drift * boat.sail_side.sign();
    boat.pos += heading_vector(move_angle) * boat.speed * dt;
}

/// Mainsail swings over on its boom, the jib does not: crossing the wind
/// with the jib still sheeted backs it until the sheet is eased off.
fn update_fok_bak(boat: &mut BoatState, new_side: SailSide, level: Level) {
    if !level.has_fok_bak() {
        boat.jib_bak = false;
        return;
    }

    let crossed = boat.prev_sail_side.is_some_and(|prev| prev != new_side);
    if crossed && boat.jib_trim > JIB_BAK_RELEASE_THRESHOLD {
        boat.jib_bak = true;
    }
    if boat.jib_bak && boat.jib_trim <= JIB_BAK_RELEASE_THRESHOLD {
        boat.jib_bak = false;
    }
}

/// Trim reference used for steering on levels 1 and 2
fn steering_reference(abs_wind_angle: f32) -> f32 {
    if abs_wind_angle < NO_GO_ANGLE {
        NEUTRAL_TRIM
    } else {
        optimal_trim(abs_wind_angle)
    }
}

/// Turning force from the sails, before the sail-side sign
///
/// Positive force (more sheet than needed, or more main than jib) turns the
/// boat toward the wind ("loeven"), negative away from it ("afvallen").
fn steering_force(boat: &BoatState, level: Level) -> f32 {
    let speed_factor = (0.2 + boat.speed.abs() * 0.4).min(1.0);
    match level {
        Level::Mainsail => {
            let reference = steering_reference(boat.abs_wind_angle);
            (boat.mainsail_trim - reference) / 100.0 * 1.2 * speed_factor
        }
        Level::BothSails => {
            let reference = steering_reference(boat.abs_wind_angle);
            let avg_trim = boat.mainsail_trim * 0.6 + boat.jib_trim * 0.4;
            (avg_trim - reference) / 100.0 * speed_factor
        }
        Level::FokBak => {
            let trim_diff = (boat.mainsail_trim - boat.jib_trim) / 100.0;
            trim_diff * 0.9 * speed_factor
        }
    }
}

fn steer(boat: &mut BoatState, level: Level, dt: f32) {
    let side = boat.sail_side.sign();
    boat.turn_rate += steering_force(boat, level) * side * dt;

    // A backed jib shoves the bow away from the wind
    if boat.jib_pushing() {
        boat.turn_rate += side * BAK_TURN_PUSH * dt;
    }

    boat.turn_rate = boat.turn_rate.clamp(-MAX_TURN_RATE, MAX_TURN_RATE);
    boat.turn_rate *= 1.0 - TURN_DAMPING * dt;
    if boat.turn_rate.abs() < TURN_RATE_EPSILON {
        boat.turn_rate = 0.0;
    }

    boat.heading = normalize_angle(boat.heading + boat.turn_rate * dt);
}

/// No-go zone: sails flog, the boat stops and slowly drifts backwards
fn drift_in_irons(boat: &mut BoatState, dt: f32) {
    boat.phase = SailingPhase::InIrons;
    boat.mainsail = SailEval::stalled();
    boat.jib = SailEval::stalled();
    boat.heel = 0.0;
    boat.optimal_trim = 0.0;

    boat.speed *= 1.0 - dt;
    if boat.speed < IRONS_STALL_SPEED {
        boat.speed = (boat.speed - IRONS_BACKING_ACCEL * dt).max(MIN_BOAT_SPEED);
    }
}

fn sail(boat: &mut BoatState, level: Level, dt: f32) {
    boat.phase = SailingPhase::Sailing;

    let optimal = optimal_trim(boat.abs_wind_angle);
    boat.optimal_trim = optimal;

    if !level.player_trims_jib() {
        let jib_error = optimal - boat.jib_trim;
        boat.adjust_jib(jib_error * JIB_AUTO_TRIM_RATE * dt);
    }

    let main = evaluate_sail(boat.mainsail_trim, optimal);
    let jib = if boat.jib_bak {
        SailEval::backed()
    } else {
        evaluate_sail(boat.jib_trim, optimal)
    };
    boat.mainsail = main;
    boat.jib = jib;

    let (main_weight, jib_weight) = level.sail_weights();
    let efficiency = (main.efficiency * main_weight + jib.efficiency * jib_weight).max(0.0);

    let mut heel_amount = 0.0;
    if main.is_too_tight() {
        heel_amount += main.error * 0.6;
    }
    if !boat.jib_bak && jib.is_too_tight() {
        heel_amount += jib.error * 0.4;
    }
    boat.heel += (heel_amount - boat.heel) * HEEL_RATE * dt;
    boat.drift += (heel_amount * 0.3 - boat.drift) * DRIFT_RATE * dt;

    let mut target = MAX_BOAT_SPEED * angle_factor(boat.abs_wind_angle) * efficiency;
    if boat.jib_pushing() {
        target *= 1.0 - boat.jib_trim / 100.0 * BAK_DRAG;
    }
    let target = (target * (1.0 - heel_amount * 0.5)).max(0.0);

    let rate = if boat.speed < target { ACCEL_RATE } else { DECEL_RATE };
    boat.speed += (target - boat.speed) * rate * dt;
}

/// Share of hull speed available at an absolute wind angle
///
/// Close hauled is slow, a beam reach is fastest, dead downwind sags.
/// Defined from the edge of the no-go zone outward.
pub fn angle_factor(abs_wind_angle: f32) -> f32 {
    let a = abs_wind_angle;
    if a < FRAC_PI_3 {
        0.5 + (a - NO_GO_ANGLE) / (FRAC_PI_3 - NO_GO_ANGLE) * 0.3
    } else if a < 2.0 * FRAC_PI_3 {
        0.8 + (a - FRAC_PI_3) / FRAC_PI_3 * 0.2
    } else if a < 5.0 * FRAC_PI_6 {
        1.0 - (a - 2.0 * FRAC_PI_3) / FRAC_PI_6 * 0.15
    } else {
        0.65
    }
}
