//! Demo autopilot
//!
//! Plays the sheets the way a careful student would: trim toward the
//! optimal trim, ease everything when pointing into the wind, and let a
//! backed jib fly before sheeting it in again. Used by the headless runner
//! and the browser idle mode.

use super::state::{BoatState, Level};
use super::tick::ControlInput;
use super::trim::optimal_trim;
use super::wind::Wind;
use crate::consts::NO_GO_ANGLE;
use crate::normalize_angle;

/// Trim error (percent) the autopilot tolerates before touching a sheet
const DEADBAND: f32 = 2.0;

/// Sheet direction that moves `trim` toward `target`
fn sheet_toward(trim: f32, target: f32) -> f32 {
    let error = target - trim;
    if error > DEADBAND {
        1.0
    } else if error < -DEADBAND {
        -1.0
    } else {
        0.0
    }
}

/// Compute the control input for the next tick
pub fn autopilot(boat: &BoatState, wind: &Wind, level: Level) -> ControlInput {
    let abs_wind_angle = normalize_angle(wind.direction - boat.heading).abs();
    let trims_jib = level.player_trims_jib();

    if abs_wind_angle < NO_GO_ANGLE {
        return ControlInput {
            steer: 0.0,
            mainsail_adjust: -1.0,
            jib_adjust: if trims_jib { -1.0 } else { 0.0 },
        };
    }

    let optimal = optimal_trim(abs_wind_angle);
    let jib_adjust = if !trims_jib {
        0.0
    } else if boat.jib_bak {
        -1.0
    } else {
        sheet_toward(boat.jib_trim, optimal)
    };

    ControlInput {
        steer: 0.0,
        mainsail_adjust: sheet_toward(boat.mainsail_trim, optimal),
        jib_adjust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SAIL_TRIM_SPEED;
    use crate::sim::tick::update;
    use crate::sim::trim::SailState;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_eases_in_irons() {
        let boat = BoatState::default();
        let input = autopilot(&boat, &Wind::default(), Level::BothSails);
        assert_eq!(input.mainsail_adjust, -1.0);
        assert_eq!(input.jib_adjust, -1.0);

        let input = autopilot(&boat, &Wind::default(), Level::Mainsail);
        assert_eq!(input.jib_adjust, 0.0);
    }

    #[test]
    fn test_releases_backed_jib() {
        let mut boat = BoatState::default();
        boat.heading = FRAC_PI_2;
        boat.jib_bak = true;
        let input = autopilot(&boat, &Wind::default(), Level::FokBak);
        assert_eq!(input.jib_adjust, -1.0);
    }

    #[test]
    fn test_reaches_good_trim() {
        let wind = Wind::default();
        let mut boat = BoatState::default();
        boat.heading = 2.0;
        boat.mainsail_trim = 100.0;
        boat.jib_trim = 0.0;

        // Enough time to run either sheet end to end
        let dt = 0.016;
        let ticks = (100.0 / (SAIL_TRIM_SPEED * dt)) as usize + 10;
        for _ in 0..ticks {
            let input = autopilot(&boat, &wind, Level::BothSails);
            update(&mut boat, &wind, &input, dt, Level::BothSails);
        }
        assert_eq!(boat.mainsail.state, SailState::Ok);
        assert_eq!(boat.jib.state, SailState::Ok);
        assert!((boat.mainsail_trim - boat.optimal_trim).abs() <= DEADBAND + 1.0);
    }
}
