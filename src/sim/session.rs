//! A play session: one boat, one wind, one island
//!
//! The session is what the frame loop talks to. It runs the physics step,
//! checks the island and owns the boat's lifecycle (restart and level
//! changes swap in a fresh boat between frames).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Island, boat_island_collision};
use super::state::{BoatState, Level, SailSide, SailingPhase};
use super::tick::{ControlInput, update};
use super::wind::Wind;
use crate::config::SessionConfig;
use crate::normalize_angle;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Sailing,
    /// Ran aground, waiting for a restart
    GameOver,
}

/// Something worth telling the HUD or the log about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    EnteredIrons,
    LeftIrons,
    JibBacked,
    JibReleased,
    RanAground,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub boat: BoatState,
    pub wind: Wind,
    pub island: Island,
    pub level: Level,
    pub phase: SessionPhase,
    /// Simulated seconds since the boat was launched
    pub elapsed: f32,
    pub ticks: u64,
    start_pos: Vec2,
    start_heading: f32,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        let level = Level::from_number(config.level);
        let start_pos = Vec2::from(config.start);
        let start_heading = normalize_angle(config.start_heading_deg.to_radians());
        let wind = Wind::from_degrees(config.wind_direction_deg, config.wind_force);
        let session = Self {
            boat: Self::launch(start_pos, start_heading, &wind),
            wind,
            island: Island::new(Vec2::from(config.island_center), config.island_radius),
            level,
            phase: SessionPhase::Sailing,
            elapsed: 0.0,
            ticks: 0,
            start_pos,
            start_heading,
        };
        log::info!(
            "Session started: level {}, wind {:.0}° force {}",
            level.number(),
            session.wind.direction_degrees(),
            session.wind.force
        );
        session
    }

    /// Fresh boat with its sails already on the leeward side, so the first
    /// tick never reads the launch as a crossing of the wind
    fn launch(pos: Vec2, heading: f32, wind: &Wind) -> BoatState {
        let mut boat = BoatState::new(pos);
        boat.heading = heading;
        let side = SailSide::for_relative_wind(normalize_angle(wind.direction - heading));
        boat.sail_side = side;
        boat.prev_sail_side = Some(side);
        boat
    }

    /// Advance one frame, returning what changed
    ///
    /// Does nothing once the boat has run aground.
    pub fn tick(&mut self, input: &ControlInput, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.phase == SessionPhase::GameOver {
            return events;
        }

        let was_phase = self.boat.phase;
        let was_bak = self.boat.jib_bak;

        update(&mut self.boat, &self.wind, input, dt, self.level);
        self.elapsed += dt;
        self.ticks += 1;

        match (was_phase, self.boat.phase) {
            (SailingPhase::Sailing, SailingPhase::InIrons) => {
                log::debug!("In irons at {:.1}s", self.elapsed);
                events.push(SessionEvent::EnteredIrons);
            }
            (SailingPhase::InIrons, SailingPhase::Sailing) => {
                log::debug!("Out of irons at {:.1}s", self.elapsed);
                events.push(SessionEvent::LeftIrons);
            }
            _ => {}
        }

        match (was_bak, self.boat.jib_bak) {
            (false, true) => {
                log::debug!("Jib backed at {:.1}s", self.elapsed);
                events.push(SessionEvent::JibBacked);
            }
            (true, false) => {
                log::debug!("Jib released at {:.1}s", self.elapsed);
                events.push(SessionEvent::JibReleased);
            }
            _ => {}
        }

        if boat_island_collision(self.boat.pos, &self.island) {
            self.boat.speed = 0.0;
            self.phase = SessionPhase::GameOver;
            log::info!(
                "Ran aground at ({:.1}, {:.1}) after {:.1}s",
                self.boat.pos.x,
                self.boat.pos.y,
                self.elapsed
            );
            events.push(SessionEvent::RanAground);
        }

        events
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Put a fresh boat on the start line
    pub fn restart(&mut self) {
        self.boat = Self::launch(self.start_pos, self.start_heading, &self.wind);
        self.phase = SessionPhase::Sailing;
        self.elapsed = 0.0;
        self.ticks = 0;
        log::info!("Session restarted on level {}", self.level.number());
    }

    /// Switch level; the boat is replaced, not carried over
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.restart();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const DT: f32 = 0.016;

    #[test]
    fn test_new_session_from_default_config() {
        let session = Session::default();
        assert_eq!(session.level, Level::Mainsail);
        assert_eq!(session.boat.pos, Vec2::new(0.0, 100.0));
        assert_eq!(session.wind.direction, 0.0);
        assert_eq!(session.island.radius, 60.0);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_reports_irons() {
        let mut session = Session::default();
        let events = session.tick(&ControlInput::default(), DT);
        assert_eq!(events, vec![SessionEvent::EnteredIrons]);
        let events = session.tick(&ControlInput::default(), DT);
        assert!(events.is_empty());
        assert_eq!(session.ticks, 2);
    }

    #[test]
    fn test_running_aground_ends_the_run() {
        let mut session = Session::default();
        // Beam reach straight at the island from just west of the shore
        session.boat.pos = Vec2::new(-70.0, 0.0);
        session.boat.heading = FRAC_PI_2;
        session.boat.speed = 3.0;

        let mut grounded = false;
        for _ in 0..2000 {
            let events = session.tick(&ControlInput::default(), 0.05);
            if events.contains(&SessionEvent::RanAground) {
                grounded = true;
                break;
            }
        }
        assert!(grounded);
        assert!(session.is_game_over());
        assert_eq!(session.boat.speed, 0.0);

        // Frozen until restarted
        let pos = session.boat.pos;
        assert!(session.tick(&ControlInput::default(), DT).is_empty());
        assert_eq!(session.boat.pos, pos);

        session.restart();
        assert!(!session.is_game_over());
        assert_eq!(session.boat.pos, Vec2::new(0.0, 100.0));
        assert_eq!(session.elapsed, 0.0);
    }

    #[test]
    fn test_set_level_replaces_boat() {
        let mut session = Session::default();
        session.boat.heading = FRAC_PI_2;
        session.boat.mainsail_trim = 90.0;
        session.tick(&ControlInput::default(), DT);

        session.set_level(Level::FokBak);
        assert_eq!(session.level, Level::FokBak);
        assert_eq!(session.boat.mainsail_trim, 50.0);
        assert_eq!(session.boat.heading, 0.0);
        assert_eq!(session.ticks, 0);
    }

    #[test]
    fn test_reports_jib_backing() {
        let config = SessionConfig {
            level: 3,
            start_heading_deg: 90.0,
            ..Default::default()
        };
        let mut session = Session::new(&config);
        session.tick(&ControlInput::default(), DT);

        session.boat.heading = -FRAC_PI_2;
        let events = session.tick(&ControlInput::default(), DT);
        assert!(events.contains(&SessionEvent::JibBacked));

        session.boat.jib_trim = 0.0;
        let events = session.tick(&ControlInput::default(), DT);
        assert!(events.contains(&SessionEvent::JibReleased));
    }

    #[test]
    fn test_port_launch_does_not_back_the_jib() {
        let config = SessionConfig {
            level: 3,
            start_heading_deg: -90.0,
            ..Default::default()
        };
        let mut session = Session::new(&config);
        assert_eq!(session.boat.sail_side, SailSide::Port);

        let events = session.tick(&ControlInput::default(), DT);
        assert!(!events.contains(&SessionEvent::JibBacked));
        assert!(!session.boat.jib_bak);
        assert_eq!(session.boat.sail_side, SailSide::Port);

        // Same after a restart and a level change
        session.restart();
        session.tick(&ControlInput::default(), DT);
        assert!(!session.boat.jib_bak);
        session.set_level(Level::FokBak);
        session.tick(&ControlInput::default(), DT);
        assert!(!session.boat.jib_bak);
    }

    #[test]
    fn test_launch_side_follows_the_wind() {
        // Westerly wind, boat heading north: wind over port, sails to starboard
        let config = SessionConfig {
            level: 3,
            wind_direction_deg: 270.0,
            ..Default::default()
        };
        let mut session = Session::new(&config);
        assert_eq!(session.boat.sail_side, SailSide::Starboard);
        let events = session.tick(&ControlInput::default(), DT);
        assert!(!events.contains(&SessionEvent::JibBacked));

        // Easterly wind: the other way round
        let config = SessionConfig {
            level: 3,
            wind_direction_deg: 90.0,
            ..Default::default()
        };
        let mut session = Session::new(&config);
        assert_eq!(session.boat.sail_side, SailSide::Port);
        let events = session.tick(&ControlInput::default(), DT);
        assert!(!events.contains(&SessionEvent::JibBacked));
    }
}
