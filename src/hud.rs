//! HUD feedback
//!
//! Everything the HUD shows is derived here from the boat, read-only, once
//! per frame after the physics step. The Dutch texts are the game's own
//! teaching vocabulary.

use serde::Serialize;

use crate::sim::{BoatState, Level, SailState, Session};

/// Point of sail ("koers") for an absolute wind angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointOfSail {
    InDeWind,
    AanDeWind,
    HalveWind,
    RuimeWind,
    VoorDeWind,
}

impl PointOfSail {
    pub fn from_abs_angle(abs_wind_angle: f32) -> Self {
        let degrees = abs_wind_angle.to_degrees();
        if degrees < 30.0 {
            PointOfSail::InDeWind
        } else if degrees < 60.0 {
            PointOfSail::AanDeWind
        } else if degrees < 110.0 {
            PointOfSail::HalveWind
        } else if degrees < 150.0 {
            PointOfSail::RuimeWind
        } else {
            PointOfSail::VoorDeWind
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PointOfSail::InDeWind => "In de Wind",
            PointOfSail::AanDeWind => "Aan de Wind",
            PointOfSail::HalveWind => "Halve Wind",
            PointOfSail::RuimeWind => "Ruime Wind",
            PointOfSail::VoorDeWind => "Voor de Wind",
        }
    }
}

/// How loudly the coach should speak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

/// The coach's one-line advice for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoachMessage {
    InIrons,
    JibBacked,
    Luffing,
    Heeling,
    WellTrimmed,
}

impl CoachMessage {
    /// Most urgent problem first
    pub fn for_boat(boat: &BoatState) -> Self {
        let sails = [boat.mainsail.state, boat.jib.state];
        if boat.is_in_irons() {
            CoachMessage::InIrons
        } else if boat.jib_bak {
            CoachMessage::JibBacked
        } else if sails.contains(&SailState::TooLoose) {
            CoachMessage::Luffing
        } else if sails.contains(&SailState::TooTight) {
            CoachMessage::Heeling
        } else {
            CoachMessage::WellTrimmed
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CoachMessage::InIrons => "In de wind! Geen vaart.",
            CoachMessage::JibBacked => "Fok staat bak! Fok vieren!",
            CoachMessage::Luffing => "Zeilen killen - meer aantrekken!",
            CoachMessage::Heeling => "Boot helt! Zeilen vieren!",
            CoachMessage::WellTrimmed => "Goed getrimd!",
        }
    }

    pub fn text(&self) -> String {
        format!("Bob zegt: {}", self.advice())
    }

    pub fn severity(&self) -> Severity {
        match self {
            CoachMessage::InIrons | CoachMessage::JibBacked | CoachMessage::Heeling => {
                Severity::Danger
            }
            CoachMessage::Luffing => Severity::Warning,
            CoachMessage::WellTrimmed => Severity::Good,
        }
    }
}

/// Styling of a sail's trim bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SailBarStyle {
    Normal,
    Luffing,
    Heeling,
}

impl SailBarStyle {
    pub fn for_state(state: SailState) -> Self {
        match state {
            SailState::Ok => SailBarStyle::Normal,
            SailState::TooLoose => SailBarStyle::Luffing,
            SailState::TooTight => SailBarStyle::Heeling,
        }
    }
}

/// Per-frame, read-only view of the session for the HUD and renderer
#[derive(Debug, Clone, Serialize)]
pub struct HudSnapshot {
    pub level: u8,
    pub game_over: bool,
    pub x: f32,
    pub y: f32,
    pub heading_deg: f32,
    pub speed: f32,
    /// Trim percentages, rounded for display
    pub mainsail_pct: u8,
    pub jib_pct: u8,
    pub mainsail_state: SailState,
    pub jib_state: SailState,
    pub mainsail_error: f32,
    pub jib_error: f32,
    pub mainsail_bar: SailBarStyle,
    pub jib_bar: SailBarStyle,
    pub optimal_trim: f32,
    pub heel: f32,
    pub drift: f32,
    pub jib_bak: bool,
    pub in_irons: bool,
    pub abs_wind_angle_deg: f32,
    pub wind_direction_deg: f32,
    pub course: &'static str,
    pub coach: String,
    pub coach_severity: Severity,
    pub shore_distance: f32,
}

impl HudSnapshot {
    pub fn from_session(session: &Session) -> Self {
        let boat = &session.boat;
        let coach = CoachMessage::for_boat(boat);
        Self {
            level: session.level.number(),
            game_over: session.is_game_over(),
            x: boat.pos.x,
            y: boat.pos.y,
            heading_deg: boat.heading.to_degrees(),
            speed: boat.speed,
            mainsail_pct: display_pct(boat.mainsail_trim),
            jib_pct: display_pct(boat.jib_trim),
            mainsail_state: boat.mainsail.state,
            jib_state: boat.jib.state,
            mainsail_error: boat.mainsail.error,
            jib_error: boat.jib.error,
            mainsail_bar: SailBarStyle::for_state(boat.mainsail.state),
            jib_bar: SailBarStyle::for_state(boat.jib.state),
            optimal_trim: boat.optimal_trim,
            heel: boat.heel,
            drift: boat.drift,
            jib_bak: boat.jib_bak,
            in_irons: boat.is_in_irons(),
            abs_wind_angle_deg: boat.abs_wind_angle.to_degrees(),
            wind_direction_deg: session.wind.direction_degrees(),
            course: PointOfSail::from_abs_angle(boat.abs_wind_angle).name(),
            coach: coach.text(),
            coach_severity: coach.severity(),
            shore_distance: session.island.shore_distance(boat.pos),
        }
    }

    /// Whether the jib bar is player-controlled on this level
    pub fn jib_controllable(&self) -> bool {
        Level::from_number(self.level).player_trims_jib()
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{:>5.1}° {:<12} {:>4.2} m/s  grootzeil {:>3}%  fok {:>3}%  {}",
            self.heading_deg,
            self.course,
            self.speed,
            self.mainsail_pct,
            self.jib_pct,
            self.coach
        )
    }
}

fn display_pct(trim: f32) -> u8 {
    trim.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ControlInput, SailEval};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_point_of_sail_bands() {
        let at = |deg: f32| PointOfSail::from_abs_angle(deg.to_radians());
        assert_eq!(at(0.0), PointOfSail::InDeWind);
        assert_eq!(at(45.0), PointOfSail::AanDeWind);
        assert_eq!(at(90.0), PointOfSail::HalveWind);
        assert_eq!(at(130.0), PointOfSail::RuimeWind);
        assert_eq!(at(170.0), PointOfSail::VoorDeWind);
        assert_eq!(PointOfSail::from_abs_angle(PI).name(), "Voor de Wind");
    }

    #[test]
    fn test_coach_priority() {
        let mut boat = BoatState::default();
        assert_eq!(CoachMessage::for_boat(&boat), CoachMessage::WellTrimmed);

        boat.mainsail = SailEval {
            state: SailState::TooTight,
            efficiency: 0.3,
            error: 0.5,
        };
        assert_eq!(CoachMessage::for_boat(&boat), CoachMessage::Heeling);

        boat.jib = SailEval::stalled();
        assert_eq!(CoachMessage::for_boat(&boat), CoachMessage::Luffing);

        boat.jib_bak = true;
        assert_eq!(CoachMessage::for_boat(&boat), CoachMessage::JibBacked);

        boat.phase = crate::sim::SailingPhase::InIrons;
        let coach = CoachMessage::for_boat(&boat);
        assert_eq!(coach, CoachMessage::InIrons);
        assert_eq!(coach.text(), "Bob zegt: In de wind! Geen vaart.");
        assert_eq!(coach.severity(), Severity::Danger);
    }

    #[test]
    fn test_snapshot_after_tick() {
        let mut session = Session::default();
        session.boat.heading = FRAC_PI_2;
        session.tick(&ControlInput::default(), 0.016);

        let hud = HudSnapshot::from_session(&session);
        assert_eq!(hud.level, 1);
        assert!(!hud.game_over);
        assert_eq!(hud.course, "Halve Wind");
        assert_eq!(hud.mainsail_pct, 50);
        assert!(!hud.jib_controllable());
        assert!((hud.abs_wind_angle_deg - 90.0).abs() < 1e-3);
        assert!(hud.shore_distance > 0.0);

        let json = serde_json::to_string(&hud).unwrap();
        assert!(json.contains("\"course\":\"Halve Wind\""));
        assert!(json.contains("\"mainsail_state\":\"OK\""));
    }

    #[test]
    fn test_sail_bar_style() {
        assert_eq!(SailBarStyle::for_state(SailState::Ok), SailBarStyle::Normal);
        assert_eq!(SailBarStyle::for_state(SailState::TooLoose), SailBarStyle::Luffing);
        assert_eq!(SailBarStyle::for_state(SailState::TooTight), SailBarStyle::Heeling);
    }
}
