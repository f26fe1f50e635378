//! Deterministic simulation module
//!
//! All sailing logic lives here. This module must be pure and deterministic:
//! - Caller-supplied, pre-clamped timestep
//! - No global state; boat and wind are passed in explicitly
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod session;
pub mod state;
pub mod tick;
pub mod trim;
pub mod wind;

pub use autopilot::autopilot;
pub use collision::{Island, boat_island_collision};
pub use session::{Session, SessionEvent, SessionPhase};
pub use state::{BoatState, Level, SailSide, SailingPhase};
pub use tick::{ControlInput, angle_factor, update};
pub use trim::{SailEval, SailState, TRIM_TOLERANCE, evaluate_sail, optimal_trim};
pub use wind::Wind;
