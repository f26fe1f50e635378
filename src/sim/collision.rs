//! Island collision
//!
//! The island is the only obstacle. Touching it ends the run; there is no
//! collision response.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ISLAND_RADIUS, ISLAND_SHORE_MARGIN};

/// A round island, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub center: Vec2,
    pub radius: f32,
}

impl Default for Island {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: ISLAND_RADIUS,
        }
    }
}

impl Island {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance the boat can still sail toward the island before grounding
    /// (negative once aground)
    pub fn shore_distance(&self, boat_pos: Vec2) -> f32 {
        boat_pos.distance(self.center) - (self.radius + ISLAND_SHORE_MARGIN)
    }
}

/// Check whether the boat's center has reached the island shore
pub fn boat_island_collision(boat_pos: Vec2, island: &Island) -> bool {
    boat_pos.distance(island.center) < island.radius + ISLAND_SHORE_MARGIN
}
