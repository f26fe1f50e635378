//! Session configuration
//!
//! Read from JSON. Every field has a default, so `{}` is a valid config that
//! reproduces the classic course: northerly wind, island at the origin, boat
//! launched 100 m south of it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors at the configuration boundary
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid session config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Level number 1-3; anything else plays as level 1
    pub level: u8,
    /// Launch position [x, y] in meters
    pub start: [f32; 2],
    /// Launch heading in degrees (0 = north, clockwise)
    pub start_heading_deg: f32,
    /// Direction the wind blows from, degrees
    pub wind_direction_deg: f32,
    pub wind_force: f32,
    pub island_center: [f32; 2],
    pub island_radius: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: 1,
            start: [START_X, START_Y],
            start_heading_deg: 0.0,
            wind_direction_deg: 0.0,
            wind_force: DEFAULT_WIND_FORCE,
            island_center: [0.0, 0.0],
            island_radius: ISLAND_RADIUS,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        let numbers = [
            ("start.x", self.start[0]),
            ("start.y", self.start[1]),
            ("start_heading_deg", self.start_heading_deg),
            ("wind_direction_deg", self.wind_direction_deg),
            ("wind_force", self.wind_force),
            ("island_center.x", self.island_center[0]),
            ("island_center.y", self.island_center[1]),
            ("island_radius", self.island_radius),
        ];
        if let Some((field, value)) = numbers.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::InvalidValue { field, value });
        }
        if self.island_radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "island_radius",
                value: self.island_radius,
            });
        }
        if self.wind_force < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "wind_force",
                value: self.wind_force,
            });
        }
        Ok(())
    }
}
