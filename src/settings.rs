//! Scene settings
//!
//! Geometry and tuning for a run, loaded from a JSON file. Missing fields
//! take their defaults so a partial file is enough.

use std::ops::Range;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Scene ===
    pub scene_width: f32,
    pub scene_height: f32,

    // === Monsters ===
    pub monster_half_width: f32,
    pub monster_half_height: f32,
    /// Shortest crossing time (seconds)
    pub monster_min_duration: f32,
    /// Crossing time upper bound, exclusive (seconds)
    pub monster_max_duration: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    pub shot_distance: f32,
    /// Seconds a projectile flies before it is removed
    pub projectile_flight: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,

            monster_half_width: MONSTER_HALF_WIDTH,
            monster_half_height: MONSTER_HALF_HEIGHT,
            monster_min_duration: MONSTER_MIN_DURATION,
            monster_max_duration: MONSTER_MAX_DURATION,
            spawn_interval: SPAWN_INTERVAL,

            projectile_radius: PROJECTILE_RADIUS,
            shot_distance: SHOT_DISTANCE,
            projectile_flight: PROJECTILE_FLIGHT,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is usable. Monster/scene fit is left to the spawner,
    /// which reports it per spawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scene_width", self.scene_width),
            ("scene_height", self.scene_height),
            ("monster_half_width", self.monster_half_width),
            ("monster_half_height", self.monster_half_height),
            ("spawn_interval", self.spawn_interval),
            ("projectile_radius", self.projectile_radius),
            ("shot_distance", self.shot_distance),
            ("projectile_flight", self.projectile_flight),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        let (min, max) = (self.monster_min_duration, self.monster_max_duration);
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::Invalid {
                field: "monster_min_duration",
                reason: format!("must be non-negative, got {min}"),
            });
        }
        if !max.is_finite() || max <= min {
            return Err(ConfigError::Invalid {
                field: "monster_max_duration",
                reason: format!("must exceed monster_min_duration ({min}), got {max}"),
            });
        }
        Ok(())
    }

    /// Where the player stands
    pub fn player_position(&self) -> Vec2 {
        Vec2::new(
            self.scene_width * PLAYER_X_FRACTION,
            self.scene_height * PLAYER_Y_FRACTION,
        )
    }

    pub fn monster_half_extents(&self) -> Vec2 {
        Vec2::new(self.monster_half_width, self.monster_half_height)
    }

    pub fn travel_duration(&self) -> Range<f32> {
        self.monster_min_duration..self.monster_max_duration
    }
}
