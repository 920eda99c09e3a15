//! Ninja Attack - A side-scrolling shoot-the-monsters scene
//!
//! Core modules:
//! - `sim`: Deterministic gameplay kernel (spawning, shots, contact classification)
//! - `settings`: Scene geometry and tuning, loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, Settings};

/// Game configuration constants
pub mod consts {
    /// Seconds between monster spawns
    pub const SPAWN_INTERVAL: f32 = 1.0;
    /// Maximum spawns a single tick may catch up on
    pub const MAX_SPAWNS_PER_TICK: u32 = 8;

    /// Default scene size (landscape phone)
    pub const SCENE_WIDTH: f32 = 667.0;
    pub const SCENE_HEIGHT: f32 = 375.0;

    /// Player sits at this fraction of the scene (x, y)
    pub const PLAYER_X_FRACTION: f32 = 0.1;
    pub const PLAYER_Y_FRACTION: f32 = 0.5;

    /// Monster sprite half extents
    pub const MONSTER_HALF_WIDTH: f32 = 20.0;
    pub const MONSTER_HALF_HEIGHT: f32 = 24.0;
    /// Monster crossing time range [min, max) in seconds
    pub const MONSTER_MIN_DURATION: f32 = 2.0;
    pub const MONSTER_MAX_DURATION: f32 = 4.0;

    /// Projectile sprite radius
    pub const PROJECTILE_RADIUS: f32 = 7.5;
    /// Fixed shot displacement, far enough to leave any scene
    pub const SHOT_DISTANCE: f32 = 1000.0;
    /// Seconds a projectile takes to cover SHOT_DISTANCE
    pub const PROJECTILE_FLIGHT: f32 = 2.0;
}
