//! Monster spawning
//!
//! Monsters appear just past the right edge of the scene at a random height
//! and walk straight left until they are just past the left edge.

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::consts::{
    MAX_SPAWNS_PER_TICK, MONSTER_MAX_DURATION, MONSTER_MIN_DURATION, SPAWN_INTERVAL,
};

/// Spawn geometry the scene cannot satisfy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpawnError {
    /// Entity does not fit inside the scene, or a dimension is not a usable number
    #[error(
        "monster ({half_width}x{half_height} half extents) does not fit a {width}x{height} scene"
    )]
    DegenerateGeometry {
        width: f32,
        height: f32,
        half_width: f32,
        half_height: f32,
    },
    /// Travel duration range is empty or not finite
    #[error("invalid travel duration range {start}..{end}")]
    InvalidDuration { start: f32, end: f32 },
}

/// Where a new monster starts, where it goes, and how long it takes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDescriptor {
    pub vertical_position: f32,
    /// Off-screen right
    pub start: Vec2,
    /// Off-screen left, same height
    pub end: Vec2,
    pub travel_duration: f32,
}

impl SpawnDescriptor {
    pub fn horizontal_start(&self) -> f32 {
        self.start.x
    }
}

/// Pick the next monster's lane and speed with the default [2, 4) s crossing time.
pub fn next_spawn<R: Rng + ?Sized>(
    scene_height: f32,
    scene_width: f32,
    half_entity_height: f32,
    half_entity_width: f32,
    rng: &mut R,
) -> Result<SpawnDescriptor, SpawnError> {
    next_spawn_with_duration(
        scene_height,
        scene_width,
        half_entity_height,
        half_entity_width,
        MONSTER_MIN_DURATION..MONSTER_MAX_DURATION,
        rng,
    )
}

/// Same as [`next_spawn`] with a caller-chosen crossing time range.
pub fn next_spawn_with_duration<R: Rng + ?Sized>(
    scene_height: f32,
    scene_width: f32,
    half_entity_height: f32,
    half_entity_width: f32,
    travel_duration: Range<f32>,
    rng: &mut R,
) -> Result<SpawnDescriptor, SpawnError> {
    let degenerate = SpawnError::DegenerateGeometry {
        width: scene_width,
        height: scene_height,
        half_width: half_entity_width,
        half_height: half_entity_height,
    };
    let dims = [scene_height, scene_width, half_entity_height, half_entity_width];
    if dims.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(degenerate);
    }

    let min_y = half_entity_height;
    let max_y = scene_height - half_entity_height;
    if max_y < min_y {
        return Err(degenerate);
    }

    let Range { start, end } = travel_duration;
    if !start.is_finite() || !end.is_finite() || start < 0.0 || end <= start {
        return Err(SpawnError::InvalidDuration { start, end });
    }

    let y = rng.random_range(min_y..=max_y);
    // Single float samples can round up to `end`; keep the range half-open
    let mut duration = rng.random_range(start..end);
    if duration >= end {
        duration = f32::from_bits(end.to_bits() - 1);
    }

    Ok(SpawnDescriptor {
        vertical_position: y,
        start: Vec2::new(scene_width + half_entity_width, y),
        end: Vec2::new(-half_entity_width, y),
        travel_duration: duration,
    })
}

/// Fixed-cadence spawn trigger.
///
/// Fires once as soon as the scene starts, then every `interval` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTimer {
    interval: f32,
    /// Seconds until the next firing
    remaining: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL)
    }
}

impl SpawnTimer {
    /// A non-positive or non-finite interval falls back to the default cadence
    pub fn new(interval: f32) -> Self {
        let interval = if interval.is_finite() && interval > 0.0 {
            interval
        } else {
            SPAWN_INTERVAL
        };
        Self {
            interval,
            remaining: 0.0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Advance by `dt` seconds and return how many spawns are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.remaining -= dt;
        if self.remaining > 0.0 {
            return 0;
        }

        let due = (-self.remaining / self.interval).floor() + 1.0;
        if due > MAX_SPAWNS_PER_TICK as f32 {
            // Too far behind to catch up; drop the backlog and restart the cadence
            log::debug!("Spawn timer {:.0} firings behind, capping", due);
            self.remaining = self.interval;
            return MAX_SPAWNS_PER_TICK;
        }

        let due = due as u32;
        self.remaining += due as f32 * self.interval;
        if self.remaining <= 0.0 {
            self.remaining = self.interval;
        }
        due
    }
}
