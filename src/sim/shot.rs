//! Shot direction
//!
//! A touch fires a projectile from the shooter toward the touch point, but
//! always the same distance regardless of how far away the touch was.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShotError {
    /// Offset has no direction (target on the shooter, or non-finite input)
    #[error("cannot aim from {origin} toward {target}")]
    DegenerateInput { origin: Vec2, target: Vec2 },
}

/// Destination of a shot from `origin` toward `target`, `magnitude` units away.
///
/// Returns `Ok(None)` when the target lies left of the shooter: only rightward
/// shots are allowed.
pub fn compute_shot_vector(
    origin: Vec2,
    target: Vec2,
    magnitude: f32,
) -> Result<Option<Vec2>, ShotError> {
    let degenerate = ShotError::DegenerateInput { origin, target };
    if !origin.is_finite() || !target.is_finite() || !magnitude.is_finite() {
        return Err(degenerate);
    }

    let offset = target - origin;
    if offset.x < 0.0 {
        return Ok(None);
    }

    let direction = offset.try_normalize().ok_or(degenerate)?;
    Ok(Some(origin + direction * magnitude))
}
