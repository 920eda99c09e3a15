//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, physics or platform dependencies; contacts and touches
//!   come in from the host

pub mod category;
pub mod collision;
pub mod shot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use category::PhysicsCategory;
pub use collision::{ContactBody, ContactPair, HitEvent, classify};
pub use shot::{ShotError, compute_shot_vector};
pub use spawn::{SpawnDescriptor, SpawnError, SpawnTimer, next_spawn, next_spawn_with_duration};
pub use state::{EntityId, GameEvent, GameState, Monster, MoveAction, Projectile};
pub use tick::{TickInput, tick};
