//! Scene state and entity types
//!
//! Everything a run needs to be replayed from its seed lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::category::PhysicsCategory;
use super::spawn::{SpawnDescriptor, SpawnTimer};
use crate::settings::Settings;

/// Opaque handle for a scene entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

/// Linear move to a point, after which the entity leaves the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveAction {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl MoveAction {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn position(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.elapsed / self.duration)
    }
}

/// A monster walking across the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: EntityId,
    pub pos: Vec2,
    pub half_extents: Vec2,
    pub action: MoveAction,
}

impl Monster {
    pub fn from_spawn(id: EntityId, spawn: &SpawnDescriptor, half_extents: Vec2) -> Self {
        Self {
            id,
            pos: spawn.start,
            half_extents,
            action: MoveAction::new(spawn.start, spawn.end, spawn.travel_duration),
        }
    }
}

/// A thrown projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: EntityId,
    pub pos: Vec2,
    pub radius: f32,
    pub action: MoveAction,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    MonsterSpawned { id: EntityId, y: f32 },
    ProjectileFired { id: EntityId, target: Vec2 },
    /// Touch was behind the player
    ShotRefused,
    Hit { monster: EntityId, projectile: EntityId },
    /// Monster reached the left edge
    MonsterEscaped { id: EntityId },
    ProjectileExpired { id: EntityId },
}

/// Complete scene state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Vec2,
    /// Sorted by id
    pub monsters: Vec<Monster>,
    /// Sorted by id
    pub projectiles: Vec<Projectile>,
    pub spawn_timer: SpawnTimer,
    /// Projectile/monster hits so far
    pub hits: u32,
    /// Simulation time in seconds
    pub time: f32,
    next_id: u64,
}

impl GameState {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            player: settings.player_position(),
            spawn_timer: SpawnTimer::new(settings.spawn_interval),
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            monsters: Vec::new(),
            projectiles: Vec::new(),
            hits: 0,
            time: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn spawn_monster(&mut self, spawn: &SpawnDescriptor) -> EntityId {
        let id = self.next_entity_id();
        let half_extents = self.settings.monster_half_extents();
        self.monsters.push(Monster::from_spawn(id, spawn, half_extents));
        id
    }

    /// Launch a projectile from the player toward `target`
    pub fn spawn_projectile(&mut self, target: Vec2) -> EntityId {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: self.player,
            radius: self.settings.projectile_radius,
            action: MoveAction::new(self.player, target, self.settings.projectile_flight),
        });
        id
    }

    /// Category of a live entity; removed or unknown ids are untagged
    pub fn category_of(&self, id: EntityId) -> PhysicsCategory {
        if self.monster(id).is_some() {
            PhysicsCategory::MONSTER
        } else if self.projectile(id).is_some() {
            PhysicsCategory::PROJECTILE
        } else {
            PhysicsCategory::NONE
        }
    }

    pub fn monster(&self, id: EntityId) -> Option<&Monster> {
        self.monsters
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|i| &self.monsters[i])
    }

    pub fn projectile(&self, id: EntityId) -> Option<&Projectile> {
        self.projectiles
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.projectiles[i])
    }

    pub fn remove_monster(&mut self, id: EntityId) -> Option<Monster> {
        let index = self.monsters.binary_search_by_key(&id, |m| m.id).ok()?;
        Some(self.monsters.remove(index))
    }

    pub fn remove_projectile(&mut self, id: EntityId) -> Option<Projectile> {
        let index = self.projectiles.binary_search_by_key(&id, |p| p.id).ok()?;
        Some(self.projectiles.remove(index))
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.monsters.sort_by_key(|m| m.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
