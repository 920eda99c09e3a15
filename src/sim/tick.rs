//! Simulation tick
//!
//! Advances the scene one step: spawn cadence, the player's touch, contacts
//! reported by the host, then movement and cleanup.

use glam::Vec2;

use super::collision::{ContactBody, ContactPair, HitEvent, classify};
use super::shot::compute_shot_vector;
use super::spawn::next_spawn_with_duration;
use super::state::{EntityId, GameEvent, GameState};

/// Input for a single tick, as delivered by the host
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Touch released at this scene position
    pub touch: Option<Vec2>,
    /// Pairs of bodies the host saw touching since the last tick
    pub contacts: Vec<(EntityId, EntityId)>,
}

/// Advance the scene by `dt` seconds and report what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let mut events = Vec::new();

    state.time += dt;

    let due = state.spawn_timer.advance(dt);
    for _ in 0..due {
        spawn_monster(state, &mut events);
    }

    if let Some(touch) = input.touch {
        fire(state, touch, &mut events);
    }

    for &(a, b) in &input.contacts {
        let pair = ContactPair::new(
            ContactBody::new(state.category_of(a), a),
            ContactBody::new(state.category_of(b), b),
        );
        if let Some(hit) = classify(pair) {
            resolve_hit(state, hit, &mut events);
        }
    }

    advance_actions(state, dt, &mut events);
    state.normalize_order();

    events
}

fn spawn_monster(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let settings = &state.settings;
    let result = next_spawn_with_duration(
        settings.scene_height,
        settings.scene_width,
        settings.monster_half_height,
        settings.monster_half_width,
        settings.travel_duration(),
        &mut state.rng,
    );
    match result {
        Ok(spawn) => {
            let id = state.spawn_monster(&spawn);
            log::debug!(
                "Spawned monster {} at y={:.1}, crossing in {:.2}s",
                id.0,
                spawn.vertical_position,
                spawn.travel_duration
            );
            events.push(GameEvent::MonsterSpawned {
                id,
                y: spawn.vertical_position,
            });
        }
        Err(err) => log::warn!("Skipping spawn, check scene settings: {}", err),
    }
}

fn fire(state: &mut GameState, touch: Vec2, events: &mut Vec<GameEvent>) {
    match compute_shot_vector(state.player, touch, state.settings.shot_distance) {
        Ok(Some(target)) => {
            let id = state.spawn_projectile(target);
            events.push(GameEvent::ProjectileFired { id, target });
        }
        Ok(None) => events.push(GameEvent::ShotRefused),
        Err(err) => log::warn!("Ignoring touch: {}", err),
    }
}

fn resolve_hit(state: &mut GameState, hit: HitEvent<EntityId>, events: &mut Vec<GameEvent>) {
    log::info!("hit!");
    state.remove_monster(hit.monster);
    state.remove_projectile(hit.projectile);
    state.hits += 1;
    events.push(GameEvent::Hit {
        monster: hit.monster,
        projectile: hit.projectile,
    });
}

fn advance_actions(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    for monster in &mut state.monsters {
        monster.action.advance(dt);
        monster.pos = monster.action.position();
    }
    for projectile in &mut state.projectiles {
        projectile.action.advance(dt);
        projectile.pos = projectile.action.position();
    }

    state.monsters.retain(|m| {
        let done = m.action.is_finished();
        if done {
            log::debug!("Monster {} escaped", m.id.0);
            events.push(GameEvent::MonsterEscaped { id: m.id });
        }
        !done
    });
    state.projectiles.retain(|p| {
        let done = p.action.is_finished();
        if done {
            events.push(GameEvent::ProjectileExpired { id: p.id });
        }
        !done
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::PhysicsCategory;

    const DT: f32 = 1.0 / 60.0;

    fn count<F: Fn(&GameEvent) -> bool>(events: &[GameEvent], f: F) -> usize {
        events.iter().filter(|e| f(e)).count()
    }

    #[test]
    fn test_first_tick_spawns() {
        let mut state = GameState::new(Settings::default(), 42);
        let events = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::MonsterSpawned { .. })),
            1
        );
        assert_eq!(state.monsters.len(), 1);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut state = GameState::new(Settings::default(), 42);
        let mut spawned = 0;
        // 1.5 seconds: the immediate spawn plus one at t=1.0
        for _ in 0..90 {
            let events = tick(&mut state, &TickInput::default(), DT);
            spawned += count(&events, |e| matches!(e, GameEvent::MonsterSpawned { .. }));
        }
        assert_eq!(spawned, 2);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let mut a = GameState::new(Settings::default(), 9);
        let mut b = GameState::new(Settings::default(), 9);
        for _ in 0..300 {
            let ea = tick(&mut a, &TickInput::default(), DT);
            let eb = tick(&mut b, &TickInput::default(), DT);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.monsters, b.monsters);
    }

    #[test]
    fn test_touch_fires_projectile() {
        let mut state = GameState::new(Settings::default(), 1);
        let player = state.player;
        let input = TickInput {
            touch: Some(player + Vec2::new(10.0, 0.0)),
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        let target = events.iter().find_map(|e| match e {
            GameEvent::ProjectileFired { target, .. } => Some(*target),
            _ => None,
        });
        assert_eq!(target, Some(player + Vec2::new(1000.0, 0.0)));
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_touch_behind_player_is_refused() {
        let mut state = GameState::new(Settings::default(), 1);
        let input = TickInput {
            touch: Some(state.player - Vec2::new(10.0, 0.0)),
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert!(events.contains(&GameEvent::ShotRefused));
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_touch_on_player_fires_nothing() {
        let mut state = GameState::new(Settings::default(), 1);
        let input = TickInput {
            touch: Some(state.player),
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert!(state.projectiles.is_empty());
        assert!(!events.contains(&GameEvent::ShotRefused));
    }

    #[test]
    fn test_contact_removes_both() {
        let mut state = GameState::new(Settings::default(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        let monster = state.monsters[0].id;
        let fire = TickInput {
            touch: Some(state.player + Vec2::new(50.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &fire, 0.0);
        let projectile = state.projectiles[0].id;

        // Host reports projectile first; order must not matter
        let contact = TickInput {
            contacts: vec![(projectile, monster)],
            ..Default::default()
        };
        let events = tick(&mut state, &contact, DT);
        assert!(events.contains(&GameEvent::Hit {
            monster,
            projectile
        }));
        assert_eq!(state.hits, 1);
        assert!(state.monster(monster).is_none());
        assert!(state.projectile(projectile).is_none());
    }

    #[test]
    fn test_stale_and_same_kind_contacts_ignored() {
        let mut state = GameState::new(Settings::default(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        let monster = state.monsters[0].id;

        let input = TickInput {
            contacts: vec![(monster, monster), (monster, EntityId(999))],
            ..Default::default()
        };
        let events = tick(&mut state, &input, 0.0);
        assert_eq!(count(&events, |e| matches!(e, GameEvent::Hit { .. })), 0);
        assert_eq!(state.hits, 0);
        assert!(state.monster(monster).is_some());
    }

    #[test]
    fn test_double_report_scores_once() {
        let mut state = GameState::new(Settings::default(), 1);
        tick(&mut state, &TickInput::default(), 0.0);
        let monster = state.monsters[0].id;
        let fire = TickInput {
            touch: Some(state.player + Vec2::new(50.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &fire, 0.0);
        let projectile = state.projectiles[0].id;

        let input = TickInput {
            contacts: vec![(monster, projectile), (projectile, monster)],
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.hits, 1);
    }

    #[test]
    fn test_monster_escapes_after_travel() {
        let mut state = GameState::new(Settings::default(), 3);
        tick(&mut state, &TickInput::default(), 0.0);
        let monster = state.monsters[0].id;
        assert_eq!(state.category_of(monster), PhysicsCategory::MONSTER);

        // Crossing never takes 4 seconds or more
        let mut escaped = false;
        for _ in 0..(4 * 60 + 1) {
            let events = tick(&mut state, &TickInput::default(), DT);
            escaped |= events.contains(&GameEvent::MonsterEscaped { id: monster });
        }
        assert!(escaped);
        assert!(state.monster(monster).is_none());
    }

    #[test]
    fn test_projectile_expires_after_flight() {
        let mut state = GameState::new(Settings::default(), 3);
        let fire = TickInput {
            touch: Some(state.player + Vec2::new(1.0, 1.0)),
            ..Default::default()
        };
        tick(&mut state, &fire, 0.0);
        let projectile = state.projectiles[0].id;

        let events = tick(&mut state, &TickInput::default(), 2.0);
        assert!(events.contains(&GameEvent::ProjectileExpired { id: projectile }));
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_bad_geometry_skips_spawn() {
        let settings = Settings {
            scene_height: 10.0,
            ..Settings::default()
        };
        let mut state = GameState::new(settings, 1);
        let events = tick(&mut state, &TickInput::default(), DT);
        assert!(events.is_empty());
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_huge_dt_spawns_a_bounded_batch() {
        let mut state = GameState::new(Settings::default(), 5);
        let events = tick(&mut state, &TickInput::default(), 1.0e9);
        let spawned = count(&events, |e| matches!(e, GameEvent::MonsterSpawned { .. }));
        assert_eq!(spawned, crate::consts::MAX_SPAWNS_PER_TICK as usize);
        // Every monster finished its crossing within the same step
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut state = GameState::new(Settings::default(), 1);
        tick(&mut state, &TickInput::default(), f32::NAN);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.monsters.len(), 1);
    }
}
