//! Headless run of the scene.
//!
//! Usage: `ninja-attack [seed] [settings.json]`
//!
//! Stands in for the host engine: aims a touch at the nearest monster twice a
//! second and reports overlapping bodies as contacts.

use glam::Vec2;
use ninja_attack::Settings;
use ninja_attack::sim::{EntityId, GameEvent, GameState, TickInput, tick};

const FRAME_DT: f32 = 1.0 / 60.0;
const RUN_SECONDS: u32 = 30;
const TOUCH_EVERY_FRAMES: u32 = 30;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::error!("Invalid seed: {}", e);
            std::process::exit(2);
        }
        None => 1,
    };
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => Settings::default(),
    };

    log::info!("Ninja Attack (headless) starting with seed: {}", seed);
    let mut state = GameState::new(settings, seed);

    let mut escaped = 0;
    let mut contacts = Vec::new();
    for frame in 0..RUN_SECONDS * 60 {
        let touch = if frame % TOUCH_EVERY_FRAMES == 0 {
            nearest_monster(&state)
        } else {
            None
        };
        let input = TickInput {
            touch,
            contacts: std::mem::take(&mut contacts),
        };
        for event in tick(&mut state, &input, FRAME_DT) {
            if let GameEvent::MonsterEscaped { .. } = event {
                escaped += 1;
            }
        }
        contacts = overlapping_pairs(&state);
    }

    log::info!(
        "Finished {}s: {} hits, {} monsters escaped",
        RUN_SECONDS,
        state.hits,
        escaped
    );
}

fn nearest_monster(state: &GameState) -> Option<Vec2> {
    state
        .monsters
        .iter()
        .map(|m| m.pos)
        .filter(|pos| pos.x > state.player.x)
        .min_by(|a, b| {
            a.distance_squared(state.player)
                .total_cmp(&b.distance_squared(state.player))
        })
}

/// Circle-vs-box overlap between every projectile and monster.
///
/// Pairs are reported projectile first to exercise order-independent
/// classification.
fn overlapping_pairs(state: &GameState) -> Vec<(EntityId, EntityId)> {
    let mut contacts = Vec::new();
    for projectile in &state.projectiles {
        for monster in &state.monsters {
            let min = monster.pos - monster.half_extents;
            let max = monster.pos + monster.half_extents;
            let closest = projectile.pos.clamp(min, max);
            if closest.distance_squared(projectile.pos) <= projectile.radius * projectile.radius {
                contacts.push((projectile.id, monster.id));
            }
        }
    }
    contacts
}
