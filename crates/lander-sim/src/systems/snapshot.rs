//! Snapshot system: builds the `EncounterSnapshot` for the host.
//!
//! Read-only over the world.

use hecs::World;

use lander_core::events::{AudioEvent, EnemyEvent};
use lander_core::state::{EncounterSnapshot, EnemyView};
use lander_core::types::{EnemyId, SimTime, Vector2};
use lander_enemy_ai::EnemyAi;

use crate::hazards::LaserField;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    target: Vector2,
    lasers: &[LaserField],
    enemy_events: Vec<(EnemyId, EnemyEvent)>,
    audio_events: Vec<AudioEvent>,
    target_hit: bool,
) -> EncounterSnapshot {
    EncounterSnapshot {
        time: *time,
        target,
        enemies: build_enemies(world),
        lasers: lasers.iter().map(LaserField::view).collect(),
        enemy_events,
        audio_events,
        target_hit,
    }
}

/// Enemy views sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyId, &EnemyAi)>()
        .iter()
        .map(|(_, (id, enemy))| EnemyView {
            id: *id,
            position: enemy.position(),
            velocity: enemy.velocity(),
            facing: enemy.facing(),
            state: enemy.behavior_state(),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}
