//! Enemy AI system: ticks every enemy controller against the target.

use hecs::World;

use lander_core::capabilities::LineOfSight;
use lander_core::types::{EnemyId, Vector2};
use lander_enemy_ai::EnemyAi;

/// Update every live enemy. Events go out through each enemy's listeners.
pub fn run(world: &mut World, dt: f64, target: Vector2, terrain: &dyn LineOfSight) {
    for (_entity, enemy) in world.query_mut::<&mut EnemyAi>() {
        enemy.update(dt, target, Some(terrain));
    }
}

/// Stun every enemy within `radius` of `center`. Returns how many.
pub fn stun_in_radius(world: &mut World, center: Vector2, radius: f64, duration: f64) -> usize {
    let mut stunned = 0;
    for (_entity, enemy) in world.query_mut::<&mut EnemyAi>() {
        if enemy.position().distance(center) <= radius {
            enemy.stun(duration);
            stunned += 1;
        }
    }
    stunned
}

/// Find the entity for an enemy id.
pub fn find(world: &World, id: EnemyId) -> Option<hecs::Entity> {
    world
        .query::<&EnemyId>()
        .iter()
        .find(|(_, enemy_id)| **enemy_id == id)
        .map(|(entity, _)| entity)
}

/// Current position of an enemy, if it is still in the world.
pub fn position_of(world: &World, id: EnemyId) -> Option<Vector2> {
    let entity = find(world, id)?;
    let enemy = world.get::<&EnemyAi>(entity).ok()?;
    Some(enemy.position())
}
