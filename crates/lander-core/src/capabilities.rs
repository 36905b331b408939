//! Capabilities the host engine lends to the simulation.
//!
//! The enemy AI never talks to a sprite or physics body directly; it is
//! handed these traits instead, so it runs the same headless as in-engine.

use crate::types::Vector2;

/// Something with a queryable 2D position and a collision switch.
///
/// A host engine implements this for its sprite/physics body type and
/// attaches it to an enemy controller, which then keeps the body in sync.
pub trait EnemyBody: Send + Sync {
    fn position(&self) -> Vector2;
    fn set_position(&mut self, position: Vector2);
    fn set_collision_enabled(&mut self, enabled: bool);
}

/// Terrain occlusion test used by vision when `blocked_by_terrain` is set.
pub trait LineOfSight {
    /// True if nothing solid lies on the straight segment `from` → `to`.
    fn has_line_of_sight(&self, from: Vector2, to: Vector2) -> bool;
}
