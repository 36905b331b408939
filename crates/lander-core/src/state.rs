//! Encounter state snapshot: the visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, EnemyEvent};
use crate::types::{EnemyId, SimTime, Vector2};

/// Complete encounter state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: SimTime,
    pub target: Vector2,
    pub enemies: Vec<EnemyView>,
    pub lasers: Vec<LaserView>,
    /// Enemy lifecycle events emitted during this tick, in emission order.
    pub enemy_events: Vec<(EnemyId, EnemyEvent)>,
    pub audio_events: Vec<AudioEvent>,
    /// Whether the target is inside an active hazard this tick.
    pub target_hit: bool,
}

/// One enemy as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Vector2,
    pub velocity: Vector2,
    pub facing: Facing,
    pub state: EnemyBehaviorState,
}

/// One laser field as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserView {
    pub id: u32,
    pub active: bool,
    pub min: Vector2,
    pub max: Vector2,
}
