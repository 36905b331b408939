//! Commands sent from the host to an encounter.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{EnemyId, Vector2};

/// How the target (the player's lander) moves in a headless encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TargetScript {
    /// Target stays put.
    Stationary { position: Vector2 },
    /// Target flies through the points in order at `speed`, then holds.
    Waypoints { points: Vec<Vector2>, speed: f64 },
    /// Target drifts in a seeded random direction, changing course
    /// every `turn_interval` seconds.
    Wander {
        start: Vector2,
        speed: f64,
        turn_interval: f64,
    },
}

impl Default for TargetScript {
    fn default() -> Self {
        TargetScript::Stationary {
            position: Vector2::ZERO,
        }
    }
}

/// All host-side actions on an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EncounterCommand {
    /// Stun a single enemy.
    StunEnemy { enemy: EnemyId, duration: f64 },
    /// Stun every enemy within `radius` of `center` (e.g. a thruster blast).
    StunInRadius {
        center: Vector2,
        radius: f64,
        duration: f64,
    },
    /// Put every enemy back into its initial state.
    ResetEnemies,
    /// Replace the patrol path of one enemy.
    SetPatrolPath {
        enemy: EnemyId,
        path: Vec<crate::config::PatrolWaypoint>,
    },
    /// Remove an enemy from the encounter.
    DestroyEnemy { enemy: EnemyId },
    /// Change how the target moves.
    SetTargetScript { script: TargetScript },
    /// Override the target position directly (host-driven play).
    SetTargetPosition { position: Vector2 },
}
