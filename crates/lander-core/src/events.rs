//! Events emitted by enemies and the encounter, for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::{EnemyId, Vector2};

/// Lifecycle event emitted by a single enemy controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnemyEvent {
    /// Target spotted; chase started.
    Chase,
    /// Chase abandoned; heading back to the patrol path.
    Return,
    /// Back on the patrol path.
    ReturnComplete,
    /// Stun applied for `duration` seconds.
    StunStart { duration: f64 },
    /// Stun wore off.
    StunEnd,
}

/// Subscription key for [`EnemyEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyEventKind {
    Chase,
    Return,
    ReturnComplete,
    StunStart,
    StunEnd,
}

impl EnemyEvent {
    pub fn kind(&self) -> EnemyEventKind {
        match self {
            EnemyEvent::Chase => EnemyEventKind::Chase,
            EnemyEvent::Return => EnemyEventKind::Return,
            EnemyEvent::ReturnComplete => EnemyEventKind::ReturnComplete,
            EnemyEvent::StunStart { .. } => EnemyEventKind::StunStart,
            EnemyEvent::StunEnd => EnemyEventKind::StunEnd,
        }
    }
}

/// Audio cues for the host's sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// An enemy spotted the target.
    EnemyAlerted { enemy: EnemyId, position: Vector2 },
    /// An enemy lost the target and gave up.
    EnemyGaveUp { enemy: EnemyId },
    /// An enemy is back on its patrol route.
    EnemyResumedPatrol { enemy: EnemyId },
    /// An enemy was stunned.
    EnemyStunned { enemy: EnemyId, duration: f64 },
    /// An enemy recovered from a stun.
    EnemyRecovered { enemy: EnemyId },
    /// A laser field switched on.
    LaserOn { field: u32 },
    /// A laser field switched off.
    LaserOff { field: u32 },
}
