//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Vector2;

/// Enemy behavior state: the discriminant of the enemy state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyBehaviorState {
    /// Does nothing. Never left except by a stun.
    Idle,
    /// Walking the patrol path.
    #[default]
    Patrol,
    /// Pursuing the target or its last known position.
    Chase,
    /// Walking back to the nearest patrol waypoint after losing the target.
    Return,
    /// Frozen in place until the stun timer runs out.
    Stunned,
}

/// Horizontal facing. Vision is evaluated along this axis only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing as a unit vector on the horizontal axis.
    pub fn vector(self) -> Vector2 {
        Vector2::new(self.sign(), 0.0)
    }
}

/// Direction of travel along a non-looping patrol path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolDirection {
    #[default]
    Forward,
    Backward,
}

impl PatrolDirection {
    /// Index step: +1 forward, -1 backward.
    pub fn step(self) -> isize {
        match self {
            PatrolDirection::Forward => 1,
            PatrolDirection::Backward => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            PatrolDirection::Forward => PatrolDirection::Backward,
            PatrolDirection::Backward => PatrolDirection::Forward,
        }
    }
}
