//! Enemy behavior state model.
//!
//! Each behavior state carries its own transient data. [`BehaviorData`] is a
//! tagged union over those records, so only the active state's data exists
//! and a transition necessarily discards the old record.

use serde::{Deserialize, Serialize};

use lander_core::config::EnemyConfig;
use lander_core::enums::{EnemyBehaviorState, PatrolDirection};
use lander_core::types::Vector2;

use crate::patrol::nearest_waypoint;

/// Patrol progress along the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolStateData {
    pub waypoint_index: usize,
    pub direction: PatrolDirection,
    /// Seconds left to wait at the current waypoint.
    pub wait_timer: f64,
}

/// Pursuit bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaseStateData {
    pub last_known_position: Vector2,
    /// Seconds since the target was last inside the vision cone.
    pub time_since_seen: f64,
    pub can_see_target: bool,
}

/// Where to go after a chase, and which waypoint to resume at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStateData {
    pub return_target: Vector2,
    pub waypoint_index: usize,
}

/// Stun countdown plus the behavior it interrupted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StunnedStateData {
    /// Seconds of stun remaining.
    pub stun_timer: f64,
    /// The suspended behavior, resumed unchanged when the stun ends.
    pub previous: Box<BehaviorData>,
}

impl StunnedStateData {
    pub fn previous_state(&self) -> EnemyBehaviorState {
        self.previous.state()
    }
}

/// Transient data of the active behavior state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BehaviorData {
    Idle,
    Patrol(PatrolStateData),
    Chase(ChaseStateData),
    Return(ReturnStateData),
    Stunned(StunnedStateData),
}

impl BehaviorData {
    /// The behavior state tag for this record.
    pub fn state(&self) -> EnemyBehaviorState {
        match self {
            BehaviorData::Idle => EnemyBehaviorState::Idle,
            BehaviorData::Patrol(_) => EnemyBehaviorState::Patrol,
            BehaviorData::Chase(_) => EnemyBehaviorState::Chase,
            BehaviorData::Return(_) => EnemyBehaviorState::Return,
            BehaviorData::Stunned(_) => EnemyBehaviorState::Stunned,
        }
    }

    /// Starting record for an enemy whose initial state is `state`.
    ///
    /// Chase starts from `home` as the last known position with the target
    /// unseen; Return heads for the waypoint nearest `home`; Stunned starts
    /// with an expired timer over a fresh patrol.
    pub fn initial(state: EnemyBehaviorState, config: &EnemyConfig, home: Vector2) -> Self {
        match state {
            EnemyBehaviorState::Idle => BehaviorData::Idle,
            EnemyBehaviorState::Patrol => BehaviorData::Patrol(create_patrol_state()),
            EnemyBehaviorState::Chase => BehaviorData::Chase(ChaseStateData {
                can_see_target: false,
                ..create_chase_state(home)
            }),
            EnemyBehaviorState::Return => {
                let (target, index) = nearest_waypoint(&config.patrol_path, home)
                    .map(|(i, wp)| (wp.position, i))
                    .unwrap_or((home, 0));
                BehaviorData::Return(create_return_state(target, index))
            }
            EnemyBehaviorState::Stunned => BehaviorData::Stunned(create_stunned_state(
                0.0,
                BehaviorData::Patrol(create_patrol_state()),
            )),
        }
    }
}

pub fn create_patrol_state() -> PatrolStateData {
    PatrolStateData {
        waypoint_index: 0,
        direction: PatrolDirection::Forward,
        wait_timer: 0.0,
    }
}

pub fn create_chase_state(target_position: Vector2) -> ChaseStateData {
    ChaseStateData {
        last_known_position: target_position,
        time_since_seen: 0.0,
        can_see_target: true,
    }
}

pub fn create_return_state(return_target: Vector2, waypoint_index: usize) -> ReturnStateData {
    ReturnStateData {
        return_target,
        waypoint_index,
    }
}

pub fn create_stunned_state(duration: f64, previous: BehaviorData) -> StunnedStateData {
    StunnedStateData {
        stun_timer: duration,
        previous: Box::new(previous),
    }
}
