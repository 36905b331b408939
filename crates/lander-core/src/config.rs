//! Enemy configuration records.
//!
//! Plain data with serde derives so level files can carry them. A level
//! supplies [`EnemyConfigOverrides`], which are shallow-merged over
//! [`DEFAULT_ENEMY_CONFIG`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EnemyBehaviorState;
use crate::types::Vector2;

/// One stop on a patrol path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolWaypoint {
    pub position: Vector2,
    /// Seconds to wait after reaching this waypoint.
    #[serde(default)]
    pub wait_time: f64,
    /// Overrides the configured patrol speed on the way to this waypoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl PatrolWaypoint {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            wait_time: 0.0,
            speed: None,
        }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Vector2::new(x, y))
    }

    pub fn with_wait(mut self, wait_time: f64) -> Self {
        self.wait_time = wait_time;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}

/// Vision cone parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Maximum detection distance (units).
    pub range: f64,
    /// Full cone width in degrees.
    pub angle: f64,
    /// Whether terrain between the enemy and the target blocks sight.
    #[serde(default)]
    pub blocked_by_terrain: bool,
}

impl Default for VisionConfig {
    fn default() -> Self {
        DEFAULT_ENEMY_CONFIG.vision
    }
}

/// Complete per-enemy tuning. Fixed for the lifetime of an enemy except
/// for the patrol path, which can be replaced at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub patrol_path: Vec<PatrolWaypoint>,
    /// Wrap around at the end of the path instead of walking it back.
    pub loop_patrol: bool,
    pub patrol_speed: f64,
    pub chase_speed: f64,
    pub return_speed: f64,
    /// Seconds the target may stay unseen before the chase is abandoned.
    pub chase_persistence: f64,
    pub vision: VisionConfig,
    pub initial_state: EnemyBehaviorState,
}

/// Baseline tuning every enemy starts from.
pub const DEFAULT_ENEMY_CONFIG: EnemyConfig = EnemyConfig {
    patrol_path: Vec::new(),
    loop_patrol: true,
    patrol_speed: DEFAULT_PATROL_SPEED,
    chase_speed: DEFAULT_CHASE_SPEED,
    return_speed: DEFAULT_RETURN_SPEED,
    chase_persistence: DEFAULT_CHASE_PERSISTENCE,
    vision: VisionConfig {
        range: DEFAULT_VISION_RANGE,
        angle: DEFAULT_VISION_ANGLE,
        blocked_by_terrain: false,
    },
    initial_state: EnemyBehaviorState::Patrol,
};

impl Default for EnemyConfig {
    fn default() -> Self {
        DEFAULT_ENEMY_CONFIG
    }
}

impl EnemyConfig {
    /// Default configuration with the given overrides applied.
    pub fn with_overrides(overrides: &EnemyConfigOverrides) -> Self {
        overrides.apply_to(&DEFAULT_ENEMY_CONFIG)
    }
}

/// Partial configuration. Unset fields fall back to the base config.
///
/// The merge is shallow: a supplied `patrol_path` or `vision` replaces the
/// base value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patrol_path: Option<Vec<PatrolWaypoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_patrol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patrol_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chase_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chase_persistence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<VisionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<EnemyBehaviorState>,
}

impl EnemyConfigOverrides {
    /// Merge these overrides over `base`.
    pub fn apply_to(&self, base: &EnemyConfig) -> EnemyConfig {
        EnemyConfig {
            patrol_path: self
                .patrol_path
                .clone()
                .unwrap_or_else(|| base.patrol_path.clone()),
            loop_patrol: self.loop_patrol.unwrap_or(base.loop_patrol),
            patrol_speed: self.patrol_speed.unwrap_or(base.patrol_speed),
            chase_speed: self.chase_speed.unwrap_or(base.chase_speed),
            return_speed: self.return_speed.unwrap_or(base.return_speed),
            chase_persistence: self.chase_persistence.unwrap_or(base.chase_persistence),
            vision: self.vision.unwrap_or(base.vision),
            initial_state: self.initial_state.unwrap_or(base.initial_state),
        }
    }
}
