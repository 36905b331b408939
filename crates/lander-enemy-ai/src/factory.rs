//! Batch construction of enemies from level data.

use serde::{Deserialize, Serialize};

use lander_core::config::EnemyConfigOverrides;
use lander_core::types::Vector2;

use crate::controller::EnemyAi;

/// One enemy placement in a level: spawn point plus config overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub config: EnemyConfigOverrides,
}

impl EnemySpawn {
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn build(&self) -> EnemyAi {
        EnemyAi::with_overrides(&self.config, self.position())
    }
}

/// One controller per spawn entry, in order.
pub fn create_enemies(spawns: &[EnemySpawn]) -> Vec<EnemyAi> {
    spawns.iter().map(EnemySpawn::build).collect()
}
