//! Level data: the JSON file format an encounter is built from.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lander_core::commands::TargetScript;
use lander_core::types::Vector2;
use lander_enemy_ai::EnemySpawn;
use lander_terrain::TerrainProfile;

use crate::hazards::LaserFieldConfig;

/// Errors that can occur when loading a level.
#[derive(Debug, Error)]
pub enum LevelLoadError {
    /// File could not be read.
    #[error("Failed to read level '{path}': {details}")]
    ReadError { path: String, details: String },

    /// JSON parsing failed.
    #[error("Parse error in level: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A laser field that can never switch on or off.
    #[error("Laser field {index} has invalid timing (on {on_secs}s, off {off_secs}s)")]
    InvalidLaserTiming {
        index: usize,
        on_secs: f64,
        off_secs: f64,
    },

    /// Non-finite enemy spawn coordinates.
    #[error("Enemy {index} has an invalid spawn position ({x}, {y})")]
    InvalidSpawn { index: usize, x: f64, y: f64 },
}

/// A complete level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub name: String,
    pub player_start: Vector2,
    pub terrain: TerrainProfile,
    pub enemies: Vec<EnemySpawn>,
    pub lasers: Vec<LaserFieldConfig>,
    /// How the target moves. Without one it holds at `player_start`.
    pub target_script: Option<TargetScript>,
}

impl LevelData {
    /// The target script, defaulting to a stationary target at the start.
    pub fn target_script(&self) -> TargetScript {
        self.target_script.clone().unwrap_or(TargetScript::Stationary {
            position: self.player_start,
        })
    }

    fn validate(&self) -> Result<(), LevelLoadError> {
        for (index, laser) in self.lasers.iter().enumerate() {
            if laser.on_secs < 0.0 || laser.off_secs < 0.0 || laser.period() <= 0.0 {
                return Err(LevelLoadError::InvalidLaserTiming {
                    index,
                    on_secs: laser.on_secs,
                    off_secs: laser.off_secs,
                });
            }
        }
        for (index, spawn) in self.enemies.iter().enumerate() {
            if !spawn.position().is_finite() {
                return Err(LevelLoadError::InvalidSpawn {
                    index,
                    x: spawn.x,
                    y: spawn.y,
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate a level from JSON text.
pub fn parse_level(json: &str) -> Result<LevelData, LevelLoadError> {
    let level: LevelData = serde_json::from_str(json)?;
    level.validate()?;
    Ok(level)
}

/// Read, parse and validate a level file.
pub fn load_level(path: impl AsRef<Path>) -> Result<LevelData, LevelLoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| LevelLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    let level = parse_level(&json)?;
    info!(
        "Loaded level '{}' from {}: {} enemies, {} laser fields",
        level.name,
        path.display(),
        level.enemies.len(),
        level.lasers.len()
    );
    Ok(level)
}
