//! Headless encounter simulation for the lander.
//!
//! Owns a hecs world of enemy controllers, a terrain profile, laser hazards
//! and a scripted target, and produces `EncounterSnapshot`s for the host.

pub mod engine;
pub mod hazards;
pub mod level;
pub mod scenario;
pub mod systems;

pub use engine::{Encounter, EncounterConfig};
pub use lander_core as core;
pub use level::{load_level, parse_level, LevelData, LevelLoadError};
