//! Enemy AI for the lander game.
//!
//! Implements the enemy behavior state model, the vision cone, patrol path
//! traversal, and the per-enemy controller that ties them together.
//! No ECS or engine dependency; hosts drive it with positions and a time step.

pub mod controller;
pub mod events;
pub mod factory;
pub mod patrol;
pub mod state;
pub mod vision;

pub use controller::EnemyAi;
pub use factory::{create_enemies, EnemySpawn};
pub use lander_core as core;
