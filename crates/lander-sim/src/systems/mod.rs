//! Systems run by the encounter each tick.
//!
//! Systems are plain functions over the hecs world and the encounter state
//! they are handed. They own nothing.

pub mod audio;
pub mod enemy_ai;
pub mod hazards;
pub mod snapshot;
