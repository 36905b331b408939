//! Terrain for lander levels.
//!
//! A side-on terrain profile (ground polyline plus solid blocks) and the
//! line-of-sight test enemies use when their vision is blocked by terrain.

pub use lander_core as core;

pub mod los;
pub mod profile;

pub use los::has_line_of_sight;
pub use profile::{TerrainBlock, TerrainProfile};
