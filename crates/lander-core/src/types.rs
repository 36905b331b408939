//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D vector in world space (units). Screen convention: x right, y down.
///
/// `DVec2` is `Copy`, so every geometry operation returns a new value.
pub type Vector2 = glam::DVec2;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Unit direction from `from` towards `to`, and the distance between them.
/// Returns a zero direction when the points coincide.
pub fn direction_and_distance(from: Vector2, to: Vector2) -> (Vector2, f64) {
    let delta = to - from;
    (delta.normalize_or_zero(), delta.length())
}

/// Stable identifier for an enemy within an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);
