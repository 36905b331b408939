//! TerrainProfile: ground surface and solid blocks with point queries.
//!
//! World y grows downward, so "below the surface" means a larger y.

use serde::{Deserialize, Serialize};

use lander_core::types::Vector2;

/// Axis-aligned solid rectangle (rock overhang, landing pad, wall).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainBlock {
    pub min: Vector2,
    pub max: Vector2,
}

impl TerrainBlock {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Inclusive containment.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Level terrain seen from the side.
///
/// Deserializing goes through [`TerrainProfile::new`], so a surface written
/// out of order in level data is sorted on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TerrainProfileData")]
pub struct TerrainProfile {
    /// Ground polyline, sorted by x.
    pub surface: Vec<Vector2>,
    pub blocks: Vec<TerrainBlock>,
}

/// On-disk form of a profile, before the surface is sorted.
#[derive(Deserialize)]
struct TerrainProfileData {
    #[serde(default)]
    surface: Vec<Vector2>,
    #[serde(default)]
    blocks: Vec<TerrainBlock>,
}

impl From<TerrainProfileData> for TerrainProfile {
    fn from(data: TerrainProfileData) -> Self {
        Self::new(data.surface, data.blocks)
    }
}

impl TerrainProfile {
    /// Build a profile, sorting the surface points by x.
    pub fn new(mut surface: Vec<Vector2>, blocks: Vec<TerrainBlock>) -> Self {
        surface.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { surface, blocks }
    }

    /// A flat ground line at height `y`.
    pub fn flat(y: f64) -> Self {
        Self::new(vec![Vector2::new(0.0, y), Vector2::new(1.0, y)], Vec::new())
    }

    /// Ground height at `x`, linearly interpolated between surface points.
    /// Beyond either end the end height continues. None without a surface.
    pub fn surface_height_at(&self, x: f64) -> Option<f64> {
        let first = self.surface.first()?;
        let last = self.surface.last()?;
        if x <= first.x {
            return Some(first.y);
        }
        if x >= last.x {
            return Some(last.y);
        }

        // First segment whose right end is at or past x
        let i = self.surface.partition_point(|p| p.x < x);
        let (a, b) = (self.surface[i - 1], self.surface[i]);
        let span = b.x - a.x;
        if span <= 0.0 {
            return Some(b.y);
        }
        let t = (x - a.x) / span;
        Some(a.y + (b.y - a.y) * t)
    }

    /// True if `point` is in the ground or inside any block.
    pub fn is_solid(&self, point: Vector2) -> bool {
        let under_ground = self
            .surface_height_at(point.x)
            .is_some_and(|ground| point.y >= ground);
        under_ground || self.blocks.iter().any(|b| b.contains(point))
    }
}
