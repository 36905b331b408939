//! Line-of-sight against a terrain profile.
//!
//! Stepped ray traversal: the segment is sampled at regular intervals and
//! any sample inside solid terrain blocks the view.

use lander_core::capabilities::LineOfSight;
use lander_core::types::Vector2;

use crate::profile::TerrainProfile;

/// Sample interval along the ray (world units).
const LOS_SAMPLE_INTERVAL: f64 = 4.0;

/// Check line-of-sight between two points.
///
/// Endpoints are not sampled, so an enemy standing on the ground can still
/// see. Segments shorter than one sample interval are always clear.
pub fn has_line_of_sight(terrain: &TerrainProfile, from: Vector2, to: Vector2) -> bool {
    let delta = to - from;
    let dist = delta.length();

    if dist < LOS_SAMPLE_INTERVAL {
        return true;
    }

    let num_samples = (dist / LOS_SAMPLE_INTERVAL).ceil() as usize;
    let num_samples = num_samples.max(2);

    for i in 1..num_samples {
        let t = i as f64 / num_samples as f64;
        if terrain.is_solid(from + delta * t) {
            return false;
        }
    }

    true
}

impl LineOfSight for TerrainProfile {
    fn has_line_of_sight(&self, from: Vector2, to: Vector2) -> bool {
        has_line_of_sight(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TerrainBlock;

    /// Ground at y = 400 across the whole level.
    fn make_flat_profile() -> TerrainProfile {
        TerrainProfile::new(
            vec![Vector2::new(0.0, 400.0), Vector2::new(1000.0, 400.0)],
            Vec::new(),
        )
    }

    /// Flat ground with a 100-unit hill peaking at x = 500.
    fn make_hill_profile() -> TerrainProfile {
        TerrainProfile::new(
            vec![
                Vector2::new(0.0, 400.0),
                Vector2::new(450.0, 400.0),
                Vector2::new(500.0, 300.0),
                Vector2::new(550.0, 400.0),
                Vector2::new(1000.0, 400.0),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_los_flat_terrain() {
        let terrain = make_flat_profile();
        assert!(
            has_line_of_sight(&terrain, Vector2::new(100.0, 390.0), Vector2::new(900.0, 390.0)),
            "LOS should be clear over flat ground"
        );
    }

    #[test]
    fn test_los_blocked_by_hill() {
        let terrain = make_hill_profile();
        assert!(
            !has_line_of_sight(&terrain, Vector2::new(400.0, 390.0), Vector2::new(600.0, 390.0)),
            "LOS should be blocked by the hill"
        );
    }

    #[test]
    fn test_los_over_hill() {
        let terrain = make_hill_profile();
        assert!(
            has_line_of_sight(&terrain, Vector2::new(400.0, 250.0), Vector2::new(600.0, 250.0)),
            "LOS should be clear above the hill"
        );
    }

    #[test]
    fn test_los_blocked_by_block() {
        let mut terrain = make_flat_profile();
        terrain
            .blocks
            .push(TerrainBlock::new(Vector2::new(480.0, 100.0), Vector2::new(520.0, 400.0)));
        assert!(!has_line_of_sight(
            &terrain,
            Vector2::new(400.0, 300.0),
            Vector2::new(600.0, 300.0)
        ));
    }

    #[test]
    fn test_los_endpoints_on_ground_are_clear() {
        let terrain = make_flat_profile();
        assert!(has_line_of_sight(
            &terrain,
            Vector2::new(100.0, 400.0),
            Vector2::new(100.0, 200.0)
        ));
    }

    #[test]
    fn test_los_close_range() {
        let terrain = make_hill_profile();
        // Inside the hill, but closer than one sample
        assert!(has_line_of_sight(
            &terrain,
            Vector2::new(500.0, 350.0),
            Vector2::new(502.0, 351.0)
        ));
    }

    #[test]
    fn test_profile_as_capability() {
        let terrain = make_hill_profile();
        let los: &dyn LineOfSight = &terrain;
        assert!(!los.has_line_of_sight(Vector2::new(400.0, 390.0), Vector2::new(600.0, 390.0)));
    }
}
