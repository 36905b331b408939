//! Patrol path traversal.
//!
//! Pure functions over waypoint indices; the controller owns the state.

use lander_core::config::PatrolWaypoint;
use lander_core::enums::PatrolDirection;
use lander_core::types::Vector2;

/// Index of the waypoint after `index` on a path of `len` waypoints.
///
/// Looping paths wrap around in the current direction. Non-looping paths
/// ping-pong: a step that would leave the path reverses the direction and
/// steps the other way instead.
pub fn advance_waypoint(
    index: usize,
    direction: PatrolDirection,
    len: usize,
    loop_patrol: bool,
) -> (usize, PatrolDirection) {
    if len <= 1 {
        return (0, direction);
    }

    let len = len as isize;
    let index = (index as isize).min(len - 1);

    if loop_patrol {
        let next = (index + direction.step()).rem_euclid(len);
        return (next as usize, direction);
    }

    let next = index + direction.step();
    if (0..len).contains(&next) {
        (next as usize, direction)
    } else {
        let reversed = direction.reversed();
        ((index + reversed.step()) as usize, reversed)
    }
}

/// The waypoint closest to `from` (Euclidean), with its index.
/// Ties go to the lower index. `None` for an empty path.
pub fn nearest_waypoint(path: &[PatrolWaypoint], from: Vector2) -> Option<(usize, &PatrolWaypoint)> {
    path.iter()
        .enumerate()
        .map(|(i, wp)| (i, wp, wp.position.distance(from)))
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(i, wp, _)| (i, wp))
}

#[cfg(test)]
mod tests {
    use super::*;

    use PatrolDirection::{Backward, Forward};

    #[test]
    fn test_ping_pong_reverses_at_both_ends() {
        // 3 waypoints, non-looping: 0 → 1 → 2 → 1 → 0 → 1
        let mut index = 0;
        let mut dir = Forward;
        let mut visited = vec![index];
        for _ in 0..5 {
            (index, dir) = advance_waypoint(index, dir, 3, false);
            assert!(index < 3, "index left the path: {index}");
            visited.push(index);
        }
        assert_eq!(visited, vec![0, 1, 2, 1, 0, 1]);
        assert_eq!(dir, Forward);
    }

    #[test]
    fn test_ping_pong_direction_flips_at_end() {
        assert_eq!(advance_waypoint(2, Forward, 3, false), (1, Backward));
        assert_eq!(advance_waypoint(0, Backward, 3, false), (1, Forward));
        assert_eq!(advance_waypoint(1, Backward, 3, false), (0, Backward));
    }

    #[test]
    fn test_loop_wraps_without_reversing() {
        let mut index = 0;
        let mut dir = Forward;
        let mut visited = vec![index];
        for _ in 0..6 {
            (index, dir) = advance_waypoint(index, dir, 3, true);
            visited.push(index);
            assert_eq!(dir, Forward);
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0]);

        // Backward looping wraps the other way
        assert_eq!(advance_waypoint(0, Backward, 3, true), (2, Backward));
    }

    #[test]
    fn test_short_paths_stay_at_zero() {
        assert_eq!(advance_waypoint(0, Forward, 1, false), (0, Forward));
        assert_eq!(advance_waypoint(0, Forward, 1, true), (0, Forward));
        assert_eq!(advance_waypoint(0, Backward, 0, false), (0, Backward));
    }

    #[test]
    fn test_two_waypoints_ping_pong() {
        assert_eq!(advance_waypoint(0, Forward, 2, false), (1, Forward));
        assert_eq!(advance_waypoint(1, Forward, 2, false), (0, Backward));
        assert_eq!(advance_waypoint(0, Backward, 2, false), (1, Forward));
    }

    #[test]
    fn test_nearest_waypoint() {
        let path = vec![
            PatrolWaypoint::at(0.0, 0.0),
            PatrolWaypoint::at(50.0, 0.0),
            PatrolWaypoint::at(100.0, 0.0),
        ];
        let (i, wp) = nearest_waypoint(&path, Vector2::new(60.0, 20.0)).unwrap();
        assert_eq!(i, 1);
        assert_eq!(wp.position, Vector2::new(50.0, 0.0));

        // Equidistant: lower index wins
        let (i, _) = nearest_waypoint(&path, Vector2::new(25.0, 0.0)).unwrap();
        assert_eq!(i, 0);

        assert!(nearest_waypoint(&[], Vector2::ZERO).is_none());
    }
}
