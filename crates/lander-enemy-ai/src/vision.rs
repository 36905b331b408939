//! Vision cone detection.
//!
//! The cone opens along the enemy's horizontal facing axis, regardless of
//! any vertical offset to the target. Range and half-angle limits are
//! inclusive.

use lander_core::capabilities::LineOfSight;
use lander_core::config::VisionConfig;
use lander_core::enums::Facing;
use lander_core::types::Vector2;

/// Slack (degrees) on the half-angle test so a target exactly on the cone
/// edge is not lost to rounding in `acos`.
const ANGLE_EPSILON_DEG: f64 = 1e-9;

/// Angle in degrees between the facing axis and the direction to `target`.
/// Zero when the target sits on the origin.
pub fn angle_to_target(origin: Vector2, facing: Facing, target: Vector2) -> f64 {
    let to_target = (target - origin).normalize_or_zero();
    if to_target == Vector2::ZERO {
        return 0.0;
    }
    facing
        .vector()
        .dot(to_target)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

/// Range and angle test only, ignoring terrain.
pub fn in_vision_cone(origin: Vector2, facing: Facing, target: Vector2, vision: &VisionConfig) -> bool {
    if origin.distance(target) > vision.range {
        return false;
    }
    angle_to_target(origin, facing, target) <= vision.angle / 2.0 + ANGLE_EPSILON_DEG
}

/// Full visibility test.
///
/// With `blocked_by_terrain` set and a terrain context supplied, the target
/// must also be in line of sight. Without a context the flag has no effect.
pub fn can_see(
    origin: Vector2,
    facing: Facing,
    target: Vector2,
    vision: &VisionConfig,
    terrain: Option<&dyn LineOfSight>,
) -> bool {
    if !in_vision_cone(origin, facing, target, vision) {
        return false;
    }
    match terrain {
        Some(terrain) if vision.blocked_by_terrain => terrain.has_line_of_sight(origin, target),
        _ => true,
    }
}
