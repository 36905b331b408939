//! Scripted target motion for headless encounters.

use std::f64::consts::TAU;

use rand::Rng;

use lander_core::commands::TargetScript;
use lander_core::types::{direction_and_distance, Vector2};

/// Runs a [`TargetScript`] and tracks the target position.
#[derive(Debug, Clone)]
pub struct TargetMotion {
    script: TargetScript,
    position: Vector2,
    /// Next point for `Waypoints`.
    next_point: usize,
    /// Current heading for `Wander`.
    heading: Vector2,
    /// Seconds until `Wander` picks a new heading.
    turn_timer: f64,
}

impl TargetMotion {
    pub fn new(script: TargetScript) -> Self {
        let (position, next_point) = match &script {
            TargetScript::Stationary { position } => (*position, 0),
            TargetScript::Waypoints { points, .. } => (points.first().copied().unwrap_or_default(), 1),
            TargetScript::Wander { start, .. } => (*start, 0),
        };
        Self {
            script,
            position,
            next_point,
            heading: Vector2::ZERO,
            turn_timer: 0.0,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn script(&self) -> &TargetScript {
        &self.script
    }

    /// Pin the target at `position`, ending any script.
    pub fn set_position(&mut self, position: Vector2) {
        *self = Self::new(TargetScript::Stationary { position });
    }

    /// Advance the script by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64, rng: &mut impl Rng) -> Vector2 {
        match &self.script {
            TargetScript::Stationary { .. } => {}
            TargetScript::Waypoints { points, speed } => {
                let mut travel = speed * dt;
                while let Some(next) = points.get(self.next_point) {
                    let (direction, distance) = direction_and_distance(self.position, *next);
                    if distance > travel {
                        self.position += direction * travel;
                        break;
                    }
                    // Reached this point; spend the rest of the step on the next
                    self.position = *next;
                    travel -= distance;
                    self.next_point += 1;
                }
            }
            TargetScript::Wander {
                speed,
                turn_interval,
                ..
            } => {
                self.turn_timer -= dt;
                if self.turn_timer <= 0.0 {
                    let angle = rng.gen_range(0.0..TAU);
                    self.heading = Vector2::from_angle(angle);
                    self.turn_timer = turn_interval.max(dt);
                }
                self.position += self.heading * *speed * dt;
            }
        }
        self.position
    }
}
