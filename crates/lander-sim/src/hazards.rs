//! Laser field hazards.
//!
//! A laser field is a rectangle that cycles on and off on a fixed timer.
//! The target touching an active field counts as a hit.

use serde::{Deserialize, Serialize};

use lander_core::constants::{DEFAULT_LASER_OFF_SECS, DEFAULT_LASER_ON_SECS};
use lander_core::state::LaserView;
use lander_core::types::Vector2;

fn default_on_secs() -> f64 {
    DEFAULT_LASER_ON_SECS
}

fn default_off_secs() -> f64 {
    DEFAULT_LASER_OFF_SECS
}

/// Laser field as written in level data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserFieldConfig {
    pub min: Vector2,
    pub max: Vector2,
    #[serde(default = "default_on_secs")]
    pub on_secs: f64,
    #[serde(default = "default_off_secs")]
    pub off_secs: f64,
    /// Seconds into the cycle at encounter start.
    #[serde(default)]
    pub phase: f64,
}

impl LaserFieldConfig {
    pub fn period(&self) -> f64 {
        self.on_secs + self.off_secs
    }
}

#[derive(Debug, Clone)]
pub struct LaserField {
    pub id: u32,
    pub config: LaserFieldConfig,
    active: bool,
}

impl LaserField {
    pub fn new(id: u32, config: LaserFieldConfig) -> Self {
        let mut field = Self {
            id,
            config,
            active: false,
        };
        field.active = field.is_active_at(0.0);
        field
    }

    /// Whether the field is on `elapsed` seconds into the encounter.
    pub fn is_active_at(&self, elapsed: f64) -> bool {
        let period = self.config.period();
        if period <= 0.0 {
            return false;
        }
        (elapsed + self.config.phase).rem_euclid(period) < self.config.on_secs
    }

    /// Update to the state at `elapsed`. Returns the new state if it toggled.
    pub fn update(&mut self, elapsed: f64) -> Option<bool> {
        let active = self.is_active_at(elapsed);
        if active == self.active {
            return None;
        }
        self.active = active;
        Some(active)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Inclusive rectangle test, regardless of the timer.
    pub fn contains(&self, point: Vector2) -> bool {
        let min = self.config.min.min(self.config.max);
        let max = self.config.min.max(self.config.max);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    pub fn hits(&self, point: Vector2) -> bool {
        self.active && self.contains(point)
    }

    pub fn view(&self) -> LaserView {
        LaserView {
            id: self.id,
            active: self.active,
            min: self.config.min,
            max: self.config.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(phase: f64) -> LaserField {
        LaserField::new(
            0,
            LaserFieldConfig {
                min: Vector2::new(0.0, 0.0),
                max: Vector2::new(10.0, 100.0),
                on_secs: 1.0,
                off_secs: 3.0,
                phase,
            },
        )
    }

    #[test]
    fn test_cycle() {
        let f = field(0.0);
        assert!(f.is_active_at(0.0));
        assert!(f.is_active_at(0.99));
        assert!(!f.is_active_at(1.0));
        assert!(!f.is_active_at(3.99));
        assert!(f.is_active_at(4.0));
    }

    #[test]
    fn test_phase_offset() {
        let f = field(2.0);
        assert!(!f.is_active());
        assert!(f.is_active_at(2.0));
    }

    #[test]
    fn test_update_reports_toggles_only() {
        let mut f = field(0.0);
        assert_eq!(f.update(0.5), None);
        assert_eq!(f.update(1.5), Some(false));
        assert_eq!(f.update(2.0), None);
        assert_eq!(f.update(4.2), Some(true));
    }

    #[test]
    fn test_hits_only_when_active() {
        let mut f = field(0.0);
        let inside = Vector2::new(5.0, 50.0);
        assert!(f.hits(inside));
        assert!(!f.hits(Vector2::new(11.0, 50.0)));
        f.update(2.0);
        assert!(f.contains(inside));
        assert!(!f.hits(inside));
    }

    #[test]
    fn test_zero_period_is_never_active() {
        let mut f = field(0.0);
        f.config.on_secs = 0.0;
        f.config.off_secs = 0.0;
        assert!(!f.is_active_at(0.0));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let cfg: LaserFieldConfig =
            serde_json::from_str(r#"{ "min": [0.0, 0.0], "max": [5.0, 5.0] }"#).unwrap();
        assert_eq!(cfg.on_secs, DEFAULT_LASER_ON_SECS);
        assert_eq!(cfg.off_secs, DEFAULT_LASER_OFF_SECS);
        assert_eq!(cfg.phase, 0.0);
    }
}
