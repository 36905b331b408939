//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Movement ---

/// Distance (units) under which a waypoint or target counts as reached.
pub const ARRIVAL_RADIUS: f64 = 5.0;

/// Horizontal speed (units/s) that must be exceeded before facing flips.
pub const FACING_FLIP_THRESHOLD: f64 = 0.1;

// --- Default enemy tuning ---

/// Default patrol speed (units/s).
pub const DEFAULT_PATROL_SPEED: f64 = 50.0;

/// Default chase speed (units/s).
pub const DEFAULT_CHASE_SPEED: f64 = 100.0;

/// Default return speed (units/s).
pub const DEFAULT_RETURN_SPEED: f64 = 75.0;

/// Seconds the target may stay unseen before a chase is abandoned.
pub const DEFAULT_CHASE_PERSISTENCE: f64 = 2.0;

/// Default vision range (units).
pub const DEFAULT_VISION_RANGE: f64 = 200.0;

/// Default vision cone width (degrees, full cone).
pub const DEFAULT_VISION_ANGLE: f64 = 90.0;

// --- Hazards ---

/// Default laser field on-time (seconds).
pub const DEFAULT_LASER_ON_SECS: f64 = 2.0;

/// Default laser field off-time (seconds).
pub const DEFAULT_LASER_OFF_SECS: f64 = 2.0;
