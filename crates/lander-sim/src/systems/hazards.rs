//! Hazard system: cycles laser fields and checks the target against them.

use lander_core::events::AudioEvent;
use lander_core::types::Vector2;

use crate::hazards::LaserField;

/// Update fields to `elapsed` seconds. Returns whether the target is hit.
pub fn run(
    lasers: &mut [LaserField],
    elapsed: f64,
    target: Vector2,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let mut hit = false;
    for laser in lasers.iter_mut() {
        match laser.update(elapsed) {
            Some(true) => audio_events.push(AudioEvent::LaserOn { field: laser.id }),
            Some(false) => audio_events.push(AudioEvent::LaserOff { field: laser.id }),
            None => {}
        }
        hit |= laser.hits(target);
    }
    hit
}
