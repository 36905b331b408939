//! Audio hook layer: maps enemy lifecycle events to audio cues.

use hecs::World;

use lander_core::events::{AudioEvent, EnemyEvent};
use lander_core::types::EnemyId;

use crate::systems::enemy_ai;

/// The cue for one enemy event.
pub fn cue_for(world: &World, enemy: EnemyId, event: &EnemyEvent) -> AudioEvent {
    match *event {
        EnemyEvent::Chase => AudioEvent::EnemyAlerted {
            enemy,
            position: enemy_ai::position_of(world, enemy).unwrap_or_default(),
        },
        EnemyEvent::Return => AudioEvent::EnemyGaveUp { enemy },
        EnemyEvent::ReturnComplete => AudioEvent::EnemyResumedPatrol { enemy },
        EnemyEvent::StunStart { duration } => AudioEvent::EnemyStunned { enemy, duration },
        EnemyEvent::StunEnd => AudioEvent::EnemyRecovered { enemy },
    }
}

/// Append one cue per enemy event, in emission order.
pub fn run(world: &World, enemy_events: &[(EnemyId, EnemyEvent)], audio_events: &mut Vec<AudioEvent>) {
    audio_events.extend(
        enemy_events
            .iter()
            .map(|(enemy, event)| cue_for(world, *enemy, event)),
    );
}
