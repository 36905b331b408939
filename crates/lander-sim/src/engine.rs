//! Encounter engine.
//!
//! `Encounter` owns the hecs world of enemy controllers, the terrain, laser
//! fields and the scripted target. It processes host commands, runs the
//! systems and produces `EncounterSnapshot`s. Headless and deterministic for
//! a given seed.

use std::collections::VecDeque;
use std::mem;
use std::sync::mpsc::{self, Receiver, Sender};

use hecs::World;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lander_core::capabilities::EnemyBody;
use lander_core::commands::{EncounterCommand, TargetScript};
use lander_core::constants::DT;
use lander_core::events::{AudioEvent, EnemyEvent};
use lander_core::state::EncounterSnapshot;
use lander_core::types::{EnemyId, SimTime, Vector2};
use lander_enemy_ai::{create_enemies, EnemyAi};
use lander_terrain::TerrainProfile;

use crate::hazards::LaserField;
use crate::level::LevelData;
use crate::scenario::TargetMotion;
use crate::systems;

/// Configuration for a new encounter.
pub struct EncounterConfig {
    /// RNG seed. Same seed and commands give the same encounter.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self { seed: 42, dt: DT }
    }
}

pub struct Encounter {
    world: World,
    time: SimTime,
    dt: f64,
    rng: ChaCha8Rng,
    terrain: TerrainProfile,
    lasers: Vec<LaserField>,
    target: TargetMotion,
    next_enemy_id: u32,
    command_queue: VecDeque<EncounterCommand>,
    event_tx: Sender<(EnemyId, EnemyEvent)>,
    event_rx: Receiver<(EnemyId, EnemyEvent)>,
    audio_events: Vec<AudioEvent>,
}

impl Encounter {
    pub fn new(config: EncounterConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            world: World::new(),
            time: SimTime::default(),
            dt: config.dt,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            terrain: TerrainProfile::default(),
            lasers: Vec::new(),
            target: TargetMotion::new(TargetScript::default()),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            event_tx,
            event_rx,
            audio_events: Vec::new(),
        }
    }

    /// Create an encounter and load `level` into it.
    pub fn from_level(config: EncounterConfig, level: &LevelData) -> Self {
        let mut encounter = Self::new(config);
        encounter.load_level(level);
        encounter
    }

    /// Replace the encounter's contents with `level`. Time restarts at zero.
    pub fn load_level(&mut self, level: &LevelData) {
        self.world.clear();
        self.time = SimTime::default();
        self.next_enemy_id = 0;
        self.command_queue.clear();
        self.audio_events.clear();
        // Drop events from enemies of the previous level
        while self.event_rx.try_recv().is_ok() {}

        self.terrain = level.terrain.clone();
        self.lasers = level
            .lasers
            .iter()
            .enumerate()
            .map(|(i, cfg)| LaserField::new(i as u32, *cfg))
            .collect();
        self.target = TargetMotion::new(level.target_script());

        for enemy in create_enemies(&level.enemies) {
            self.spawn_enemy(enemy);
        }

        info!(
            "Encounter '{}' started with {} enemies",
            level.name,
            self.enemy_count()
        );
    }

    /// Add an enemy and forward its events into the encounter.
    pub fn spawn_enemy(&mut self, mut enemy: EnemyAi) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;

        let tx = self.event_tx.clone();
        enemy.subscribe_all(move |event| {
            // Receiver lives as long as the encounter
            let _ = tx.send((id, *event));
        });
        self.world.spawn((id, enemy));
        id
    }

    /// Hand an engine body to an enemy. False if the enemy is gone.
    pub fn attach_body(&mut self, id: EnemyId, body: Box<dyn EnemyBody>) -> bool {
        self.with_enemy(id, |enemy| enemy.attach_body(body))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: EncounterCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EncounterCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the encounter by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        let target = self.target.step(self.dt, &mut self.rng);
        systems::enemy_ai::run(&mut self.world, self.dt, target, &self.terrain);
        self.time.advance(self.dt);

        let target_hit = systems::hazards::run(
            &mut self.lasers,
            self.time.elapsed_secs,
            target,
            &mut self.audio_events,
        );

        let enemy_events: Vec<(EnemyId, EnemyEvent)> = self.event_rx.try_iter().collect();
        systems::audio::run(&self.world, &enemy_events, &mut self.audio_events);

        let audio_events = mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            target,
            &self.lasers,
            enemy_events,
            audio_events,
            target_hit,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn target(&self) -> Vector2 {
        self.target.position()
    }

    pub fn terrain(&self) -> &TerrainProfile {
        &self.terrain
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&EnemyId>().iter().count()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn with_enemy(&mut self, id: EnemyId, f: impl FnOnce(&mut EnemyAi)) -> bool {
        let Some(entity) = systems::enemy_ai::find(&self.world, id) else {
            return false;
        };
        match self.world.query_one_mut::<&mut EnemyAi>(entity) {
            Ok(enemy) => {
                f(enemy);
                true
            }
            Err(_) => false,
        }
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: EncounterCommand) {
        match command {
            EncounterCommand::StunEnemy { enemy, duration } => {
                if !self.with_enemy(enemy, |ai| ai.stun(duration)) {
                    warn!("StunEnemy: no enemy {enemy:?}");
                }
            }
            EncounterCommand::StunInRadius {
                center,
                radius,
                duration,
            } => {
                let count =
                    systems::enemy_ai::stun_in_radius(&mut self.world, center, radius, duration);
                debug!("stunned {count} enemies within {radius} of {center}");
            }
            EncounterCommand::ResetEnemies => {
                for (_entity, enemy) in self.world.query_mut::<&mut EnemyAi>() {
                    enemy.reset();
                }
            }
            EncounterCommand::SetPatrolPath { enemy, path } => {
                if !self.with_enemy(enemy, |ai| ai.set_patrol_path(path)) {
                    warn!("SetPatrolPath: no enemy {enemy:?}");
                }
            }
            EncounterCommand::DestroyEnemy { enemy } => {
                let Some(entity) = systems::enemy_ai::find(&self.world, enemy) else {
                    warn!("DestroyEnemy: no enemy {enemy:?}");
                    return;
                };
                if let Ok(ai) = self.world.query_one_mut::<&mut EnemyAi>(entity) {
                    ai.destroy();
                }
                if self.world.despawn(entity).is_ok() {
                    debug!("enemy {enemy:?} removed");
                }
            }
            EncounterCommand::SetTargetScript { script } => {
                self.target = TargetMotion::new(script);
            }
            EncounterCommand::SetTargetPosition { position } => {
                self.target.set_position(position);
            }
        }
    }
}
