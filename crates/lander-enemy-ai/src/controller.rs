//! Enemy AI controller.
//!
//! `EnemyAi` owns one enemy's kinematic state and behavior data and runs the
//! behavior state machine once per `update`. The host supplies the time step
//! and the target position; everything else is internal. Each tick:
//!
//! 1. vision check against the target,
//! 2. the handler for the active state (may set velocity or transition),
//! 3. integration of velocity into position and facing update.
//!
//! State changes are reported through the enemy's [`EventBus`].

use std::fmt;
use std::mem;

use log::{debug, warn};

use lander_core::capabilities::{EnemyBody, LineOfSight};
use lander_core::config::{EnemyConfig, EnemyConfigOverrides, PatrolWaypoint};
use lander_core::constants::{ARRIVAL_RADIUS, FACING_FLIP_THRESHOLD};
use lander_core::enums::{EnemyBehaviorState, Facing};
use lander_core::events::{EnemyEvent, EnemyEventKind};
use lander_core::types::{direction_and_distance, Vector2};

use crate::events::{EventBus, SubscriptionId};
use crate::patrol::{advance_waypoint, nearest_waypoint};
use crate::state::*;
use crate::vision;

pub struct EnemyAi {
    config: EnemyConfig,
    /// Spawn position; rally point when there is no patrol path.
    home: Vector2,
    position: Vector2,
    velocity: Vector2,
    facing: Facing,
    data: BehaviorData,
    events: EventBus,
    body: Option<Box<dyn EnemyBody>>,
    destroyed: bool,
}

impl EnemyAi {
    /// Create an enemy at `position`. An enemy starting in Patrol with a
    /// non-empty path is placed on its first waypoint.
    pub fn new(config: EnemyConfig, position: Vector2) -> Self {
        let start = match config.patrol_path.first() {
            Some(wp) if config.initial_state == EnemyBehaviorState::Patrol => wp.position,
            _ => position,
        };
        let data = BehaviorData::initial(config.initial_state, &config, position);

        Self {
            config,
            home: position,
            position: start,
            velocity: Vector2::ZERO,
            facing: Facing::default(),
            data,
            events: EventBus::new(),
            body: None,
            destroyed: false,
        }
    }

    /// Create an enemy from overrides merged over the default config.
    pub fn with_overrides(overrides: &EnemyConfigOverrides, position: Vector2) -> Self {
        Self::new(EnemyConfig::with_overrides(overrides), position)
    }

    // --- Per-tick update ---

    /// Advance the enemy by `dt` seconds against a target at `target`.
    ///
    /// `terrain` is only consulted when the vision config asks for terrain
    /// blocking. Ignored after `destroy`.
    pub fn update(&mut self, dt: f64, target: Vector2, terrain: Option<&dyn LineOfSight>) {
        if self.destroyed {
            warn!("update called on a destroyed enemy at {}", self.position);
            return;
        }

        let visible = vision::can_see(
            self.position,
            self.facing,
            target,
            &self.config.vision,
            terrain,
        );

        match self.data.state() {
            EnemyBehaviorState::Idle => {}
            EnemyBehaviorState::Patrol => self.update_patrol(dt, target, visible),
            EnemyBehaviorState::Chase => self.update_chase(dt, target, visible),
            EnemyBehaviorState::Return => self.update_return(dt, target, visible),
            EnemyBehaviorState::Stunned => self.update_stunned(dt),
        }

        self.integrate(dt);
    }

    fn update_patrol(&mut self, dt: f64, target: Vector2, visible: bool) {
        if visible {
            self.enter_chase(target);
            return;
        }

        let BehaviorData::Patrol(patrol) = &mut self.data else {
            return;
        };
        let path = &self.config.patrol_path;

        if path.is_empty() {
            self.velocity = Vector2::ZERO;
            return;
        }

        if patrol.wait_timer > 0.0 {
            patrol.wait_timer -= dt;
            self.velocity = Vector2::ZERO;
            return;
        }

        // Path may have shrunk under a stored index
        if patrol.waypoint_index >= path.len() {
            patrol.waypoint_index = 0;
        }

        let waypoint = path[patrol.waypoint_index];
        let (direction, distance) = direction_and_distance(self.position, waypoint.position);

        if distance < ARRIVAL_RADIUS {
            patrol.wait_timer = waypoint.wait_time;
            (patrol.waypoint_index, patrol.direction) = advance_waypoint(
                patrol.waypoint_index,
                patrol.direction,
                path.len(),
                self.config.loop_patrol,
            );
            self.velocity = Vector2::ZERO;
            return;
        }

        let speed = waypoint.speed.unwrap_or(self.config.patrol_speed);
        self.velocity = direction * approach_speed(speed, distance, dt);
    }

    fn update_chase(&mut self, dt: f64, target: Vector2, visible: bool) {
        let BehaviorData::Chase(chase) = &mut self.data else {
            return;
        };

        if visible {
            chase.last_known_position = target;
            chase.time_since_seen = 0.0;
            chase.can_see_target = true;
        } else {
            chase.time_since_seen += dt;
            chase.can_see_target = false;
            if chase.time_since_seen >= self.config.chase_persistence {
                self.enter_return();
                return;
            }
        }

        let (direction, distance) = direction_and_distance(self.position, chase.last_known_position);
        if distance < ARRIVAL_RADIUS && !visible {
            self.enter_return();
            return;
        }

        self.velocity = direction * approach_speed(self.config.chase_speed, distance, dt);
    }

    fn update_return(&mut self, dt: f64, target: Vector2, visible: bool) {
        if visible {
            self.enter_chase(target);
            return;
        }

        let BehaviorData::Return(ret) = &self.data else {
            return;
        };
        let ret = *ret;

        let (direction, distance) = direction_and_distance(self.position, ret.return_target);
        if distance < ARRIVAL_RADIUS {
            let waypoint_index = match self.config.patrol_path.len() {
                0 => 0,
                len => ret.waypoint_index.min(len - 1),
            };
            self.velocity = Vector2::ZERO;
            self.data = BehaviorData::Patrol(PatrolStateData {
                waypoint_index,
                wait_timer: 0.0,
                ..create_patrol_state()
            });
            debug!("enemy at {}: Return -> Patrol (waypoint {waypoint_index})", self.position);
            self.emit(EnemyEvent::ReturnComplete);
            return;
        }

        self.velocity = direction * approach_speed(self.config.return_speed, distance, dt);
    }

    fn update_stunned(&mut self, dt: f64) {
        let BehaviorData::Stunned(stunned) = &mut self.data else {
            return;
        };
        self.velocity = Vector2::ZERO;

        stunned.stun_timer -= dt;
        if stunned.stun_timer <= 0.0 {
            let previous = mem::replace(&mut stunned.previous, Box::new(BehaviorData::Idle));
            self.data = *previous;
            debug!("enemy at {}: Stunned -> {:?}", self.position, self.data.state());
            self.emit(EnemyEvent::StunEnd);
        }
    }

    fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;

        if self.velocity.x > FACING_FLIP_THRESHOLD {
            self.facing = Facing::Right;
        } else if self.velocity.x < -FACING_FLIP_THRESHOLD {
            self.facing = Facing::Left;
        }

        self.push_body_position();
    }

    // --- Transitions ---

    fn enter_chase(&mut self, target: Vector2) {
        debug!(
            "enemy at {}: {:?} -> Chase (target at {target})",
            self.position,
            self.data.state()
        );
        self.data = BehaviorData::Chase(create_chase_state(target));
        self.emit(EnemyEvent::Chase);
    }

    fn enter_return(&mut self) {
        let (return_target, waypoint_index) = self.rally_point(self.position);
        debug!(
            "enemy at {}: Chase -> Return (waypoint {waypoint_index} at {return_target})",
            self.position
        );
        self.velocity = Vector2::ZERO;
        self.data = BehaviorData::Return(create_return_state(return_target, waypoint_index));
        self.emit(EnemyEvent::Return);
    }

    /// Nearest patrol waypoint to `from`, or home when there is no path.
    fn rally_point(&self, from: Vector2) -> (Vector2, usize) {
        nearest_waypoint(&self.config.patrol_path, from)
            .map(|(i, wp)| (wp.position, i))
            .unwrap_or((self.home, 0))
    }

    fn emit(&mut self, event: EnemyEvent) {
        self.events.emit(&event);
    }

    // --- External control ---

    /// Stun for `duration` seconds from whatever state is active.
    ///
    /// Stunning an already stunned enemy restarts the countdown with the
    /// new duration and keeps the behavior that the first stun interrupted.
    pub fn stun(&mut self, duration: f64) {
        if self.destroyed {
            warn!("stun called on a destroyed enemy at {}", self.position);
            return;
        }
        if duration < 0.0 {
            warn!("negative stun duration {duration}");
        }

        match &mut self.data {
            BehaviorData::Stunned(stunned) => {
                stunned.stun_timer = duration;
            }
            _ => {
                let previous = mem::replace(&mut self.data, BehaviorData::Idle);
                debug!("enemy at {}: {:?} -> Stunned", self.position, previous.state());
                self.data = BehaviorData::Stunned(create_stunned_state(duration, previous));
            }
        }

        self.velocity = Vector2::ZERO;
        self.emit(EnemyEvent::StunStart { duration });
    }

    /// Return to the initial state with fresh data, standing still on the
    /// first patrol waypoint (or the spawn position without a path).
    pub fn reset(&mut self) {
        self.position = self
            .config
            .patrol_path
            .first()
            .map_or(self.home, |wp| wp.position);
        self.velocity = Vector2::ZERO;
        self.facing = Facing::default();
        self.data = BehaviorData::initial(self.config.initial_state, &self.config, self.home);
        self.push_body_position();
    }

    /// Replace the patrol path. Patrol progress restarts at waypoint 0,
    /// including progress suspended under a stun. A pending return is
    /// re-aimed at the nearest waypoint of the new path.
    pub fn set_patrol_path(&mut self, path: Vec<PatrolWaypoint>) {
        self.config.patrol_path = path;

        let rally = self.rally_point(self.position);
        let data = match &mut self.data {
            BehaviorData::Stunned(stunned) => stunned.previous.as_mut(),
            other => other,
        };
        match data {
            BehaviorData::Patrol(patrol) => *patrol = create_patrol_state(),
            BehaviorData::Return(ret) => *ret = create_return_state(rally.0, rally.1),
            _ => {}
        }
    }

    /// Release listeners and disable the body's collision. The enemy
    /// ignores all further updates.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.events.clear();
        if let Some(body) = self.body.as_mut() {
            body.set_collision_enabled(false);
        }
        self.velocity = Vector2::ZERO;
        self.destroyed = true;
        debug!("enemy at {} destroyed", self.position);
    }

    // --- Events ---

    pub fn subscribe(
        &mut self,
        kind: EnemyEventKind,
        listener: impl FnMut(&EnemyEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(kind, listener)
    }

    pub fn subscribe_all(&mut self, listener: impl FnMut(&EnemyEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.events.subscribe_all(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // --- Engine body ---

    /// Attach the host's body. It is moved to the enemy's position and
    /// kept in sync after every tick.
    pub fn attach_body(&mut self, mut body: Box<dyn EnemyBody>) {
        body.set_position(self.position);
        body.set_collision_enabled(!self.destroyed);
        self.body = Some(body);
    }

    pub fn detach_body(&mut self) -> Option<Box<dyn EnemyBody>> {
        self.body.take()
    }

    /// Adopt the body's position, e.g. after the physics engine resolved a
    /// collision. No-op without a body.
    pub fn sync_from_body(&mut self) {
        if let Some(body) = &self.body {
            self.position = body.position();
        }
    }

    fn push_body_position(&mut self) {
        if let Some(body) = self.body.as_mut() {
            body.set_position(self.position);
        }
    }

    // --- Accessors ---

    pub fn behavior_state(&self) -> EnemyBehaviorState {
        self.data.state()
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn home(&self) -> Vector2 {
        self.home
    }

    /// Transient data of the active state.
    pub fn data(&self) -> &BehaviorData {
        &self.data
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// `speed`, capped so one step of `dt` lands on the goal instead of past it.
fn approach_speed(speed: f64, distance: f64, dt: f64) -> f64 {
    if dt > 0.0 {
        speed.min(distance / dt)
    } else {
        speed
    }
}

impl fmt::Debug for EnemyAi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnemyAi")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("facing", &self.facing)
            .field("data", &self.data)
            .field("events", &self.events)
            .field("has_body", &self.body.is_some())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
