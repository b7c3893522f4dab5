//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the `SimContext`,
//! processes queued player commands at tick boundaries, runs the system
//! pipeline in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless (no rendering or audio dependency), enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::{DQuat, DVec3};
use hecs::World;

use skyburst_core::commands::PlayerCommand;
use skyburst_core::components::{Hostile, Lifecycle};
use skyburst_core::constants::*;
use skyburst_core::enums::{GamePhase, PowerUpKind};
use skyburst_core::events::FeedbackEvent;
use skyburst_core::state::GameStateSnapshot;
use skyburst_core::types::{Position, SimTime};

use skyburst_progression::WaveOutcome;

use crate::context::SimContext;
use crate::systems;
use crate::systems::{collision, combat};
use crate::timer::TimerAction;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    ctx: SimContext,
    phase: GamePhase,
    seed: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            ctx: SimContext::new(config.seed),
            phase: GamePhase::default(),
            seed: config.seed,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. `dt` is clamped to MAX_DT (30 fps floor), so a
    /// stall or resume never produces a delta spike. Nothing runs while
    /// paused; the clock only moves in the Playing phase.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_DT) } else { DT };

        self.process_commands();

        if self.phase == GamePhase::Playing {
            // Time advances first so every system sees this tick's clock.
            self.ctx.time.advance(dt);
            self.run_systems(dt);
        }

        let events = std::mem::take(&mut self.ctx.events);
        systems::snapshot::build_snapshot(&self.world, &self.ctx, self.phase, events)
    }

    /// One tick at the nominal rate.
    pub fn step(&mut self) -> GameStateSnapshot {
        self.tick(DT)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.ctx.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    // --- Direct input surface (single-threaded, between ticks) ---

    /// Tap at a world position: one hit to the nearest live target within
    /// its radius plus the tap margin. Also re-aims the drone follow point.
    /// Returns whether anything was hit.
    pub fn handle_tap(&mut self, world_pos: Position) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.ctx.aim_point = world_pos;
        collision::tap_hit(&mut self.world, &mut self.ctx, world_pos)
    }

    /// Fire a player shot from `origin` toward `target`. Honors the fire
    /// cooldown (shortened by RapidFire); SpreadShot launches a fan.
    pub fn fire_projectile(&mut self, origin: Position, target: Position) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let now = self.ctx.time.elapsed_secs;
        let mut cooldown = PLAYER_FIRE_COOLDOWN_SECS;
        if self.ctx.powerup.is_active(PowerUpKind::RapidFire) {
            cooldown /= RAPID_FIRE_FACTOR;
        }
        if now - self.ctx.last_player_fire_secs < cooldown {
            return;
        }
        self.ctx.last_player_fire_secs = now;

        let mut dir = origin.direction_to(&target);
        if dir.length_squared() == 0.0 {
            dir = DVec3::new(0.0, 0.0, -1.0);
        }

        if self.ctx.powerup.is_active(PowerUpKind::SpreadShot) {
            let half = (SPREAD_COUNT as i32 - 1) / 2;
            for i in -half..=half {
                let fanned = DQuat::from_rotation_y(i as f64 * SPREAD_ANGLE) * dir;
                world_setup::spawn_player_shot(&mut self.ctx.shots, origin, fanned);
            }
        } else {
            world_setup::spawn_player_shot(&mut self.ctx.shots, origin, dir);
        }
        self.ctx.events.push(FeedbackEvent::ShotFired { origin });
    }

    /// Sweep a beam along a world-space segment: one hit to every live
    /// hostile and target in the corridor. Returns the hit count.
    pub fn fire_beam(&mut self, start: Position, end: Position) -> u32 {
        if self.phase != GamePhase::Playing {
            return 0;
        }
        let hits = collision::beam_sweep(&mut self.world, &mut self.ctx, start, end);
        self.ctx.events.push(FeedbackEvent::BeamFired { start, end, hits });
        hits
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::AcknowledgeLevelComplete => {
                if self.phase == GamePhase::LevelComplete {
                    self.ctx.player.advance_level();
                    let now = self.ctx.time.elapsed_secs;
                    let level = self.ctx.player.level;
                    self.ctx.wave.start_level(now, level);
                    self.ctx.next_target_spawn_secs = now;
                    self.ctx.next_hostile_spawn_secs = now;
                    self.ctx.events.push(FeedbackEvent::WaveStarted {
                        wave: 1,
                        boss: false,
                    });
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::Tap { world } => {
                self.handle_tap(world);
            }
            PlayerCommand::FireShot { origin, target } => {
                self.fire_projectile(origin, target);
            }
            PlayerCommand::FireBeam { start, end } => {
                self.fire_beam(start, end);
            }
            PlayerCommand::SetAimPoint { world } => {
                self.ctx.aim_point = world;
            }
        }
    }

    /// Rebuild the session from the seed: fresh world, fresh context.
    /// No state persists across restarts.
    fn start_session(&mut self) {
        self.world = World::new();
        self.ctx = SimContext::new(self.seed);
        self.despawn_buffer.clear();
        world_setup::spawn_starfield(&mut self.world, &mut self.ctx.rng);
        self.ctx.events.push(FeedbackEvent::WaveStarted {
            wave: 1,
            boss: false,
        });
        self.phase = GamePhase::Playing;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Spawn cadence (targets, hostiles, boss packs).
        systems::wave_director::run(&mut self.world, &mut self.ctx);
        // 2. Kinematics, secondary motion, lifecycle evaluation. Misses
        //    break the combo here, before any score event below.
        systems::movement::run(&mut self.world, &mut self.ctx, dt);
        // 3. Hostile fire cadence.
        systems::hostile_fire::run(&mut self.world, &mut self.ctx);
        // 4. Drone orbit + auto-fire.
        systems::drone::run(&mut self.world, &mut self.ctx, dt);
        // 5. Deferred chain hits. Liveness is re-checked inside: firing
        //    after the victim died is an expected race and a no-op.
        let due = self.ctx.timers.drain_due(self.ctx.time.elapsed_secs);
        for action in due {
            match action {
                TimerAction::ChainHit { target } => {
                    combat::hit_target(&mut self.world, &mut self.ctx, target, 1);
                }
            }
        }
        // 6. Collision resolution + perimeter breaches.
        systems::collision::run(&mut self.world, &mut self.ctx);
        // 7. Power-up expiry (once per tick).
        let now = self.ctx.time.elapsed_secs;
        if let Some(expired) = self.ctx.powerup.expire_if_due(now) {
            combat::run_deactivation_effect(&mut self.world, &mut self.ctx, expired);
            self.ctx
                .events
                .push(FeedbackEvent::PowerUpDeactivated { kind: expired });
        }
        // 8. Wave / level advancement.
        let hostiles_alive = self.live_hostile_count();
        if let Some(outcome) = self.ctx.wave.evaluate(now, hostiles_alive) {
            match outcome {
                WaveOutcome::Advanced { wave, boss } => {
                    self.ctx.events.push(FeedbackEvent::WaveStarted { wave, boss });
                }
                WaveOutcome::LevelComplete => {
                    self.ctx.events.push(FeedbackEvent::LevelComplete {
                        level: self.ctx.player.level,
                    });
                    self.phase = GamePhase::LevelComplete;
                }
            }
        }
        // 9. Rate-limited compaction of dead entities.
        systems::cleanup::run(&mut self.world, &mut self.ctx, &mut self.despawn_buffer);

        // Game-over latches the phase after everything else settles.
        if self.ctx.game_over_signaled {
            self.phase = GamePhase::GameOver;
        }
    }

    fn live_hostile_count(&self) -> u32 {
        self.world
            .query::<(&Hostile, &Lifecycle)>()
            .iter()
            .filter(|(_, (_, lifecycle))| lifecycle.alive)
            .count() as u32
    }

    // --- Test hooks ---

    /// Spawn a deterministic target (no drift, no bob) for tests.
    #[cfg(test)]
    pub fn spawn_test_target(&mut self, position: Position, speed: f64) -> hecs::Entity {
        use skyburst_core::components::{Spin, Target, TargetBody};
        use skyburst_core::enums::TargetKind;
        use skyburst_core::types::Velocity;
        self.world.spawn((
            Target,
            position,
            Velocity::new(0.0, 0.0, speed),
            Lifecycle::unbounded(),
            TargetBody {
                radius: TARGET_RADIUS,
                hp: TARGET_HP,
                points: TARGET_POINTS,
                kind: TargetKind::Normal,
                bob_amplitude: 0.0,
                bob_frequency: 0.0,
                bob_phase: 0.0,
            },
            Spin::default(),
        ))
    }

    /// Spawn a deterministic hostile (no weave) for tests.
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self, position: Position) -> hecs::Entity {
        use skyburst_core::components::{HostileBody, Spin};
        use skyburst_core::types::Velocity;
        self.world.spawn((
            Hostile,
            position,
            Velocity::default(),
            Lifecycle::unbounded(),
            HostileBody {
                half_width: HOSTILE_HALF_WIDTH,
                hp: HOSTILE_HP,
                points: HOSTILE_POINTS,
                fire_interval_secs: HOSTILE_FIRE_INTERVAL_SECS,
                last_fire_secs: self.ctx.time.elapsed_secs,
                weave_amplitude: 0.0,
                weave_frequency: 0.0,
                weave_phase: 0.0,
            },
            Spin::default(),
        ))
    }

    #[cfg(test)]
    pub fn activate_test_powerup(&mut self, kind: PowerUpKind) {
        combat::activate_powerup(&mut self.world, &mut self.ctx, kind);
    }

    /// Destroy every live hostile through the normal destruction path.
    #[cfg(test)]
    pub fn destroy_all_hostiles(&mut self) {
        let entities: Vec<hecs::Entity> = {
            let mut query = self.world.query::<(&Hostile, &Lifecycle)>();
            query
                .iter()
                .filter(|(_, (_, lifecycle))| lifecycle.alive)
                .map(|(entity, _)| entity)
                .collect()
        };
        for entity in entities {
            combat::destroy_hostile(&mut self.world, &mut self.ctx, entity);
        }
    }

    #[cfg(test)]
    pub fn ctx(&self) -> &SimContext {
        &self.ctx
    }

    #[cfg(test)]
    pub fn ctx_mut(&mut self) -> &mut SimContext {
        &mut self.ctx
    }
}
