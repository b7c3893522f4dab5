//! Simulation context: all engine-owned state outside the ECS world.
//!
//! Passed by reference into every system alongside the world, replacing
//! any ambient/global state. Lifecycle is one game session — `Restart`
//! rebuilds it from the seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyburst_core::components::{Particle, PlayerShot};
use skyburst_core::constants::*;
use skyburst_core::events::FeedbackEvent;
use skyburst_core::types::{Position, SimTime};

use skyburst_progression::{PlayerState, PowerUpState, WaveState};

use crate::pool::Pool;
use crate::timer::TimerQueue;

/// Initial pool sizes; overflow allocates, it never fails.
const SHOT_POOL_CAPACITY: usize = 64;
const PARTICLE_POOL_CAPACITY: usize = 512;

/// Engine state shared across systems for one game session.
pub struct SimContext {
    pub time: SimTime,
    pub rng: ChaCha8Rng,

    // Progression singletons (mutated only through their own methods).
    pub player: PlayerState,
    pub powerup: PowerUpState,
    pub wave: WaveState,

    /// Deferred effects in simulated time.
    pub timers: TimerQueue,

    // Pooled high-churn entities.
    pub shots: Pool<PlayerShot>,
    pub particles: Pool<Particle>,

    /// Per-tick feedback events, drained into the snapshot.
    pub events: Vec<FeedbackEvent>,

    /// The player's current aim position; the support drone orbits this.
    pub aim_point: Position,

    /// Simulated time of the last player shot (fire cooldown gate).
    pub last_player_fire_secs: f64,

    /// Simulated time of the last dead-entity compaction.
    pub last_cleanup_secs: f64,

    // Spawn cadence clocks.
    pub next_target_spawn_secs: f64,
    pub next_hostile_spawn_secs: f64,

    /// Latched once; the game-over event never fires twice per session.
    pub game_over_signaled: bool,
}

impl SimContext {
    pub fn new(seed: u64) -> Self {
        Self {
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            player: PlayerState::new(),
            powerup: PowerUpState::new(),
            wave: WaveState::new(0.0),
            timers: TimerQueue::new(),
            shots: Pool::with_capacity(SHOT_POOL_CAPACITY),
            particles: Pool::with_capacity(PARTICLE_POOL_CAPACITY),
            events: Vec::new(),
            aim_point: Position::new(0.0, 0.0, NEAR_BOUNDARY_Z),
            last_player_fire_secs: f64::NEG_INFINITY,
            last_cleanup_secs: 0.0,
            next_target_spawn_secs: 0.0,
            next_hostile_spawn_secs: 0.0,
            game_over_signaled: false,
        }
    }

    /// Signal game-over. Idempotent: the event is emitted exactly once.
    pub fn signal_game_over(&mut self) {
        if !self.game_over_signaled {
            self.game_over_signaled = true;
            self.events.push(FeedbackEvent::GameOver {
                score: self.player.score,
            });
        }
    }
}
