//! ECS components and pooled entity data.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{ProjectileOwner, TargetKind};
use crate::types::{Position, Velocity};

/// Shared lifecycle state for every moving entity.
/// Once `alive` is false the entity is skipped by all simulation and
/// collision passes and is removed at the next cleanup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifecycle {
    /// Seconds since spawn.
    pub age_secs: f64,
    /// Seconds to live; `f64::INFINITY` for no expiry.
    pub ttl_secs: f64,
    pub alive: bool,
}

impl Lifecycle {
    pub fn with_ttl(ttl_secs: f64) -> Self {
        Self {
            age_secs: 0.0,
            ttl_secs,
            alive: true,
        }
    }

    pub fn unbounded() -> Self {
        Self::with_ttl(f64::INFINITY)
    }

    pub fn expired(&self) -> bool {
        self.age_secs >= self.ttl_secs
    }
}

/// Rotation rate in rad/s per axis. Display rotation is `rate * age`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Destructible target drifting toward the viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetBody {
    pub radius: f64,
    /// Invariant: > 0 while alive; reaching 0 destroys exactly once.
    pub hp: u32,
    pub points: u64,
    pub kind: TargetKind,
    /// Vertical bob layered on translation.
    pub bob_amplitude: f64,
    pub bob_frequency: f64,
    pub bob_phase: f64,
}

/// Enemy that holds at a standoff depth and returns fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileBody {
    pub half_width: f64,
    pub hp: u32,
    pub points: u64,
    pub fire_interval_secs: f64,
    /// Simulated time of the last shot.
    pub last_fire_secs: f64,
    /// Lateral weave layered on translation.
    pub weave_amplitude: f64,
    pub weave_frequency: f64,
    pub weave_phase: f64,
}

/// Support drone orbiting the player's aim point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneBody {
    pub orbit_radius: f64,
    pub orbit_angle: f64,
    /// Angular speed (rad/s).
    pub orbit_speed: f64,
    pub fire_interval_secs: f64,
    pub last_fire_secs: f64,
}

/// Hostile-owned projectile payload (ECS-stored).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileBody {
    pub owner: ProjectileOwner,
    pub damage: f64,
}

/// Marks an entity as a destructible target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Marks an entity as a hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks an entity as a hostile-owned shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileShot;

/// Marks an entity as the support drone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupportDrone;

/// Marks an entity as a background star (wraps instead of dying).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BackgroundStar;

// --- Pooled entities (engine-owned, not ECS) ---

/// Player-owned projectile, recycled through the pooled store.
/// Direction is normalized at creation and never re-derived; the owner
/// tag is fixed for the slot's whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShot {
    pub pos: Position,
    pub vel: Velocity,
    pub owner: ProjectileOwner,
    pub damage: u32,
    pub age_secs: f64,
    pub ttl_secs: f64,
    pub alive: bool,
}

impl Default for PlayerShot {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            vel: Velocity::default(),
            owner: ProjectileOwner::Player,
            damage: PLAYER_SHOT_DAMAGE,
            age_secs: 0.0,
            ttl_secs: PLAYER_SHOT_TTL_SECS,
            alive: false,
        }
    }
}

impl PlayerShot {
    /// Restore spawn defaults. Position/velocity are set by the spawner.
    pub fn reset_to_defaults(&mut self) {
        self.pos = Position::default();
        self.vel = Velocity::default();
        self.owner = ProjectileOwner::Player;
        self.damage = PLAYER_SHOT_DAMAGE;
        self.age_secs = 0.0;
        self.ttl_secs = PLAYER_SHOT_TTL_SECS;
        self.alive = true;
    }
}

/// Cosmetic burst particle, recycled through the pooled store.
/// Participates in no collision checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Position,
    pub vel: Velocity,
    pub age_secs: f64,
    pub ttl_secs: f64,
    pub size: f64,
    pub alive: bool,
}

impl Particle {
    pub fn reset_to_defaults(&mut self) {
        self.pos = Position::default();
        self.vel = Velocity::default();
        self.age_secs = 0.0;
        self.ttl_secs = PARTICLE_TTL_MAX;
        self.size = 1.0;
        self.alive = true;
    }

    /// Remaining-life fraction in [0, 1]; drives fade and shrink.
    pub fn life_fraction(&self) -> f64 {
        if self.ttl_secs <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_secs / self.ttl_secs).clamp(0.0, 1.0)
    }
}
