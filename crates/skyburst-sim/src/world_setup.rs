//! Entity spawn factories.
//!
//! Each concrete entity type fixes its starting zone (randomized on the
//! far plane) and kinematic policy here; per-tick behavior lives in the
//! systems. All randomness goes through the engine's seeded RNG.

use std::f64::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyburst_core::components::*;
use skyburst_core::constants::*;
use skyburst_core::enums::{ProjectileOwner, TargetKind};
use skyburst_core::types::{Position, Velocity};

use crate::pool::Pool;

/// Randomized spawn position on the far plane.
fn far_plane_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH),
        rng.gen_range(-FIELD_HALF_HEIGHT..FIELD_HALF_HEIGHT),
        rng.gen_range(SPAWN_DEPTH_MIN..SPAWN_DEPTH_MAX),
    )
}

/// Spawn a target drifting toward the viewer: constant approach speed,
/// small lateral drift, sinusoidal vertical bob. Variant rolled here.
pub fn spawn_target(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let position = far_plane_position(rng);

    let roll: f64 = rng.gen();
    let kind = if roll < POWERUP_TARGET_CHANCE {
        TargetKind::PowerUp
    } else if roll < POWERUP_TARGET_CHANCE + ARMORED_CHANCE {
        TargetKind::Armored
    } else {
        TargetKind::Normal
    };

    let (hp, points) = match kind {
        TargetKind::Normal => (TARGET_HP, TARGET_POINTS),
        TargetKind::Armored => (ARMORED_HP, ARMORED_POINTS),
        TargetKind::PowerUp => (TARGET_HP, POWERUP_TARGET_POINTS),
    };

    let velocity = Velocity::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(TARGET_SPEED_MIN..TARGET_SPEED_MAX),
    );

    let body = TargetBody {
        radius: TARGET_RADIUS,
        hp,
        points,
        kind,
        bob_amplitude: rng.gen_range(BOB_AMPLITUDE_MIN..BOB_AMPLITUDE_MAX),
        bob_frequency: rng.gen_range(BOB_FREQUENCY_MIN..BOB_FREQUENCY_MAX),
        bob_phase: rng.gen_range(0.0..TAU),
    };

    let spin = Spin {
        x: rng.gen_range(-0.5..0.5),
        y: rng.gen_range(-1.0..1.0),
        z: rng.gen_range(-0.5..0.5),
    };

    world.spawn((Target, position, velocity, Lifecycle::unbounded(), body, spin))
}

/// Spawn a hostile: approaches to a standoff depth, weaves laterally,
/// and fires at its own cadence. Boss hostiles carry scaled hp and score.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_secs: f64,
    boss: bool,
) -> hecs::Entity {
    let position = far_plane_position(rng);

    let (hp, points) = if boss {
        (HOSTILE_HP * BOSS_HP_FACTOR, HOSTILE_POINTS * BOSS_POINTS_FACTOR)
    } else {
        (HOSTILE_HP, HOSTILE_POINTS)
    };

    let body = HostileBody {
        half_width: HOSTILE_HALF_WIDTH,
        hp,
        points,
        fire_interval_secs: HOSTILE_FIRE_INTERVAL_SECS,
        last_fire_secs: now_secs,
        weave_amplitude: WEAVE_AMPLITUDE,
        weave_frequency: WEAVE_FREQUENCY,
        weave_phase: rng.gen_range(0.0..TAU),
    };

    let velocity = Velocity::new(0.0, 0.0, HOSTILE_SPEED);
    let spin = Spin {
        x: 0.0,
        y: rng.gen_range(-0.8..0.8),
        z: 0.0,
    };

    world.spawn((Hostile, position, velocity, Lifecycle::unbounded(), body, spin))
}

/// Spawn a hostile-owned shot. Direction is fixed by the caller and the
/// owner tag never changes.
pub fn spawn_hostile_shot(world: &mut World, position: Position, velocity: Velocity) -> hecs::Entity {
    world.spawn((
        HostileShot,
        position,
        velocity,
        Lifecycle::with_ttl(HOSTILE_SHOT_TTL_SECS),
        ProjectileBody {
            owner: ProjectileOwner::Hostile,
            damage: HOSTILE_SHOT_DAMAGE,
        },
    ))
}

/// Spawn the support drone on its orbit around the aim point.
pub fn spawn_drone(world: &mut World, aim_point: Position, now_secs: f64) -> hecs::Entity {
    let body = DroneBody {
        orbit_radius: DRONE_ORBIT_RADIUS,
        orbit_angle: 0.0,
        orbit_speed: DRONE_ORBIT_SPEED,
        fire_interval_secs: DRONE_FIRE_INTERVAL_SECS,
        last_fire_secs: now_secs,
    };
    let position = Position::new(
        aim_point.x + DRONE_ORBIT_RADIUS,
        aim_point.y,
        aim_point.z,
    );
    world.spawn((
        SupportDrone,
        position,
        Velocity::default(),
        Lifecycle::unbounded(),
        body,
    ))
}

/// Populate the background star field across the whole depth band.
pub fn spawn_starfield(world: &mut World, rng: &mut ChaCha8Rng) {
    for _ in 0..STAR_COUNT {
        let position = Position::new(
            rng.gen_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH),
            rng.gen_range(-FIELD_HALF_HEIGHT..FIELD_HALF_HEIGHT),
            rng.gen_range(SPAWN_DEPTH_MIN..NEAR_BOUNDARY_Z),
        );
        let velocity = Velocity::new(0.0, 0.0, rng.gen_range(STAR_SPEED_MIN..STAR_SPEED_MAX));
        world.spawn((BackgroundStar, position, velocity, Lifecycle::unbounded()));
    }
}

/// Acquire a player shot from the pool, aimed along `dir` (unit length).
pub fn spawn_player_shot(
    shots: &mut Pool<PlayerShot>,
    origin: Position,
    dir: glam::DVec3,
) -> usize {
    let idx = shots.acquire();
    // The slot was reset on acquire; only position/velocity remain.
    if let Some(shot) = shots.get_mut(idx) {
        shot.pos = origin;
        shot.vel = Velocity::along(dir, PLAYER_SHOT_SPEED);
    }
    idx
}

/// Emit a destruction burst at `origin`: radial particles with gravity
/// and randomized lifespans.
pub fn spawn_burst(particles: &mut Pool<Particle>, rng: &mut ChaCha8Rng, origin: Position) {
    let count = rng.gen_range(BURST_COUNT_MIN..=BURST_COUNT_MAX);
    for _ in 0..count {
        // Uniform direction on the sphere.
        let z: f64 = rng.gen_range(-1.0..1.0);
        let theta: f64 = rng.gen_range(0.0..TAU);
        let r = (1.0 - z * z).sqrt();
        let dir = glam::DVec3::new(r * theta.cos(), r * theta.sin(), z);
        let speed = rng.gen_range(BURST_SPEED_MIN..BURST_SPEED_MAX);

        let idx = particles.acquire();
        if let Some(particle) = particles.get_mut(idx) {
            particle.pos = origin;
            particle.vel = Velocity::along(dir, speed);
            particle.ttl_secs = rng.gen_range(PARTICLE_TTL_MIN..PARTICLE_TTL_MAX);
            particle.size = rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
        }
    }
}
