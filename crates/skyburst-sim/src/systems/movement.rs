//! Kinematic integration and lifecycle evaluation.
//!
//! Per entity, in order: advance age, integrate position by velocity·dt,
//! apply type-specific secondary motion (bob / weave / gravity / wrap),
//! then evaluate destruction conditions. A target crossing the near
//! boundary alive is a miss: combo breaks and the miss counter bumps
//! before any score event later in the same tick.

use hecs::World;

use skyburst_core::components::*;
use skyburst_core::constants::*;
use skyburst_core::enums::BreachKind;
use skyburst_core::events::FeedbackEvent;
use skyburst_core::types::{Position, Velocity};

use crate::context::SimContext;

pub fn run(world: &mut World, ctx: &mut SimContext, dt: f64) {
    update_targets(world, ctx, dt);
    update_hostiles(world, dt);
    update_hostile_shots(world, dt);
    update_stars(world, dt);
    update_drones(world, dt);
    update_player_shots(ctx, dt);
    update_particles(ctx, dt);
}

fn update_targets(world: &mut World, ctx: &mut SimContext, dt: f64) {
    for (_entity, (_target, pos, vel, lifecycle, body)) in world.query_mut::<(
        &Target,
        &mut Position,
        &Velocity,
        &mut Lifecycle,
        &TargetBody,
    )>() {
        if !lifecycle.alive {
            continue;
        }
        lifecycle.age_secs += dt;
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;

        // Vertical bob layered on translation, applied as a positional
        // delta so the sinusoid never needs separate bookkeeping.
        let t1 = body.bob_frequency * lifecycle.age_secs + body.bob_phase;
        let t0 = body.bob_frequency * (lifecycle.age_secs - dt) + body.bob_phase;
        pos.y += body.bob_amplitude * (t1.sin() - t0.sin());

        // Boundary exit while alive: perimeter breach by escape.
        if pos.z >= NEAR_BOUNDARY_Z {
            lifecycle.alive = false;
            let failed = ctx.player.register_miss();
            ctx.events.push(FeedbackEvent::TargetMissed {
                position: *pos,
                missed: ctx.player.missed,
            });
            ctx.events.push(FeedbackEvent::PerimeterBreach {
                kind: BreachKind::MissedTarget,
                shield_remaining: ctx.player.shield,
            });
            if failed {
                ctx.signal_game_over();
            }
        }
    }
}

fn update_hostiles(world: &mut World, dt: f64) {
    for (_entity, (_hostile, pos, vel, lifecycle, body)) in world.query_mut::<(
        &Hostile,
        &mut Position,
        &mut Velocity,
        &mut Lifecycle,
        &HostileBody,
    )>() {
        if !lifecycle.alive {
            continue;
        }
        lifecycle.age_secs += dt;
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;

        // Lateral weave.
        let t1 = body.weave_frequency * lifecycle.age_secs + body.weave_phase;
        let t0 = body.weave_frequency * (lifecycle.age_secs - dt) + body.weave_phase;
        pos.x += body.weave_amplitude * (t1.sin() - t0.sin());

        // Hold at the standoff depth and keep firing from there.
        if pos.z >= HOSTILE_STANDOFF_Z && vel.z != 0.0 {
            pos.z = HOSTILE_STANDOFF_Z;
            vel.z = 0.0;
        }
    }
}

fn update_hostile_shots(world: &mut World, dt: f64) {
    for (_entity, (_shot, pos, vel, lifecycle)) in
        world.query_mut::<(&HostileShot, &mut Position, &Velocity, &mut Lifecycle)>()
    {
        if !lifecycle.alive {
            continue;
        }
        lifecycle.age_secs += dt;
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
        if lifecycle.expired() {
            lifecycle.alive = false;
        }
    }
}

fn update_stars(world: &mut World, dt: f64) {
    let span = NEAR_BOUNDARY_Z - SPAWN_DEPTH_MIN;
    for (_entity, (_star, pos, vel, lifecycle)) in
        world.query_mut::<(&BackgroundStar, &mut Position, &Velocity, &mut Lifecycle)>()
    {
        lifecycle.age_secs += dt;
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        pos.z += vel.z * dt;
        // Stars wrap to the far plane instead of dying.
        if pos.z >= NEAR_BOUNDARY_Z {
            pos.z -= span;
        }
    }
}

fn update_drones(world: &mut World, dt: f64) {
    // Orbit position is driven by the drone system; only age advances here.
    for (_entity, (_drone, lifecycle)) in world.query_mut::<(&SupportDrone, &mut Lifecycle)>() {
        if lifecycle.alive {
            lifecycle.age_secs += dt;
        }
    }
}

fn update_player_shots(ctx: &mut SimContext, dt: f64) {
    for (_idx, shot) in ctx.shots.iter_active_mut() {
        if !shot.alive {
            continue;
        }
        shot.age_secs += dt;
        shot.pos.x += shot.vel.x * dt;
        shot.pos.y += shot.vel.y * dt;
        shot.pos.z += shot.vel.z * dt;

        let out_of_volume = shot.pos.z < SPAWN_DEPTH_MIN - 20.0
            || shot.pos.z > CAMERA_Z
            || shot.pos.x.abs() > FIELD_HALF_WIDTH * 2.0
            || shot.pos.y.abs() > FIELD_HALF_HEIGHT * 2.0;
        if shot.age_secs >= shot.ttl_secs || out_of_volume {
            shot.alive = false;
        }
    }
}

fn update_particles(ctx: &mut SimContext, dt: f64) {
    for (_idx, particle) in ctx.particles.iter_active_mut() {
        if !particle.alive {
            continue;
        }
        particle.age_secs += dt;
        particle.vel.y -= PARTICLE_GRAVITY * dt;
        particle.pos.x += particle.vel.x * dt;
        particle.pos.y += particle.vel.y * dt;
        particle.pos.z += particle.vel.z * dt;
        if particle.age_secs >= particle.ttl_secs {
            particle.alive = false;
        }
    }
}
