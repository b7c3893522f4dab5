//! Support drone behavior: orbit the player's aim point and auto-fire.
//!
//! Target selection prioritizes hostiles over targets, then nearest.
//! The drone fires player-owned shots from the pooled store.

use std::f64::consts::TAU;

use hecs::World;

use skyburst_core::components::*;
use skyburst_core::types::Position;

use crate::context::SimContext;
use crate::world_setup;

pub fn run(world: &mut World, ctx: &mut SimContext, dt: f64) {
    let now = ctx.time.elapsed_secs;

    // Orbit update; collect muzzle positions for drones whose cooldown elapsed.
    let mut firing: Vec<Position> = Vec::new();
    for (_entity, (_drone, pos, lifecycle, body)) in
        world.query_mut::<(&SupportDrone, &mut Position, &Lifecycle, &mut DroneBody)>()
    {
        if !lifecycle.alive {
            continue;
        }
        body.orbit_angle = (body.orbit_angle + body.orbit_speed * dt) % TAU;
        pos.x = ctx.aim_point.x + body.orbit_radius * body.orbit_angle.cos();
        pos.y = ctx.aim_point.y + body.orbit_radius * body.orbit_angle.sin();
        pos.z = ctx.aim_point.z;

        if now - body.last_fire_secs >= body.fire_interval_secs {
            body.last_fire_secs = now;
            firing.push(*pos);
        }
    }

    for origin in firing {
        if let Some(target_pos) = select_target(world, &origin) {
            let dir = origin.direction_to(&target_pos);
            world_setup::spawn_player_shot(&mut ctx.shots, origin, dir);
        }
    }
}

/// Pick a victim position: nearest live hostile, else nearest live target.
fn select_target(world: &World, from: &Position) -> Option<Position> {
    let mut best: Option<(f64, Position)> = None;
    for (_entity, (_hostile, pos, lifecycle)) in
        world.query::<(&Hostile, &Position, &Lifecycle)>().iter()
    {
        if !lifecycle.alive {
            continue;
        }
        let dist = from.range_to(pos);
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, *pos));
        }
    }
    if best.is_some() {
        return best.map(|(_, pos)| pos);
    }

    for (_entity, (_target, pos, lifecycle)) in
        world.query::<(&Target, &Position, &Lifecycle)>().iter()
    {
        if !lifecycle.alive {
            continue;
        }
        let dist = from.range_to(pos);
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, *pos));
        }
    }
    best.map(|(_, pos)| pos)
}
