//! Hostile fire cadence: each live hostile inside the active volume fires
//! an aimed shot once its cooldown elapses. Cadence timestamps are in
//! simulated time, so pausing never produces a burst on resume.

use hecs::World;
use rand::Rng;

use skyburst_core::components::{Hostile, HostileBody, Lifecycle};
use skyburst_core::constants::*;
use skyburst_core::types::{Position, Velocity};

use crate::context::SimContext;
use crate::world_setup;

pub fn run(world: &mut World, ctx: &mut SimContext) {
    let now = ctx.time.elapsed_secs;

    // Buffer spawns; the world is borrowed by the query.
    let mut spawns: Vec<(Position, Velocity)> = Vec::new();
    for (_entity, (_hostile, pos, lifecycle, body)) in
        world.query_mut::<(&Hostile, &Position, &Lifecycle, &mut HostileBody)>()
    {
        if !lifecycle.alive {
            continue;
        }
        // Not yet inside the active volume.
        if pos.z < SPAWN_DEPTH_MAX {
            continue;
        }
        if now - body.last_fire_secs < body.fire_interval_secs {
            continue;
        }
        body.last_fire_secs = now;

        // Aim at the perimeter center with a little scatter.
        let aim = Position::new(
            ctx.rng.gen_range(-FIELD_HALF_WIDTH / 4.0..FIELD_HALF_WIDTH / 4.0),
            ctx.rng.gen_range(-FIELD_HALF_HEIGHT / 4.0..FIELD_HALF_HEIGHT / 4.0),
            NEAR_BOUNDARY_Z,
        );
        let dir = pos.direction_to(&aim);
        spawns.push((*pos, Velocity::along(dir, HOSTILE_SHOT_SPEED)));
    }

    for (pos, vel) in spawns {
        world_setup::spawn_hostile_shot(world, pos, vel);
    }
}
