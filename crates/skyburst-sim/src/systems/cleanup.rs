//! Cleanup: compacts dead entities, rate-limited.
//!
//! Dead entities are already excluded from every pass by their liveness
//! flag, so compaction runs on a fixed simulated-time interval instead of
//! every tick. ECS entities are despawned outright through the
//! pre-allocated buffer; pooled shots and particles return to the store.

use hecs::{Entity, World};

use skyburst_core::components::Lifecycle;
use skyburst_core::constants::CLEANUP_INTERVAL_SECS;

use crate::context::SimContext;

pub fn run(world: &mut World, ctx: &mut SimContext, despawn_buffer: &mut Vec<Entity>) {
    let now = ctx.time.elapsed_secs;
    if now - ctx.last_cleanup_secs < CLEANUP_INTERVAL_SECS {
        return;
    }
    ctx.last_cleanup_secs = now;

    despawn_buffer.clear();
    for (entity, lifecycle) in world.query_mut::<&Lifecycle>() {
        if !lifecycle.alive {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    ctx.shots.release_where(|shot| !shot.alive);
    ctx.particles.release_where(|particle| !particle.alive);
}
