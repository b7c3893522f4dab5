//! Spawn cadence: feeds the field with targets and hostiles.
//!
//! Regular waves spawn targets on a cadence that tightens with wave and
//! level; hostiles join from HOSTILE_MIN_WAVE. A boss wave spawns its
//! hostile pack up front and suppresses regular spawning until cleared.

use hecs::World;

use skyburst_core::constants::*;

use crate::context::SimContext;
use crate::world_setup;

pub fn run(world: &mut World, ctx: &mut SimContext) {
    let now = ctx.time.elapsed_secs;

    if ctx.wave.is_boss_wave() {
        if !ctx.wave.boss_spawned() {
            for _ in 0..BOSS_PACK_SIZE {
                world_setup::spawn_hostile(world, &mut ctx.rng, now, true);
            }
            ctx.wave.mark_boss_spawned();
        }
        return;
    }

    let scale = cadence_scale(ctx.wave.wave, ctx.player.level);

    if now >= ctx.next_target_spawn_secs {
        world_setup::spawn_target(world, &mut ctx.rng);
        let interval = (TARGET_SPAWN_INTERVAL_SECS / scale).max(MIN_SPAWN_INTERVAL_SECS);
        ctx.next_target_spawn_secs = now + interval;
    }

    let hostiles_unlocked = ctx.wave.wave >= HOSTILE_MIN_WAVE || ctx.player.level > 1;
    if hostiles_unlocked && now >= ctx.next_hostile_spawn_secs {
        world_setup::spawn_hostile(world, &mut ctx.rng, now, false);
        let interval =
            (HOSTILE_SPAWN_INTERVAL_SECS / scale).max(MIN_SPAWN_INTERVAL_SECS * 4.0);
        ctx.next_hostile_spawn_secs = now + interval;
    }
}

/// Difficulty scale: grows with waves survived across levels.
fn cadence_scale(wave: u32, level: u32) -> f64 {
    let waves_survived = (wave - 1) + (level - 1) * BOSS_INTERVAL;
    1.0 + SPAWN_RATE_GROWTH * waves_survived as f64
}
