//! Damage application and destruction side effects.
//!
//! Destroy is idempotent: the liveness flag flips exactly once, and only
//! that transition awards score, bumps counters, emits feedback, and
//! spawns the burst. Hits on dead or despawned entities are silent no-ops
//! — scheduled chain hits routinely race with destruction.

use hecs::World;
use rand::Rng;

use skyburst_core::components::{HostileBody, Lifecycle, SupportDrone, Target, TargetBody};
use skyburst_core::constants::*;
use skyburst_core::enums::{PowerUpKind, TargetKind};
use skyburst_core::events::FeedbackEvent;
use skyburst_core::types::Position;

use crate::context::SimContext;
use crate::timer::TimerAction;
use crate::world_setup;

const POWERUP_CHOICES: [PowerUpKind; 5] = [
    PowerUpKind::RapidFire,
    PowerUpKind::SpreadShot,
    PowerUpKind::Shield,
    PowerUpKind::Vortex,
    PowerUpKind::Drone,
];

/// Apply damage to a target. Returns true iff this hit destroyed it.
pub fn hit_target(world: &mut World, ctx: &mut SimContext, entity: hecs::Entity, damage: u32) -> bool {
    match world.get::<&Lifecycle>(entity) {
        Ok(lifecycle) if lifecycle.alive => {}
        _ => return false,
    }

    let hp = match world.get::<&mut TargetBody>(entity) {
        Ok(mut body) => {
            body.hp = body.hp.saturating_sub(damage);
            body.hp
        }
        Err(_) => return false,
    };

    if hp == 0 {
        destroy_target(world, ctx, entity);
        true
    } else {
        false
    }
}

/// Apply damage to a hostile. Returns true iff this hit destroyed it.
pub fn hit_hostile(world: &mut World, ctx: &mut SimContext, entity: hecs::Entity, damage: u32) -> bool {
    match world.get::<&Lifecycle>(entity) {
        Ok(lifecycle) if lifecycle.alive => {}
        _ => return false,
    }

    let hp = match world.get::<&mut HostileBody>(entity) {
        Ok(mut body) => {
            body.hp = body.hp.saturating_sub(damage);
            body.hp
        }
        Err(_) => return false,
    };

    if hp == 0 {
        destroy_hostile(world, ctx, entity);
        true
    } else {
        false
    }
}

/// Destroy a target: award depth-weighted score, burst, feedback, and
/// power-up / chain-reaction follow-ups. No-op if already dead.
pub fn destroy_target(world: &mut World, ctx: &mut SimContext, entity: hecs::Entity) {
    match world.get::<&mut Lifecycle>(entity) {
        Ok(mut lifecycle) if lifecycle.alive => lifecycle.alive = false,
        _ => return,
    }

    let position = match world.get::<&Position>(entity) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    let (kind, base_points) = match world.get::<&TargetBody>(entity) {
        Ok(body) => (body.kind, body.points),
        Err(_) => return,
    };

    let points = ctx.player.award_target(kind, base_points, position.z);
    ctx.wave.record_kill();
    world_setup::spawn_burst(&mut ctx.particles, &mut ctx.rng, position);
    ctx.events.push(FeedbackEvent::TargetDestroyed {
        position,
        kind,
        points,
        combo: ctx.player.combo,
    });

    if kind == TargetKind::PowerUp {
        let pick = POWERUP_CHOICES[ctx.rng.gen_range(0..POWERUP_CHOICES.len())];
        activate_powerup(world, ctx, pick);
    }

    if ctx.powerup.is_active(PowerUpKind::Vortex) {
        chain_check(world, ctx, position);
    }
}

/// Destroy a hostile: award score, burst, feedback. No-op if already dead.
pub fn destroy_hostile(world: &mut World, ctx: &mut SimContext, entity: hecs::Entity) {
    match world.get::<&mut Lifecycle>(entity) {
        Ok(mut lifecycle) if lifecycle.alive => lifecycle.alive = false,
        _ => return,
    }

    let position = match world.get::<&Position>(entity) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    let base_points = match world.get::<&HostileBody>(entity) {
        Ok(body) => body.points,
        Err(_) => return,
    };

    let points = ctx.player.award_hostile(base_points, position.z);
    ctx.wave.record_kill();
    world_setup::spawn_burst(&mut ctx.particles, &mut ctx.rng, position);
    ctx.events.push(FeedbackEvent::HostileDestroyed { position, points });
}

/// Activate a power-up, deactivating any prior one first (no stacking).
/// Each activation/deactivation effect runs exactly once per transition.
pub fn activate_powerup(world: &mut World, ctx: &mut SimContext, kind: PowerUpKind) {
    let now = ctx.time.elapsed_secs;
    if let Some(prior) = ctx.powerup.activate(kind, now) {
        run_deactivation_effect(world, ctx, prior);
        ctx.events.push(FeedbackEvent::PowerUpDeactivated { kind: prior });
    }

    match kind {
        PowerUpKind::Shield => ctx.player.restore_shield(SHIELD_RESTORE),
        PowerUpKind::Drone => {
            world_setup::spawn_drone(world, ctx.aim_point, now);
        }
        PowerUpKind::RapidFire | PowerUpKind::SpreadShot | PowerUpKind::Vortex => {}
    }
    ctx.events.push(FeedbackEvent::PowerUpActivated { kind });
}

/// The deactivation half of the effect pair.
pub fn run_deactivation_effect(world: &mut World, _ctx: &mut SimContext, kind: PowerUpKind) {
    if kind == PowerUpKind::Drone {
        for (_entity, (_drone, lifecycle)) in world.query_mut::<(&SupportDrone, &mut Lifecycle)>() {
            lifecycle.alive = false;
        }
    }
}

/// Vortex chain reaction: award the scaling bonus and schedule one hit per
/// nearby live target after a short randomized simulated-time delay.
fn chain_check(world: &mut World, ctx: &mut SimContext, origin: Position) {
    let mut neighbors: Vec<hecs::Entity> = Vec::new();
    for (entity, (_target, pos, lifecycle)) in
        world.query_mut::<(&Target, &Position, &Lifecycle)>()
    {
        if lifecycle.alive && origin.range_to(pos) <= CHAIN_RADIUS {
            neighbors.push(entity);
        }
    }
    if neighbors.is_empty() {
        return;
    }

    let bonus = ctx.player.award_chain();
    ctx.events.push(FeedbackEvent::ChainTriggered {
        origin,
        neighbors: neighbors.len() as u32,
        bonus,
    });

    let now = ctx.time.elapsed_secs;
    for entity in neighbors {
        let delay = ctx.rng.gen_range(CHAIN_DELAY_MIN_SECS..CHAIN_DELAY_MAX_SECS);
        ctx.timers
            .schedule(now + delay, TimerAction::ChainHit { target: entity });
    }
}
