//! Collision resolution and gesture hit-testing.
//!
//! Player shots test hostiles first (priority), then targets; a shot
//! resolves at most one hit per tick. Hostile shots that cross the near
//! boundary breach the perimeter. Candidate lists are snapshotted at the
//! start of the pass, so collection membership is stable within it.

use hecs::World;

use skyburst_core::components::*;
use skyburst_core::constants::*;
use skyburst_core::enums::{BreachKind, PowerUpKind};
use skyburst_core::events::FeedbackEvent;
use skyburst_core::math::point_segment_distance;
use skyburst_core::types::Position;

use crate::context::SimContext;
use crate::systems::combat;

enum ShotHit {
    Hostile(hecs::Entity),
    Target(hecs::Entity),
}

pub fn run(world: &mut World, ctx: &mut SimContext) {
    resolve_player_shots(world, ctx);
    resolve_perimeter_breaches(world, ctx);
}

fn resolve_player_shots(world: &mut World, ctx: &mut SimContext) {
    let hostiles = live_hostiles(world);
    let targets = live_targets(world);
    if hostiles.is_empty() && targets.is_empty() {
        return;
    }

    let mut resolved: Vec<(usize, ShotHit)> = Vec::new();
    for (idx, shot) in ctx.shots.iter_active() {
        if !shot.alive {
            continue;
        }
        // Hostile precedence; nearest in range within a category wins.
        let mut best: Option<(f64, ShotHit)> = None;
        for &(entity, pos, half_width) in &hostiles {
            let dist = shot.pos.range_to(&pos);
            if dist <= half_width + HIT_MARGIN
                && best.as_ref().map_or(true, |(d, _)| dist < *d)
            {
                best = Some((dist, ShotHit::Hostile(entity)));
            }
        }
        if best.is_none() {
            for &(entity, pos, radius) in &targets {
                let dist = shot.pos.range_to(&pos);
                if dist <= radius + HIT_MARGIN
                    && best.as_ref().map_or(true, |(d, _)| dist < *d)
                {
                    best = Some((dist, ShotHit::Target(entity)));
                }
            }
        }
        if let Some((_, hit)) = best {
            resolved.push((idx, hit));
        }
    }

    for (idx, hit) in resolved {
        // The shot dies with its single hit.
        let damage = match ctx.shots.get_mut(idx) {
            Some(shot) if shot.alive => {
                shot.alive = false;
                shot.damage
            }
            _ => continue,
        };
        match hit {
            ShotHit::Hostile(entity) => {
                combat::hit_hostile(world, ctx, entity, damage);
            }
            ShotHit::Target(entity) => {
                combat::hit_target(world, ctx, entity, damage);
            }
        }
    }
}

fn resolve_perimeter_breaches(world: &mut World, ctx: &mut SimContext) {
    for (_entity, (_shot, pos, lifecycle, projectile)) in
        world.query_mut::<(&HostileShot, &Position, &mut Lifecycle, &ProjectileBody)>()
    {
        if !lifecycle.alive || pos.z < NEAR_BOUNDARY_Z {
            continue;
        }
        lifecycle.alive = false;

        let damage = if ctx.powerup.is_active(PowerUpKind::Shield) {
            projectile.damage * SHIELD_DAMAGE_FACTOR
        } else {
            projectile.damage
        };
        let failed = ctx.player.apply_breach_damage(damage);
        ctx.events.push(FeedbackEvent::PerimeterBreach {
            kind: BreachKind::HostileShot,
            shield_remaining: ctx.player.shield,
        });
        ctx.events.push(FeedbackEvent::CameraShake {
            intensity: (damage / 25.0).clamp(0.3, 1.0),
        });
        if failed {
            ctx.signal_game_over();
        }
    }
}

/// Tap hit-test: one hit to the nearest live target within its radius
/// plus the tap margin. Returns whether anything was hit.
pub fn tap_hit(world: &mut World, ctx: &mut SimContext, point: Position) -> bool {
    let mut best: Option<(f64, hecs::Entity)> = None;
    {
        let mut query = world.query::<(&Target, &Position, &Lifecycle, &TargetBody)>();
        for (entity, (_target, pos, lifecycle, body)) in query.iter() {
            if !lifecycle.alive {
                continue;
            }
            let dist = point.range_to(pos);
            if dist <= body.radius + TAP_MARGIN && best.map_or(true, |(d, _)| dist < d) {
                best = Some((dist, entity));
            }
        }
    }
    match best {
        Some((_, entity)) => {
            combat::hit_target(world, ctx, entity, 1);
            true
        }
        None => false,
    }
}

/// Beam corridor sweep: one hit to every live hostile and target within
/// the beam half-width of the segment. Hostiles resolve first. Returns
/// the number of entities hit.
pub fn beam_sweep(world: &mut World, ctx: &mut SimContext, start: Position, end: Position) -> u32 {
    let hostiles: Vec<hecs::Entity> = live_hostiles(world)
        .into_iter()
        .filter(|(_, pos, half_width)| {
            point_segment_distance(pos, &start, &end) <= half_width + BEAM_HALF_WIDTH
        })
        .map(|(entity, _, _)| entity)
        .collect();
    let targets: Vec<hecs::Entity> = live_targets(world)
        .into_iter()
        .filter(|(_, pos, radius)| {
            point_segment_distance(pos, &start, &end) <= radius + BEAM_HALF_WIDTH
        })
        .map(|(entity, _, _)| entity)
        .collect();

    let mut hits = 0;
    for entity in hostiles {
        combat::hit_hostile(world, ctx, entity, 1);
        hits += 1;
    }
    for entity in targets {
        combat::hit_target(world, ctx, entity, 1);
        hits += 1;
    }
    hits
}

/// Snapshot of live hostiles: (entity, position, half-width).
fn live_hostiles(world: &World) -> Vec<(hecs::Entity, Position, f64)> {
    world
        .query::<(&Hostile, &Position, &Lifecycle, &HostileBody)>()
        .iter()
        .filter(|(_, (_, _, lifecycle, _))| lifecycle.alive)
        .map(|(entity, (_, pos, _, body))| (entity, *pos, body.half_width))
        .collect()
}

/// Snapshot of live targets: (entity, position, radius).
fn live_targets(world: &World) -> Vec<(hecs::Entity, Position, f64)> {
    world
        .query::<(&Target, &Position, &Lifecycle, &TargetBody)>()
        .iter()
        .filter(|(_, (_, _, lifecycle, _))| lifecycle.alive)
        .map(|(entity, (_, pos, _, body))| (entity, *pos, body.radius))
        .collect()
}
