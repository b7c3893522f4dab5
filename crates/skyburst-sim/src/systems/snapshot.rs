//! Snapshot system: builds the complete GameStateSnapshot for the frontend.
//!
//! Read-only — it never modifies the world or the context.

use hecs::World;

use skyburst_core::components::*;
use skyburst_core::enums::{EntityClass, GamePhase, TargetKind};
use skyburst_core::events::FeedbackEvent;
use skyburst_core::state::{EntityView, GameStateSnapshot, HudView, PowerUpView};
use skyburst_core::types::Position;

use crate::context::SimContext;

pub fn build_snapshot(
    world: &World,
    ctx: &SimContext,
    phase: GamePhase,
    events: Vec<FeedbackEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase,
        hud: build_hud(ctx),
        entities: build_entities(world, ctx),
        events,
    }
}

fn build_hud(ctx: &SimContext) -> HudView {
    HudView {
        score: ctx.player.score,
        level: ctx.player.level,
        wave: ctx.wave.wave,
        boss_wave: ctx.wave.is_boss_wave(),
        missed: ctx.player.missed,
        shield_pct: ctx.player.shield_fraction(),
        combo: ctx.player.combo,
        max_combo: ctx.player.max_combo,
        power_up: ctx.powerup.active_kind().map(|kind| PowerUpView {
            kind,
            name: kind.name().to_string(),
            remaining_fraction: ctx
                .powerup
                .remaining_fraction(ctx.time.elapsed_secs)
                .unwrap_or(0.0),
        }),
    }
}

fn build_entities(world: &World, ctx: &SimContext) -> Vec<EntityView> {
    let mut views = Vec::new();

    for (_e, (_t, pos, lifecycle, body, spin)) in world
        .query::<(&Target, &Position, &Lifecycle, &TargetBody, &Spin)>()
        .iter()
    {
        if !lifecycle.alive {
            continue;
        }
        let class = match body.kind {
            TargetKind::Normal => EntityClass::Target,
            TargetKind::Armored => EntityClass::ArmoredTarget,
            TargetKind::PowerUp => EntityClass::PowerUpTarget,
        };
        views.push(EntityView {
            class,
            position: *pos,
            rotation: spin_rotation(spin, lifecycle.age_secs),
            scale: body.radius,
            opacity: 1.0,
        });
    }

    for (_e, (_h, pos, lifecycle, body, spin)) in world
        .query::<(&Hostile, &Position, &Lifecycle, &HostileBody, &Spin)>()
        .iter()
    {
        if !lifecycle.alive {
            continue;
        }
        views.push(EntityView {
            class: EntityClass::Hostile,
            position: *pos,
            rotation: spin_rotation(spin, lifecycle.age_secs),
            scale: body.half_width,
            opacity: 1.0,
        });
    }

    for (_e, (_s, pos, lifecycle)) in world
        .query::<(&HostileShot, &Position, &Lifecycle)>()
        .iter()
    {
        if !lifecycle.alive {
            continue;
        }
        views.push(EntityView {
            class: EntityClass::HostileShot,
            position: *pos,
            rotation: [0.0; 3],
            scale: 0.5,
            opacity: 1.0,
        });
    }

    for (_e, (_d, pos, lifecycle)) in world
        .query::<(&SupportDrone, &Position, &Lifecycle)>()
        .iter()
    {
        if !lifecycle.alive {
            continue;
        }
        views.push(EntityView {
            class: EntityClass::Drone,
            position: *pos,
            rotation: [0.0; 3],
            scale: 1.0,
            opacity: 1.0,
        });
    }

    for (_e, (_s, pos, _lifecycle)) in world
        .query::<(&BackgroundStar, &Position, &Lifecycle)>()
        .iter()
    {
        views.push(EntityView {
            class: EntityClass::Star,
            position: *pos,
            rotation: [0.0; 3],
            scale: 0.3,
            opacity: 1.0,
        });
    }

    for (_idx, shot) in ctx.shots.iter_active() {
        if !shot.alive {
            continue;
        }
        views.push(EntityView {
            class: EntityClass::PlayerShot,
            position: shot.pos,
            rotation: [0.0; 3],
            scale: 0.5,
            opacity: 1.0,
        });
    }

    for (_idx, particle) in ctx.particles.iter_active() {
        if !particle.alive {
            continue;
        }
        // Particles fade and shrink over their lifespan.
        let life = particle.life_fraction();
        views.push(EntityView {
            class: EntityClass::Particle,
            position: particle.pos,
            rotation: [0.0; 3],
            scale: particle.size * life,
            opacity: life,
        });
    }

    views
}

fn spin_rotation(spin: &Spin, age_secs: f64) -> [f64; 3] {
    [spin.x * age_secs, spin.y * age_secs, spin.z * age_secs]
}
