//! Tests for the simulation engine: determinism, entity lifecycle,
//! collision priority, scoring, power-ups, waves, and cleanup.

use skyburst_core::commands::PlayerCommand;
use skyburst_core::components::{HostileBody, Lifecycle, TargetBody};
use skyburst_core::constants::*;
use skyburst_core::enums::{GamePhase, PowerUpKind};
use skyburst_core::events::FeedbackEvent;
use skyburst_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};

fn started_engine(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig { seed });
    engine.queue_command(PlayerCommand::StartGame);
    engine.step();
    engine
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 12345 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 12345 });

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    for _ in 0..300 {
        let snap_a = engine_a.step();
        let snap_b = engine_b.step();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 111 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 222 });

    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    // Star field and target spawns are seeded; output diverges quickly.
    let mut diverged = false;
    for _ in 0..100 {
        let snap_a = engine_a.step();
        let snap_b = engine_b.step();
        if serde_json::to_string(&snap_a).unwrap() != serde_json::to_string(&snap_b).unwrap() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Tick timing & phase gating ----

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut engine = started_engine(42);
    let start_tick = engine.time().tick;
    for _ in 0..60 {
        engine.step();
    }
    assert_eq!(engine.time().tick - start_tick, 60);
    assert!(
        (engine.time().elapsed_secs - (start_tick as f64 + 60.0) * DT).abs() < 1e-9,
        "60 ticks at nominal rate should be one second"
    );
}

#[test]
fn test_delta_time_clamped_to_30fps_floor() {
    let mut engine = started_engine(42);
    let before = engine.time().elapsed_secs;
    // A 10-second stall must not become 10 seconds of simulated time.
    engine.tick(10.0);
    let advanced = engine.time().elapsed_secs - before;
    assert!(
        (advanced - MAX_DT).abs() < 1e-12,
        "dt should clamp to MAX_DT, advanced {advanced}"
    );

    // Garbage dt falls back to the nominal step.
    let before = engine.time().elapsed_secs;
    engine.tick(f64::NAN);
    assert!((engine.time().elapsed_secs - before - DT).abs() < 1e-12);
}

#[test]
fn test_menu_phase_runs_nothing() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.step();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert!(snap.entities.is_empty());
    assert_eq!(engine.time().tick, 0);
}

#[test]
fn test_pause_stops_simulation() {
    let mut engine = started_engine(42);
    for _ in 0..10 {
        engine.step();
    }
    let frozen = engine.time().tick;

    engine.queue_command(PlayerCommand::Pause);
    for _ in 0..10 {
        engine.step();
    }
    assert_eq!(engine.time().tick, frozen, "time must not advance while paused");
    assert_eq!(engine.phase(), GamePhase::Paused);

    engine.queue_command(PlayerCommand::Resume);
    for _ in 0..10 {
        engine.step();
    }
    assert_eq!(engine.time().tick, frozen + 10);
    assert_eq!(engine.phase(), GamePhase::Playing);
}

#[test]
fn test_start_emits_wave_one() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.step();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, FeedbackEvent::WaveStarted { wave: 1, boss: false })));
    // Star field populates the first snapshot.
    assert!(snap.entities.len() >= STAR_COUNT);
}

// ---- End-to-end target lifecycle (miss path) ----

#[test]
fn test_target_crosses_boundary_one_miss_one_destroy() {
    let mut engine = started_engine(7);
    let entity = engine.spawn_test_target(Position::new(0.0, 0.0, -100.0), 10.0);

    // 98 units to the near boundary at 10 u/s: crosses at ~9.8 simulated
    // seconds. Wave-spawned targets can't reach it within 10s.
    let mut missed_events = 0;
    for _ in 0..600 {
        let snap = engine.step();
        missed_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, FeedbackEvent::TargetMissed { .. }))
            .count();
    }

    assert_eq!(missed_events, 1, "exactly one missed event");
    assert_eq!(engine.ctx().player.missed, 1);
    assert_eq!(engine.ctx().player.combo, 0);

    // Destroyed exactly once: dead (and possibly already compacted).
    let alive = engine
        .world()
        .get::<&Lifecycle>(entity)
        .map(|l| l.alive)
        .unwrap_or(false);
    assert!(!alive, "missed target must be dead");
    assert_eq!(engine.ctx().player.score, 0, "misses award nothing");
}

// ---- Tap gesture ----

#[test]
fn test_tap_destroys_and_scores_depth_weighted() {
    let mut engine = started_engine(42);
    let pos = Position::new(5.0, 5.0, -50.0);
    let entity = engine.spawn_test_target(pos, 0.0);

    assert!(engine.handle_tap(pos), "tap on a live target hits");
    // depth_bonus(-50) = 1.5, combo 0: floor(100 * 1.5 * 1.0) = 150.
    assert_eq!(engine.ctx().player.score, 150);
    assert_eq!(engine.ctx().player.combo, 1);

    let alive = engine.world().get::<&Lifecycle>(entity).unwrap().alive;
    assert!(!alive);

    // Dead targets are excluded from later hit tests: no double award.
    assert!(!engine.handle_tap(pos));
    assert_eq!(engine.ctx().player.score, 150);
}

#[test]
fn test_tap_misses_empty_space() {
    let mut engine = started_engine(42);
    engine.spawn_test_target(Position::new(30.0, 30.0, -120.0), 0.0);
    assert!(!engine.handle_tap(Position::new(-30.0, -30.0, -40.0)));
    assert_eq!(engine.ctx().player.score, 0);
}

#[test]
fn test_armored_target_takes_multiple_hits() {
    let mut engine = started_engine(42);
    let pos = Position::new(0.0, 10.0, -60.0);
    let entity = engine.spawn_test_target(pos, 0.0);
    // Harden it to an armored profile.
    {
        let mut body = engine.world().get::<&mut TargetBody>(entity).unwrap();
        body.hp = ARMORED_HP;
    }

    for i in 1..=ARMORED_HP {
        assert!(engine.handle_tap(pos), "hit {i} should land");
        let expected_alive = i < ARMORED_HP;
        let alive = engine.world().get::<&Lifecycle>(entity).unwrap().alive;
        assert_eq!(alive, expected_alive, "hp must reach 0 exactly on the last hit");
    }
    assert!(engine.ctx().player.score > 0);
}

// ---- Projectiles & collision priority ----

#[test]
fn test_fire_projectile_spawns_pooled_shot() {
    let mut engine = started_engine(42);
    engine.fire_projectile(Position::new(0.0, 0.0, -5.0), Position::new(0.0, 0.0, -100.0));
    assert_eq!(engine.ctx().shots.active_count(), 1);

    // Cooldown gates an immediate second shot.
    engine.fire_projectile(Position::new(0.0, 0.0, -5.0), Position::new(0.0, 0.0, -100.0));
    assert_eq!(engine.ctx().shots.active_count(), 1);
}

#[test]
fn test_hostile_takes_priority_over_target() {
    let mut engine = started_engine(42);
    let hostile = engine.spawn_test_hostile(Position::new(0.0, 0.0, -50.0));
    let target = engine.spawn_test_target(Position::new(0.0, 1.0, -50.0), 0.0);

    engine.fire_projectile(Position::new(0.0, 0.5, -45.0), Position::new(0.0, 0.5, -50.0));
    for _ in 0..10 {
        engine.step();
    }

    let hostile_hp = engine.world().get::<&HostileBody>(hostile).unwrap().hp;
    assert_eq!(hostile_hp, HOSTILE_HP - 1, "hostile absorbs the hit");

    let target_hp = engine.world().get::<&TargetBody>(target).unwrap().hp;
    assert_eq!(target_hp, TARGET_HP, "target untouched: one hit per shot");
    assert!(
        engine.ctx().shots.iter_active().all(|(_, s)| !s.alive),
        "shot died with its single hit (compaction comes later)"
    );
}

#[test]
fn test_beam_sweeps_corridor() {
    let mut engine = started_engine(42);
    engine.spawn_test_target(Position::new(0.0, 0.0, -40.0), 0.0);
    engine.spawn_test_target(Position::new(1.0, 0.0, -60.0), 0.0);
    engine.spawn_test_target(Position::new(0.0, 1.0, -80.0), 0.0);
    engine.spawn_test_target(Position::new(30.0, 0.0, -60.0), 0.0);

    let hits = engine.fire_beam(Position::new(0.0, 0.0, -20.0), Position::new(0.0, 0.0, -100.0));
    assert_eq!(hits, 3, "three targets in the corridor, the far-off one spared");
    assert_eq!(engine.ctx().player.combo, 3);
}

// ---- Hostile fire & perimeter breach ----

#[test]
fn test_hostile_fire_breaches_shield() {
    let mut engine = started_engine(42);
    engine.spawn_test_hostile(Position::new(0.0, 0.0, -60.0));

    let mut saw_breach = false;
    let mut saw_shake = false;
    for _ in 0..360 {
        let snap = engine.step();
        for event in &snap.events {
            match event {
                FeedbackEvent::PerimeterBreach { .. } => saw_breach = true,
                FeedbackEvent::CameraShake { .. } => saw_shake = true,
                _ => {}
            }
        }
    }

    assert!(saw_breach, "hostile shot should reach the near boundary within 6s");
    assert!(saw_shake, "breach triggers camera shake");
    assert!(engine.ctx().player.shield < MAX_SHIELD);
}

// ---- Power-ups ----

#[test]
fn test_spread_shot_fans_three() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::SpreadShot);
    engine.fire_projectile(Position::new(0.0, 0.0, -5.0), Position::new(0.0, 0.0, -100.0));
    assert_eq!(engine.ctx().shots.active_count(), SPREAD_COUNT as usize);
}

#[test]
fn test_rapid_fire_shortens_cooldown() {
    let origin = Position::new(0.0, 0.0, -5.0);
    let aim = Position::new(0.0, 0.0, -100.0);

    // Without RapidFire, a shot 4 ticks later is still gated.
    let mut engine = started_engine(1);
    engine.fire_projectile(origin, aim);
    for _ in 0..4 {
        engine.step();
    }
    engine.fire_projectile(origin, aim);
    assert_eq!(engine.ctx().shots.active_count(), 1);

    // With RapidFire the same cadence lands both.
    let mut engine = started_engine(1);
    engine.activate_test_powerup(PowerUpKind::RapidFire);
    engine.fire_projectile(origin, aim);
    for _ in 0..4 {
        engine.step();
    }
    engine.fire_projectile(origin, aim);
    assert_eq!(engine.ctx().shots.active_count(), 2);
}

#[test]
fn test_powerup_swap_deactivates_prior_first() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::RapidFire);
    engine.activate_test_powerup(PowerUpKind::Vortex);

    let snap = engine.step();
    let mut deactivated_at = None;
    let mut activated_vortex_at = None;
    for (i, event) in snap.events.iter().enumerate() {
        match event {
            FeedbackEvent::PowerUpDeactivated {
                kind: PowerUpKind::RapidFire,
            } => deactivated_at = Some(i),
            FeedbackEvent::PowerUpActivated {
                kind: PowerUpKind::Vortex,
            } => activated_vortex_at = Some(i),
            _ => {}
        }
    }
    let (d, a) = (deactivated_at.unwrap(), activated_vortex_at.unwrap());
    assert!(d < a, "prior deactivation precedes new activation");
    assert!(engine.ctx().powerup.is_active(PowerUpKind::Vortex));
}

#[test]
fn test_powerup_expires_on_timer() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::Shield);

    let ticks = (SHIELD_DURATION_SECS / DT) as usize + 5;
    let mut saw_deactivation = false;
    for _ in 0..ticks {
        let snap = engine.step();
        if snap.events.iter().any(|e| {
            matches!(
                e,
                FeedbackEvent::PowerUpDeactivated {
                    kind: PowerUpKind::Shield
                }
            )
        }) {
            saw_deactivation = true;
        }
    }
    assert!(saw_deactivation, "shield expires after its duration");
    assert_eq!(engine.ctx().powerup.active_kind(), None);

    let snap = engine.step();
    assert!(snap.hud.power_up.is_none());
}

#[test]
fn test_shield_powerup_restores_and_softens() {
    let mut engine = started_engine(42);
    engine.ctx_mut().player.apply_breach_damage(40.0);
    let drained = engine.ctx().player.shield;

    engine.activate_test_powerup(PowerUpKind::Shield);
    assert!(
        (engine.ctx().player.shield - (drained + SHIELD_RESTORE)).abs() < 1e-9,
        "activation restores shield"
    );
}

#[test]
fn test_drone_powerup_spawns_and_removes() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::Drone);
    engine.step();

    let drones_alive = |engine: &SimulationEngine| {
        use skyburst_core::components::SupportDrone;
        let mut query = engine.world().query::<(&SupportDrone, &Lifecycle)>();
        query.iter().filter(|(_, (_, l))| l.alive).count()
    };
    assert_eq!(drones_alive(&engine), 1);

    // Activating another power-up runs the drone's deactivation effect.
    engine.activate_test_powerup(PowerUpKind::Shield);
    assert_eq!(drones_alive(&engine), 0, "drone removed with its power-up");
}

// ---- Chain reactions ----

#[test]
fn test_vortex_chain_cascades() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::Vortex);

    let origin = Position::new(0.0, 0.0, -50.0);
    engine.spawn_test_target(origin, 0.0);
    let near_a = engine.spawn_test_target(Position::new(4.0, 0.0, -50.0), 0.0);
    let near_b = engine.spawn_test_target(Position::new(0.0, 4.0, -50.0), 0.0);

    assert!(engine.handle_tap(origin));
    assert!(engine.ctx().timers.len() >= 2, "chain hits scheduled");

    // Delays are at most CHAIN_DELAY_MAX_SECS; run well past them.
    for _ in 0..30 {
        engine.step();
    }

    for entity in [near_a, near_b] {
        let alive = engine
            .world()
            .get::<&Lifecycle>(entity)
            .map(|l| l.alive)
            .unwrap_or(false);
        assert!(!alive, "chained neighbor destroyed");
    }
    assert!(engine.ctx().player.vortex_chains >= 1);
    assert!(
        engine.ctx().player.score >= 3 * TARGET_POINTS,
        "all three destructions scored"
    );
}

#[test]
fn test_chain_hit_on_dead_target_is_noop() {
    let mut engine = started_engine(42);
    engine.activate_test_powerup(PowerUpKind::Vortex);

    let origin = Position::new(0.0, 0.0, -50.0);
    let neighbor_pos = Position::new(4.0, 0.0, -50.0);
    engine.spawn_test_target(origin, 0.0);
    engine.spawn_test_target(neighbor_pos, 0.0);

    // Destroy the origin (schedules a delayed hit on the neighbor), then
    // destroy the neighbor before the delayed hit lands.
    assert!(engine.handle_tap(origin));
    assert!(engine.handle_tap(neighbor_pos));
    let stats_before = engine.ctx().player.stats.targets;

    for _ in 0..30 {
        engine.step();
    }

    // The late hit found a dead entity: no extra destruction, no panic.
    assert_eq!(engine.ctx().player.stats.targets, stats_before);
}

#[test]
fn test_no_chain_without_vortex() {
    let mut engine = started_engine(42);
    let origin = Position::new(0.0, 0.0, -50.0);
    engine.spawn_test_target(origin, 0.0);
    engine.spawn_test_target(Position::new(4.0, 0.0, -50.0), 0.0);

    engine.handle_tap(origin);
    assert!(engine.ctx().timers.is_empty(), "no chain scheduling without Vortex");
    assert_eq!(engine.ctx().player.vortex_chains, 0);
}

// ---- Game over ----

#[test]
fn test_miss_threshold_signals_game_over_once() {
    let mut engine = started_engine(42);
    // A wall of targets about to breach: 1 unit from the boundary.
    for i in 0..MAX_MISSES {
        engine.spawn_test_target(Position::new(i as f64 - 10.0, 0.0, -3.0), 10.0);
    }

    let mut game_over_events = 0;
    for _ in 0..30 {
        let snap = engine.step();
        game_over_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, FeedbackEvent::GameOver { .. }))
            .count();
    }

    assert_eq!(game_over_events, 1, "game over fires exactly once");
    assert_eq!(engine.phase(), GamePhase::GameOver);

    // The dead engine stays dead and quiet.
    let frozen = engine.time().tick;
    for _ in 0..10 {
        let snap = engine.step();
        assert!(snap.events.is_empty());
    }
    assert_eq!(engine.time().tick, frozen);
}

#[test]
fn test_restart_resets_session() {
    let mut engine = started_engine(42);
    let pos = Position::new(0.0, 0.0, -50.0);
    engine.spawn_test_target(pos, 0.0);
    engine.handle_tap(pos);
    assert!(engine.ctx().player.score > 0);

    engine.queue_command(PlayerCommand::Restart);
    let snap = engine.step();
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.hud.combo, 0);
    assert_eq!(snap.hud.wave, 1);
    assert_eq!(engine.phase(), GamePhase::Playing);
}

// ---- Waves & levels ----

#[test]
fn test_wave_advances_once_after_duration() {
    let mut engine = started_engine(3);
    let mut wave_two_events = 0;
    for _ in 0..1810 {
        let snap = engine.step();
        wave_two_events += snap
            .events
            .iter()
            .filter(|e| matches!(e, FeedbackEvent::WaveStarted { wave: 2, .. }))
            .count();
    }
    assert_eq!(wave_two_events, 1, "wave 2 starts exactly once after 30s");
    assert!(engine.ctx().wave.wave >= 2);
}

#[test]
fn test_boss_wave_clear_completes_level() {
    let mut engine = started_engine(42);
    // Fast-forward the wave counter to the boss wave.
    engine.ctx_mut().wave.wave = BOSS_INTERVAL;

    engine.step();
    let hostile_count = {
        use skyburst_core::components::Hostile;
        let mut query = engine.world().query::<(&Hostile, &Lifecycle)>();
        query.iter().filter(|(_, (_, l))| l.alive).count()
    };
    assert_eq!(hostile_count as u32, BOSS_PACK_SIZE, "boss pack spawned up front");
    assert_eq!(engine.phase(), GamePhase::Playing, "boss wave holds while pack lives");

    engine.destroy_all_hostiles();
    let snap = engine.step();
    assert_eq!(engine.phase(), GamePhase::LevelComplete);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, FeedbackEvent::LevelComplete { level: 1 })));

    // Simulation holds until acknowledged.
    let frozen = engine.time().tick;
    engine.step();
    assert_eq!(engine.time().tick, frozen);

    engine.queue_command(PlayerCommand::AcknowledgeLevelComplete);
    let snap = engine.step();
    assert_eq!(engine.phase(), GamePhase::Playing);
    assert_eq!(snap.hud.level, 2);
    assert_eq!(snap.hud.wave, 1);
}

// ---- Cleanup ----

#[test]
fn test_cleanup_compacts_dead_entities() {
    let mut engine = started_engine(42);
    let pos = Position::new(0.0, 0.0, -50.0);
    let entity = engine.spawn_test_target(pos, 0.0);
    engine.handle_tap(pos);

    // Dead but not yet compacted.
    assert!(!engine.world().get::<&Lifecycle>(entity).unwrap().alive);

    // Cleanup runs on its simulated-time interval.
    let ticks = (CLEANUP_INTERVAL_SECS / DT) as usize + 10;
    for _ in 0..ticks {
        engine.step();
    }
    assert!(
        engine.world().get::<&Lifecycle>(entity).is_err(),
        "dead entity despawned by cleanup"
    );
}

#[test]
fn test_cleanup_recycles_pooled_shots() {
    let mut engine = started_engine(42);
    engine.fire_projectile(Position::new(0.0, 0.0, -5.0), Position::new(0.0, 0.0, -100.0));
    assert_eq!(engine.ctx().shots.active_count(), 1);

    // The shot expires after its ttl; the next cleanup releases the slot.
    let ticks = (CLEANUP_INTERVAL_SECS / DT) as usize + 10;
    for _ in 0..ticks {
        engine.step();
    }
    assert_eq!(engine.ctx().shots.active_count(), 0);
    assert!(engine.ctx().shots.free_count() > 0);
}

// ---- Snapshot ----

#[test]
fn test_snapshot_hud_reflects_state() {
    let mut engine = started_engine(42);
    let pos = Position::new(0.0, 0.0, -100.0);
    engine.spawn_test_target(pos, 0.0);
    engine.handle_tap(pos);
    engine.activate_test_powerup(PowerUpKind::Vortex);

    let snap = engine.step();
    assert_eq!(snap.hud.score, engine.ctx().player.score);
    assert_eq!(snap.hud.combo, 1);
    assert_eq!(snap.hud.wave, 1);
    assert!((snap.hud.shield_pct - 1.0).abs() < 1e-9);
    let powerup = snap.hud.power_up.expect("active power-up in HUD");
    assert_eq!(powerup.kind, PowerUpKind::Vortex);
    assert_eq!(powerup.name, "Vortex");
    assert!(powerup.remaining_fraction > 0.9);
}

#[test]
fn test_snapshot_particles_fade() {
    let mut engine = started_engine(42);
    let pos = Position::new(0.0, 0.0, -50.0);
    engine.spawn_test_target(pos, 0.0);
    engine.handle_tap(pos);

    // A destruction burst is live right after the hit.
    assert!(engine.ctx().particles.active_count() > 0);
    let snap = engine.step();
    let particles: Vec<_> = snap
        .entities
        .iter()
        .filter(|v| matches!(v.class, skyburst_core::enums::EntityClass::Particle))
        .collect();
    assert!(!particles.is_empty());
    assert!(particles.iter().all(|p| p.opacity > 0.0 && p.opacity <= 1.0));
}
