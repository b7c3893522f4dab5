#[cfg(test)]
mod tests {
    use skyburst_core::constants::*;
    use skyburst_core::enums::{PowerUpKind, TargetKind};

    use crate::player::PlayerState;
    use crate::powerup::PowerUpState;
    use crate::wave::{WaveOutcome, WaveState};

    // ---- PlayerState ----

    #[test]
    fn test_award_increments_combo_and_score() {
        let mut player = PlayerState::new();
        let p1 = player.award_target(TargetKind::Normal, 100, 0.0);
        assert_eq!(p1, 100, "combo 0 at near plane scores base");
        assert_eq!(player.combo, 1);

        let p2 = player.award_target(TargetKind::Normal, 100, 0.0);
        assert_eq!(p2, 110, "combo 1 applies 1.1x");
        assert_eq!(player.score, 210);
        assert_eq!(player.max_combo, 2);
    }

    #[test]
    fn test_miss_breaks_combo_next_award_unmultiplied() {
        let mut player = PlayerState::new();
        for _ in 0..5 {
            player.award_target(TargetKind::Normal, 100, 0.0);
        }
        assert_eq!(player.combo, 5);

        player.register_miss();
        assert_eq!(player.combo, 0);
        assert_eq!(player.missed, 1);

        let p = player.award_target(TargetKind::Normal, 100, 0.0);
        assert_eq!(p, 100, "post-miss award uses combo multiplier 1.0");
        assert_eq!(player.max_combo, 5, "max combo survives the break");
    }

    #[test]
    fn test_breach_breaks_combo_and_drains_shield() {
        let mut player = PlayerState::new();
        player.award_hostile(500, -100.0);
        assert_eq!(player.combo, 1);

        player.apply_breach_damage(HOSTILE_SHOT_DAMAGE);
        assert_eq!(player.combo, 0);
        assert!((player.shield - (MAX_SHIELD - HOSTILE_SHOT_DAMAGE)).abs() < 1e-9);

        // Negative damage clamps to zero drain.
        let before = player.shield;
        player.apply_breach_damage(-50.0);
        assert!((player.shield - before).abs() < 1e-12);
    }

    #[test]
    fn test_miss_threshold_fails_exactly_once() {
        let mut player = PlayerState::new();
        let mut signals = 0;
        for _ in 0..MAX_MISSES + 5 {
            if player.register_miss() {
                signals += 1;
            }
        }
        assert_eq!(signals, 1, "failure threshold signals exactly once");
        assert!(player.is_failed());
    }

    #[test]
    fn test_shield_exhaustion_fails_exactly_once() {
        let mut player = PlayerState::new();
        let mut signals = 0;
        for _ in 0..20 {
            if player.apply_breach_damage(MAX_SHIELD / 4.0) {
                signals += 1;
            }
        }
        assert_eq!(signals, 1);
        assert_eq!(player.shield, 0.0);
    }

    #[test]
    fn test_chain_bonus_scales() {
        let mut player = PlayerState::new();
        assert_eq!(player.award_chain(), CHAIN_BONUS_STEP);
        assert_eq!(player.award_chain(), 2 * CHAIN_BONUS_STEP);
        assert_eq!(player.vortex_chains, 2);
        assert_eq!(player.score, 3 * CHAIN_BONUS_STEP);
    }

    #[test]
    fn test_depth_bonus_earned_accumulates() {
        let mut player = PlayerState::new();
        // At full depth, combo 0: scored 300, base contribution 100.
        player.award_target(TargetKind::Normal, 100, -MAX_DEPTH);
        assert_eq!(player.depth_bonus_earned, 200);
    }

    #[test]
    fn test_shield_restore_clamped() {
        let mut player = PlayerState::new();
        player.apply_breach_damage(10.0);
        player.restore_shield(SHIELD_RESTORE);
        assert!((player.shield - MAX_SHIELD).abs() < 1e-9, "restore clamps at max");
    }

    #[test]
    fn test_category_counters() {
        let mut player = PlayerState::new();
        player.award_target(TargetKind::Normal, 100, 0.0);
        player.award_target(TargetKind::Armored, 250, 0.0);
        player.award_target(TargetKind::PowerUp, 150, 0.0);
        player.award_hostile(500, 0.0);
        assert_eq!(player.stats.targets, 1);
        assert_eq!(player.stats.armored, 1);
        assert_eq!(player.stats.power_up_targets, 1);
        assert_eq!(player.stats.hostiles, 1);
    }

    // ---- PowerUpState ----

    #[test]
    fn test_powerup_no_stacking() {
        let mut powerup = PowerUpState::new();
        assert_eq!(powerup.activate(PowerUpKind::RapidFire, 0.0), None);
        assert!(powerup.is_active(PowerUpKind::RapidFire));

        // Activating another returns the prior kind for its deactivation effect.
        let prior = powerup.activate(PowerUpKind::Vortex, 2.0);
        assert_eq!(prior, Some(PowerUpKind::RapidFire));
        assert!(powerup.is_active(PowerUpKind::Vortex));
    }

    #[test]
    fn test_powerup_expiry() {
        let mut powerup = PowerUpState::new();
        powerup.activate(PowerUpKind::Shield, 10.0);
        assert_eq!(powerup.expire_if_due(10.0 + SHIELD_DURATION_SECS - 0.1), None);
        assert_eq!(
            powerup.expire_if_due(10.0 + SHIELD_DURATION_SECS),
            Some(PowerUpKind::Shield)
        );
        // Already expired: nothing further.
        assert_eq!(powerup.expire_if_due(100.0), None);
        assert_eq!(powerup.active_kind(), None);
    }

    #[test]
    fn test_powerup_remaining_fraction() {
        let mut powerup = PowerUpState::new();
        powerup.activate(PowerUpKind::Vortex, 0.0);
        let half = VORTEX_DURATION_SECS / 2.0;
        let frac = powerup.remaining_fraction(half).unwrap();
        assert!((frac - 0.5).abs() < 1e-9);
        assert_eq!(powerup.remaining_fraction(VORTEX_DURATION_SECS * 2.0), Some(0.0));
    }

    #[test]
    fn test_powerup_durations_positive() {
        for kind in [
            PowerUpKind::RapidFire,
            PowerUpKind::SpreadShot,
            PowerUpKind::Shield,
            PowerUpKind::Vortex,
            PowerUpKind::Drone,
        ] {
            assert!(PowerUpState::duration_secs(kind) > 0.0);
        }
    }

    // ---- WaveState ----

    #[test]
    fn test_wave_advances_on_duration() {
        let mut wave = WaveState::new(0.0);
        // Tick through just over 30 simulated seconds with no kills.
        let mut advances = 0;
        let dt = 1.0 / 60.0;
        let mut now = 0.0;
        for _ in 0..(30 * 60 + 5) {
            now += dt;
            if let Some(WaveOutcome::Advanced { .. }) = wave.evaluate(now, 0) {
                advances += 1;
            }
        }
        assert_eq!(advances, 1, "wave increments exactly once after 30s");
        assert_eq!(wave.wave, 2);
    }

    #[test]
    fn test_wave_advances_on_kill_quota() {
        let mut wave = WaveState::new(0.0);
        for _ in 0..BASE_KILLS_REQUIRED {
            wave.record_kill();
        }
        let outcome = wave.evaluate(1.0, 0);
        assert!(matches!(outcome, Some(WaveOutcome::Advanced { wave: 2, .. })));
        assert_eq!(wave.required_kills, BASE_KILLS_REQUIRED + KILLS_INCREMENT);
        assert_eq!(wave.kills_this_wave, 0);
    }

    #[test]
    fn test_quota_grows_monotonically() {
        let mut wave = WaveState::new(0.0);
        let mut prev_quota = wave.required_kills;
        let mut now = 0.0;
        for _ in 0..3 {
            now += WAVE_DURATION_SECS + 1.0;
            wave.evaluate(now, 0);
            assert!(wave.required_kills > prev_quota);
            prev_quota = wave.required_kills;
        }
    }

    #[test]
    fn test_boss_wave_ignores_duration_and_quota() {
        let mut wave = WaveState::new(0.0);
        let mut now = 0.0;
        // Advance to the boss wave.
        while !wave.is_boss_wave() {
            now += WAVE_DURATION_SECS + 1.0;
            wave.evaluate(now, 0);
        }
        assert_eq!(wave.wave, BOSS_INTERVAL);

        // Boss pack not yet spawned: zero hostiles must not clear it.
        now += WAVE_DURATION_SECS * 3.0;
        assert_eq!(wave.evaluate(now, 0), None);

        wave.mark_boss_spawned();
        // Hostiles still alive: holds.
        assert_eq!(wave.evaluate(now, 2), None);
        // All hostiles down: level complete.
        assert_eq!(wave.evaluate(now, 0), Some(WaveOutcome::LevelComplete));
    }

    #[test]
    fn test_start_level_resets_wave() {
        let mut wave = WaveState::new(0.0);
        let mut now = 0.0;
        for _ in 0..3 {
            now += WAVE_DURATION_SECS + 1.0;
            wave.evaluate(now, 0);
        }
        wave.start_level(now, 2);
        assert_eq!(wave.wave, 1);
        assert_eq!(wave.kills_this_wave, 0);
        assert_eq!(
            wave.required_kills,
            BASE_KILLS_REQUIRED + KILLS_INCREMENT,
            "level 2 quota carries the per-level increment"
        );
        assert!(!wave.boss_spawned());
    }
}
