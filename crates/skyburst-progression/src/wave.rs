//! Wave and level advancement rules.
//!
//! A wave advances when its duration elapses or its kill quota is met,
//! whichever comes first; the quota grows by a fixed increment each
//! advance. Every BOSS_INTERVAL-th wave is a boss wave: it ignores both
//! conditions and clears only when every hostile is destroyed, completing
//! the level.

use serde::{Deserialize, Serialize};

use skyburst_core::constants::*;

/// Result of a wave evaluation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    /// Advanced to a new wave within the level.
    Advanced { wave: u32, boss: bool },
    /// Boss wave cleared; the level is complete.
    LevelComplete,
}

/// Wave progression state for the current level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveState {
    pub wave: u32,
    pub started_at_secs: f64,
    pub kills_this_wave: u32,
    /// Kill quota; monotonically increasing across advances.
    pub required_kills: u32,
    /// Set once the boss pack has actually spawned, so a boss wave cannot
    /// clear before its hostiles exist.
    boss_spawned: bool,
}

impl WaveState {
    pub fn new(now: f64) -> Self {
        Self {
            wave: 1,
            started_at_secs: now,
            kills_this_wave: 0,
            required_kills: BASE_KILLS_REQUIRED,
            boss_spawned: false,
        }
    }

    /// Reset to wave 1 for the given level. The quota restarts from the
    /// base plus the per-level increment carried forward.
    pub fn start_level(&mut self, now: f64, level: u32) {
        self.wave = 1;
        self.started_at_secs = now;
        self.kills_this_wave = 0;
        self.required_kills = BASE_KILLS_REQUIRED + level.saturating_sub(1) * KILLS_INCREMENT;
        self.boss_spawned = false;
    }

    pub fn is_boss_wave(&self) -> bool {
        self.wave % BOSS_INTERVAL == 0
    }

    pub fn record_kill(&mut self) {
        self.kills_this_wave += 1;
    }

    pub fn mark_boss_spawned(&mut self) {
        self.boss_spawned = true;
    }

    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }

    /// Evaluate the advancement conditions once per tick.
    pub fn evaluate(&mut self, now: f64, hostiles_alive: u32) -> Option<WaveOutcome> {
        if self.is_boss_wave() {
            if self.boss_spawned && hostiles_alive == 0 {
                return Some(WaveOutcome::LevelComplete);
            }
            return None;
        }

        let duration_elapsed = now - self.started_at_secs >= WAVE_DURATION_SECS;
        let quota_met = self.kills_this_wave >= self.required_kills;
        if duration_elapsed || quota_met {
            self.advance(now);
            return Some(WaveOutcome::Advanced {
                wave: self.wave,
                boss: self.is_boss_wave(),
            });
        }
        None
    }

    fn advance(&mut self, now: f64) {
        self.wave += 1;
        self.started_at_secs = now;
        self.kills_this_wave = 0;
        self.required_kills += KILLS_INCREMENT;
        self.boss_spawned = false;
    }
}
