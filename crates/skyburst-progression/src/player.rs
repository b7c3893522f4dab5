//! Player session state: score, combo, misses, shield, stat counters.
//!
//! Single instance per game session, reset fully on restart. Mutated only
//! through these methods; the simulation engine holds shared-read access
//! during collision resolution.

use serde::{Deserialize, Serialize};

use skyburst_core::constants::*;
use skyburst_core::enums::TargetKind;
use skyburst_core::math::{combo_multiplier, scored_points};

/// Per-category destruction counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DestructionStats {
    pub targets: u32,
    pub armored: u32,
    pub power_up_targets: u32,
    pub hostiles: u32,
    /// Number of vortex chain triggers this session.
    pub chains: u32,
}

/// The player's run state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub score: u64,
    pub level: u32,
    /// Consecutive destructions without a miss or breach.
    pub combo: u32,
    pub max_combo: u32,
    pub missed: u32,
    pub shield: f64,
    /// Cumulative extra points attributable to depth bonuses.
    pub depth_bonus_earned: u64,
    /// Vortex chain triggers; scales the chain bonus.
    pub vortex_chains: u32,
    pub stats: DestructionStats,
    failed: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            combo: 0,
            max_combo: 0,
            missed: 0,
            shield: MAX_SHIELD,
            depth_bonus_earned: 0,
            vortex_chains: 0,
            stats: DestructionStats::default(),
            failed: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Award a destroyed target: depth-weighted, combo-multiplied.
    /// Increments combo and the per-kind counter. Returns the points scored.
    pub fn award_target(&mut self, kind: TargetKind, base_points: u64, depth: f64) -> u64 {
        let points = self.award(base_points, depth);
        match kind {
            TargetKind::Normal => self.stats.targets += 1,
            TargetKind::Armored => self.stats.armored += 1,
            TargetKind::PowerUp => self.stats.power_up_targets += 1,
        }
        points
    }

    /// Award a destroyed hostile.
    pub fn award_hostile(&mut self, base_points: u64, depth: f64) -> u64 {
        let points = self.award(base_points, depth);
        self.stats.hostiles += 1;
        points
    }

    fn award(&mut self, base_points: u64, depth: f64) -> u64 {
        let points = scored_points(base_points, depth, self.combo);
        let without_depth = (base_points as f64 * combo_multiplier(self.combo)).floor() as u64;
        self.depth_bonus_earned += points.saturating_sub(without_depth);
        self.score += points;
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        points
    }

    /// Award a chain-reaction trigger: vortex_chains * CHAIN_BONUS_STEP,
    /// added raw (no depth/combo weighting). Returns the bonus.
    pub fn award_chain(&mut self) -> u64 {
        self.vortex_chains += 1;
        self.stats.chains += 1;
        let bonus = self.vortex_chains as u64 * CHAIN_BONUS_STEP;
        self.score += bonus;
        bonus
    }

    /// A target crossed the near boundary alive. Breaks the combo and
    /// counts the miss. Returns true iff this miss crossed the failure
    /// threshold (at most once per session).
    pub fn register_miss(&mut self) -> bool {
        self.combo = 0;
        self.missed += 1;
        self.check_failed()
    }

    /// A hostile shot breached the perimeter. Breaks the combo and drains
    /// the shield (damage clamped non-negative). Returns true iff this
    /// breach crossed the failure threshold.
    pub fn apply_breach_damage(&mut self, damage: f64) -> bool {
        self.combo = 0;
        self.shield = (self.shield - damage.max(0.0)).max(0.0);
        self.check_failed()
    }

    /// Restore shield points, clamped to MAX_SHIELD.
    pub fn restore_shield(&mut self, amount: f64) {
        self.shield = (self.shield + amount.max(0.0)).min(MAX_SHIELD);
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn shield_fraction(&self) -> f64 {
        self.shield / MAX_SHIELD
    }

    /// Latch the failure flag. Returns true only on the crossing transition
    /// so game-over fires exactly once.
    fn check_failed(&mut self) -> bool {
        if self.failed {
            return false;
        }
        if self.missed >= MAX_MISSES || self.shield <= 0.0 {
            self.failed = true;
            return true;
        }
        false
    }
}
