//! Power-up activation state machine.
//!
//! At most one power-up is active at a time; activating a new one
//! deactivates the previous first (no stacking). Transition methods return
//! the kinds that changed state so the engine invokes each activation and
//! deactivation effect exactly once.

use serde::{Deserialize, Serialize};

use skyburst_core::constants::*;
use skyburst_core::enums::PowerUpKind;

/// The currently active power-up, if any.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    pub activated_at_secs: f64,
    pub ends_at_secs: f64,
}

/// Single-slot power-up state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUpState {
    active: Option<ActivePowerUp>,
}

impl PowerUpState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed duration table, clamped non-negative.
    pub fn duration_secs(kind: PowerUpKind) -> f64 {
        let d = match kind {
            PowerUpKind::RapidFire => RAPID_FIRE_DURATION_SECS,
            PowerUpKind::SpreadShot => SPREAD_SHOT_DURATION_SECS,
            PowerUpKind::Shield => SHIELD_DURATION_SECS,
            PowerUpKind::Vortex => VORTEX_DURATION_SECS,
            PowerUpKind::Drone => DRONE_DURATION_SECS,
        };
        d.max(0.0)
    }

    /// Activate `kind` at simulated time `now`. Returns the previously
    /// active kind, which the caller must run the deactivation effect for.
    pub fn activate(&mut self, kind: PowerUpKind, now: f64) -> Option<PowerUpKind> {
        let prior = self.active.take().map(|a| a.kind);
        self.active = Some(ActivePowerUp {
            kind,
            activated_at_secs: now,
            ends_at_secs: now + Self::duration_secs(kind),
        });
        prior
    }

    /// Explicit deactivation. Returns the kind that was active.
    pub fn deactivate(&mut self) -> Option<PowerUpKind> {
        self.active.take().map(|a| a.kind)
    }

    /// Timer expiry check, called once per tick: `now >= end` deactivates.
    /// Returns the expired kind.
    pub fn expire_if_due(&mut self, now: f64) -> Option<PowerUpKind> {
        if let Some(active) = self.active {
            if now >= active.ends_at_secs {
                self.active = None;
                return Some(active.kind);
            }
        }
        None
    }

    pub fn active_kind(&self) -> Option<PowerUpKind> {
        self.active.map(|a| a.kind)
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active_kind() == Some(kind)
    }

    /// Remaining duration as a fraction of the full duration, for the HUD.
    pub fn remaining_fraction(&self, now: f64) -> Option<f64> {
        self.active.map(|a| {
            let total = a.ends_at_secs - a.activated_at_secs;
            if total <= 0.0 {
                return 0.0;
            }
            ((a.ends_at_secs - now) / total).clamp(0.0, 1.0)
        })
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}
