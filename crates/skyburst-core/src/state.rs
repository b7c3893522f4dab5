//! Game state snapshot — the complete visible state handed to the frontend
//! each tick. Read-only; the UI never mutates simulation state.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityClass, GamePhase, PowerUpKind};
use crate::events::FeedbackEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub entities: Vec<EntityView>,
    pub events: Vec<FeedbackEvent>,
}

/// Per-entity render snapshot: position/rotation/scale plus an opacity
/// channel for fading particles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub class: EntityClass,
    pub position: Position,
    /// Accumulated rotation in radians per axis.
    pub rotation: [f64; 3],
    pub scale: f64,
    pub opacity: f64,
}

/// HUD values polled once per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub level: u32,
    pub wave: u32,
    pub boss_wave: bool,
    pub missed: u32,
    /// Shield remaining as a fraction of MAX_SHIELD.
    pub shield_pct: f64,
    pub combo: u32,
    pub max_combo: u32,
    pub power_up: Option<PowerUpView>,
}

/// Active power-up readout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub name: String,
    /// Remaining duration as a fraction of the full duration.
    pub remaining_fraction: f64,
}
