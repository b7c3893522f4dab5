//! Feedback events emitted by the simulation for audio and UI.
//!
//! Fire-and-forget: the simulation never waits on their consumption.
//! Each tick's events ride out on the snapshot and are then dropped.

use serde::{Deserialize, Serialize};

use crate::enums::{BreachKind, PowerUpKind, TargetKind};
use crate::types::Position;

/// Events for the frontend sound/feedback layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeedbackEvent {
    /// A target was destroyed and scored.
    TargetDestroyed {
        position: Position,
        kind: TargetKind,
        points: u64,
        combo: u32,
    },
    /// A hostile was destroyed and scored.
    HostileDestroyed { position: Position, points: u64 },
    /// A target crossed the near boundary alive.
    TargetMissed { position: Position, missed: u32 },
    /// Something crossed the perimeter; camera shake + damage feedback.
    PerimeterBreach {
        kind: BreachKind,
        shield_remaining: f64,
    },
    /// Camera shake request (0..1 intensity).
    CameraShake { intensity: f64 },
    /// A vortex chain fired from a destruction point.
    ChainTriggered {
        origin: Position,
        neighbors: u32,
        bonus: u64,
    },
    PowerUpActivated { kind: PowerUpKind },
    PowerUpDeactivated { kind: PowerUpKind },
    /// A new wave began (boss flag for the klaxon).
    WaveStarted { wave: u32, boss: bool },
    /// Boss wave cleared; awaiting acknowledgement.
    LevelComplete { level: u32 },
    /// The run ended. Emitted exactly once per session.
    GameOver { score: u64 },
    ShotFired { origin: Position },
    BeamFired {
        start: Position,
        end: Position,
        hits: u32,
    },
}
