//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Gesture classification (tap vs swipe vs hold) happens upstream in the
//! input layer; commands arrive already mapped to world space.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Gestures ---
    /// Tap at a world position (hit-tests targets directly).
    Tap { world: Position },
    /// Swipe mapped to a projectile from origin toward target.
    FireShot { origin: Position, target: Position },
    /// Hold mapped to a beam along a world-space segment.
    FireBeam { start: Position, end: Position },
    /// Update the aim point the support drone follows.
    SetAimPoint { world: Position },

    // --- Game flow ---
    /// Start a new run from the menu.
    StartGame,
    /// Proceed to the next level after a boss-wave clear.
    AcknowledgeLevelComplete,
    /// Restart the session from scratch (any phase).
    Restart,
    Pause,
    Resume,
}
