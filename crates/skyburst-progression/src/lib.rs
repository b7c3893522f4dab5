//! Progression core for SKYBURST.
//!
//! Implements the player scoring/combo state, the power-up activation
//! state machine, and the wave/level advancement rules. Plain data and
//! transition methods — no ECS dependency. The simulation engine reads
//! these freely but mutates them only through their own methods.

pub mod player;
pub mod powerup;
pub mod wave;

pub use player::PlayerState;
pub use powerup::PowerUpState;
pub use skyburst_core as core;
pub use wave::{WaveOutcome, WaveState};

#[cfg(test)]
mod tests;
