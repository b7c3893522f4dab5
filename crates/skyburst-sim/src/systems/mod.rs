//! Per-tick systems, run in a fixed order by the engine.
//!
//! Systems are functions over `&mut World` and `&mut SimContext`; they do
//! not own state. The fixed order matters: combo breaks from movement land
//! before any new score events from collision in the same tick.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod drone;
pub mod hostile_fire;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
