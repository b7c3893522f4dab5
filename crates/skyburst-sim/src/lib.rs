//! Simulation engine for SKYBURST.
//!
//! Owns the hecs ECS world, the pooled entity store, and the simulated-time
//! timer queue; runs the per-tick system pipeline and produces
//! GameStateSnapshots for the frontend. Completely headless, enabling
//! deterministic testing.

pub mod context;
pub mod engine;
pub mod pool;
pub mod systems;
pub mod timer;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skyburst_core as core;

#[cfg(test)]
mod tests;
