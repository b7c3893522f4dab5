//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Playing,
    Paused,
    /// Boss wave cleared; simulation holds until the frontend acknowledges.
    LevelComplete,
    GameOver,
}

/// Target visual/behavioral category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    #[default]
    Normal,
    /// Takes multiple hits, worth more points.
    Armored,
    /// Activates a random power-up when destroyed.
    PowerUp,
}

/// Who fired a projectile. Fixed at spawn, never re-tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Hostile,
}

/// Power-up types. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Player fire cooldown divided by RAPID_FIRE_FACTOR.
    RapidFire,
    /// fire_projectile launches a fan of SPREAD_COUNT shots.
    SpreadShot,
    /// Restores shield on activation, halves breach damage while active.
    Shield,
    /// Enables chain reactions on target destruction.
    Vortex,
    /// Spawns an orbiting support drone for the duration.
    Drone,
}

impl PowerUpKind {
    /// Display name for the HUD.
    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::RapidFire => "Rapid Fire",
            PowerUpKind::SpreadShot => "Spread Shot",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::Vortex => "Vortex",
            PowerUpKind::Drone => "Drone",
        }
    }
}

/// What crossed the near boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreachKind {
    MissedTarget,
    HostileShot,
}

/// Render class of an entity in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityClass {
    Target,
    ArmoredTarget,
    PowerUpTarget,
    Hostile,
    PlayerShot,
    HostileShot,
    Drone,
    Particle,
    Star,
}
