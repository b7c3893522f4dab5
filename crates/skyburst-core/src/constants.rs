//! Simulation constants and tuning parameters.

/// Nominal simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound on a single tick's delta time (30 fps floor).
/// Prevents a huge position jump after a stall or resume.
pub const MAX_DT: f64 = 1.0 / 30.0;

// --- World volume ---

/// Depth used to normalize the score bonus curve.
pub const MAX_DEPTH: f64 = 200.0;

/// Spawn band on the depth axis (far plane).
pub const SPAWN_DEPTH_MIN: f64 = -200.0;
pub const SPAWN_DEPTH_MAX: f64 = -150.0;

/// Depth at which an entity has breached the perimeter.
/// A target crossing this alive counts as a miss; a hostile shot
/// crossing it damages the shield.
pub const NEAR_BOUNDARY_Z: f64 = -2.0;

/// Camera depth (behind the near boundary, looking toward -z).
pub const CAMERA_Z: f64 = 10.0;

/// Lateral half-extent of the spawn field.
pub const FIELD_HALF_WIDTH: f64 = 60.0;

/// Vertical half-extent of the spawn field.
pub const FIELD_HALF_HEIGHT: f64 = 40.0;

// --- Targets ---

pub const TARGET_RADIUS: f64 = 3.0;
pub const TARGET_SPEED_MIN: f64 = 8.0;
pub const TARGET_SPEED_MAX: f64 = 14.0;
pub const TARGET_POINTS: u64 = 100;
pub const ARMORED_POINTS: u64 = 250;
pub const POWERUP_TARGET_POINTS: u64 = 150;
pub const TARGET_HP: u32 = 1;
pub const ARMORED_HP: u32 = 3;

/// Spawn roll probabilities for target variants.
pub const ARMORED_CHANCE: f64 = 0.15;
pub const POWERUP_TARGET_CHANCE: f64 = 0.08;

/// Vertical bob oscillation ranges.
pub const BOB_AMPLITUDE_MIN: f64 = 0.4;
pub const BOB_AMPLITUDE_MAX: f64 = 1.4;
pub const BOB_FREQUENCY_MIN: f64 = 1.0;
pub const BOB_FREQUENCY_MAX: f64 = 3.0;

// --- Hostiles ---

pub const HOSTILE_HALF_WIDTH: f64 = 4.0;
pub const HOSTILE_HP: u32 = 5;
pub const HOSTILE_POINTS: u64 = 500;
pub const HOSTILE_SPEED: f64 = 6.0;

/// Depth at which hostiles stop advancing and hold position while firing.
pub const HOSTILE_STANDOFF_Z: f64 = -60.0;

pub const HOSTILE_FIRE_INTERVAL_SECS: f64 = 2.5;
pub const WEAVE_AMPLITUDE: f64 = 4.0;
pub const WEAVE_FREQUENCY: f64 = 0.8;

/// Boss-wave hostiles get scaled hit-points and score.
pub const BOSS_HP_FACTOR: u32 = 3;
pub const BOSS_POINTS_FACTOR: u64 = 2;

// --- Projectiles ---

pub const PLAYER_SHOT_SPEED: f64 = 80.0;
pub const PLAYER_SHOT_TTL_SECS: f64 = 3.0;
pub const PLAYER_SHOT_DAMAGE: u32 = 1;

/// Minimum interval between player shots.
pub const PLAYER_FIRE_COOLDOWN_SECS: f64 = 0.18;

/// Proximity margin added to the victim's radius for hit tests.
pub const HIT_MARGIN: f64 = 0.75;

pub const HOSTILE_SHOT_SPEED: f64 = 25.0;
pub const HOSTILE_SHOT_TTL_SECS: f64 = 12.0;
pub const HOSTILE_SHOT_DAMAGE: f64 = 10.0;

/// Extra margin for tap hit tests (finger-sized, more forgiving).
pub const TAP_MARGIN: f64 = 1.5;

/// Half-width of the beam gesture's hit corridor.
pub const BEAM_HALF_WIDTH: f64 = 2.5;

// --- Support drone ---

pub const DRONE_ORBIT_RADIUS: f64 = 8.0;
pub const DRONE_ORBIT_SPEED: f64 = 2.0;
pub const DRONE_FIRE_INTERVAL_SECS: f64 = 0.8;

// --- Particles ---

pub const BURST_COUNT_MIN: u32 = 12;
pub const BURST_COUNT_MAX: u32 = 24;
pub const BURST_SPEED_MIN: f64 = 6.0;
pub const BURST_SPEED_MAX: f64 = 18.0;
pub const PARTICLE_TTL_MIN: f64 = 0.6;
pub const PARTICLE_TTL_MAX: f64 = 1.2;
pub const PARTICLE_SIZE_MIN: f64 = 0.5;
pub const PARTICLE_SIZE_MAX: f64 = 1.5;

/// Downward acceleration applied to particles (units/s²).
pub const PARTICLE_GRAVITY: f64 = 12.0;

// --- Background stars ---

pub const STAR_COUNT: usize = 64;
pub const STAR_SPEED_MIN: f64 = 2.0;
pub const STAR_SPEED_MAX: f64 = 6.0;

// --- Scoring ---

/// Depth bonus: 1 + scale * (|z| / MAX_DEPTH), clamped below.
pub const DEPTH_BONUS_SCALE: f64 = 2.0;
pub const DEPTH_BONUS_MIN: f64 = 1.0;
pub const DEPTH_BONUS_MAX: f64 = 4.0;

/// Combo multiplier step per consecutive destruction.
pub const COMBO_STEP: f64 = 0.1;

/// Chain reaction scan radius around a destroyed target.
pub const CHAIN_RADIUS: f64 = 12.0;

/// Chain bonus per trigger: vortex_chains * CHAIN_BONUS_STEP.
pub const CHAIN_BONUS_STEP: u64 = 25;

/// Simulated-time delay band for chain propagation hits.
pub const CHAIN_DELAY_MIN_SECS: f64 = 0.08;
pub const CHAIN_DELAY_MAX_SECS: f64 = 0.25;

// --- Failure thresholds ---

/// Missed targets before the run ends.
pub const MAX_MISSES: u32 = 20;

/// Shield points; perimeter breaches drain this.
pub const MAX_SHIELD: f64 = 100.0;

// --- Waves ---

pub const WAVE_DURATION_SECS: f64 = 30.0;
pub const BASE_KILLS_REQUIRED: u32 = 10;
pub const KILLS_INCREMENT: u32 = 5;

/// Every Nth wave is a boss wave.
pub const BOSS_INTERVAL: u32 = 5;

/// Hostiles spawned up front on a boss wave.
pub const BOSS_PACK_SIZE: u32 = 3;

// --- Spawn cadence ---

pub const TARGET_SPAWN_INTERVAL_SECS: f64 = 1.2;
pub const HOSTILE_SPAWN_INTERVAL_SECS: f64 = 6.0;

/// First wave on which regular hostiles appear.
pub const HOSTILE_MIN_WAVE: u32 = 2;

/// Cadence tightens by this factor per wave past the first.
pub const SPAWN_RATE_GROWTH: f64 = 0.1;

/// Floor on the spawn interval regardless of wave.
pub const MIN_SPAWN_INTERVAL_SECS: f64 = 0.35;

// --- Cleanup ---

/// Dead-entity compaction interval (simulated seconds).
pub const CLEANUP_INTERVAL_SECS: f64 = 5.0;

// --- Power-ups ---

pub const RAPID_FIRE_DURATION_SECS: f64 = 10.0;
pub const SPREAD_SHOT_DURATION_SECS: f64 = 12.0;
pub const SHIELD_DURATION_SECS: f64 = 8.0;
pub const VORTEX_DURATION_SECS: f64 = 15.0;
pub const DRONE_DURATION_SECS: f64 = 20.0;

/// Shield restored when the Shield power-up activates.
pub const SHIELD_RESTORE: f64 = 25.0;

/// Breach damage multiplier while Shield is active.
pub const SHIELD_DAMAGE_FACTOR: f64 = 0.5;

/// RapidFire divides the player fire cooldown by this.
pub const RAPID_FIRE_FACTOR: f64 = 3.0;

/// SpreadShot fan: shot count and angular step (radians).
pub const SPREAD_COUNT: u32 = 3;
pub const SPREAD_ANGLE: f64 = 0.12;
