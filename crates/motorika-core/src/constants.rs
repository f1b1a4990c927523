//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Skill check ---

/// Lower bound of the oscillating scale.
pub const SKILL_CHECK_MIN_SCALE: f64 = 1.0;

/// Upper bound of the oscillating scale.
pub const SKILL_CHECK_MAX_SCALE: f64 = 6.0;

/// Lower edge of the pass window (inclusive).
pub const SKILL_CHECK_PASS_MIN: f64 = 3.0;

/// Upper edge of the pass window (inclusive).
pub const SKILL_CHECK_PASS_MAX: f64 = 4.0;

/// Seconds a resolved challenge stays on screen before it closes.
pub const CHALLENGE_LINGER_SECS: f64 = 1.0;

// --- Fishing rod ---

/// Scale units per second for the starter rod.
pub const DEFAULT_ROD_SPEED: f64 = 1.0;

/// Fishing reach of the starter rod (meters).
pub const DEFAULT_ROD_RADIUS: f64 = 3.0;

// --- Ship ---

pub const DEFAULT_MAX_HEALTH: i32 = 100;

/// Minimum damage dealt by any harmful contact.
pub const DEFAULT_DAMAGE_CONSTANT: i32 = 5;

/// Additional damage per m/s of relative impact speed.
pub const DEFAULT_DAMAGE_MULTIPLIER: f64 = 2.0;

/// Fraction of max health granted back when the ship is restored.
pub const DEFAULT_RESTORED_HEALTH_FRACTION: f64 = 0.5;

/// Reach within which docks (market, shops, workshop) become usable (meters).
pub const DEFAULT_INTERACTION_RADIUS: f64 = 2.5;

/// Ships slower than this keep their previous heading (m/s).
pub const HEADING_MIN_SPEED: f64 = 0.01;

// --- Session ---

/// Maximum accepted time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// File name suffix used for per-scene ship position saves.
pub const SHIP_POSITION_SAVE_FILE: &str = "ShipPosition.dat";
