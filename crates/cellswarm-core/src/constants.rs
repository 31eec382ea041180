//! Simulation constants and tuning parameters.
//!
//! Everything is tick-denominated so the simulation is deterministic and
//! replayable with no dependency on wall-clock timing.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Production ---

/// Neutral cells need this many production periods per drone.
pub const NEUTRAL_PRODUCTION_MULTIPLIER: u32 = 3;

// --- Launch sequencing ---

/// Ticks between individual drone departures in a launch sequence (~250 ms).
pub const LAUNCH_STEP_TICKS: u64 = 8;

// --- Drone flight ---

/// Drone travel speed in world units per second.
pub const DRONE_SPEED: f32 = 0.5;

/// Capture radius per unit of cell capacity. A cell's capture radius is
/// `max_drones * CAPTURE_RADIUS_RATIO` — bigger cells are easier to hit.
pub const CAPTURE_RADIUS_RATIO: f32 = 0.05;

// --- Move legality ---

/// Default launch range per unit of cell capacity, used when the level
/// data does not specify an explicit range.
pub const SIZE_TO_RANGE_RATIO: f32 = 0.35;

// --- AI tuning ---

/// Ticks between AI decision cycles.
pub const AI_THINK_INTERVAL_TICKS: u32 = 20;

/// Exponent on cell fullness for the launch-probability roll.
/// Higher values bias the AI toward launching only near full capacity.
pub const AI_MOVE_STEEPNESS: f32 = 15.0;

/// Destination-score weight on distance (divisor).
pub const AI_DISTANCE_WEIGHT: f32 = 3.0;

/// Static-value weight on drone capacity.
pub const AI_CAPACITY_WEIGHT: f32 = 1.0;

/// Static-value weight on production rate.
pub const AI_PRODUCTION_WEIGHT: f32 = 1.0;

/// Static-value bonus applied to Player-owned destinations.
pub const AI_ENEMY_FACTION_WEIGHT: f32 = 1.5;

/// Destination-score weight on the origin/destination size ratio.
pub const AI_SIZE_WEIGHT: f32 = 1.0;
