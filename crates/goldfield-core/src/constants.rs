//! Simulation constants and tuning parameters.
//!
//! Per-ruleset values (hp, costs, spawn periods) live in [`crate::rules`];
//! the values here are the shared defaults those presets are built from.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Pixel size of one tile.
pub const TILE_SIZE: u32 = 40;

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;

/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 600;

/// Probability that a generated tile is gold.
pub const GOLD_PROBABILITY: f64 = 0.1;

// --- Economy ---

/// Gold the player starts with.
pub const STARTING_GOLD: f64 = 100.0;

/// Gold gained per tick by one unit mining a gold tile.
pub const MINE_RATE: f64 = 0.1;

/// Outpost purchase cost of a worker.
pub const WORKER_COST: f64 = 50.0;

/// Outpost purchase cost of a soldier.
pub const SOLDIER_COST: f64 = 100.0;

// --- Combat ---

/// Maximum Euclidean distance (cells) at which melee attacks land.
/// Covers orthogonal and diagonal neighbours.
pub const MELEE_RANGE: f64 = 1.5;

/// Damage per tick dealt by a unit with the attack task.
pub const UNIT_DAMAGE: f64 = 0.1;

/// Damage per tick dealt by an enemy in range of its target.
pub const ENEMY_DAMAGE: f64 = 0.05;

// --- Health ---

/// Worker starting hp (both rulesets).
pub const WORKER_HP: f64 = 3.0;

/// Soldier starting hp under the outpost ruleset.
pub const SOLDIER_HP: f64 = 5.0;

/// Enemy starting hp under the classic ruleset.
pub const CLASSIC_ENEMY_HP: f64 = 3.0;

/// Enemy starting hp under the outpost ruleset.
pub const OUTPOST_ENEMY_HP: f64 = 5.0;

// --- Spawning ---

/// Seconds between enemy spawns under the classic ruleset.
pub const CLASSIC_SPAWN_PERIOD_SECS: f64 = 5.0;

/// Seconds between enemy spawns under the outpost ruleset.
pub const OUTPOST_SPAWN_PERIOD_SECS: f64 = 7.0;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
