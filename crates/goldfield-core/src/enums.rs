//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Terrain type of a grid tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    #[default]
    Grass,
    Gold,
}

/// Player unit type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    #[default]
    Worker,
    Soldier,
}

/// What a unit is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitTask {
    /// No task assigned.
    #[default]
    Idle,
    /// Extract gold from the tile the unit stands on.
    Mine,
    /// Close on and damage enemies.
    Attack,
}

/// Player building type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    #[default]
    Base,
}

/// Rule preset. Selects constants and the click interpretation flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// Free worker placement; clicking a unit toggles mining.
    #[default]
    Classic,
    /// First click plants a base; later clicks purchase units with gold.
    Outpost,
}

/// How a unit with the attack task resolves its action each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackPolicy {
    /// One decision per tick against the strictly nearest enemy.
    #[default]
    Nearest,
    /// Visit every enemy in spawn order: damage it when in range, otherwise
    /// step toward it. Steps accumulate across enemies within one tick.
    SweepAll,
}

/// Which unit a click purchases under the outpost ruleset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchasePolicy {
    /// Worker if the worker cost is affordable, else soldier if the soldier
    /// cost is affordable. The soldier branch can never be taken while the
    /// soldier costs more than the worker.
    #[default]
    WorkerFirst,
    /// Buy the kind chosen with `PlayerCommand::SelectPurchase`.
    Selected,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
}
