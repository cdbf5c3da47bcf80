//! Game state snapshot — the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GridPos, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ruleset: Ruleset,
    pub grid: GridView,
    pub units: Vec<UnitView>,
    pub enemies: Vec<EnemyView>,
    pub buildings: Vec<BuildingView>,
    pub player: PlayerView,
    pub events: Vec<SimEvent>,
}

/// Static terrain, row-major (`tiles[y * width + x]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<TileKind>,
}

/// A player unit, in spawn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub kind: UnitKind,
    pub position: GridPos,
    pub task: UnitTask,
    pub hp: f64,
}

/// An enemy, in spawn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: GridPos,
    pub hp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingView {
    pub kind: BuildingKind,
    pub position: GridPos,
}

/// Player resources for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub gold: f64,
    /// Display string, e.g. `"Gold: 105"`.
    pub gold_label: String,
    pub base: Option<GridPos>,
    pub purchase_selection: UnitKind,
}

/// HUD text for a gold amount. Fractional gold is floored.
pub fn gold_label(gold: f64) -> String {
    format!("Gold: {}", gold.floor() as i64)
}
