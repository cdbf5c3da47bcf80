//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Click on a grid cell. Interpreted according to the active ruleset.
    Click { x: i32, y: i32 },
    /// Assign a task to the first unit standing on a cell.
    AssignTask { x: i32, y: i32, task: UnitTask },
    /// Choose what the next outpost purchase buys (`PurchasePolicy::Selected`).
    SelectPurchase { kind: UnitKind },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
