//! Events emitted by the simulation for UI feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Notable things that happened during a tick. Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A unit appeared on the grid.
    UnitSpawned { kind: UnitKind, x: i32, y: i32 },
    /// Gold was spent on a unit.
    UnitPurchased { kind: UnitKind, cost: f64 },
    /// A unit's task changed.
    TaskAssigned { x: i32, y: i32, task: UnitTask },
    /// The base building was planted.
    BasePlaced { x: i32, y: i32 },
    /// The spawner produced an enemy.
    EnemySpawned { x: i32, y: i32 },
    /// An enemy was pruned at zero hp.
    EnemyKilled { x: i32, y: i32 },
    /// A unit was pruned at zero hp.
    UnitLost { kind: UnitKind, x: i32, y: i32 },
    /// A command could not be applied.
    CommandRejected { reason: String },
}
