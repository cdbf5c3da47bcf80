//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A player-controlled unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub task: UnitTask,
    /// Enemy engaged on the last attack tick. Informational only.
    #[serde(skip)]
    pub target: Option<hecs::Entity>,
}

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// A player building occupying one cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
}

/// Remaining hit points. Entities at or below zero are pruned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
}

/// Insertion sequence number. Systems visit units and enemies in
/// ascending `SpawnSeq`, which is the order they were created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnSeq(pub u64);

// GridPos (types.rs) is also attached to entities as their cell position.
