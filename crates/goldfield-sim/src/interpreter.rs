//! Command interpreter — turns grid clicks into spawns, purchases, and task
//! assignments according to the active ruleset.

use hecs::World;
use tracing::debug;

use goldfield_core::components::Unit;
use goldfield_core::enums::*;
use goldfield_core::error::CommandError;
use goldfield_core::events::SimEvent;
use goldfield_core::rules::Rules;
use goldfield_core::types::GridPos;
use goldfield_terrain::TileGrid;

use crate::economy::PlayerState;
use crate::systems::{building_at, unit_at};
use crate::world_setup;

/// Borrowed view of the engine state a command may touch.
pub struct Interpreter<'a> {
    pub world: &'a mut World,
    pub grid: &'a TileGrid,
    pub rules: &'a Rules,
    pub player: &'a mut PlayerState,
    pub next_spawn_seq: &'a mut u64,
    pub events: &'a mut Vec<SimEvent>,
}

impl Interpreter<'_> {
    /// Apply a click on a grid cell.
    pub fn click(&mut self, pos: GridPos) -> Result<(), CommandError> {
        self.check_bounds(pos)?;
        match self.rules.ruleset {
            Ruleset::Classic => self.classic_click(pos),
            Ruleset::Outpost => self.outpost_click(pos),
        }
    }

    /// Set the task of the first unit on `pos`.
    pub fn assign_task(&mut self, pos: GridPos, task: UnitTask) -> Result<(), CommandError> {
        self.check_bounds(pos)?;
        let unit = unit_at(self.world, pos).ok_or(CommandError::NoUnitAtCell {
            x: pos.x,
            y: pos.y,
        })?;
        self.set_task(unit, pos, task);
        Ok(())
    }

    /// Empty cell: place a free worker. Occupied cell: mine if the tile is
    /// gold, otherwise clear the task.
    fn classic_click(&mut self, pos: GridPos) -> Result<(), CommandError> {
        match unit_at(self.world, pos) {
            Some(unit) => {
                let task = if self.grid.is_gold(pos) {
                    UnitTask::Mine
                } else {
                    UnitTask::Idle
                };
                self.set_task(unit, pos, task);
            }
            None => self.spawn_unit(UnitKind::Worker, pos, UnitTask::Idle),
        }
        Ok(())
    }

    /// First click plants the base. Later clicks off the base cell purchase
    /// a unit there.
    fn outpost_click(&mut self, pos: GridPos) -> Result<(), CommandError> {
        if self.player.base.is_none() {
            world_setup::spawn_building(self.world, BuildingKind::Base, pos);
            self.player.base = Some(pos);
            debug!(x = pos.x, y = pos.y, "base placed");
            self.events.push(SimEvent::BasePlaced { x: pos.x, y: pos.y });
            return Ok(());
        }
        if building_at(self.world, pos) {
            return Err(CommandError::CellOccupied { x: pos.x, y: pos.y });
        }

        let (kind, cost) = self.player.purchase(self.rules)?;
        debug!(?kind, cost, gold = self.player.gold, "unit purchased");
        self.events.push(SimEvent::UnitPurchased { kind, cost });

        let task = match kind {
            UnitKind::Soldier => UnitTask::Attack,
            UnitKind::Worker => UnitTask::Idle,
        };
        self.spawn_unit(kind, pos, task);
        Ok(())
    }

    fn spawn_unit(&mut self, kind: UnitKind, pos: GridPos, task: UnitTask) {
        world_setup::spawn_unit(self.world, self.next_spawn_seq, self.rules, kind, pos, task);
        debug!(?kind, x = pos.x, y = pos.y, "unit spawned");
        self.events.push(SimEvent::UnitSpawned {
            kind,
            x: pos.x,
            y: pos.y,
        });
    }

    fn set_task(&mut self, unit: hecs::Entity, pos: GridPos, task: UnitTask) {
        if let Ok(mut u) = self.world.get::<&mut Unit>(unit) {
            u.task = task;
        }
        self.events.push(SimEvent::TaskAssigned {
            x: pos.x,
            y: pos.y,
            task,
        });
    }

    fn check_bounds(&self, pos: GridPos) -> Result<(), CommandError> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(CommandError::OutOfBounds { x: pos.x, y: pos.y })
        }
    }
}
