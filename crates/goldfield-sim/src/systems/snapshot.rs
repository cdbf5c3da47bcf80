//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use goldfield_core::components::*;
use goldfield_core::enums::*;
use goldfield_core::events::SimEvent;
use goldfield_core::state::*;
use goldfield_core::types::{GridPos, SimTime};
use goldfield_terrain::TileGrid;

use crate::economy::PlayerState;

use super::in_spawn_order;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    grid: &TileGrid,
    time: &SimTime,
    phase: GamePhase,
    ruleset: Ruleset,
    player: &PlayerState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ruleset,
        grid: grid.view(),
        units: build_units(world),
        enemies: build_enemies(world),
        buildings: build_buildings(world),
        player: player.view(),
        events,
    }
}

fn build_units(world: &World) -> Vec<UnitView> {
    in_spawn_order::<Unit>(world)
        .into_iter()
        .filter_map(|entity| {
            let mut query = world.query_one::<(&Unit, &GridPos, &Health)>(entity).ok()?;
            let (unit, pos, health) = query.get()?;
            Some(UnitView {
                kind: unit.kind,
                position: *pos,
                task: unit.task,
                hp: health.hp,
            })
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    in_spawn_order::<Enemy>(world)
        .into_iter()
        .filter_map(|entity| {
            let mut query = world.query_one::<(&GridPos, &Health)>(entity).ok()?;
            let (pos, health) = query.get()?;
            Some(EnemyView {
                position: *pos,
                hp: health.hp,
            })
        })
        .collect()
}

/// Buildings have no spawn sequence; they are ordered by cell for stable output.
fn build_buildings(world: &World) -> Vec<BuildingView> {
    let mut buildings: Vec<BuildingView> = world
        .query::<(&Building, &GridPos)>()
        .iter()
        .map(|(_, (building, pos))| BuildingView {
            kind: building.kind,
            position: *pos,
        })
        .collect();
    buildings.sort_by_key(|b| (b.position.y, b.position.x));
    buildings
}
