//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components or is passed in.
//!
//! hecs does not preserve insertion order across despawns, so systems that
//! depend on "list order" go through [`in_spawn_order`].

use hecs::{Component, Entity, World};

use goldfield_core::components::{Building, SpawnSeq, Unit};
use goldfield_core::types::GridPos;

pub mod cleanup;
pub mod enemy_ai;
pub mod enemy_spawner;
pub mod snapshot;
pub mod unit_tasks;

/// Entities carrying marker `T`, sorted by spawn sequence.
pub fn in_spawn_order<T: Component>(world: &World) -> Vec<Entity> {
    let mut entries: Vec<(SpawnSeq, Entity)> = world
        .query::<(&T, &SpawnSeq)>()
        .iter()
        .map(|(entity, (_, seq))| (*seq, entity))
        .collect();
    entries.sort_unstable_by_key(|(seq, _)| *seq);
    entries.into_iter().map(|(_, entity)| entity).collect()
}

/// Entities carrying marker `T` with their cells, sorted by spawn sequence.
pub fn positions_in_spawn_order<T: Component>(world: &World) -> Vec<(Entity, GridPos)> {
    let mut entries: Vec<(SpawnSeq, Entity, GridPos)> = world
        .query::<(&T, &SpawnSeq, &GridPos)>()
        .iter()
        .map(|(entity, (_, seq, pos))| (*seq, entity, *pos))
        .collect();
    entries.sort_unstable_by_key(|(seq, _, _)| *seq);
    entries
        .into_iter()
        .map(|(_, entity, pos)| (entity, pos))
        .collect()
}

pub fn position(world: &World, entity: Entity) -> Option<GridPos> {
    world.get::<&GridPos>(entity).ok().map(|pos| *pos)
}

/// First unit (in spawn order) standing on `pos`.
pub fn unit_at(world: &World, pos: GridPos) -> Option<Entity> {
    positions_in_spawn_order::<Unit>(world)
        .into_iter()
        .find(|(_, unit_pos)| *unit_pos == pos)
        .map(|(entity, _)| entity)
}

pub fn building_at(world: &World, pos: GridPos) -> bool {
    world
        .query::<(&Building, &GridPos)>()
        .iter()
        .any(|(_, (_, building_pos))| *building_pos == pos)
}
