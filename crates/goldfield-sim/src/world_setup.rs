//! Entity spawn factories.
//!
//! Every unit and enemy gets a `SpawnSeq` from the engine's counter so that
//! systems can visit them in creation order.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use goldfield_core::components::*;
use goldfield_core::enums::*;
use goldfield_core::rules::Rules;
use goldfield_core::types::GridPos;
use goldfield_terrain::TileGrid;

fn next_seq(counter: &mut u64) -> SpawnSeq {
    let seq = SpawnSeq(*counter);
    *counter += 1;
    seq
}

/// Spawn a player unit with the starting hp its kind has under `rules`.
pub fn spawn_unit(
    world: &mut World,
    next_spawn_seq: &mut u64,
    rules: &Rules,
    kind: UnitKind,
    pos: GridPos,
    task: UnitTask,
) -> Entity {
    let hp = rules.unit_stats(kind).hp;
    world.spawn((
        Unit {
            kind,
            task,
            target: None,
        },
        pos,
        Health { hp },
        next_seq(next_spawn_seq),
    ))
}

/// Spawn an enemy at a fixed cell.
pub fn spawn_enemy(world: &mut World, next_spawn_seq: &mut u64, pos: GridPos, hp: f64) -> Entity {
    world.spawn((Enemy, pos, Health { hp }, next_seq(next_spawn_seq)))
}

/// Spawn an enemy on a uniformly random cell. No collision check against
/// other entities or buildings.
pub fn spawn_random_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_spawn_seq: &mut u64,
    grid: &TileGrid,
    hp: f64,
) -> Entity {
    let pos = grid.random_cell(rng);
    spawn_enemy(world, next_spawn_seq, pos, hp)
}

/// Spawn a building. Buildings have no health and are never pruned.
pub fn spawn_building(world: &mut World, kind: BuildingKind, pos: GridPos) -> Entity {
    world.spawn((Building { kind }, pos))
}
