//! Unit task executor: mining and attacking.
//!
//! Runs first in the tick. Enemies killed here are pruned before enemy AI.

use hecs::{Entity, World};

use goldfield_core::components::{Enemy, Health, Unit};
use goldfield_core::enums::{AttackPolicy, UnitTask};
use goldfield_core::rules::Rules;
use goldfield_core::types::GridPos;
use goldfield_terrain::TileGrid;

use crate::economy::PlayerState;
use crate::targeting::{self, Engage};

use super::{in_spawn_order, position, positions_in_spawn_order};

/// Execute every unit's task, in spawn order.
pub fn run(world: &mut World, grid: &TileGrid, rules: &Rules, player: &mut PlayerState) {
    let units = in_spawn_order::<Unit>(world);
    // Enemies do not move during this phase, so one snapshot of their cells
    // serves every unit.
    let enemies = positions_in_spawn_order::<Enemy>(world);

    for unit in units {
        let task = match world.get::<&Unit>(unit) {
            Ok(u) => u.task,
            Err(_) => continue,
        };
        let Some(pos) = position(world, unit) else {
            continue;
        };

        match task {
            UnitTask::Idle => {}
            UnitTask::Mine => {
                if grid.is_gold(pos) {
                    player.deposit(rules.mine_rate);
                }
            }
            UnitTask::Attack => match rules.attack_policy {
                AttackPolicy::Nearest => attack_nearest(world, unit, pos, &enemies, rules),
                AttackPolicy::SweepAll => sweep_all(world, unit, pos, &enemies, rules),
            },
        }
    }
}

/// One decision against the nearest enemy.
fn attack_nearest(
    world: &mut World,
    unit: Entity,
    pos: GridPos,
    enemies: &[(Entity, GridPos)],
    rules: &Rules,
) {
    let engage = targeting::engage_nearest(&pos, enemies, rules.melee_range);
    let target = match engage {
        Some(Engage::Strike { target }) => {
            damage(world, target, rules.unit_damage);
            Some(target)
        }
        Some(Engage::Advance { target, to }) => {
            move_to(world, unit, to);
            Some(target)
        }
        None => None,
    };
    if let Ok(mut u) = world.get::<&mut Unit>(unit) {
        u.target = target;
    }
}

/// Visit every enemy in spawn order from the unit's current cell: strike it
/// when in range, otherwise step toward it. Steps accumulate, so the final
/// cell depends on every enemy visited this tick.
fn sweep_all(
    world: &mut World,
    unit: Entity,
    start: GridPos,
    enemies: &[(Entity, GridPos)],
    rules: &Rules,
) {
    let mut pos = start;
    for &(enemy, enemy_pos) in enemies {
        match targeting::resolve(&pos, enemy, &enemy_pos, rules.melee_range) {
            Engage::Strike { target } => damage(world, target, rules.unit_damage),
            Engage::Advance { to, .. } => pos = to,
        }
    }
    if pos != start {
        move_to(world, unit, pos);
    }
    if let Ok(mut u) = world.get::<&mut Unit>(unit) {
        u.target = None;
    }
}

fn damage(world: &mut World, target: Entity, amount: f64) {
    if let Ok(mut health) = world.get::<&mut Health>(target) {
        health.hp -= amount;
    }
}

fn move_to(world: &mut World, entity: Entity, to: GridPos) {
    if let Ok(mut pos) = world.get::<&mut GridPos>(entity) {
        *pos = to;
    }
}
