//! Enemy AI — every enemy hunts the nearest unit.
//!
//! Runs after unit tasks and enemy pruning, on the updated world. Units
//! brought to zero hp by an earlier enemy stay targetable until unit pruning.

use hecs::World;

use goldfield_core::components::{Enemy, Health, Unit};
use goldfield_core::rules::Rules;
use goldfield_core::types::GridPos;

use crate::targeting::{self, Engage};

use super::{in_spawn_order, position, positions_in_spawn_order};

/// Strike the nearest unit when in melee range, otherwise step toward it.
/// Enemies idle when there are no units.
pub fn run(world: &mut World, rules: &Rules) {
    // Units do not move during this phase.
    let units = positions_in_spawn_order::<Unit>(world);
    if units.is_empty() {
        return;
    }

    for enemy in in_spawn_order::<Enemy>(world) {
        let Some(pos) = position(world, enemy) else {
            continue;
        };
        match targeting::engage_nearest(&pos, &units, rules.melee_range) {
            Some(Engage::Strike { target }) => {
                if let Ok(mut health) = world.get::<&mut Health>(target) {
                    health.hp -= rules.enemy_damage;
                }
            }
            Some(Engage::Advance { to, .. }) => {
                if let Ok(mut cell) = world.get::<&mut GridPos>(enemy) {
                    *cell = to;
                }
            }
            None => {}
        }
    }
}
