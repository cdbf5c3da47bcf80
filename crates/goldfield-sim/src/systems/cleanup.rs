//! Cleanup system: prunes units and enemies whose hp dropped to zero or below.

use hecs::{Component, Entity, World};
use tracing::debug;

use goldfield_core::components::{Enemy, Health, Unit};
use goldfield_core::events::SimEvent;

use super::{in_spawn_order, position};

/// Remove enemies at zero hp or below.
pub fn prune_enemies(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    collect_dead::<Enemy>(world, despawn_buffer);
    for entity in despawn_buffer.drain(..) {
        if let Some(pos) = position(world, entity) {
            debug!(x = pos.x, y = pos.y, "enemy killed");
            events.push(SimEvent::EnemyKilled { x: pos.x, y: pos.y });
        }
        let _ = world.despawn(entity);
    }
}

pub fn prune_units(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    collect_dead::<Unit>(world, despawn_buffer);
    for entity in despawn_buffer.drain(..) {
        let kind = world.get::<&Unit>(entity).map(|unit| unit.kind);
        if let (Ok(kind), Some(pos)) = (kind, position(world, entity)) {
            debug!(?kind, x = pos.x, y = pos.y, "unit lost");
            events.push(SimEvent::UnitLost {
                kind,
                x: pos.x,
                y: pos.y,
            });
        }
        let _ = world.despawn(entity);
    }
}

/// Fill the buffer with dead `T` entities in spawn order.
fn collect_dead<T: Component>(world: &World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for entity in in_spawn_order::<T>(world) {
        let dead = world
            .get::<&Health>(entity)
            .map(|health| health.hp <= 0.0)
            .unwrap_or(false);
        if dead {
            despawn_buffer.push(entity);
        }
    }
}
