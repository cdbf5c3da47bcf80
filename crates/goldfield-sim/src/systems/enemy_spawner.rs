//! Enemy spawner — one enemy per spawn period of simulated time.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use goldfield_core::events::SimEvent;
use goldfield_core::rules::Rules;
use goldfield_terrain::TileGrid;

use crate::systems::position;
use crate::world_setup;

/// Fixed-period spawn timer measured in ticks.
#[derive(Debug, Clone, Default)]
pub struct SpawnClock {
    /// `None` disables spawning.
    pub period_ticks: Option<u64>,
    /// Tick at which the next enemy appears.
    pub next_spawn_tick: u64,
    /// Enemies produced so far.
    pub spawned: u32,
}

impl SpawnClock {
    /// The first spawn happens one full period after tick 0.
    pub fn new(period_ticks: Option<u64>) -> Self {
        Self {
            period_ticks,
            next_spawn_tick: period_ticks.unwrap_or(0),
            spawned: 0,
        }
    }

    pub fn from_rules(rules: &Rules) -> Self {
        Self::new(rules.spawn_period_ticks())
    }

    pub fn is_due(&self, current_tick: u64) -> bool {
        self.period_ticks.is_some() && current_tick >= self.next_spawn_tick
    }
}

/// Spawn an enemy at a random cell if the clock is due. Called after the
/// tick's systems, so the new enemy first acts on the following tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    grid: &TileGrid,
    rules: &Rules,
    next_spawn_seq: &mut u64,
    current_tick: u64,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    let period = clock.period_ticks?;
    if !clock.is_due(current_tick) || grid.width() == 0 || grid.height() == 0 {
        return None;
    }

    let enemy =
        world_setup::spawn_random_enemy(world, rng, next_spawn_seq, grid, rules.enemy_hp);
    clock.next_spawn_tick += period;
    clock.spawned += 1;

    if let Some(pos) = position(world, enemy) {
        debug!(x = pos.x, y = pos.y, tick = current_tick, "enemy spawned");
        events.push(SimEvent::EnemySpawned { x: pos.x, y: pos.y });
    }
    Some(enemy)
}
