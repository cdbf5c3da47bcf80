//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the tile grid and the player
//! economy, processes player commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace, warn};

use goldfield_core::commands::PlayerCommand;
use goldfield_core::components::{Enemy, Unit};
use goldfield_core::constants::DEFAULT_SEED;
use goldfield_core::enums::{GamePhase, TileKind, UnitKind, UnitTask};
use goldfield_core::error::CommandError;
use goldfield_core::events::SimEvent;
use goldfield_core::rules::Rules;
use goldfield_core::state::GameStateSnapshot;
use goldfield_core::types::{GridPos, SimTime};
use goldfield_terrain::TileGrid;

use crate::economy::PlayerState;
use crate::interpreter::Interpreter;
use crate::systems;
use crate::systems::enemy_spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same grid and spawn cells.
    pub seed: u64,
    /// Rules the game is played under. Must pass `Rules::validate`.
    pub rules: Rules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            rules: Rules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    grid: TileGrid,
    rules: Rules,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: PlayerState,
    spawn_clock: SpawnClock,
    next_spawn_seq: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine and generate its grid from the seeded RNG.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let rules = config.rules;
        let grid = TileGrid::generate(
            rules.grid_width,
            rules.grid_height,
            rules.gold_probability,
            &mut rng,
        );
        Self::assemble(rules, grid, rng)
    }

    /// Create an engine on a pre-built grid. The seed still drives spawning.
    pub fn with_grid(config: SimConfig, grid: TileGrid) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::assemble(config.rules, grid, rng)
    }

    fn assemble(rules: Rules, grid: TileGrid, rng: ChaCha8Rng) -> Self {
        debug!(
            ruleset = ?rules.ruleset,
            width = grid.width(),
            height = grid.height(),
            gold_tiles = grid.count(TileKind::Gold),
            "simulation created"
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            player: PlayerState::new(rules.starting_gold),
            spawn_clock: SpawnClock::from_rules(&rules),
            next_spawn_seq: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            grid,
            rules,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Order within a tick: queued commands, unit tasks, enemy pruning,
    /// enemy AI, unit pruning, time advance, spawner.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            systems::enemy_spawner::run(
                &mut self.world,
                &mut self.rng,
                &mut self.spawn_clock,
                &self.grid,
                &self.rules,
                &mut self.next_spawn_seq,
                self.time.tick,
                &mut self.events,
            );
            trace!(
                tick = self.time.tick,
                gold = self.player.gold,
                units = self.unit_count(),
                enemies = self.enemy_count(),
                "tick complete"
            );
        }

        self.snapshot()
    }

    /// Snapshot of the current state. Drains pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.grid,
            &self.time,
            self.phase,
            self.rules.ruleset,
            &self.player,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn spawn_clock(&self) -> &SpawnClock {
        &self.spawn_clock
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn unit_count(&self) -> usize {
        self.world.query::<&Unit>().iter().count()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// Place a unit directly, bypassing the command interpreter and its costs.
    pub fn spawn_unit(&mut self, kind: UnitKind, pos: GridPos, task: UnitTask) -> Entity {
        world_setup::spawn_unit(
            &mut self.world,
            &mut self.next_spawn_seq,
            &self.rules,
            kind,
            pos,
            task,
        )
    }

    /// Place an enemy on a fixed cell with the ruleset's enemy hp.
    pub fn spawn_enemy_at(&mut self, pos: GridPos) -> Entity {
        let hp = self.rules.enemy_hp;
        self.spawn_enemy_with_hp(pos, hp)
    }

    pub fn spawn_enemy_with_hp(&mut self, pos: GridPos, hp: f64) -> Entity {
        world_setup::spawn_enemy(&mut self.world, &mut self.next_spawn_seq, pos, hp)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                warn!(error = %err, tick = self.time.tick, "command rejected");
                self.events.push(SimEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::Click { x, y } => self.interpreter().click(GridPos::new(x, y)),
            PlayerCommand::AssignTask { x, y, task } => {
                self.interpreter().assign_task(GridPos::new(x, y), task)
            }
            PlayerCommand::SelectPurchase { kind } => {
                self.player.purchase_selection = kind;
                Ok(())
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
        }
    }

    fn interpreter(&mut self) -> Interpreter<'_> {
        Interpreter {
            world: &mut self.world,
            grid: &self.grid,
            rules: &self.rules,
            player: &mut self.player,
            next_spawn_seq: &mut self.next_spawn_seq,
            events: &mut self.events,
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Unit tasks (mining, attacking)
        systems::unit_tasks::run(&mut self.world, &self.grid, &self.rules, &mut self.player);
        // 2. Prune enemies killed by units
        systems::cleanup::prune_enemies(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 3. Enemy AI (hunt nearest unit)
        systems::enemy_ai::run(&mut self.world, &self.rules);
        // 4. Prune units killed by enemies
        systems::cleanup::prune_units(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }
}
