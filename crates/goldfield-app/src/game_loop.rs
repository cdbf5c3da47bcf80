//! Game loop thread — runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling by the console.

use std::ops::ControlFlow;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use goldfield_core::commands::PlayerCommand;
use goldfield_core::constants::TICK_RATE;
use goldfield_core::events::SimEvent;
use goldfield_core::state::GameStateSnapshot;
use goldfield_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// `initial` commands are queued before the first tick. Returns the command
/// sender for the console to use and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    initial: Vec<PlayerCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("goldfield-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config);
            engine.queue_commands(initial);
            run_game_loop(&mut engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    let mut gold_label = String::new();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(cmd) => {
                    if apply_command(engine, cmd).is_break() {
                        info!(tick = engine.time().tick, "game loop stopped");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Report what the player would see change
        if snapshot.player.gold_label != gold_label {
            gold_label.clone_from(&snapshot.player.gold_label);
            info!("{gold_label}");
        }
        log_events(&snapshot.events);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Feed one loop command to the engine. `Break` means shut down.
fn apply_command(engine: &mut SimulationEngine, cmd: GameLoopCommand) -> ControlFlow<()> {
    match cmd {
        GameLoopCommand::PlayerCommand(cmd) => engine.queue_command(cmd),
        GameLoopCommand::PixelClick { px, py } => {
            let tile_size = engine.rules().tile_size;
            match engine.grid().cell_at_pixel(px, py, tile_size) {
                Some(cell) => engine.queue_command(PlayerCommand::Click {
                    x: cell.x,
                    y: cell.y,
                }),
                None => warn!(px, py, "click outside the canvas"),
            }
        }
        GameLoopCommand::Shutdown => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

fn log_events(events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::EnemySpawned { x, y } => info!(x, y, "an enemy appears"),
            SimEvent::EnemyKilled { x, y } => info!(x, y, "enemy defeated"),
            SimEvent::UnitLost { kind, x, y } => info!(?kind, x, y, "unit lost"),
            SimEvent::BasePlaced { x, y } => info!(x, y, "base established"),
            _ => {}
        }
    }
}
