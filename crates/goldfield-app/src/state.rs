//! State shared between the console thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use goldfield_core::commands::PlayerCommand;
use goldfield_core::state::GameStateSnapshot;

/// Messages sent from the console to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// A click in canvas pixels, translated to a cell by the loop.
    PixelClick { px: f64, py: f64 },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles owned by the console side of a running game.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex`; the latest
/// snapshot is shared with the game loop through `Arc<Mutex<...>>`.
pub struct AppState {
    /// Channel sender to the game loop. `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a started loop.
    pub fn attach(&self, command_tx: mpsc::Sender<GameLoopCommand>) {
        if let Ok(mut tx) = self.command_tx.lock() {
            *tx = Some(command_tx);
        }
        if let Ok(mut running) = self.running.lock() {
            *running = true;
        }
    }

    /// Forward a command to the loop. Returns false when no loop is
    /// listening; a loop found gone is marked as no longer running.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let delivered = match self.command_tx.lock() {
            Ok(tx) => tx.as_ref().is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        };
        if !delivered {
            if let Ok(mut running) = self.running.lock() {
                *running = false;
            }
        }
        delivered
    }

    /// Ask the loop to stop and forget the sender.
    pub fn shutdown(&self) {
        self.send(GameLoopCommand::Shutdown);
        if let Ok(mut tx) = self.command_tx.lock() {
            *tx = None;
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|running| *running).unwrap_or(false)
    }

    pub fn latest(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|snap| snap.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause)));
    }

    #[test]
    fn test_attach_send_shutdown() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx);
        assert!(state.is_running());

        assert!(state.send(GameLoopCommand::PlayerCommand(PlayerCommand::Resume)));
        state.shutdown();
        assert!(!state.is_running());

        let received: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameLoopCommand::PlayerCommand(PlayerCommand::Resume),
                GameLoopCommand::Shutdown
            ]
        );
    }

    #[test]
    fn test_send_to_stopped_loop_clears_running() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        state.attach(tx);
        drop(rx);

        assert!(!state.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause)));
        assert!(!state.is_running());
    }
}
