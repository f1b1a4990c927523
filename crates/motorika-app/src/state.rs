//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use motorika_core::commands::PlayerCommand;
use motorika_core::state::GameStateSnapshot;
use motorika_core::types::Contact;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// A physics contact against the player's ship.
    Contact(Contact),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in a `Mutex` so the state is `Sync`.
/// - `Mutex<Option<...>>` holds what does not exist before `start_simulation`.
/// - The latest snapshot is an `Arc<Mutex<...>>` shared with the loop thread.
pub struct AppState {
    /// Channel sender to forward messages to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Handle of the running loop thread, joined on stop.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
