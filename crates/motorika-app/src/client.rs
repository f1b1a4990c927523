//! Host-facing handlers.
//!
//! These functions are what a host shell (window, input layer, physics)
//! calls. They bridge host requests to the game loop thread via channels.

use motorika_core::commands::PlayerCommand;
use motorika_core::state::GameStateSnapshot;
use motorika_core::types::Contact;
use motorika_sim::engine::SimulationEngine;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, engine: SimulationEngine) -> Result<(), AppError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::Player(command))
}

/// Report a physics contact against the player's ship.
pub fn report_contact(state: &AppState, contact: Contact) -> Result<(), AppError> {
    send(state, GameLoopCommand::Contact(contact))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the loop thread and wait for it to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take()
        .ok_or(AppError::NotStarted)?;
    // The loop may already have exited; joining below covers both cases.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| AppError::Disconnected)?;
    }
    Ok(())
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(message).map_err(|_| AppError::Disconnected),
        None => Err(AppError::NotStarted),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use motorika_core::enums::GamePhase;
    use motorika_sim::engine::SimConfig;

    fn wait_for(state: &AppState, pred: impl Fn(&GameStateSnapshot) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Ok(Some(snap)) = get_snapshot(state) {
                if pred(&snap) {
                    return true;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    #[test]
    fn test_requires_started_simulation() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_loop_runs_session() {
        let state = AppState::new();
        start_simulation(&state, SimulationEngine::new(SimConfig::default())).unwrap();
        assert!(matches!(
            start_simulation(&state, SimulationEngine::new(SimConfig::default())),
            Err(AppError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartSession).unwrap();
        assert!(wait_for(&state, |s| s.phase == GamePhase::Active));

        report_contact(
            &state,
            Contact {
                relative_speed: 2.5,
                harmless: false,
            },
        )
        .unwrap();
        assert!(wait_for(&state, |s| s.ship.health == 90));

        stop_simulation(&state).unwrap();
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(AppError::NotStarted)
        ));
    }
}
