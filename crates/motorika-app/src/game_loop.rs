//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is moved into the thread, which owns it from then on.
//! Messages arrive via `mpsc` channel. Snapshots are stored in shared state
//! for synchronous polling and their events are logged.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use motorika_core::constants::TICK_RATE;
use motorika_core::events::GameEvent;
use motorika_core::state::GameStateSnapshot;
use motorika_sim::engine::SimulationEngine;

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("motorika-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// Feed pending messages to the engine. Returns false once the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Contact(contact)) => engine.report_contact(contact),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();
    info!(scene = %engine.layout().scene, "game loop started");

    loop {
        // 1. Drain all pending messages
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Log what happened this tick
        log_events(snapshot.time.tick, &snapshot.events);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }

    info!(tick = engine.time().tick, "game loop stopped");
}

fn log_events(tick: u64, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ShipDestroyed
            | GameEvent::ShipRestored { .. }
            | GameEvent::CatchAttempt { .. }
            | GameEvent::FishSold { .. }
            | GameEvent::UpgradePurchased { .. } => info!(tick, ?event, "game event"),
            _ => debug!(tick, ?event, "game event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorika_core::commands::PlayerCommand;
    use motorika_core::enums::GamePhase;
    use motorika_core::types::Contact;
    use motorika_sim::engine::SimConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartSession))
            .unwrap();
        tx.send(GameLoopCommand::Contact(Contact {
            relative_speed: 1.0,
            harmless: false,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartSession)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Contact(_)));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartSession))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
