//! Headless Motorika runner.
//!
//! Usage: `motorika-app [layout.json]`. Plays a short scripted session on the
//! loop thread and logs what happens. Set `RUST_LOG=debug` for every event.

use std::thread::sleep;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use motorika_app::client;
use motorika_app::state::AppState;
use motorika_app::AppError;
use motorika_core::commands::PlayerCommand;
use motorika_core::config::SessionLayout;
use motorika_sim::engine::{SimConfig, SimulationEngine};
use motorika_sim::persistence::save_key;
use motorika_sim::scenario;

fn main() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let layout = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading layout");
            SessionLayout::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => scenario::default_layout(),
    };
    let Some(spot) = layout.fishing_spots.first().map(|s| s.position) else {
        warn!(scene = %layout.scene, "layout has no fishing spots, nothing to play");
        return Ok(());
    };
    let spawn = layout.ship_spawn.position;
    info!(scene = %layout.scene, save = %save_key(&layout.scene), "starting");

    let engine = SimulationEngine::with_layout(SimConfig::default(), layout)?;
    let state = AppState::new();
    client::start_simulation(&state, engine)?;
    client::send_command(&state, PlayerCommand::StartSession)?;

    // Sail to the first fishing spot, arriving one meter short.
    let (dx, dy) = (spot.x - spawn.x, spot.y - spawn.y);
    let distance = dx.hypot(dy);
    let speed = 4.0;
    if distance > 1.0 {
        client::send_command(
            &state,
            PlayerCommand::SetVelocity {
                x: dx / distance * speed,
                y: dy / distance * speed,
            },
        )?;
        sleep(Duration::from_secs_f64((distance - 1.0) / speed));
    }
    client::send_command(&state, PlayerCommand::SetVelocity { x: 0.0, y: 0.0 })?;
    sleep(Duration::from_millis(100));

    // Start the challenge and stop the gauge mid-window.
    client::send_command(&state, PlayerCommand::PressAction)?;
    sleep(Duration::from_secs_f64(2.5));
    client::send_command(&state, PlayerCommand::PressAction)?;
    sleep(Duration::from_millis(100));
    client::send_command(&state, PlayerCommand::AcceptFish)?;
    sleep(Duration::from_millis(100));

    if let Some(snapshot) = client::get_snapshot(&state)? {
        info!(
            tick = snapshot.time.tick,
            x = snapshot.ship.position.x,
            y = snapshot.ship.position.y,
            health = snapshot.ship.health,
            hold_weight = snapshot.ship.fish_weight,
            hold_value = snapshot.ship.fish_value,
            money = snapshot.money,
            "session finished"
        );
    }

    client::stop_simulation(&state)
}
