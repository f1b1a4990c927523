//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Build the world from the engine's layout and begin play.
    StartSession,
    /// Bring a wrecked ship back at the restore point.
    RestoreShip,

    // --- Steering ---
    /// Set the ship's velocity (m/s), as decided by the host's input layer.
    SetVelocity { x: f64, y: f64 },

    // --- Action button ---
    /// Press the context-sensitive action button.
    PressAction,
    /// Keep the hooked fish and put it in the hold.
    AcceptFish,
    /// Let the hooked fish go.
    DeclineFish,

    // --- Shop ---
    /// Buy an upgrade from the catalogue.
    BuyUpgrade { upgrade_id: u32 },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = paused).
    SetTimeScale { scale: f64 },
    Pause,
    Resume,
}
