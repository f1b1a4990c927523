//! Events emitted by the simulation for UI and game-state consumers.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FishSpecies, Position};

/// Everything observable that happened during a tick, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The nearest fishing spot in rod reach changed.
    ActiveFishingSpotChanged {
        previous: Option<u32>,
        current: Option<u32>,
    },
    /// The nearest dock in interaction reach changed.
    ActiveDockChanged {
        previous: Option<u32>,
        current: Option<u32>,
    },
    /// The action button switched to a new affordance.
    ActionSwitched { action: ActionType },

    // --- Fishing ---
    ChallengeStarted { spot_id: u32 },
    CatchAttempt { outcome: CatchOutcome, scale: f64 },
    FishAssigned { fish: FishSpecies },
    FishStored { weight: f64, value: u32 },
    FishReleased,
    ChallengeClosed,

    // --- Ship ---
    HealthChanged { current: i32, max: i32 },
    ShipDestroyed,
    ShipRestored { position: Position },
    ShipRepaired,

    // --- Economy ---
    FishSold { value: u32, money: u32 },
    ShopOpened { kind: DockKind },
    UpgradePurchased { upgrade_id: u32, money: u32 },

    /// A queued command could not be applied.
    CommandRejected { reason: String },
}
