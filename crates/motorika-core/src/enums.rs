//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Sweep direction of the skill-check scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    #[default]
    Growing,
    Shrinking,
}

/// Lifecycle of a skill check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCheckState {
    /// Configured but not started (or reset).
    #[default]
    Idle,
    /// Scale is oscillating and awaiting the player's commit.
    Running,
    /// The player committed; the outcome is final until the next start.
    Resolved,
}

/// Result of committing a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatchOutcome {
    Success,
    Failure,
}

/// What the context-sensitive action button currently does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Nothing to interact with.
    #[default]
    None,
    /// Start the fishing skill check at the active fishing spot.
    FishingChallenge,
    /// Commit the running skill check.
    CatchFish,
    /// Sell the hold at the market.
    Market,
    /// Open the boat (hull) shop.
    BoatShop,
    /// Open the fishing rod shop.
    FishingRodShop,
    /// Repair the ship.
    Workshop,
}

/// Kind of a dock the ship can moor next to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockKind {
    Market,
    BoatShop,
    FishingRodShop,
    Workshop,
}

/// Purchase button state of a shop upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeStatus {
    /// Affordable and not yet owned.
    Available,
    /// Not yet owned, but the player cannot afford it.
    NoMoney,
    /// Already bought.
    Purchased,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Ship health reached zero; waiting for a restore.
    Wrecked,
}

impl From<DockKind> for ActionType {
    fn from(kind: DockKind) -> Self {
        match kind {
            DockKind::Market => ActionType::Market,
            DockKind::BoatShop => ActionType::BoatShop,
            DockKind::FishingRodShop => ActionType::FishingRodShop,
            DockKind::Workshop => ActionType::Workshop,
        }
    }
}
