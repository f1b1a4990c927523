//! Game state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{FishSpecies, Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    pub money: u32,
    pub action: ActionType,
    pub skill_check: SkillCheckView,
    pub active_fishing_spot: Option<u32>,
    pub active_dock: Option<u32>,
    /// Fish hooked by the last successful challenge, awaiting accept/decline.
    pub hooked_fish: Option<FishSpecies>,
    pub upgrades: Vec<UpgradeView>,
    pub events: Vec<GameEvent>,
}

/// Player ship status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity: Velocity,
    pub heading: f64,
    pub health: i32,
    pub max_health: i32,
    pub fish_weight: f64,
    pub fish_value: u32,
}

/// Skill-check gauge for the fishing challenge overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillCheckView {
    pub state: SkillCheckState,
    pub scale: f64,
    pub direction: SweepDirection,
    pub pass_low: f64,
    pub pass_high: f64,
    pub outcome: Option<CatchOutcome>,
}

/// A shop entry with its purchase button state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeView {
    pub upgrade_id: u32,
    pub name: String,
    pub cost: u32,
    pub status: UpgradeStatus,
}
