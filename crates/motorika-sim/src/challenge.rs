//! Fishing challenge data model.
//!
//! Stored in `SimulationEngine`, NOT as an ECS entity. Driven by
//! `systems::fishing`.

use motorika_core::enums::ActionType;
use motorika_core::types::FishSpecies;
use motorika_fishing::SkillCheckTimer;

/// The skill check in progress, plus what it produced.
#[derive(Debug, Clone, Default)]
pub struct Challenge {
    pub timer: SkillCheckTimer,
    /// Fishing spot the challenge was started at.
    pub spot: Option<u32>,
    /// Seconds left before a resolved challenge closes.
    pub linger_secs: Option<f64>,
    /// Fish hooked by a successful commit, awaiting accept or decline.
    pub hooked: Option<FishSpecies>,
}

impl Challenge {
    /// Whether the challenge blocks a new start: running, lingering, or
    /// holding a fish the player has not decided on.
    pub fn is_open(&self) -> bool {
        self.timer.is_running() || self.linger_secs.is_some() || self.hooked.is_some()
    }

    /// What the action button offers while the challenge is open.
    pub fn action(&self) -> Option<ActionType> {
        if self.timer.is_running() {
            Some(ActionType::CatchFish)
        } else if self.is_open() {
            Some(ActionType::None)
        } else {
            None
        }
    }

    /// Drop everything and return the timer to Idle.
    pub fn abandon(&mut self) {
        self.timer.reset();
        self.spot = None;
        self.linger_secs = None;
        self.hooked = None;
    }
}
