//! Reasons a queued player command can be rejected.

use motorika_core::enums::GamePhase;
use motorika_core::error::{PersistenceError, ProximityError, ShopError, SkillCheckError};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command not allowed while {0:?}")]
    WrongPhase(GamePhase),

    #[error("no ship in the world")]
    NoShip,

    #[error("action button has nothing to do")]
    NoAction,

    #[error("no fishing spot in reach")]
    NoActiveSpot,

    #[error("a fishing challenge is still open")]
    ChallengeOpen,

    #[error("no fish on the hook")]
    NoHookedFish,

    #[error("time scale must be finite and non-negative, got {0}")]
    InvalidTimeScale(f64),

    #[error(transparent)]
    SkillCheck(#[from] SkillCheckError),

    #[error(transparent)]
    Proximity(#[from] ProximityError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
