//! Fishing system: drives the challenge skill check and the catch flow.
//!
//! start → CatchFish press commits → on success a fish is rolled from the
//! spot's catch table → the player accepts (hold) or declines (release).
//! A resolved challenge stays up for `CHALLENGE_LINGER_SECS` before closing.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use motorika_core::components::{FishContainer, FishingSpot};
use motorika_core::constants::{CHALLENGE_LINGER_SECS, DT};
use motorika_core::enums::CatchOutcome;
use motorika_core::events::GameEvent;
use motorika_core::types::FishSpecies;

use super::find_ship;
use crate::challenge::Challenge;
use crate::error::CommandError;

/// Advance a running gauge and count down a resolved challenge.
pub fn run(challenge: &mut Challenge, events: &mut Vec<GameEvent>) {
    if challenge.timer.is_running() {
        if let Err(err) = challenge.timer.tick(DT) {
            warn!(%err, "skill check tick failed");
        }
    }

    if let Some(remaining) = challenge.linger_secs.as_mut() {
        *remaining -= DT;
        if *remaining <= 0.0 {
            challenge.linger_secs = None;
            challenge.spot = None;
            challenge.timer.reset();
            debug!("challenge closed");
            events.push(GameEvent::ChallengeClosed);
        }
    }
}

/// Begin a challenge at `spot_id`.
pub fn start(
    challenge: &mut Challenge,
    spot_id: u32,
    events: &mut Vec<GameEvent>,
) -> Result<(), CommandError> {
    if challenge.is_open() {
        return Err(CommandError::ChallengeOpen);
    }
    challenge.timer.start();
    challenge.spot = Some(spot_id);
    events.push(GameEvent::ChallengeStarted { spot_id });
    Ok(())
}

/// Stop the gauge. On success a fish from the challenge's spot is hooked.
pub fn commit(
    world: &World,
    challenge: &mut Challenge,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) -> Result<CatchOutcome, CommandError> {
    let outcome = challenge.timer.commit()?;
    challenge.linger_secs = Some(CHALLENGE_LINGER_SECS);
    events.push(GameEvent::CatchAttempt {
        outcome,
        scale: challenge.timer.scale(),
    });

    if outcome == CatchOutcome::Success {
        let fish = challenge
            .spot
            .and_then(|spot_id| roll_fish(world, spot_id, rng));
        match fish {
            Some(fish) => {
                debug!(name = %fish.name, weight = fish.weight, "fish hooked");
                events.push(GameEvent::FishAssigned { fish: fish.clone() });
                challenge.hooked = Some(fish);
            }
            None => warn!(spot = ?challenge.spot, "successful catch at a spot with no fish"),
        }
    }

    Ok(outcome)
}

/// Pick a species uniformly from the spot's catch table.
pub fn roll_fish(world: &World, spot_id: u32, rng: &mut ChaCha8Rng) -> Option<FishSpecies> {
    let mut query = world.query::<&FishingSpot>();
    let spot = query.iter().map(|(_, s)| s).find(|s| s.id == spot_id)?;
    if spot.catch_table.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..spot.catch_table.len());
    Some(spot.catch_table[index].clone())
}

/// Keep the hooked fish: its weight and value go into the ship's hold.
pub fn accept(
    world: &World,
    challenge: &mut Challenge,
    events: &mut Vec<GameEvent>,
) -> Result<(), CommandError> {
    let ship = find_ship(world).ok_or(CommandError::NoShip)?;
    let fish = challenge.hooked.as_ref().ok_or(CommandError::NoHookedFish)?;
    let mut container = world
        .get::<&mut FishContainer>(ship)
        .map_err(|_| CommandError::NoShip)?;

    container.weight += fish.weight;
    container.value = container.value.saturating_add(fish.cost);
    events.push(GameEvent::FishStored {
        weight: container.weight,
        value: container.value,
    });
    challenge.hooked = None;
    Ok(())
}

/// Let the hooked fish go.
pub fn decline(challenge: &mut Challenge, events: &mut Vec<GameEvent>) -> Result<(), CommandError> {
    challenge.hooked.take().ok_or(CommandError::NoHookedFish)?;
    events.push(GameEvent::FishReleased);
    Ok(())
}
