//! Action button system: derives what the context button does this tick.
//!
//! Priority: an open challenge, then the active dock, then the active
//! fishing spot. With nothing in reach the button is None.

use hecs::World;
use tracing::debug;

use motorika_core::components::Dock;
use motorika_core::enums::{ActionType, DockKind};
use motorika_core::events::GameEvent;

use crate::challenge::Challenge;

/// Kind of the dock with the given id, if it exists.
pub fn dock_kind(world: &World, dock_id: u32) -> Option<DockKind> {
    world
        .query::<&Dock>()
        .iter()
        .find(|(_, dock)| dock.id == dock_id)
        .map(|(_, dock)| dock.kind)
}

pub fn resolve(
    challenge: &Challenge,
    active_dock: Option<DockKind>,
    active_spot: Option<u32>,
) -> ActionType {
    if let Some(action) = challenge.action() {
        return action;
    }
    if let Some(kind) = active_dock {
        return kind.into();
    }
    if active_spot.is_some() {
        return ActionType::FishingChallenge;
    }
    ActionType::None
}

/// Recompute the button and emit `ActionSwitched` when it changes.
pub fn run(
    world: &World,
    challenge: &Challenge,
    active_dock: Option<u32>,
    active_spot: Option<u32>,
    action: &mut ActionType,
    events: &mut Vec<GameEvent>,
) {
    let kind = active_dock.and_then(|id| dock_kind(world, id));
    let next = resolve(challenge, kind, active_spot);
    switch(action, next, events);
}

/// Set the button, emitting `ActionSwitched` only on a real change.
pub fn switch(action: &mut ActionType, next: ActionType, events: &mut Vec<GameEvent>) {
    if *action == next {
        return;
    }
    debug!(from = ?*action, to = ?next, "action switched");
    *action = next;
    events.push(GameEvent::ActionSwitched { action: next });
}
