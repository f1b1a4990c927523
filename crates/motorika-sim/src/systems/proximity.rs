//! Proximity system: overlap detection feeding the fishing-spot and dock
//! selectors.
//!
//! Stands in for the host's trigger volumes. Each tick every spot and dock is
//! tested against the ship's position; entering or leaving reach becomes an
//! `on_enter` / `on_exit` on the matching selector, and the nearest candidate
//! is recomputed for the ship's new position. One event is emitted per
//! selector whose active identity differs from the previous tick.

use hecs::World;
use tracing::warn;

use motorika_core::components::{Dock, FishingSpot};
use motorika_core::events::GameEvent;
use motorika_core::types::Position;
use motorika_fishing::ProximitySelector;

use super::find_ship;

pub fn run(
    world: &World,
    spots: &mut ProximitySelector<u32>,
    docks: &mut ProximitySelector<u32>,
    events: &mut Vec<GameEvent>,
) {
    let Some(ship) = find_ship(world) else {
        return;
    };
    let Ok(ship_pos) = world.get::<&Position>(ship).map(|p| *p) else {
        return;
    };

    let spot_positions: Vec<(u32, Position)> = world
        .query::<(&FishingSpot, &Position)>()
        .iter()
        .map(|(_, (spot, pos))| (spot.id, *pos))
        .collect();
    if let Some((previous, current)) = sync(spots, ship_pos, spot_positions) {
        events.push(GameEvent::ActiveFishingSpotChanged { previous, current });
    }

    let dock_positions: Vec<(u32, Position)> = world
        .query::<(&Dock, &Position)>()
        .iter()
        .map(|(_, (dock, pos))| (dock.id, *pos))
        .collect();
    if let Some((previous, current)) = sync(docks, ship_pos, dock_positions) {
        events.push(GameEvent::ActiveDockChanged { previous, current });
    }
}

/// Bring `selector` in line with which `targets` are in reach of `actor`.
/// Returns the net change of the active target, if any.
pub fn sync(
    selector: &mut ProximitySelector<u32>,
    actor: Position,
    mut targets: Vec<(u32, Position)>,
) -> Option<(Option<u32>, Option<u32>)> {
    let before = selector.active().copied();
    targets.sort_by_key(|(id, _)| *id);
    selector.set_actor(actor);

    let leaving: Vec<u32> = selector
        .candidates()
        .copied()
        .filter(|id| {
            !targets
                .iter()
                .any(|(target, pos)| target == id && selector.in_range(actor, *pos))
        })
        .collect();
    for id in &leaving {
        selector.on_exit(id);
    }

    for (id, pos) in targets {
        if selector.contains(&id) || !selector.in_range(actor, pos) {
            continue;
        }
        if let Err(err) = selector.on_enter(id, pos) {
            warn!(id, %err, "overlap enter rejected");
        }
    }

    selector.recompute_nearest(actor);

    let after = selector.active().copied();
    (before != after).then_some((before, after))
}
