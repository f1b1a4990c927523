//! Restore system: brings a wrecked ship back at the restore point.

use hecs::World;
use tracing::info;

use motorika_core::components::{FishContainer, Heading, Health, RestorePoint};
use motorika_core::events::GameEvent;
use motorika_core::types::{Position, Velocity};

use super::damage::change_health;
use super::find_ship;
use crate::error::CommandError;

/// Heal the ship by `fraction` of its max health (at least one point), empty
/// its hold and move it, stopped, to the restore point.
pub fn run(
    world: &mut World,
    fraction: f64,
    events: &mut Vec<GameEvent>,
) -> Result<(), CommandError> {
    let ship = find_ship(world).ok_or(CommandError::NoShip)?;

    let target = world
        .query::<(&RestorePoint, &Position, &Heading)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading))| (*pos, *heading));

    let (position, heading) = target.unwrap_or_else(|| {
        let pos = world.get::<&Position>(ship).map(|p| *p).unwrap_or_default();
        (pos, Heading::default())
    });

    let (health, container, pos, vel, ship_heading) = world
        .query_one_mut::<(
            &mut Health,
            &mut FishContainer,
            &mut Position,
            &mut Velocity,
            &mut Heading,
        )>(ship)
        .map_err(|_| CommandError::NoShip)?;

    let heal = ((health.max as f64 * fraction).round_ties_even() as i32).max(1);
    change_health(health, heal, events);
    *container = FishContainer::default();
    *pos = position;
    *vel = Velocity::default();
    *ship_heading = heading;

    info!(x = position.x, y = position.y, health = health.current, "ship restored");
    events.push(GameEvent::ShipRestored { position });
    Ok(())
}
