//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player's ship, fishing spots, docks and the restore point
//! from a session layout.

use hecs::{Entity, World};

use motorika_core::components::*;
use motorika_core::config::*;
use motorika_core::types::Velocity;

/// Clear the world and populate it from `layout`. Returns the ship.
pub fn setup_session(world: &mut World, layout: &SessionLayout) -> Entity {
    world.clear();
    let ship = spawn_ship(world, &layout.ship_spawn, &layout.ship);
    for spot in &layout.fishing_spots {
        spawn_fishing_spot(world, spot);
    }
    for dock in &layout.docks {
        spawn_dock(world, dock);
    }
    spawn_restore_point(world, &layout.restore_point);
    ship
}

/// Spawn the player's ship at full health with an empty hold.
pub fn spawn_ship(world: &mut World, spawn: &Placement, config: &ShipConfig) -> Entity {
    world.spawn((
        Ship,
        spawn.position,
        Velocity::default(),
        Heading(spawn.heading),
        Health {
            current: config.max_health,
            max: config.max_health,
        },
        Hull {
            damage_constant: config.damage_constant,
            damage_multiplier: config.damage_multiplier,
            indestructible: config.indestructible,
        },
        FishContainer::default(),
    ))
}

pub fn spawn_fishing_spot(world: &mut World, config: &FishingSpotConfig) -> Entity {
    world.spawn((
        FishingSpot {
            id: config.id,
            catch_table: config.catch_table.clone(),
        },
        config.position,
    ))
}

pub fn spawn_dock(world: &mut World, config: &DockConfig) -> Entity {
    world.spawn((
        Dock {
            id: config.id,
            kind: config.kind,
        },
        config.position,
    ))
}

pub fn spawn_restore_point(world: &mut World, placement: &Placement) -> Entity {
    world.spawn((RestorePoint, placement.position, Heading(placement.heading)))
}
