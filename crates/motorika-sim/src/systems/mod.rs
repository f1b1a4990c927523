//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they drive. Observable outcomes are
//! pushed onto the tick's event list.

pub mod action_button;
pub mod damage;
pub mod fishing;
pub mod movement;
pub mod proximity;
pub mod restore;
pub mod snapshot;

use hecs::{Entity, World};

use motorika_core::components::Ship;

/// The player's ship, if the session has one.
pub fn find_ship(world: &World) -> Option<Entity> {
    world.query::<&Ship>().iter().next().map(|(entity, _)| entity)
}
