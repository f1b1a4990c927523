//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Heading follows the velocity unless the entity is nearly stopped.

use hecs::World;

use motorika_core::components::Heading;
use motorika_core::constants::{DT, HEADING_MIN_SPEED};
use motorika_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        *pos = pos.advanced(vel, DT);
    }

    for (_entity, (heading, vel)) in world.query_mut::<(&mut Heading, &Velocity)>() {
        if vel.speed() > HEADING_MIN_SPEED {
            heading.0 = vel.heading();
        }
    }
}
