//! Damage system: turns reported contacts into hull damage.
//!
//! Also owns the health bookkeeping shared by repair and restore.

use std::collections::VecDeque;

use hecs::World;
use tracing::info;

use motorika_core::components::{Health, Hull, Ship};
use motorika_core::events::GameEvent;
use motorika_core::types::Contact;

/// Damage a contact deals to a hull. Halves round to even.
pub fn collision_damage(hull: &Hull, contact: &Contact) -> i32 {
    if contact.harmless || hull.indestructible {
        return 0;
    }
    let raw = hull.damage_constant as f64 + contact.relative_speed.abs() * hull.damage_multiplier;
    (raw.round_ties_even() as i32).max(0)
}

/// Apply a signed health change, clamped to `[0, max]`.
///
/// Zero amounts are ignored. Returns true when this change took the ship
/// from alive to zero health.
pub fn change_health(health: &mut Health, amount: i32, events: &mut Vec<GameEvent>) -> bool {
    if amount == 0 {
        return false;
    }
    let before = health.current;
    health.current = health.current.saturating_add(amount).clamp(0, health.max);
    if health.current == before {
        return false;
    }

    events.push(GameEvent::HealthChanged {
        current: health.current,
        max: health.max,
    });
    before > 0 && health.current == 0
}

/// Drain queued contacts against the ship. Returns true if the ship was
/// destroyed this tick.
pub fn run(
    world: &mut World,
    contacts: &mut VecDeque<Contact>,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut destroyed = false;

    for (_entity, (_ship, hull, health)) in world.query_mut::<(&Ship, &Hull, &mut Health)>() {
        for contact in contacts.drain(..) {
            let damage = collision_damage(hull, &contact);
            if change_health(health, -damage, events) {
                info!(speed = contact.relative_speed, "ship destroyed");
                events.push(GameEvent::ShipDestroyed);
                destroyed = true;
            }
        }
    }
    contacts.clear();

    destroyed
}

/// Bring the ship back to full health.
pub fn repair(health: &mut Health, events: &mut Vec<GameEvent>) {
    change_health(health, health.max - health.current, events);
    events.push(GameEvent::ShipRepaired);
}
