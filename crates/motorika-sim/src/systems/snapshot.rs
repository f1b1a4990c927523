//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use motorika_core::components::*;
use motorika_core::enums::*;
use motorika_core::events::GameEvent;
use motorika_core::state::*;
use motorika_core::types::{Position, SimTime, Velocity};

use crate::challenge::Challenge;
use crate::shop::Shop;

/// Engine-owned state that is not stored in the world.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub money: u32,
    pub action: ActionType,
    pub challenge: &'a Challenge,
    pub active_fishing_spot: Option<u32>,
    pub active_dock: Option<u32>,
    pub shop: &'a Shop,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        ship: build_ship(world),
        money: ctx.money,
        action: ctx.action,
        skill_check: build_skill_check(ctx.challenge),
        active_fishing_spot: ctx.active_fishing_spot,
        active_dock: ctx.active_dock,
        hooked_fish: ctx.challenge.hooked.clone(),
        upgrades: ctx.shop.views(ctx.money),
        events,
    }
}

/// Build ShipView from the ship's components.
fn build_ship(world: &World) -> ShipView {
    world
        .query::<(
            &Ship,
            &Position,
            &Velocity,
            &Heading,
            &Health,
            &FishContainer,
        )>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel, heading, health, container))| ShipView {
            position: *pos,
            velocity: *vel,
            heading: heading.0,
            health: health.current,
            max_health: health.max,
            fish_weight: container.weight,
            fish_value: container.value,
        })
        .unwrap_or_default()
}

fn build_skill_check(challenge: &Challenge) -> SkillCheckView {
    let timer = &challenge.timer;
    SkillCheckView {
        state: timer.state(),
        scale: timer.scale(),
        direction: timer.direction(),
        pass_low: timer.config().pass_low,
        pass_high: timer.config().pass_high,
        outcome: timer.outcome(),
    }
}
