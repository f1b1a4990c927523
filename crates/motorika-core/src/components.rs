//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::DockKind;
use crate::types::FishSpecies;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Ship hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Collision tuning of the ship hull.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    /// Minimum damage dealt by any harmful contact.
    pub damage_constant: i32,
    /// Additional damage per m/s of impact speed.
    pub damage_multiplier: f64,
    /// Ignores all contact damage.
    pub indestructible: bool,
}

/// Facing of an entity in radians (0 = North, clockwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Fish stored in the ship's hold, awaiting sale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FishContainer {
    /// Total weight (kg).
    pub weight: f64,
    /// Total market value.
    pub value: u32,
}

/// A place where fish bite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingSpot {
    pub id: u32,
    /// Species that may be hooked here, picked uniformly.
    pub catch_table: Vec<FishSpecies>,
}

/// A dock offering a service (market, shop, workshop).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dock {
    pub id: u32,
    pub kind: DockKind,
}

/// Where a wrecked ship is brought back. Carries its own Position + Heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RestorePoint;
