//! Runtime configuration: rod and ship tuning plus the session layout.
//!
//! Everything here is plain serde data. A layout is usually loaded from JSON
//! with [`SessionLayout::from_json`], which also validates it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::DockKind;
use crate::error::ConfigError;
use crate::types::{FishSpecies, Position};

/// A fishing rod. Its radius is the fishing reach and its speed drives the
/// skill-check sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RodConfig {
    pub name: String,
    /// Shop description.
    pub description: String,
    /// Reach within which fishing spots become active (meters).
    pub radius: f64,
    /// Skill-check scale units per second.
    pub speed: f64,
    pub cost: u32,
}

impl Default for RodConfig {
    fn default() -> Self {
        Self {
            name: "Bamboo Rod".to_string(),
            description: "A starter rod.".to_string(),
            radius: DEFAULT_ROD_RADIUS,
            speed: DEFAULT_ROD_SPEED,
            cost: 0,
        }
    }
}

/// Ship hull and health tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub max_health: i32,
    pub damage_constant: i32,
    pub damage_multiplier: f64,
    pub indestructible: bool,
    /// Fraction of max health given back on restore, in `[0, 1]`.
    pub restored_health_fraction: f64,
    /// Reach within which docks become usable (meters).
    pub interaction_radius: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            damage_constant: DEFAULT_DAMAGE_CONSTANT,
            damage_multiplier: DEFAULT_DAMAGE_MULTIPLIER,
            indestructible: false,
            restored_health_fraction: DEFAULT_RESTORED_HEALTH_FRACTION,
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
        }
    }
}

/// Position plus facing, used for spawn and restore points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    #[serde(default)]
    pub heading: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingSpotConfig {
    pub id: u32,
    pub position: Position,
    pub catch_table: Vec<FishSpecies>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    pub id: u32,
    pub kind: DockKind,
    pub position: Position,
}

/// What an upgrade changes once bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UpgradeKind {
    /// Replace the fishing rod.
    Rod { rod: RodConfig },
    /// Raise the ship's maximum health.
    Hull { max_health: i32 },
}

/// A catalogue entry in the shops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub id: u32,
    pub name: String,
    pub cost: u32,
    pub kind: UpgradeKind,
}

/// Everything needed to build a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLayout {
    /// Scene name, used to key save data.
    pub scene: String,
    pub ship_spawn: Placement,
    pub restore_point: Placement,
    #[serde(default)]
    pub rod: RodConfig,
    #[serde(default)]
    pub ship: ShipConfig,
    #[serde(default)]
    pub starting_money: u32,
    #[serde(default)]
    pub fishing_spots: Vec<FishingSpotConfig>,
    #[serde(default)]
    pub docks: Vec<DockConfig>,
    #[serde(default)]
    pub upgrades: Vec<UpgradeOffer>,
}

impl RodConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid(format!("rod {:?} radius must be positive", self.name)));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(invalid(format!("rod {:?} speed must be positive", self.name)));
        }
        Ok(())
    }
}

impl ShipConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(invalid("ship max_health must be positive"));
        }
        if !self.damage_multiplier.is_finite() {
            return Err(invalid("ship damage_multiplier must be finite"));
        }
        if !(0.0..=1.0).contains(&self.restored_health_fraction) {
            return Err(invalid("restored_health_fraction must be within [0, 1]"));
        }
        if !(self.interaction_radius.is_finite() && self.interaction_radius > 0.0) {
            return Err(invalid("ship interaction_radius must be positive"));
        }
        Ok(())
    }
}

impl SessionLayout {
    /// Parse and validate a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let layout: SessionLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.trim().is_empty() {
            return Err(invalid("scene name must not be empty"));
        }
        self.rod.validate()?;
        self.ship.validate()?;

        let mut spot_ids = HashSet::new();
        for spot in &self.fishing_spots {
            if !spot_ids.insert(spot.id) {
                return Err(invalid(format!("duplicate fishing spot id {}", spot.id)));
            }
            if spot.catch_table.is_empty() {
                return Err(invalid(format!("fishing spot {} has no fish", spot.id)));
            }
        }

        let mut dock_ids = HashSet::new();
        for dock in &self.docks {
            if !dock_ids.insert(dock.id) {
                return Err(invalid(format!("duplicate dock id {}", dock.id)));
            }
        }

        let mut upgrade_ids = HashSet::new();
        for offer in &self.upgrades {
            if !upgrade_ids.insert(offer.id) {
                return Err(invalid(format!("duplicate upgrade id {}", offer.id)));
            }
            match &offer.kind {
                UpgradeKind::Rod { rod } => rod.validate()?,
                UpgradeKind::Hull { max_health } if *max_health <= 0 => {
                    return Err(invalid(format!(
                        "upgrade {} max_health must be positive",
                        offer.id
                    )));
                }
                UpgradeKind::Hull { .. } => {}
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(message.into())
}
