//! Save data for the ship and the session.
//!
//! Only encoding lives here. Where the bytes are stored is up to the host,
//! which should key them with [`save_key`].

use serde::{Deserialize, Serialize};

use motorika_core::constants::SHIP_POSITION_SAVE_FILE;
use motorika_core::error::PersistenceError;
use motorika_core::types::Position;

/// Where the ship is and which way it faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPosition {
    pub position: Position,
    pub heading: f64,
}

/// Storage key for a scene's ship save, e.g. `Harbor_ShipPosition.dat`.
pub fn save_key(scene: &str) -> String {
    format!("{scene}_{SHIP_POSITION_SAVE_FILE}")
}

/// Everything needed to resume a session in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub scene: String,
    pub ship: SavedPosition,
    /// A value of zero or less loads as full health.
    pub health: i32,
    pub money: u32,
    #[serde(default)]
    pub purchased: Vec<u32>,
}

impl SaveData {
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject saves written for a different scene.
    pub fn check_scene(&self, scene: &str) -> Result<(), PersistenceError> {
        if self.scene == scene {
            Ok(())
        } else {
            Err(PersistenceError::SceneMismatch {
                expected: scene.to_string(),
                found: self.scene.clone(),
            })
        }
    }
}
