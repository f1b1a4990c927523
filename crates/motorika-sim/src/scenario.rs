//! Built-in session layout, used when the host supplies none.

use motorika_core::config::*;
use motorika_core::enums::DockKind;
use motorika_core::types::{FishSpecies, Position};

/// "Harbor": a sheltered bay with two fishing spots, one dock of each kind
/// and a small upgrade catalogue.
pub fn default_layout() -> SessionLayout {
    SessionLayout {
        scene: "Harbor".to_string(),
        ship_spawn: Placement {
            position: Position::new(0.0, 0.0),
            heading: 0.0,
        },
        restore_point: Placement {
            position: Position::new(0.0, -6.0),
            heading: 0.0,
        },
        rod: RodConfig::default(),
        ship: ShipConfig::default(),
        starting_money: 0,
        fishing_spots: vec![
            FishingSpotConfig {
                id: 1,
                position: Position::new(4.0, 12.0),
                catch_table: vec![
                    fish("Perch", 0.4, 3),
                    fish("Roach", 0.3, 2),
                    fish("Bream", 1.2, 6),
                ],
            },
            FishingSpotConfig {
                id: 2,
                position: Position::new(-10.0, 20.0),
                catch_table: vec![fish("Pike", 2.5, 12), fish("Zander", 1.8, 15)],
            },
        ],
        docks: vec![
            dock(10, DockKind::Market, 6.0, -2.0),
            dock(11, DockKind::BoatShop, -6.0, -2.0),
            dock(12, DockKind::FishingRodShop, 12.0, -2.0),
            dock(13, DockKind::Workshop, -12.0, -2.0),
        ],
        upgrades: vec![
            UpgradeOffer {
                id: 100,
                name: "Carbon Rod".to_string(),
                cost: 20,
                kind: UpgradeKind::Rod {
                    rod: RodConfig {
                        name: "Carbon Rod".to_string(),
                        description: "Longer reach, slower gauge.".to_string(),
                        radius: 5.0,
                        speed: 0.75,
                        cost: 20,
                    },
                },
            },
            UpgradeOffer {
                id: 101,
                name: "Reinforced Hull".to_string(),
                cost: 40,
                kind: UpgradeKind::Hull { max_health: 150 },
            },
        ],
    }
}

fn fish(name: &str, weight: f64, cost: u32) -> FishSpecies {
    FishSpecies {
        name: name.to_string(),
        weight,
        cost,
    }
}

fn dock(id: u32, kind: DockKind, x: f64, y: f64) -> DockConfig {
    DockConfig {
        id,
        kind,
        position: Position::new(x, y),
    }
}
