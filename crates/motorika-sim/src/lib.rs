//! Simulation engine for Motorika.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod challenge;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod scenario;
pub mod shop;
pub mod systems;
pub mod world_setup;

pub use motorika_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::CommandError;
