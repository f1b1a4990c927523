//! Motorika headless application.
//!
//! Runs the simulation engine on a dedicated fixed-rate loop thread and
//! exposes it to a host through a small command/snapshot client.

pub mod client;
pub mod error;
pub mod game_loop;
pub mod state;

pub use error::AppError;
pub use motorika_core as core;
