//! Fishing logic for Motorika.
//!
//! Implements the pulse-timing skill check behind the fishing challenge and
//! the nearest-interactable selection that decides which fishing spot (or
//! dock) the action button refers to. No ECS dependency; operates on plain
//! data fed in by the caller.

pub mod proximity;
pub mod skill_check;

pub use motorika_core as core;
pub use proximity::{ActiveChanged, ProximitySelector};
pub use skill_check::{SkillCheckConfig, SkillCheckTimer};

#[cfg(test)]
mod tests;
