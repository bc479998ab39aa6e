//! Simulation engine for WORDKEEP.
//!
//! Owns the hecs ECS world, resolves keystrokes against live word
//! targets, runs systems at a fixed tick rate, and produces
//! `StageSnapshot`s for the frontend.

pub mod economy;
pub mod engine;
pub mod stage_flow;
pub mod systems;
pub mod targeting;
pub mod typing;
pub mod world_setup;

pub use engine::{StageEngine, StageSetup, StageSetupError};
pub use wordkeep_core as core;
