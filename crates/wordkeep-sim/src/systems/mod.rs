//! Engine systems, run in a fixed order each tick.

pub mod boss;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
