//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// The typeable word attached to an entity, with typing progress.
/// Invariant: `typed <= text.len()`; equality means the word is complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordLabel {
    pub text: String,
    pub typed: usize,
}

impl WordLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            typed: 0,
        }
    }
}

/// Marks an entity as a wave hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks an entity as the stage boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss;

/// Marks an entity as a falling pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;

/// Hostile behavior and motion profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileProfile {
    /// Display id, assigned in spawn order.
    pub id: u32,
    pub archetype: HostileArchetype,
    pub path: HostilePath,
    pub phase: HostilePhase,
    /// Advance speed (world units per second).
    pub speed: f64,
    /// Remaining word completions before elimination.
    pub hit_points: u8,
    /// Spawn lane, the zigzag center line.
    pub start_x: f64,
    /// Zigzag angular frequency (radians per second).
    pub zigzag_freq: f64,
    /// Lateral drift rate (world units per second).
    pub drift_rate: f64,
    /// Seconds since spawn, drives the zigzag phase.
    pub elapsed_secs: f64,
}

/// Boss behavior profile. One boss exists per stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossProfile {
    pub name: String,
    /// Ordered word gauntlet; the current word is `words[current_index]`.
    pub words: Vec<String>,
    pub current_index: usize,
    pub state: BossState,
    /// Advance speed (world units per second).
    pub speed: f64,
    /// Distance pushed back per completed word.
    pub pushback: f64,
    /// Wall damage dealt on breach.
    pub damage: u32,
    /// Remaining invulnerable retreat time (seconds).
    pub retreat_remaining_secs: f64,
}

/// Pickup behavior profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupProfile {
    /// Display id, assigned in drop order.
    pub id: u32,
    pub kind: PickupKind,
    pub state: PickupState,
    /// Whether collection is gated on typing the attached word.
    pub requires_typing: bool,
    /// Fall speed (world units per second).
    pub fall_speed: f64,
}
