//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Which kind of word target the resolver is currently bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Hostile,
    Boss,
    Pickup,
}

/// Hostile archetype. Determines spawn weight, word-length bucket,
/// speed multiplier, and hit points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileArchetype {
    #[default]
    Normal,
    Fast,
    Heavy,
}

/// Movement path of a hostile as it advances on the wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostilePath {
    #[default]
    Straight,
    /// Sine-wave lateral weave, amplitude scaled by word length.
    Zigzag,
    /// Constant lateral drift, clamped to the field margins.
    Drift,
}

/// Hostile lifecycle phase. `Eliminated` and `Breached` are terminal;
/// the cleanup system despawns them after their effects are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostilePhase {
    #[default]
    Advancing,
    Eliminated,
    Breached,
}

/// What eliminated a hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationCause {
    /// Word completed by typing.
    Arrow,
    /// Area-clear bomb.
    Bomb,
}

/// Boss lifecycle state. Breaching does not end the boss: it deals its
/// damage, resets to the entry line, and keeps advancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossState {
    #[default]
    Advancing,
    /// Pushed back after a word completion; invulnerable until the
    /// retreat timer expires and the next word is installed.
    Retreating,
    Defeated,
}

/// Resource carried by a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Requires typing its word; grants a bomb charge.
    BombCharge,
    /// Auto-collected on landing; repairs the wall.
    WallRepair,
}

/// Pickup lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupState {
    #[default]
    Falling,
    Collected,
    Missed,
}

/// How a pickup was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupTrigger {
    Typed,
    Auto,
}

/// Where a bomb charge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargeSource {
    Combo,
    Pickup,
    Cooldown,
}

/// Stage status (top-level state machine). `Won` and `Lost` are terminal
/// and entered exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    #[default]
    Active,
    Paused,
    Won,
    Lost,
}

impl StageStatus {
    /// Whether the stage has reached a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageStatus::Won | StageStatus::Lost)
    }
}
