//! Events emitted by the engine for UI and audio feedback.
//!
//! Accumulated during a tick and drained into the snapshot. This is the
//! engine's observability surface: every externally meaningful transition
//! appears here exactly once.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Everything a frontend may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave hostile entered the field.
    HostileSpawned { id: u32, word: String },
    /// A hostile was removed by typing or bomb.
    HostileEliminated {
        id: u32,
        word: String,
        cause: EliminationCause,
    },
    /// A heavy hostile soaked a completion; its word was replaced.
    HostileDamaged {
        id: u32,
        word: String,
        replacement: String,
    },
    /// A hostile reached the wall.
    WallBreached { damage: u32, remaining: u32 },
    /// The boss entered the field.
    BossSpawned { name: String },
    /// The boss finished retreating and presents its next word.
    BossWordAdvanced { word: String },
    /// A boss word was completed (retreat begins or defeat follows).
    BossRepelled,
    /// The boss's last word was completed.
    BossDefeated,
    /// The boss reached the wall, dealt damage, and reset.
    BossBreached { damage: u32, remaining: u32 },
    /// A pickup started falling.
    PickupDropped { id: u32, kind: PickupKind },
    /// A pickup was collected (typed or on landing).
    PickupCollected {
        id: u32,
        kind: PickupKind,
        trigger: PickupTrigger,
    },
    /// A typed pickup reached the ground uncollected.
    PickupMissed { id: u32, kind: PickupKind },
    /// A bomb detonated, clearing the field.
    BombDetonated { eliminated: u32 },
    /// A bomb charge was deposited.
    BombChargeGained { source: ChargeSource },
    /// A word was completed; `targets` is how many live targets it hit.
    WordCompleted { word: String, targets: u32 },
    /// Terminal outcomes.
    StageWon,
    StageLost,
}
