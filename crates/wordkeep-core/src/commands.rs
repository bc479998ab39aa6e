//! Player commands sent from the frontend to the engine.
//!
//! Commands are queued and processed FIFO at the next tick boundary;
//! each is handled to completion before the next.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A printable key press. Only single ASCII letters/digits are
    /// meaningful; everything else is ignored by the resolver.
    PressKey { ch: char },
    /// Clears the entire input buffer (not one character).
    Backspace,
    /// Detonate a bomb charge, eliminating every live hostile.
    ActivateBomb,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
}
