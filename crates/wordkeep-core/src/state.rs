//! Stage snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete stage state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub time: SimTime,
    pub status: StageStatus,
    pub wall: WallView,
    pub bomb: BombView,
    pub score: ScoreView,
    pub typing: TypingView,
    pub wave: WaveView,
    pub hostiles: Vec<HostileView>,
    pub boss: Option<BossView>,
    pub pickups: Vec<PickupView>,
    /// Events that occurred since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// Wall health for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallView {
    pub current: u32,
    pub max: u32,
}

/// Bomb resource status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BombView {
    pub charges: u32,
    pub max_charges: u32,
    /// Seconds until the cooldown restores a charge (0 when idle).
    pub cooldown_remaining: f64,
    pub cooldown: f64,
}

/// Running score summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub combo: u32,
    /// Correct chars / (correct chars + mistakes); 1.0 with no attempts.
    pub accuracy: f64,
    pub words_completed: u32,
    pub typed_eliminations: u32,
    pub bomb_eliminations: u32,
    pub bombs_used: u32,
    pub breaches: u32,
}

/// The resolver's visible state: what is focused and what has been typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypingView {
    /// Kind of the focused target, if any.
    pub target: Option<TargetKind>,
    pub word: String,
    pub input: String,
    pub mistake: bool,
}

/// Wave progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub spawned: u32,
    pub total: u32,
    pub boss_triggered: bool,
}

/// A live hostile on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub id: u32,
    pub word: String,
    pub typed: usize,
    pub archetype: HostileArchetype,
    pub path: HostilePath,
    pub position: Position,
    pub speed: f64,
    pub hit_points: u8,
    /// Within the danger zone of the wall.
    pub in_danger_zone: bool,
    pub focused: bool,
}

/// The stage boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub name: String,
    pub word: String,
    pub typed: usize,
    pub state: BossState,
    pub position: Position,
    /// Words left after the current one.
    pub words_remaining: usize,
    pub in_danger_zone: bool,
    pub focused: bool,
}

/// A falling pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u32,
    pub kind: PickupKind,
    /// Present only on typed pickups.
    pub word: Option<String>,
    pub typed: usize,
    pub position: Position,
    pub requires_typing: bool,
    pub focused: bool,
}
