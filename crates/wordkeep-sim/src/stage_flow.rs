//! Stage-completion decision logic.
//!
//! Pure function over the engine's aggregated state; the engine applies
//! the terminal transition (idempotently) when a decision comes back.

use wordkeep_core::enums::StageStatus;

/// Inputs to the completion check, gathered once per tick.
#[derive(Debug, Clone, Copy)]
pub struct StageProgress {
    pub wall_depleted: bool,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
    pub wave_exhausted: bool,
    pub live_hostiles: usize,
}

/// Decide whether the stage has reached a terminal outcome.
///
/// Loss (wall at zero) dominates. Winning requires the full conjunction:
/// boss spawned, boss defeated, wave budget fully emitted, and no live
/// hostiles — boss defeat alone is not enough while strays remain, and
/// wave exhaustion is not enough before the boss falls.
pub fn evaluate(progress: StageProgress) -> Option<StageStatus> {
    if progress.wall_depleted {
        return Some(StageStatus::Lost);
    }
    if progress.boss_spawned
        && progress.boss_defeated
        && progress.wave_exhausted
        && progress.live_hostiles == 0
    {
        return Some(StageStatus::Won);
    }
    None
}
