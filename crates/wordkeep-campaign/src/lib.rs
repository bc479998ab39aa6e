//! Campaign progression: the built-in stage table and an explicit
//! session object.
//!
//! The session is a plain value handed to the stage controller at
//! construction — initialized once per process run, saved and loaded
//! over an explicit JSON boundary. No ambient global state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wordkeep_core::config::{
    BombConfig, BossConfig, SpawnConfig, SpeedRange, StageParams, WallConfig,
};
use wordkeep_core::enums::HostilePath;
use wordkeep_words::WordMix;

#[cfg(test)]
mod tests;

/// Campaign errors surfaced to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampaignError {
    #[error("stage index {index} out of range (stage count {count})")]
    StageOutOfRange { index: usize, count: usize },
    #[error("stage {index} is still locked")]
    StageLocked { index: usize },
}

/// Stage difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// A playable stage: identity, difficulty mix, and engine parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub word_mix: WordMix,
    pub params: StageParams,
}

/// Per-player campaign state. `unlocked_stage` is the highest stage
/// index the player may enter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSession {
    pub current_stage: usize,
    pub unlocked_stage: usize,
    pub selected_bank_id: String,
}

impl Default for CampaignSession {
    fn default() -> Self {
        Self {
            current_stage: 0,
            unlocked_stage: 0,
            selected_bank_id: "default".into(),
        }
    }
}

impl CampaignSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.unlocked_stage
    }

    /// Enter a stage. Rejects out-of-range and locked indices.
    pub fn select_stage(&mut self, index: usize, stage_count: usize) -> Result<(), CampaignError> {
        if index >= stage_count {
            return Err(CampaignError::StageOutOfRange {
                index,
                count: stage_count,
            });
        }
        if !self.is_unlocked(index) {
            return Err(CampaignError::StageLocked { index });
        }
        self.current_stage = index;
        Ok(())
    }

    /// A stage was won: unlock the next one, clamped to the last stage.
    pub fn mark_stage_completed(&mut self, index: usize, stage_count: usize) {
        if index >= stage_count {
            return;
        }
        let next = (index + 1).min(stage_count.saturating_sub(1));
        self.unlocked_stage = self.unlocked_stage.max(next);
    }

    pub fn select_bank(&mut self, bank_id: impl Into<String>) {
        self.selected_bank_id = bank_id.into();
    }

    /// Reset all progression.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Save/load boundary.

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The built-in three-stage campaign.
pub fn builtin_stages() -> Vec<StageDefinition> {
    vec![
        StageDefinition {
            id: 1,
            name: "Rampart Drill".into(),
            description: "A light probing force. Learn the rhythm of arrows and bombs.".into(),
            difficulty: Difficulty::Easy,
            word_mix: WordMix::new(0.6, 0.3, 0.1),
            params: StageParams {
                wall: WallConfig { max_hp: 4 },
                danger_zone: 140.0,
                spawn: SpawnConfig {
                    total: 16,
                    interval_secs: 1.6,
                    max_concurrent: 3,
                    speed: SpeedRange {
                        min: 70.0,
                        max: 120.0,
                    },
                    paths: vec![HostilePath::Straight, HostilePath::Drift],
                },
                bombs: BombConfig {
                    initial: 1,
                    max: 2,
                    cooldown_secs: 18.0,
                    combo_threshold: 5,
                },
                drop_rate: 0.25,
                boss: BossConfig {
                    name: "Shadow Scout".into(),
                    words: vec![
                        "shadow".into(),
                        "focus".into(),
                        "valor".into(),
                        "resist".into(),
                        "unyielding".into(),
                    ],
                    speed: 60.0,
                    pushback: 140.0,
                    damage: 2,
                },
            },
        },
        StageDefinition {
            id: 2,
            name: "Storm Front".into(),
            description: "More raiders from every angle. Keep the pace, keep the accuracy."
                .into(),
            difficulty: Difficulty::Normal,
            word_mix: WordMix::new(0.3, 0.4, 0.3),
            params: StageParams {
                wall: WallConfig { max_hp: 4 },
                danger_zone: 140.0,
                spawn: SpawnConfig {
                    total: 22,
                    interval_secs: 1.35,
                    max_concurrent: 5,
                    speed: SpeedRange {
                        min: 90.0,
                        max: 150.0,
                    },
                    paths: vec![
                        HostilePath::Straight,
                        HostilePath::Zigzag,
                        HostilePath::Drift,
                    ],
                },
                bombs: BombConfig {
                    initial: 1,
                    max: 3,
                    cooldown_secs: 17.0,
                    combo_threshold: 5,
                },
                drop_rate: 0.32,
                boss: BossConfig {
                    name: "Storm Quartermaster".into(),
                    words: vec![
                        "tempest".into(),
                        "barricade".into(),
                        "sentinel".into(),
                        "command".into(),
                        "stronghold".into(),
                        "onslaught".into(),
                    ],
                    speed: 70.0,
                    pushback: 170.0,
                    damage: 2,
                },
            },
        },
        StageDefinition {
            id: 3,
            name: "Midnight Siege".into(),
            description: "The strongest push comes in the dark. Hold the wall to the end."
                .into(),
            difficulty: Difficulty::Hard,
            word_mix: WordMix::new(0.1, 0.3, 0.6),
            params: StageParams {
                wall: WallConfig { max_hp: 5 },
                danger_zone: 160.0,
                spawn: SpawnConfig {
                    total: 26,
                    interval_secs: 1.2,
                    max_concurrent: 5,
                    speed: SpeedRange {
                        min: 100.0,
                        max: 170.0,
                    },
                    paths: vec![
                        HostilePath::Straight,
                        HostilePath::Zigzag,
                        HostilePath::Drift,
                    ],
                },
                bombs: BombConfig {
                    initial: 2,
                    max: 3,
                    cooldown_secs: 15.0,
                    combo_threshold: 4,
                },
                drop_rate: 0.38,
                boss: BossConfig {
                    name: "Dusk Commander".into(),
                    words: vec![
                        "resurgence".into(),
                        "cataclysm".into(),
                        "dominion".into(),
                        "unbreakable".into(),
                        "sovereign".into(),
                        "indomitable".into(),
                        "perseverance".into(),
                    ],
                    speed: 82.0,
                    pushback: 200.0,
                    damage: 3,
                },
            },
        },
    ]
}
