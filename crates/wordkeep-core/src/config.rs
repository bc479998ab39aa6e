//! Stage configuration, validated at construction time.
//!
//! A stage without a boss word list or a spawn budget has no terminal
//! condition, so those are fatal errors here rather than runtime surprises.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::HostilePath;

/// Fatal configuration problems, detected before a stage starts.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("boss word list is empty")]
    EmptyBossWords,
    #[error("spawn total is zero")]
    ZeroSpawnTotal,
    #[error("max concurrent hostiles is zero")]
    ZeroConcurrencyCap,
    #[error("spawn path set is empty")]
    NoSpawnPaths,
    #[error("spawn speed range is inverted ({min} > {max})")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("wall max hp is zero")]
    ZeroWallHealth,
}

/// Wall parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    pub max_hp: u32,
}

/// Inclusive hostile speed range, before archetype multipliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

/// Wave spawning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Total hostiles the wave will emit.
    pub total: u32,
    /// Seconds between spawns.
    pub interval_secs: f64,
    /// Concurrency cap on live hostiles.
    pub max_concurrent: u32,
    pub speed: SpeedRange,
    pub paths: Vec<HostilePath>,
}

/// Bomb resource parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombConfig {
    pub initial: u32,
    pub max: u32,
    /// Seconds before an expended last charge regenerates.
    pub cooldown_secs: f64,
    /// Combo milestone granting a free charge. Clamped to >= 1.
    pub combo_threshold: u32,
}

/// Boss parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConfig {
    pub name: String,
    /// Ordered word gauntlet. Must be non-empty.
    pub words: Vec<String>,
    pub speed: f64,
    pub pushback: f64,
    pub damage: u32,
}

/// Everything a stage needs beyond the word bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageParams {
    pub wall: WallConfig,
    /// Distance from the wall at which targets count as dangerous.
    pub danger_zone: f64,
    pub spawn: SpawnConfig,
    pub bombs: BombConfig,
    /// Probability that a typed elimination drops a pickup.
    pub drop_rate: f64,
    pub boss: BossConfig,
}

impl StageParams {
    /// Validate the parameters a stage cannot run without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boss.words.is_empty() {
            return Err(ConfigError::EmptyBossWords);
        }
        if self.spawn.total == 0 {
            return Err(ConfigError::ZeroSpawnTotal);
        }
        if self.spawn.max_concurrent == 0 {
            return Err(ConfigError::ZeroConcurrencyCap);
        }
        if self.spawn.paths.is_empty() {
            return Err(ConfigError::NoSpawnPaths);
        }
        if self.spawn.speed.min > self.spawn.speed.max {
            return Err(ConfigError::InvalidSpeedRange {
                min: self.spawn.speed.min,
                max: self.spawn.speed.max,
            });
        }
        if self.wall.max_hp == 0 {
            return Err(ConfigError::ZeroWallHealth);
        }
        Ok(())
    }
}
