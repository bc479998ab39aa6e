//! Wave spawning system — emits hostiles on a timer under a concurrency
//! cap and a total-count budget.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use wordkeep_core::components::{Hostile, HostileProfile};
use wordkeep_core::config::SpawnConfig;
use wordkeep_core::constants::{BOSS_TRIGGER_RATIO, DT, SPAWN_TIMER_INITIAL_FACTOR};
use wordkeep_core::enums::HostilePhase;
use wordkeep_core::events::GameEvent;
use wordkeep_core::state::WaveView;
use wordkeep_words::WordBag;

use crate::world_setup;

/// Wave spawner state. `running` until the budget is spent or the stage
/// ends; stopping is idempotent.
#[derive(Debug, Clone)]
pub struct WaveState {
    config: SpawnConfig,
    spawned: u32,
    timer: f64,
    active: bool,
}

impl WaveState {
    pub fn new(config: SpawnConfig) -> Self {
        let timer = config.interval_secs * SPAWN_TIMER_INITIAL_FACTOR;
        Self {
            config,
            spawned: 0,
            timer,
            active: true,
        }
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn total(&self) -> u32 {
        self.config.total
    }

    /// The whole budget has been emitted.
    pub fn exhausted(&self) -> bool {
        self.spawned == self.config.total
    }

    /// Whether enough of the wave is out for the boss trigger to fire.
    pub fn boss_threshold_reached(&self) -> bool {
        let threshold = (self.config.total as f64 * BOSS_TRIGGER_RATIO).ceil() as u32;
        self.spawned >= threshold
    }

    /// Stop spawning regardless of remaining budget. Idempotent.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn view(&self, boss_triggered: bool) -> WaveView {
        WaveView {
            spawned: self.spawned,
            total: self.config.total,
            boss_triggered,
        }
    }
}

/// Tick the spawner: when the timer expires and both the concurrency cap
/// and the budget allow, spawn one hostile and reset the timer.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    bag: &mut WordBag,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if !wave.active {
        return;
    }
    if wave.spawned >= wave.config.total {
        wave.active = false;
        return;
    }

    let live = world
        .query::<(&Hostile, &HostileProfile)>()
        .iter()
        .filter(|(_, (_, profile))| profile.phase == HostilePhase::Advancing)
        .count();
    if live >= wave.config.max_concurrent as usize {
        return;
    }

    wave.timer -= DT;
    if wave.timer > 0.0 {
        return;
    }
    wave.timer = wave.config.interval_secs;

    let id = *next_id;
    *next_id += 1;
    let (_entity, word) = world_setup::spawn_hostile(world, rng, bag, &wave.config, id);
    wave.spawned += 1;
    events.push(GameEvent::HostileSpawned { id, word });
}
