//! Stage engine — the core of the game.
//!
//! `StageEngine` owns the hecs ECS world, resolves player commands,
//! runs all systems, and produces `StageSnapshot`s. Completely headless
//! (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use wordkeep_core::commands::PlayerCommand;
use wordkeep_core::components::{
    Boss, BossProfile, Hostile, HostileProfile, Pickup, PickupProfile, WordLabel,
};
use wordkeep_core::config::{ConfigError, StageParams};
use wordkeep_core::constants::*;
use wordkeep_core::enums::*;
use wordkeep_core::events::GameEvent;
use wordkeep_core::state::StageSnapshot;
use wordkeep_core::types::{Position, SimTime};
use wordkeep_words::{compose_bag, LengthBucket, WordBag, WordBank, WordMix, WordMixError};

use crate::economy::{BombState, ScoreState, WallState};
use crate::stage_flow::{self, StageProgress};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::wave_spawner::WaveState;
use crate::targeting::{self, Candidate};
use crate::typing::{FeedOutcome, TypingResolver, TypingSignal};
use crate::world_setup;

/// Fatal problems detected when a stage is constructed.
#[derive(Debug, Error)]
pub enum StageSetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Mix(#[from] WordMixError),
}

/// Everything needed to start a stage.
pub struct StageSetup {
    pub params: StageParams,
    pub bank: WordBank,
    pub mix: WordMix,
    /// RNG seed for determinism. Same seed + same commands = same stage.
    pub seed: u64,
}

/// The stage engine. Owns the ECS world and all stage state.
pub struct StageEngine {
    world: World,
    time: SimTime,
    status: StageStatus,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    params: StageParams,
    bag: WordBag,
    wave: WaveState,
    resolver: TypingResolver,
    focus: Option<Entity>,
    economy: ScoreState,
    bomb: BombState,
    wall: WallState,

    boss_spawned: bool,
    boss_defeated: bool,
    next_hostile_id: u32,
    next_pickup_id: u32,
}

impl StageEngine {
    /// Create a new stage engine. Fails fast on configuration the stage
    /// cannot run with (no boss words, no spawn budget, bad mix).
    pub fn new(setup: StageSetup) -> Result<Self, StageSetupError> {
        setup.params.validate()?;
        setup.mix.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(setup.seed);
        let bag = WordBag::new(compose_bag(
            setup.params.spawn.total,
            &setup.mix,
            &setup.bank,
            &mut rng,
        ));
        let wave = WaveState::new(setup.params.spawn.clone());
        let bomb = BombState::new(&setup.params.bombs);
        let wall = WallState::new(setup.params.wall.max_hp);

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            status: StageStatus::Active,
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            params: setup.params,
            bag,
            wave,
            resolver: TypingResolver::new(),
            focus: None,
            economy: ScoreState::default(),
            bomb,
            wall,
            boss_spawned: false,
            boss_defeated: false,
            next_hostile_id: 0,
            next_pickup_id: 0,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the stage by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> StageSnapshot {
        self.process_commands();

        if self.status == StageStatus::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: &self.time,
                status: self.status,
                wall: &self.wall,
                bomb: &self.bomb,
                score: &self.economy,
                resolver: &self.resolver,
                focus: self.focus,
                wave: &self.wave,
                boss_triggered: self.boss_spawned,
                danger_zone: self.params.danger_zone,
                events,
            },
        )
    }

    /// Get the current stage status.
    pub fn status(&self) -> StageStatus {
        self.status
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands, each to completion.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Gameplay commands are dropped
    /// while paused or after a terminal outcome.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PressKey { ch } => {
                if self.status == StageStatus::Active {
                    self.handle_key(ch);
                }
            }
            PlayerCommand::Backspace => {
                if self.status == StageStatus::Active {
                    let signals = self.resolver.backspace();
                    self.apply_signals(signals);
                }
            }
            PlayerCommand::ActivateBomb => {
                if self.status == StageStatus::Active {
                    self.activate_bomb();
                }
            }
            PlayerCommand::Pause => {
                if self.status == StageStatus::Active {
                    self.status = StageStatus::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.status == StageStatus::Paused {
                    self.status = StageStatus::Active;
                }
            }
        }
    }

    /// Resolve one keystroke synchronously to completion.
    ///
    /// With an empty buffer the key is first offered as a free-type
    /// prefix over all live candidates; a fresh keystroke may therefore
    /// always re-target. Once at least one correct character is
    /// committed, a mismatching key is a mistake — re-targeting mid-word
    /// is disallowed.
    fn handle_key(&mut self, ch: char) {
        if !ch.is_ascii_alphanumeric() {
            return;
        }
        let ch = ch.to_ascii_lowercase();

        if self.resolver.buffer_is_empty() {
            let prefix = ch.to_string();
            let bound_matches = self.resolver.has_target()
                && !self.resolver.is_complete()
                && self.resolver.target_word().starts_with(&prefix);
            if !bound_matches {
                if let Some(candidate) = targeting::find_prefix_candidate(&self.world, &prefix) {
                    self.rebind(candidate, &prefix);
                    return;
                }
            }
        }

        match self.resolver.feed(ch) {
            FeedOutcome::Ignored => {}
            FeedOutcome::Signals(signals) => self.apply_signals(signals),
            FeedOutcome::Mismatch {
                next_input,
                committed_len,
            } => {
                if committed_len == 0 {
                    if let Some(candidate) =
                        targeting::find_prefix_candidate(&self.world, &next_input)
                    {
                        self.rebind(candidate, &next_input);
                        return;
                    }
                }
                let signals = self.resolver.commit_mistake();
                self.apply_signals(signals);
            }
        }
    }

    /// Bind the resolver to `candidate`, seeding the already-typed
    /// prefix. The previous focus loses its visual progress.
    fn rebind(&mut self, candidate: Candidate, prefix: &str) {
        if let Some(old) = self.focus {
            if old != candidate.entity {
                if let Ok(mut label) = self.world.get::<&mut WordLabel>(old) {
                    label.typed = 0;
                }
            }
        }
        self.focus = Some(candidate.entity);
        let signals = self.resolver.set_target_with_input(&candidate.word, prefix);
        self.apply_signals(signals);
    }

    /// Apply resolver signals to the focused target and the economy.
    fn apply_signals(&mut self, signals: Vec<TypingSignal>) {
        for signal in signals {
            match signal {
                TypingSignal::Progress { input, .. } => {
                    if let Some(entity) = self.focus {
                        if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
                            label.typed = input.len().min(label.text.len());
                        }
                    }
                }
                TypingSignal::Complete { word } => self.complete_word(&word),
                TypingSignal::Mistake => {
                    self.economy.register_mistake();
                    self.bomb.register_combo(0);
                }
                TypingSignal::Clear => {
                    if let Some(entity) = self.focus {
                        if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
                            label.typed = 0;
                        }
                    }
                }
            }
        }
    }

    /// A word was fully typed. The completion applies to every live
    /// target currently bearing that exact word — duplicates across
    /// simultaneous hostiles resolve together, by design.
    fn complete_word(&mut self, word: &str) {
        let combo = self.economy.register_success(word.len());
        if self.bomb.register_combo(combo) {
            self.events.push(GameEvent::BombChargeGained {
                source: ChargeSource::Combo,
            });
        }

        let boss_match: Option<Entity> = self
            .world
            .query::<(&Boss, &BossProfile, &WordLabel)>()
            .iter()
            .find(|(_, (_, profile, label))| {
                profile.state == BossState::Advancing && label.text == word
            })
            .map(|(entity, _)| entity);

        let hostile_matches: Vec<(Entity, u32, u8)> = self
            .world
            .query::<(&Hostile, &HostileProfile, &WordLabel)>()
            .iter()
            .filter(|(_, (_, profile, label))| {
                profile.phase == HostilePhase::Advancing && label.text == word
            })
            .map(|(entity, (_, profile, _))| (entity, profile.id, profile.hit_points))
            .collect();

        let pickup_matches: Vec<(Entity, u32, PickupKind)> = self
            .world
            .query::<(&Pickup, &PickupProfile, &WordLabel)>()
            .iter()
            .filter(|(_, (_, profile, label))| {
                profile.requires_typing
                    && profile.state == PickupState::Falling
                    && label.text == word
            })
            .map(|(entity, (_, profile, _))| (entity, profile.id, profile.kind))
            .collect();

        let targets =
            usize::from(boss_match.is_some()) + hostile_matches.len() + pickup_matches.len();
        self.events.push(GameEvent::WordCompleted {
            word: word.to_string(),
            targets: targets as u32,
        });

        if let Some(entity) = boss_match {
            self.apply_boss_completion(entity);
        }

        let mut drop_sites: Vec<f64> = Vec::new();
        for (entity, id, hit_points) in hostile_matches {
            if hit_points > 1 {
                // Non-lethal hit on a heavy: swap the word, reset progress.
                let replacement = self.bag.draw_bucket(LengthBucket::Long, &mut self.rng);
                if let Ok(mut profile) = self.world.get::<&mut HostileProfile>(entity) {
                    profile.hit_points -= 1;
                }
                if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
                    label.text = replacement.clone();
                    label.typed = 0;
                }
                self.events.push(GameEvent::HostileDamaged {
                    id,
                    word: word.to_string(),
                    replacement,
                });
            } else {
                if let Ok(mut profile) = self.world.get::<&mut HostileProfile>(entity) {
                    profile.phase = HostilePhase::Eliminated;
                }
                if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
                    label.typed = label.text.len();
                }
                self.economy.register_typed_elimination();
                self.events.push(GameEvent::HostileEliminated {
                    id,
                    word: word.to_string(),
                    cause: EliminationCause::Arrow,
                });
                if let Ok(pos) = self.world.get::<&Position>(entity) {
                    drop_sites.push(pos.x);
                }
            }
        }
        for x in drop_sites {
            self.maybe_drop_pickup(x);
        }

        for (entity, id, kind) in pickup_matches {
            if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
                label.typed = label.text.len();
            }
            if let Ok(mut profile) = self.world.get::<&mut PickupProfile>(entity) {
                profile.state = PickupState::Collected;
            }
            match kind {
                PickupKind::BombCharge => {
                    if self.bomb.add_charge() {
                        self.events.push(GameEvent::BombChargeGained {
                            source: ChargeSource::Pickup,
                        });
                    }
                }
                PickupKind::WallRepair => {
                    self.wall.repair(WALL_REPAIR_AMOUNT);
                }
            }
            self.events.push(GameEvent::PickupCollected {
                id,
                kind,
                trigger: PickupTrigger::Typed,
            });
        }

        self.focus = None;
        self.ensure_focus();
    }

    /// Boss word completed: advance through a retreat, or defeat on the
    /// last word.
    fn apply_boss_completion(&mut self, entity: Entity) {
        if let Ok(mut label) = self.world.get::<&mut WordLabel>(entity) {
            label.typed = label.text.len();
        }

        let (defeated, pushback) = match self.world.get::<&mut BossProfile>(entity) {
            Ok(mut profile) => {
                if profile.current_index + 1 >= profile.words.len() {
                    profile.state = BossState::Defeated;
                    (true, 0.0)
                } else {
                    profile.state = BossState::Retreating;
                    profile.retreat_remaining_secs = BOSS_RETREAT_SECS;
                    (false, profile.pushback)
                }
            }
            Err(_) => return,
        };

        if defeated {
            self.boss_defeated = true;
            self.events.push(GameEvent::BossDefeated);
        } else {
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                pos.y = (pos.y - pushback).max(BOSS_SPAWN_Y);
            }
            self.events.push(GameEvent::BossRepelled);
        }
    }

    /// Roll the stage drop rate at a typed elimination site.
    fn maybe_drop_pickup(&mut self, x: f64) {
        if self.rng.gen::<f64>() >= self.params.drop_rate {
            return;
        }
        let kind = if self.rng.gen::<f64>() < PICKUP_BOMB_WEIGHT {
            PickupKind::BombCharge
        } else {
            PickupKind::WallRepair
        };
        let id = self.next_pickup_id;
        self.next_pickup_id += 1;
        let _ = world_setup::spawn_pickup(&mut self.world, &mut self.rng, &mut self.bag, kind, x, id);
        self.events.push(GameEvent::PickupDropped { id, kind });
    }

    /// Detonate a bomb: every advancing hostile is eliminated at once.
    /// The boss and pickups are untouched. A detonation over an empty
    /// field still consumes the charge.
    fn activate_bomb(&mut self) {
        if !self.bomb.activate() {
            return;
        }

        let victims: Vec<(Entity, u32, String)> = self
            .world
            .query::<(&Hostile, &HostileProfile, &WordLabel)>()
            .iter()
            .filter(|(_, (_, profile, _))| profile.phase == HostilePhase::Advancing)
            .map(|(entity, (_, profile, label))| (entity, profile.id, label.text.clone()))
            .collect();

        self.events.push(GameEvent::BombDetonated {
            eliminated: victims.len() as u32,
        });
        self.economy.register_bomb_clear(victims.len() as u32);

        for (entity, id, word) in victims {
            if let Ok(mut profile) = self.world.get::<&mut HostileProfile>(entity) {
                profile.phase = HostilePhase::Eliminated;
            }
            self.events.push(GameEvent::HostileEliminated {
                id,
                word,
                cause: EliminationCause::Bomb,
            });
        }

        self.ensure_focus();
    }

    /// Run all systems in order. Spawn decisions come before the
    /// completion check so a stage never falsely reports an empty field.
    fn run_systems(&mut self) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &mut self.bag,
            &mut self.next_hostile_id,
            &mut self.events,
        );
        // 2. One-time boss trigger
        self.check_boss_trigger();
        // 3. Kinematics
        systems::movement::run(&mut self.world);
        // 4. Boss retreat timer / next word
        systems::boss::run(&mut self.world, &mut self.events);
        // 5. Breaches and pickup landings (wall mutations + loss check)
        self.process_arrivals();
        // 6. Bomb cooldown decay
        if self.bomb.tick(DT) {
            self.events.push(GameEvent::BombChargeGained {
                source: ChargeSource::Cooldown,
            });
        }
        // 7. Despawn terminal entities
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 8. Win/loss evaluation
        self.check_completion();
        // 9. Keep the resolver bound to a live target
        self.ensure_focus();
    }

    /// Fire the boss trigger once enough of the wave is out.
    fn check_boss_trigger(&mut self) {
        if self.boss_spawned || !self.wave.boss_threshold_reached() {
            return;
        }
        self.boss_spawned = true;
        let _ = world_setup::spawn_boss(&mut self.world, &self.params.boss);
        self.events.push(GameEvent::BossSpawned {
            name: self.params.boss.name.clone(),
        });
    }

    /// Resolve wall breaches and pickup landings. The loss check runs
    /// immediately after every wall-damaging event.
    fn process_arrivals(&mut self) {
        // Pickup landings
        let landed: Vec<(Entity, u32, PickupKind, bool)> = self
            .world
            .query::<(&Pickup, &PickupProfile, &Position)>()
            .iter()
            .filter(|(_, (_, profile, pos))| {
                profile.state == PickupState::Falling && pos.y >= GROUND_Y
            })
            .map(|(entity, (_, profile, _))| {
                (entity, profile.id, profile.kind, profile.requires_typing)
            })
            .collect();

        for (entity, id, kind, requires_typing) in landed {
            if requires_typing {
                if let Ok(mut profile) = self.world.get::<&mut PickupProfile>(entity) {
                    profile.state = PickupState::Missed;
                }
                self.events.push(GameEvent::PickupMissed { id, kind });
            } else {
                if let Ok(mut profile) = self.world.get::<&mut PickupProfile>(entity) {
                    profile.state = PickupState::Collected;
                }
                self.wall.repair(WALL_REPAIR_AMOUNT);
                self.events.push(GameEvent::PickupCollected {
                    id,
                    kind,
                    trigger: PickupTrigger::Auto,
                });
            }
        }

        // Hostile breaches
        let breached: Vec<(Entity, u32)> = self
            .world
            .query::<(&Hostile, &HostileProfile, &Position)>()
            .iter()
            .filter(|(_, (_, profile, pos))| {
                profile.phase == HostilePhase::Advancing && pos.y >= BREACH_LINE_Y
            })
            .map(|(entity, (_, profile, _))| (entity, profile.id))
            .collect();

        for (entity, _id) in breached {
            if let Ok(mut profile) = self.world.get::<&mut HostileProfile>(entity) {
                profile.phase = HostilePhase::Breached;
            }
            let remaining = self.wall.damage(HOSTILE_BREACH_DAMAGE);
            self.economy.register_breach();
            self.bomb.register_combo(0);
            self.events.push(GameEvent::WallBreached {
                damage: HOSTILE_BREACH_DAMAGE,
                remaining,
            });
            if self.wall.is_depleted() {
                self.enter_terminal(StageStatus::Lost);
                return;
            }
        }

        // Boss breach: deal damage, push back to the entry line, resume.
        let boss_breach: Option<(Entity, u32)> = self
            .world
            .query::<(&Boss, &BossProfile, &Position)>()
            .iter()
            .find(|(_, (_, profile, pos))| {
                profile.state == BossState::Advancing && pos.y >= BREACH_LINE_Y
            })
            .map(|(entity, (_, profile, _))| (entity, profile.damage));

        if let Some((entity, damage)) = boss_breach {
            let remaining = self.wall.damage(damage);
            self.economy.register_breach();
            self.bomb.register_combo(0);
            if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                pos.y = BOSS_SPAWN_Y;
            }
            self.events
                .push(GameEvent::BossBreached { damage, remaining });
            if self.wall.is_depleted() {
                self.enter_terminal(StageStatus::Lost);
            }
        }
    }

    /// Evaluate the completion state machine.
    fn check_completion(&mut self) {
        if self.status != StageStatus::Active {
            return;
        }
        let live_hostiles = self
            .world
            .query::<(&Hostile, &HostileProfile)>()
            .iter()
            .filter(|(_, (_, profile))| profile.phase == HostilePhase::Advancing)
            .count();

        let decision = stage_flow::evaluate(StageProgress {
            wall_depleted: self.wall.is_depleted(),
            boss_spawned: self.boss_spawned,
            boss_defeated: self.boss_defeated,
            wave_exhausted: self.wave.exhausted(),
            live_hostiles,
        });
        if let Some(outcome) = decision {
            self.enter_terminal(outcome);
        }
    }

    /// Enter a terminal state exactly once: stop the spawner, unbind the
    /// resolver, forfeit live pickups.
    fn enter_terminal(&mut self, outcome: StageStatus) {
        if self.status.is_terminal() {
            return;
        }
        let event = match outcome {
            StageStatus::Won => GameEvent::StageWon,
            StageStatus::Lost => GameEvent::StageLost,
            _ => return,
        };

        self.status = outcome;
        self.wave.stop();
        let _ = self.resolver.clear_target();
        self.focus = None;

        let forfeited: Vec<Entity> = self
            .world
            .query::<&Pickup>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in forfeited {
            let _ = self.world.despawn(entity);
        }

        self.events.push(event);
    }

    /// Keep the resolver bound to a live target, re-selecting by
    /// priority when the focus died or nothing was bound yet.
    fn ensure_focus(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        let still_valid = self
            .focus
            .map_or(false, |entity| targeting::is_targetable(&self.world, entity));
        if still_valid {
            return;
        }
        self.focus = None;
        match targeting::select_focus(&self.world) {
            Some(candidate) => {
                self.focus = Some(candidate.entity);
                let signals = self.resolver.set_target(&candidate.word);
                self.apply_signals(signals);
            }
            None => {
                if self.resolver.has_target() {
                    let _ = self.resolver.clear_target();
                }
            }
        }
    }

    // --- Test support -----------------------------------------------------

    /// Spawn a stationary hostile with a fixed word (for tests).
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self, word: &str, y: f64, speed: f64) -> u32 {
        self.spawn_fixed_hostile(word, y, speed, HostileArchetype::Normal, 1)
    }

    /// Spawn a heavy hostile with a fixed word (for tests).
    #[cfg(test)]
    pub fn spawn_test_heavy(&mut self, word: &str, y: f64) -> u32 {
        self.spawn_fixed_hostile(word, y, 0.0, HostileArchetype::Heavy, HEAVY_HIT_POINTS)
    }

    #[cfg(test)]
    fn spawn_fixed_hostile(
        &mut self,
        word: &str,
        y: f64,
        speed: f64,
        archetype: HostileArchetype,
        hit_points: u8,
    ) -> u32 {
        let id = self.next_hostile_id;
        self.next_hostile_id += 1;
        let profile = HostileProfile {
            id,
            archetype,
            path: HostilePath::Straight,
            phase: HostilePhase::Advancing,
            speed,
            hit_points,
            start_x: FIELD_WIDTH / 2.0,
            zigzag_freq: 4.0,
            drift_rate: 0.0,
            elapsed_secs: 0.0,
        };
        let _ = self.world.spawn((
            Hostile,
            profile,
            WordLabel::new(word),
            Position::new(FIELD_WIDTH / 2.0, y),
        ));
        id
    }

    /// Spawn a pickup directly (for tests). Typed pickups need a word.
    #[cfg(test)]
    pub fn spawn_test_pickup(&mut self, kind: PickupKind, word: Option<&str>, y: f64) -> u32 {
        let id = self.next_pickup_id;
        self.next_pickup_id += 1;
        let requires_typing = kind == PickupKind::BombCharge;
        let profile = PickupProfile {
            id,
            kind,
            state: PickupState::Falling,
            requires_typing,
            fall_speed: 60.0,
        };
        if let Some(word) = word {
            let _ = self.world.spawn((
                Pickup,
                profile,
                WordLabel::new(word),
                Position::new(FIELD_WIDTH / 2.0, y),
            ));
        } else {
            let _ = self
                .world
                .spawn((Pickup, profile, Position::new(FIELD_WIDTH / 2.0, y)));
        }
        id
    }

    #[cfg(test)]
    pub fn economy(&self) -> &ScoreState {
        &self.economy
    }

    #[cfg(test)]
    pub fn bomb(&self) -> &BombState {
        &self.bomb
    }

    #[cfg(test)]
    pub fn wall(&self) -> &WallState {
        &self.wall
    }

    #[cfg(test)]
    pub fn resolver(&self) -> &TypingResolver {
        &self.resolver
    }

    #[cfg(test)]
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }
}
