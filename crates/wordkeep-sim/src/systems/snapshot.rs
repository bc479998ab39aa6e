//! Snapshot system: queries the ECS world and builds a complete
//! `StageSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::{Entity, World};

use wordkeep_core::components::*;
use wordkeep_core::enums::{HostilePhase, PickupState, StageStatus, TargetKind};
use wordkeep_core::events::GameEvent;
use wordkeep_core::state::*;
use wordkeep_core::types::{Position, SimTime};

use crate::economy::{BombState, ScoreState, WallState};
use crate::systems::wave_spawner::WaveState;
use crate::typing::TypingResolver;

/// Everything the snapshot builder needs besides the world.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub status: StageStatus,
    pub wall: &'a WallState,
    pub bomb: &'a BombState,
    pub score: &'a ScoreState,
    pub resolver: &'a TypingResolver,
    pub focus: Option<Entity>,
    pub wave: &'a WaveState,
    pub boss_triggered: bool,
    pub danger_zone: f64,
    pub events: Vec<GameEvent>,
}

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(world: &World, ctx: SnapshotContext<'_>) -> StageSnapshot {
    StageSnapshot {
        time: *ctx.time,
        status: ctx.status,
        wall: ctx.wall.view(),
        bomb: ctx.bomb.view(),
        score: ctx.score.view(),
        typing: build_typing(world, ctx.resolver, ctx.focus),
        wave: ctx.wave.view(ctx.boss_triggered),
        hostiles: build_hostiles(world, ctx.focus, ctx.danger_zone),
        boss: build_boss(world, ctx.focus, ctx.danger_zone),
        pickups: build_pickups(world, ctx.focus),
        events: ctx.events,
    }
}

fn build_typing(world: &World, resolver: &TypingResolver, focus: Option<Entity>) -> TypingView {
    let target = focus.and_then(|entity| target_kind(world, entity));
    TypingView {
        target,
        word: resolver.target_word().to_string(),
        input: resolver.input().to_string(),
        mistake: resolver.is_mistake(),
    }
}

fn target_kind(world: &World, entity: Entity) -> Option<TargetKind> {
    if world.get::<&Hostile>(entity).is_ok() {
        return Some(TargetKind::Hostile);
    }
    if world.get::<&Boss>(entity).is_ok() {
        return Some(TargetKind::Boss);
    }
    if world.get::<&Pickup>(entity).is_ok() {
        return Some(TargetKind::Pickup);
    }
    None
}

fn build_hostiles(world: &World, focus: Option<Entity>, danger_zone: f64) -> Vec<HostileView> {
    let mut hostiles: Vec<HostileView> = world
        .query::<(&Hostile, &HostileProfile, &WordLabel, &Position)>()
        .iter()
        .filter(|(_, (_, profile, _, _))| profile.phase == HostilePhase::Advancing)
        .map(|(entity, (_, profile, label, pos))| HostileView {
            id: profile.id,
            word: label.text.clone(),
            typed: label.typed,
            archetype: profile.archetype,
            path: profile.path,
            position: *pos,
            speed: profile.speed,
            hit_points: profile.hit_points,
            in_danger_zone: pos.distance_to_breach() <= danger_zone,
            focused: focus == Some(entity),
        })
        .collect();

    hostiles.sort_by_key(|h| h.id);
    hostiles
}

fn build_boss(world: &World, focus: Option<Entity>, danger_zone: f64) -> Option<BossView> {
    world
        .query::<(&Boss, &BossProfile, &WordLabel, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, profile, label, pos))| BossView {
            name: profile.name.clone(),
            word: label.text.clone(),
            typed: label.typed,
            state: profile.state,
            position: *pos,
            words_remaining: profile.words.len() - profile.current_index - 1,
            in_danger_zone: pos.distance_to_breach() <= danger_zone,
            focused: focus == Some(entity),
        })
}

fn build_pickups(world: &World, focus: Option<Entity>) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&Pickup, &PickupProfile, &Position, Option<&WordLabel>)>()
        .iter()
        .filter(|(_, (_, profile, _, _))| profile.state == PickupState::Falling)
        .map(|(entity, (_, profile, pos, label))| PickupView {
            id: profile.id,
            kind: profile.kind,
            word: label.map(|l| l.text.clone()),
            typed: label.map_or(0, |l| l.typed),
            position: *pos,
            requires_typing: profile.requires_typing,
            focused: focus == Some(entity),
        })
        .collect();

    pickups.sort_by_key(|p| p.id);
    pickups
}
