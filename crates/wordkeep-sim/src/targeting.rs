//! Focus selection and prefix re-targeting over the live world.
//!
//! Priority order everywhere: advancing boss, then hostiles by proximity
//! to the breach line (closest first), then typed pickups by proximity
//! to the ground (closest first). A retreating boss is invulnerable and
//! never a candidate.

use hecs::{Entity, World};

use wordkeep_core::components::{Boss, BossProfile, Hostile, HostileProfile, Pickup, PickupProfile, WordLabel};
use wordkeep_core::enums::{BossState, HostilePhase, PickupState, TargetKind};
use wordkeep_core::types::Position;

/// A selectable target and the word it currently bears.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entity: Entity,
    pub kind: TargetKind,
    pub word: String,
}

/// Pick the focus when nothing is bound: boss > nearest hostile >
/// ground-closest typed pickup.
pub fn select_focus(world: &World) -> Option<Candidate> {
    if let Some(candidate) = boss_candidate(world, None) {
        return Some(candidate);
    }
    if let Some(candidate) = hostile_candidates(world).into_iter().next() {
        return Some(candidate);
    }
    pickup_candidates(world).into_iter().next()
}

/// Find the first live target whose word starts with `prefix`, in
/// priority order. Used by both the free-type and mismatch paths.
pub fn find_prefix_candidate(world: &World, prefix: &str) -> Option<Candidate> {
    if let Some(candidate) = boss_candidate(world, Some(prefix)) {
        return Some(candidate);
    }
    if let Some(candidate) = hostile_candidates(world)
        .into_iter()
        .find(|c| c.word.starts_with(prefix))
    {
        return Some(candidate);
    }
    pickup_candidates(world)
        .into_iter()
        .find(|c| c.word.starts_with(prefix))
}

/// Whether `entity` is still a bindable target.
pub fn is_targetable(world: &World, entity: Entity) -> bool {
    if let Ok(profile) = world.get::<&HostileProfile>(entity) {
        return profile.phase == HostilePhase::Advancing;
    }
    if let Ok(profile) = world.get::<&BossProfile>(entity) {
        return profile.state == BossState::Advancing;
    }
    if let Ok(profile) = world.get::<&PickupProfile>(entity) {
        return profile.requires_typing && profile.state == PickupState::Falling;
    }
    false
}

fn boss_candidate(world: &World, prefix: Option<&str>) -> Option<Candidate> {
    world
        .query::<(&Boss, &BossProfile, &WordLabel)>()
        .iter()
        .find(|(_, (_, profile, label))| {
            profile.state == BossState::Advancing
                && prefix.map_or(true, |p| label.text.starts_with(p))
        })
        .map(|(entity, (_, _, label))| Candidate {
            entity,
            kind: TargetKind::Boss,
            word: label.text.clone(),
        })
}

/// Advancing hostiles, closest to the breach line first. Ties break by
/// spawn order for determinism.
fn hostile_candidates(world: &World) -> Vec<Candidate> {
    let mut hostiles: Vec<(f64, u32, Candidate)> = world
        .query::<(&Hostile, &HostileProfile, &WordLabel, &Position)>()
        .iter()
        .filter(|(_, (_, profile, _, _))| profile.phase == HostilePhase::Advancing)
        .map(|(entity, (_, profile, label, pos))| {
            (
                pos.distance_to_breach(),
                profile.id,
                Candidate {
                    entity,
                    kind: TargetKind::Hostile,
                    word: label.text.clone(),
                },
            )
        })
        .collect();
    hostiles.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1)));
    hostiles.into_iter().map(|(_, _, c)| c).collect()
}

/// Falling typed pickups, closest to the ground first (descending y).
fn pickup_candidates(world: &World) -> Vec<Candidate> {
    let mut pickups: Vec<(f64, u32, Candidate)> = world
        .query::<(&Pickup, &PickupProfile, &WordLabel, &Position)>()
        .iter()
        .filter(|(_, (_, profile, _, _))| {
            profile.requires_typing && profile.state == PickupState::Falling
        })
        .map(|(entity, (_, profile, label, pos))| {
            (
                -pos.y,
                profile.id,
                Candidate {
                    entity,
                    kind: TargetKind::Pickup,
                    word: label.text.clone(),
                },
            )
        })
        .collect();
    pickups.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1)));
    pickups.into_iter().map(|(_, _, c)| c).collect()
}
