//! Cleanup system: removes entities in a terminal lifecycle state.
//!
//! Runs after all effects have been applied, so despawning here never
//! loses information. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use wordkeep_core::components::{Boss, BossProfile, Hostile, HostileProfile, Pickup, PickupProfile};
use wordkeep_core::enums::{BossState, HostilePhase, PickupState};

/// Despawn eliminated/breached hostiles, resolved pickups, and a
/// defeated boss.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_, profile)) in world.query_mut::<(&Hostile, &HostileProfile)>() {
        if matches!(
            profile.phase,
            HostilePhase::Eliminated | HostilePhase::Breached
        ) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_, profile)) in world.query_mut::<(&Pickup, &PickupProfile)>() {
        if matches!(profile.state, PickupState::Collected | PickupState::Missed) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_, profile)) in world.query_mut::<(&Boss, &BossProfile)>() {
        if profile.state == BossState::Defeated {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
