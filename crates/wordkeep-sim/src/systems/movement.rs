//! Kinematic integration system.
//!
//! Advances hostiles along their paths, the boss toward the wall, and
//! falling pickups toward the ground. Purely positional — breach and
//! landing consequences are resolved by the engine afterwards.

use hecs::World;

use wordkeep_core::components::{
    Boss, BossProfile, Hostile, HostileProfile, Pickup, PickupProfile, WordLabel,
};
use wordkeep_core::constants::*;
use wordkeep_core::enums::{BossState, HostilePath, HostilePhase, PickupState};
use wordkeep_core::types::Position;

/// Integrate all moving entities by one tick.
pub fn run(world: &mut World) {
    advance_hostiles(world);
    advance_boss(world);
    advance_pickups(world);
}

fn advance_hostiles(world: &mut World) {
    for (_entity, (_, profile, label, pos)) in
        world.query_mut::<(&Hostile, &mut HostileProfile, &WordLabel, &mut Position)>()
    {
        if profile.phase != HostilePhase::Advancing {
            continue;
        }
        profile.elapsed_secs += DT;
        pos.y += profile.speed * DT;

        match profile.path {
            HostilePath::Straight => {}
            HostilePath::Zigzag => {
                let amplitude = (label.text.len() as f64 * ZIGZAG_AMP_PER_LETTER)
                    .clamp(ZIGZAG_AMP_MIN, ZIGZAG_AMP_MAX);
                let offset = (profile.elapsed_secs * profile.zigzag_freq).sin() * amplitude;
                pos.x = (profile.start_x + offset)
                    .clamp(ZIGZAG_MARGIN, FIELD_WIDTH - ZIGZAG_MARGIN);
            }
            HostilePath::Drift => {
                pos.x = (pos.x + profile.drift_rate * DT)
                    .clamp(DRIFT_MARGIN, FIELD_WIDTH - DRIFT_MARGIN);
            }
        }
    }
}

fn advance_boss(world: &mut World) {
    for (_entity, (_, profile, pos)) in
        world.query_mut::<(&Boss, &BossProfile, &mut Position)>()
    {
        if profile.state == BossState::Advancing {
            pos.y += profile.speed * DT;
        }
    }
}

fn advance_pickups(world: &mut World) {
    for (_entity, (_, profile, pos)) in
        world.query_mut::<(&Pickup, &PickupProfile, &mut Position)>()
    {
        if profile.state == PickupState::Falling {
            pos.y += profile.fall_speed * DT;
        }
    }
}
