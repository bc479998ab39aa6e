//! Boss retreat micro-state.
//!
//! While retreating the boss is invulnerable; when the timer expires the
//! next word of the gauntlet is installed and the advance resumes.

use hecs::World;

use wordkeep_core::components::{Boss, BossProfile, WordLabel};
use wordkeep_core::constants::DT;
use wordkeep_core::enums::BossState;
use wordkeep_core::events::GameEvent;

/// Count down the retreat timer and install the next word on expiry.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    for (_entity, (_, profile, label)) in
        world.query_mut::<(&Boss, &mut BossProfile, &mut WordLabel)>()
    {
        if profile.state != BossState::Retreating {
            continue;
        }
        profile.retreat_remaining_secs -= DT;
        if profile.retreat_remaining_secs > 0.0 {
            continue;
        }
        profile.retreat_remaining_secs = 0.0;
        profile.current_index += 1;
        // Completion of the last word goes straight to Defeated, so the
        // index is always in range here.
        let next = profile.words[profile.current_index].clone();
        label.text = next.clone();
        label.typed = 0;
        profile.state = BossState::Advancing;
        events.push(GameEvent::BossWordAdvanced { word: next });
    }
}
