//! Entity spawn factories.
//!
//! Creates hostile, boss, and pickup entities with appropriate component
//! bundles. All randomness flows through the engine's seeded RNG.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use wordkeep_core::components::*;
use wordkeep_core::config::{BossConfig, SpawnConfig};
use wordkeep_core::constants::*;
use wordkeep_core::enums::*;
use wordkeep_core::types::Position;
use wordkeep_words::{LengthBucket, WordBag};

/// Word-length bucket preferred by each archetype.
pub fn archetype_bucket(archetype: HostileArchetype) -> LengthBucket {
    match archetype {
        HostileArchetype::Fast => LengthBucket::Short,
        HostileArchetype::Heavy => LengthBucket::Long,
        HostileArchetype::Normal => LengthBucket::Mid,
    }
}

/// Speed multiplier applied on top of the stage speed range.
pub fn archetype_speed_factor(archetype: HostileArchetype) -> f64 {
    match archetype {
        HostileArchetype::Fast => FAST_SPEED_FACTOR,
        HostileArchetype::Heavy => HEAVY_SPEED_FACTOR,
        HostileArchetype::Normal => NORMAL_SPEED_FACTOR,
    }
}

/// Roll an archetype with the fixed spawn weights.
pub fn roll_archetype(rng: &mut ChaCha8Rng) -> HostileArchetype {
    let roll: f64 = rng.gen();
    if roll < FAST_SPAWN_WEIGHT {
        HostileArchetype::Fast
    } else if roll < FAST_SPAWN_WEIGHT + HEAVY_SPAWN_WEIGHT {
        HostileArchetype::Heavy
    } else {
        HostileArchetype::Normal
    }
}

/// Spawn one wave hostile above the field, advancing on the wall.
/// Returns the entity and the word it bears.
pub fn spawn_hostile(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bag: &mut WordBag,
    config: &SpawnConfig,
    id: u32,
) -> (hecs::Entity, String) {
    let archetype = roll_archetype(rng);
    let word = bag.draw_bucket(archetype_bucket(archetype), rng);

    let speed =
        rng.gen_range(config.speed.min..=config.speed.max) * archetype_speed_factor(archetype);
    let path = config.paths[rng.gen_range(0..config.paths.len())];
    let x = rng.gen_range(ZIGZAG_MARGIN..=FIELD_WIDTH - ZIGZAG_MARGIN);
    let y = -rng.gen_range(SPAWN_OFFSET_MIN..=SPAWN_OFFSET_MAX);

    let profile = HostileProfile {
        id,
        archetype,
        path,
        phase: HostilePhase::Advancing,
        speed,
        hit_points: match archetype {
            HostileArchetype::Heavy => HEAVY_HIT_POINTS,
            _ => 1,
        },
        start_x: x,
        zigzag_freq: rng.gen_range(ZIGZAG_FREQ_MIN..=ZIGZAG_FREQ_MAX),
        drift_rate: rng.gen_range(-DRIFT_RATE_MAX..=DRIFT_RATE_MAX),
        elapsed_secs: 0.0,
    };

    let entity = world.spawn((
        Hostile,
        profile,
        WordLabel::new(word.clone()),
        Position::new(x, y),
    ));
    (entity, word)
}

/// Spawn the stage boss above the field, centered.
pub fn spawn_boss(world: &mut World, config: &BossConfig) -> hecs::Entity {
    let words: Vec<String> = config
        .words
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect();
    let first_word = words[0].clone();

    let profile = BossProfile {
        name: config.name.clone(),
        words,
        current_index: 0,
        state: BossState::Advancing,
        speed: config.speed,
        pushback: config.pushback,
        damage: config.damage,
        retreat_remaining_secs: 0.0,
    };

    world.spawn((
        Boss,
        profile,
        WordLabel::new(first_word),
        Position::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
    ))
}

/// Drop a pickup at lateral position `x`, entering from above the field.
/// Bomb-charge pickups carry a short word; repair pickups auto-collect.
pub fn spawn_pickup(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    bag: &mut WordBag,
    kind: PickupKind,
    x: f64,
    id: u32,
) -> hecs::Entity {
    let requires_typing = kind == PickupKind::BombCharge;
    let fall_speed = rng.gen_range(PICKUP_FALL_SPEED_MIN..=PICKUP_FALL_SPEED_MAX);
    let x = x.clamp(DRIFT_MARGIN, FIELD_WIDTH - DRIFT_MARGIN);

    let profile = PickupProfile {
        id,
        kind,
        state: PickupState::Falling,
        requires_typing,
        fall_speed,
    };

    if requires_typing {
        let word = bag.draw_bucket(LengthBucket::Short, rng);
        world.spawn((
            Pickup,
            profile,
            WordLabel::new(word),
            Position::new(x, PICKUP_SPAWN_Y),
        ))
    } else {
        world.spawn((Pickup, profile, Position::new(x, PICKUP_SPAWN_Y)))
    }
}
