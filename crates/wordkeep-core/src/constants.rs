//! Engine constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Field width in world units.
pub const FIELD_WIDTH: f64 = 960.0;

/// Advance-axis coordinate of the defended wall. A hostile or boss
/// reaching this line breaches.
pub const BREACH_LINE_Y: f64 = 620.0;

/// Landing line for falling pickups (the wall base).
pub const GROUND_Y: f64 = BREACH_LINE_Y;

/// Lateral clamp for zigzag hostiles.
pub const ZIGZAG_MARGIN: f64 = 120.0;

/// Lateral clamp for drifting hostiles.
pub const DRIFT_MARGIN: f64 = 100.0;

// --- Hostile spawning ---

/// Minimum spawn distance above the field (world units).
pub const SPAWN_OFFSET_MIN: f64 = 80.0;

/// Maximum spawn distance above the field.
pub const SPAWN_OFFSET_MAX: f64 = 140.0;

/// Archetype roll weight: fast.
pub const FAST_SPAWN_WEIGHT: f64 = 0.35;

/// Archetype roll weight: heavy. Remainder of the roll is normal.
pub const HEAVY_SPAWN_WEIGHT: f64 = 0.25;

/// Speed multiplier applied on top of the stage speed range.
pub const FAST_SPEED_FACTOR: f64 = 1.35;
pub const HEAVY_SPEED_FACTOR: f64 = 0.7;
pub const NORMAL_SPEED_FACTOR: f64 = 1.15;

/// Heavy hostiles soak one non-lethal word completion.
pub const HEAVY_HIT_POINTS: u8 = 2;

/// First spawn fires after half the configured interval.
pub const SPAWN_TIMER_INITIAL_FACTOR: f64 = 0.5;

// --- Word-length buckets ---

/// Fast hostiles draw words of at most this many letters.
pub const SHORT_WORD_MAX_LEN: usize = 6;

/// Normal hostiles prefer words of at least this many letters.
pub const MID_WORD_MIN_LEN: usize = 7;

/// Heavy hostiles draw words of at least this many letters.
pub const LONG_WORD_MIN_LEN: usize = 9;

// --- Paths ---

/// Zigzag angular frequency range (radians per second).
pub const ZIGZAG_FREQ_MIN: f64 = 3.5;
pub const ZIGZAG_FREQ_MAX: f64 = 5.5;

/// Zigzag amplitude per word letter, with clamp bounds.
pub const ZIGZAG_AMP_PER_LETTER: f64 = 12.0;
pub const ZIGZAG_AMP_MIN: f64 = 60.0;
pub const ZIGZAG_AMP_MAX: f64 = 180.0;

/// Maximum lateral drift rate (world units per second, symmetric).
pub const DRIFT_RATE_MAX: f64 = 12.0;

// --- Boss ---

/// Boss entry position on the advance axis.
pub const BOSS_SPAWN_Y: f64 = -120.0;

/// Duration of the post-word retreat micro-state (seconds).
pub const BOSS_RETREAT_SECS: f64 = 0.36;

/// Fraction of the spawn budget that must have been emitted before the
/// boss trigger may fire (applied with ceil).
pub const BOSS_TRIGGER_RATIO: f64 = 0.6;

// --- Economy ---

/// Base score per letter of a completed word.
pub const SCORE_PER_LETTER: u64 = 10;

/// Combo milestone size for the score multiplier step.
pub const COMBO_MILESTONE: u32 = 5;

/// Multiplier bonus per full combo milestone.
pub const COMBO_MILESTONE_BONUS: f64 = 0.2;

/// Score per hostile eliminated by a bomb.
pub const BOMB_SCORE_PER_ELIMINATION: u64 = 15;

/// Wall damage dealt by a single hostile breach.
pub const HOSTILE_BREACH_DAMAGE: u32 = 1;

/// Wall health restored by a repair pickup.
pub const WALL_REPAIR_AMOUNT: u32 = 1;

// --- Pickups ---

/// Entry position of a dropped pickup on the advance axis.
pub const PICKUP_SPAWN_Y: f64 = -60.0;

/// Fall speed range for dropped pickups (world units per second).
pub const PICKUP_FALL_SPEED_MIN: f64 = 60.0;
pub const PICKUP_FALL_SPEED_MAX: f64 = 90.0;

/// Probability that a drop is a bomb-charge pickup (rest are wall repair).
pub const PICKUP_BOMB_WEIGHT: f64 = 0.55;
