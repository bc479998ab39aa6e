//! Score, combo, bomb, and wall accounting.
//!
//! Held as plain state by the engine, not as ECS entities. Every counter
//! clamps at its own mutation site; no value is ever observed out of
//! range, even transiently.

use wordkeep_core::config::BombConfig;
use wordkeep_core::constants::{
    BOMB_SCORE_PER_ELIMINATION, COMBO_MILESTONE, COMBO_MILESTONE_BONUS, SCORE_PER_LETTER,
};
use wordkeep_core::state::{BombView, ScoreView, WallView};

/// Running score state. All counters are monotonic except `combo`.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u64,
    pub combo: u32,
    pub total_typed_chars: u64,
    pub mistakes: u64,
    pub words_completed: u32,
    pub typed_eliminations: u32,
    pub bomb_eliminations: u32,
    pub bombs_used: u32,
    pub breaches: u32,
}

impl ScoreState {
    /// Record a completed word. Returns the new combo so the caller can
    /// feed the bomb milestone check.
    pub fn register_success(&mut self, word_len: usize) -> u32 {
        self.words_completed += 1;
        self.total_typed_chars += word_len as u64;
        self.combo += 1;
        let multiplier =
            1.0 + (self.combo / COMBO_MILESTONE) as f64 * COMBO_MILESTONE_BONUS;
        let base = (word_len as u64 * SCORE_PER_LETTER) as f64;
        self.score += (base * multiplier).floor() as u64;
        self.combo
    }

    /// A wrong keystroke: break the combo, count the miss.
    pub fn register_mistake(&mut self) {
        self.mistakes += 1;
        self.combo = 0;
    }

    /// A bomb clear of `n` hostiles. No-op when the field was empty.
    pub fn register_bomb_clear(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        self.bombs_used += 1;
        self.bomb_eliminations += n;
        self.score += n as u64 * BOMB_SCORE_PER_ELIMINATION;
    }

    /// A wall breach: counts as a mistake for accuracy, breaks the combo.
    pub fn register_breach(&mut self) {
        self.breaches += 1;
        self.mistakes += 1;
        self.combo = 0;
    }

    pub fn register_typed_elimination(&mut self) {
        self.typed_eliminations += 1;
    }

    /// Correct chars over total attempts; exactly 1.0 with no attempts.
    pub fn accuracy(&self) -> f64 {
        let attempts = self.total_typed_chars + self.mistakes;
        if attempts == 0 {
            return 1.0;
        }
        self.total_typed_chars as f64 / attempts as f64
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            combo: self.combo,
            accuracy: self.accuracy(),
            words_completed: self.words_completed,
            typed_eliminations: self.typed_eliminations,
            bomb_eliminations: self.bomb_eliminations,
            bombs_used: self.bombs_used,
            breaches: self.breaches,
        }
    }
}

/// Bomb charge and cooldown tracker.
///
/// The cooldown runs only while the charge pool is empty after an
/// activation; any deposited charge cancels it.
#[derive(Debug, Clone)]
pub struct BombState {
    charges: u32,
    max_charges: u32,
    cooldown: f64,
    cooldown_remaining: f64,
    combo_threshold: u32,
    last_awarded_combo: u32,
}

impl BombState {
    pub fn new(config: &BombConfig) -> Self {
        Self {
            charges: config.initial.min(config.max),
            max_charges: config.max,
            cooldown: config.cooldown_secs,
            cooldown_remaining: 0.0,
            combo_threshold: config.combo_threshold.max(1),
            last_awarded_combo: 0,
        }
    }

    /// Advance the cooldown countdown. Returns true when the countdown
    /// expired this tick and restored a charge.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.cooldown_remaining <= 0.0 {
            return false;
        }
        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        if self.cooldown_remaining == 0.0 && self.charges < self.max_charges {
            self.charges += 1;
            return true;
        }
        false
    }

    pub fn can_activate(&self) -> bool {
        self.charges > 0
    }

    pub fn charges(&self) -> u32 {
        self.charges
    }

    /// Consume a charge. The countdown starts only when this emptied the
    /// pool.
    pub fn activate(&mut self) -> bool {
        if self.charges == 0 {
            return false;
        }
        self.charges -= 1;
        if self.charges == 0 {
            self.cooldown_remaining = self.cooldown;
        }
        true
    }

    /// Deposit a charge from a pickup. Returns true when a charge was
    /// actually added (then the running countdown is cancelled).
    pub fn add_charge(&mut self) -> bool {
        if self.charges >= self.max_charges {
            return false;
        }
        self.charges += 1;
        self.cooldown_remaining = 0.0;
        true
    }

    /// Combo milestone check. Each distinct positive multiple of the
    /// threshold grants at most one charge until the combo resets;
    /// `combo == 0` re-arms every milestone. Returns true when a charge
    /// was deposited.
    pub fn register_combo(&mut self, combo: u32) -> bool {
        if combo == 0 {
            self.last_awarded_combo = 0;
            return false;
        }
        if combo % self.combo_threshold != 0 || combo == self.last_awarded_combo {
            return false;
        }
        self.last_awarded_combo = combo;
        if self.charges >= self.max_charges {
            return false;
        }
        self.charges += 1;
        self.cooldown_remaining = 0.0;
        true
    }

    pub fn view(&self) -> BombView {
        BombView {
            charges: self.charges,
            max_charges: self.max_charges,
            cooldown_remaining: self.cooldown_remaining,
            cooldown: self.cooldown,
        }
    }
}

/// Wall health, clamped into `[0, max]` at every mutation.
#[derive(Debug, Clone)]
pub struct WallState {
    current: u32,
    max: u32,
}

impl WallState {
    pub fn new(max_hp: u32) -> Self {
        Self {
            current: max_hp,
            max: max_hp,
        }
    }

    /// Apply damage, clamped at zero. Returns the remaining health.
    pub fn damage(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Restore health, clamped at the maximum. Returns the new health.
    pub fn repair(&mut self, amount: u32) -> u32 {
        self.current = (self.current + amount).min(self.max);
        self.current
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn view(&self) -> WallView {
        WallView {
            current: self.current,
            max: self.max,
        }
    }
}
