//! Stage word-bag composition and runtime draws.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wordkeep_core::constants::{LONG_WORD_MIN_LEN, MID_WORD_MIN_LEN, SHORT_WORD_MAX_LEN};

use crate::bank::WordBank;

/// Invalid difficulty mix.
#[derive(Debug, Error, PartialEq)]
pub enum WordMixError {
    #[error("mix proportion is negative")]
    NegativeProportion,
    #[error("mix proportions sum to {sum}, expected 1.0")]
    DoesNotSumToOne { sum: f64 },
}

/// Per-stage proportions of the three difficulty groups. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordMix {
    pub easy: f64,
    pub medium: f64,
    pub hard: f64,
}

impl WordMix {
    pub fn new(easy: f64, medium: f64, hard: f64) -> Self {
        Self { easy, medium, hard }
    }

    pub fn validate(&self) -> Result<(), WordMixError> {
        if self.easy < 0.0 || self.medium < 0.0 || self.hard < 0.0 {
            return Err(WordMixError::NegativeProportion);
        }
        let sum = self.easy + self.medium + self.hard;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(WordMixError::DoesNotSumToOne { sum });
        }
        Ok(())
    }

    /// Split `total` into per-group counts. Rounded counts are forced to
    /// an exact total: a shortfall goes to the highest-weighted group, an
    /// overshoot is trimmed from the largest count.
    pub fn counts(&self, total: u32) -> [u32; 3] {
        let clamp = |n: f64| -> u32 { (n.round().max(0.0) as u32).min(total) };
        let mut counts = [
            clamp(total as f64 * self.easy),
            clamp(total as f64 * self.medium),
            clamp(total as f64 * self.hard),
        ];
        let weights = [self.easy, self.medium, self.hard];

        let mut sum: u32 = counts.iter().sum();
        while sum < total {
            let heaviest = (0..3)
                .max_by(|&a, &b| {
                    weights[a]
                        .partial_cmp(&weights[b])
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(0);
            counts[heaviest] += 1;
            sum += 1;
        }
        while sum > total {
            let largest = (0..3).max_by_key(|&i| counts[i]).unwrap_or(0);
            if counts[largest] == 0 {
                break;
            }
            counts[largest] -= 1;
            sum -= 1;
        }
        counts
    }
}

/// Word-length bucket used to bias selection per hostile archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBucket {
    /// At most `SHORT_WORD_MAX_LEN` letters.
    Short,
    /// At least `MID_WORD_MIN_LEN` letters.
    Mid,
    /// At least `LONG_WORD_MIN_LEN` letters.
    Long,
}

impl LengthBucket {
    pub fn matches(&self, word: &str) -> bool {
        match self {
            LengthBucket::Short => word.len() <= SHORT_WORD_MAX_LEN,
            LengthBucket::Mid => word.len() >= MID_WORD_MIN_LEN,
            LengthBucket::Long => word.len() >= LONG_WORD_MIN_LEN,
        }
    }
}

/// Compose a stage bag of exactly `total` words from `bank` following
/// `mix`. Groups are sampled without replacement and refilled when a
/// group is smaller than its quota, so words repeat only when necessary.
/// Falls back to the default bank if all groups are empty.
pub fn compose_bag<R: Rng>(total: u32, mix: &WordMix, bank: &WordBank, rng: &mut R) -> Vec<String> {
    let fallback;
    let groups = if bank.groups.is_empty() {
        fallback = WordBank::default_bank();
        &fallback.groups
    } else {
        &bank.groups
    };

    let counts = mix.counts(total);
    let mut bag = Vec::with_capacity(total as usize);
    for (pool, count) in [
        (&groups.easy, counts[0]),
        (&groups.medium, counts[1]),
        (&groups.hard, counts[2]),
    ] {
        take_random(pool, count, rng, &mut bag);
    }
    bag.shuffle(rng);
    bag
}

/// Sample `count` words from `pool` without replacement, refilling the
/// working copy from `pool` when it runs dry. Empty pools fall through to
/// the other groups' surplus handling in `WordMix::counts`.
fn take_random<R: Rng>(pool: &[String], count: u32, rng: &mut R, out: &mut Vec<String>) {
    if pool.is_empty() {
        return;
    }
    let mut working: Vec<&String> = pool.iter().collect();
    for _ in 0..count {
        if working.is_empty() {
            working.extend(pool.iter());
        }
        let idx = rng.gen_range(0..working.len());
        out.push(working.swap_remove(idx).clone());
    }
}

/// Runtime draw bag over a composed word list. Reshuffles from the base
/// list whenever the current pass is exhausted.
#[derive(Debug, Clone)]
pub struct WordBag {
    base: Vec<String>,
    remaining: Vec<String>,
}

impl WordBag {
    /// Build from a composed list. An empty list falls back to the
    /// default bank's hard group so a draw can always succeed.
    pub fn new(words: Vec<String>) -> Self {
        let base = if words.is_empty() {
            WordBank::default_bank().groups.hard
        } else {
            words
        };
        Self {
            base,
            remaining: Vec::new(),
        }
    }

    /// Draw the next word, reshuffling when the pass is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> String {
        if self.remaining.is_empty() {
            self.refill(rng);
        }
        // base is non-empty by construction
        self.remaining.pop().unwrap_or_else(|| self.base[0].clone())
    }

    /// Draw a uniformly random word matching `bucket`, falling back to
    /// the full pool when the base list has no word in that bucket.
    pub fn draw_bucket<R: Rng>(&mut self, bucket: LengthBucket, rng: &mut R) -> String {
        if !self.base.iter().any(|w| bucket.matches(w)) {
            return self.draw(rng);
        }
        if !self.remaining.iter().any(|w| bucket.matches(w)) {
            self.refill(rng);
        }
        let matches: Vec<usize> = self
            .remaining
            .iter()
            .enumerate()
            .filter(|(_, w)| bucket.matches(w))
            .map(|(i, _)| i)
            .collect();
        let idx = matches[rng.gen_range(0..matches.len())];
        self.remaining.swap_remove(idx)
    }

    fn refill<R: Rng>(&mut self, rng: &mut R) {
        self.remaining = self.base.clone();
        self.remaining.shuffle(rng);
    }
}
