//! Word bank model and stage word-bag composition.
//!
//! Pure data + RNG: no ECS dependency. Banks hold three difficulty
//! groups; a stage composes a bag from a difficulty mix, and the spawner
//! draws from the bag by word-length bucket.

pub mod bag;
pub mod bank;

pub use bag::{compose_bag, LengthBucket, WordBag, WordMix, WordMixError};
pub use bank::{normalize_words, parse_bulk, WordBank, WordGroups};

#[cfg(test)]
mod tests;
