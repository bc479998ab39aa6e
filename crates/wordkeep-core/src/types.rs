//! Fundamental field and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the playfield.
/// x = lateral lane, y = advance axis (the wall sits at `BREACH_LINE_Y`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Remaining distance to the breach line (negative once past it).
    pub fn distance_to_breach(&self) -> f64 {
        crate::constants::BREACH_LINE_Y - self.y
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
