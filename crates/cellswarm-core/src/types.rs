//! Fundamental identifier and simulation-time types.

use serde::{Deserialize, Serialize};

/// Stable arena index of a factory cell, fixed at level load.
pub type CellId = usize;

/// Unique identifier of an in-flight drone (monotonic per match).
pub type DroneId = u32;

/// Simulation time tracking.
///
/// Time advances only while the match is live and unpaused, so every
/// tick-denominated timer in the simulation freezes exactly across a pause.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each live tick).
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
