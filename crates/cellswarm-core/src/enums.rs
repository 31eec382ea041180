//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Ownership classification for cells and in-flight drones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    #[default]
    Neutral,
    Enemy,
}

impl Faction {
    /// Two distinct non-Neutral factions are hostile to each other.
    /// Neutral is never the aggressor (it only ever defends).
    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != other && self != Faction::Neutral && other != Faction::Neutral
    }

    /// Neutral cells produce drones at a third of the normal rate.
    pub fn production_multiplier(self) -> u32 {
        match self {
            Faction::Neutral => 3,
            Faction::Player | Faction::Enemy => 1,
        }
    }
}

/// Terminal result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Enemy has no cells and no in-flight drones.
    Win,
    /// Player has no cells and no in-flight drones.
    Lose,
}

/// How an in-flight drone resolved against its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneOutcome {
    /// Merged into a friendly cell (capacity permitting).
    Reinforced,
    /// Traded one-for-one with a defending drone.
    Absorbed,
    /// Arrived at an empty hostile cell and flipped its faction.
    Captured,
}

/// Why a move command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejectReason {
    /// Destination lies beyond the origin cell's launch range.
    OutOfRange,
    /// The match is paused.
    Paused,
    /// The match has already ended.
    LevelEnded,
    /// Origin and destination are the same cell.
    SameCell,
    /// Selected origin is not a Player-owned cell.
    NotPlayerOwned,
    /// Commit attempted without a complete origin/destination selection.
    NoDestination,
}
