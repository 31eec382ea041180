//! Campaign progression bookkeeping.
//!
//! Tracks which levels are unlocked and completed across matches. Feed it
//! the simulation's event stream; it reacts to `LevelEnded` and ignores
//! everything else. Serde-derived so a host can persist it however it
//! likes.

use serde::{Deserialize, Serialize};

use cellswarm_core::enums::Outcome;
use cellswarm_core::events::SimEvent;

/// Per-level unlock and completion state for a linear campaign.
///
/// Levels are numbered from 1. A win completes the level and unlocks the
/// next; a loss changes nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignProgress {
    level_count: u32,
    /// Highest level the player may start. Always at least 1.
    unlocked: u32,
    /// Highest level completed, 0 when none.
    completed: u32,
}

impl CampaignProgress {
    /// Fresh campaign: only the first level is playable.
    pub fn new(level_count: u32) -> Self {
        Self {
            level_count,
            unlocked: 1.min(level_count.max(1)),
            completed: 0,
        }
    }

    pub fn level_count(&self) -> u32 {
        self.level_count
    }

    /// Whether the given level may be started.
    pub fn is_unlocked(&self, level_number: u32) -> bool {
        level_number >= 1 && level_number <= self.unlocked
    }

    /// Whether the given level has been won at least once.
    pub fn is_completed(&self, level_number: u32) -> bool {
        level_number >= 1 && level_number <= self.completed
    }

    /// Highest completed level, 0 when none.
    pub fn highest_completed(&self) -> u32 {
        self.completed
    }

    /// React to a simulation event. Only `LevelEnded` with a win advances
    /// progression; a replayed earlier win never regresses it.
    pub fn observe(&mut self, event: &SimEvent) {
        let SimEvent::LevelEnded {
            outcome: Outcome::Win,
            level_number,
        } = event
        else {
            return;
        };
        if *level_number > self.completed {
            self.completed = (*level_number).min(self.level_count);
        }
        let next = (*level_number + 1).min(self.level_count);
        if next > self.unlocked {
            self.unlocked = next;
        }
    }
}
