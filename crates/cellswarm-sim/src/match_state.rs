//! Live match counters and terminal win/lose detection.
//!
//! Counts are incremental: updated exactly once per ownership-changing or
//! spawn/resolve event, never recomputed by rescanning cells. Win is
//! checked on enemy-side removals, lose on player-side removals, so under
//! same-tick mutual elimination the first qualifying removal latches the
//! outcome. The latch is terminal: once set it never changes and no second
//! outcome can fire.

use cellswarm_core::enums::{Faction, Outcome};
use cellswarm_core::level::LevelSpec;
use cellswarm_core::state::CounterView;

#[derive(Debug, Clone, Default)]
pub struct MatchState {
    counters: CounterView,
    outcome: Option<Outcome>,
}

impl MatchState {
    /// Initialize counters from level data. Drone counters start at zero;
    /// they track in-flight drones only, docked drones belong to their cell.
    pub fn from_level(level: &LevelSpec) -> Self {
        let mut counters = CounterView::default();
        for cell in &level.cells {
            match cell.faction {
                Faction::Player => counters.player_cells += 1,
                Faction::Enemy => counters.enemy_cells += 1,
                Faction::Neutral => counters.neutral_cells += 1,
            }
        }
        Self {
            counters,
            outcome: None,
        }
    }

    pub fn counters(&self) -> CounterView {
        self.counters
    }

    /// The terminal outcome, if the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Debug override: latch the given outcome unless one is already set.
    pub fn force(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }

    pub fn add_cell(&mut self, faction: Faction) {
        match faction {
            Faction::Player => self.counters.player_cells += 1,
            Faction::Enemy => self.counters.enemy_cells += 1,
            Faction::Neutral => self.counters.neutral_cells += 1,
        }
    }

    pub fn remove_cell(&mut self, faction: Faction) {
        match faction {
            Faction::Player => {
                debug_assert!(self.counters.player_cells > 0);
                self.counters.player_cells = self.counters.player_cells.saturating_sub(1);
                self.check_lose();
            }
            Faction::Enemy => {
                debug_assert!(self.counters.enemy_cells > 0);
                self.counters.enemy_cells = self.counters.enemy_cells.saturating_sub(1);
                self.check_win();
            }
            Faction::Neutral => {
                debug_assert!(self.counters.neutral_cells > 0);
                self.counters.neutral_cells = self.counters.neutral_cells.saturating_sub(1);
            }
        }
    }

    pub fn add_drone(&mut self, faction: Faction) {
        match faction {
            Faction::Player => self.counters.player_drones += 1,
            Faction::Enemy => self.counters.enemy_drones += 1,
            // Neutral cells never launch.
            Faction::Neutral => debug_assert!(false, "neutral drone spawned"),
        }
    }

    pub fn remove_drone(&mut self, faction: Faction) {
        match faction {
            Faction::Player => {
                debug_assert!(self.counters.player_drones > 0);
                self.counters.player_drones = self.counters.player_drones.saturating_sub(1);
                self.check_lose();
            }
            Faction::Enemy => {
                debug_assert!(self.counters.enemy_drones > 0);
                self.counters.enemy_drones = self.counters.enemy_drones.saturating_sub(1);
                self.check_win();
            }
            Faction::Neutral => debug_assert!(false, "neutral drone resolved"),
        }
    }

    fn check_win(&mut self) {
        if self.outcome.is_none()
            && self.counters.enemy_cells == 0
            && self.counters.enemy_drones == 0
        {
            self.outcome = Some(Outcome::Win);
        }
    }

    fn check_lose(&mut self) {
        if self.outcome.is_none()
            && self.counters.player_cells == 0
            && self.counters.player_drones == 0
        {
            self.outcome = Some(Outcome::Lose);
        }
    }
}
