//! The cell arena and in-flight drone components.
//!
//! Cells are fixed for the level's lifetime and live in a plain `Vec`
//! indexed by `CellId`; drones spawn and despawn constantly and live in the
//! hecs world. Cell operations that ripple into match counters, the AI
//! intel mirror, or the event stream take those collaborators explicitly —
//! the updates are synchronous, never deferred.

use glam::Vec2;

use cellswarm_ai::knowledge::IntelTable;
use cellswarm_core::constants::CAPTURE_RADIUS_RATIO;
use cellswarm_core::enums::{DroneOutcome, Faction};
use cellswarm_core::events::SimEvent;
use cellswarm_core::level::LevelSpec;
use cellswarm_core::types::{CellId, DroneId};

use crate::match_state::MatchState;

/// A stationary territory unit that produces and holds drones.
#[derive(Debug, Clone)]
pub struct FactoryCell {
    pub id: CellId,
    pub faction: Faction,
    pub position: Vec2,
    pub max_drones: u32,
    /// Docked drone count. Invariant: `0 <= drones <= max_drones`.
    pub drones: u32,
    /// Ticks per drone produced, before the faction multiplier.
    pub production_period: u32,
    /// Ticks accumulated toward the next drone. Reset on faction change.
    pub production_counter: u32,
    /// Max distance from which this cell may initiate a move.
    pub launch_range: f32,
    /// Active launch sequence, at most one at a time.
    pub launch: Option<LaunchSequence>,
}

/// The timed, interruptible process of a cell releasing its drones one at
/// a time toward a target.
#[derive(Debug, Clone)]
pub struct LaunchSequence {
    pub target: CellId,
    /// Units captured at launch start.
    pub total: u32,
    pub remaining: u32,
    /// Tick at which the next unit departs. Tick counters freeze while
    /// paused, so the per-unit delay freezes with them.
    pub next_spawn_tick: u64,
    /// Set by a faction change; halts the sequence on its next advance.
    pub interrupted: bool,
}

impl FactoryCell {
    /// Add one drone if below capacity. Silent no-op at capacity — excess
    /// production and reinforcement are simply lost.
    pub fn produce_one(&mut self) {
        if self.drones < self.max_drones {
            self.drones += 1;
        }
    }

    /// Start a launch sequence toward `target`, capturing the current
    /// drone count as the sequence size. The first unit departs on the
    /// current tick; the rest follow at the per-unit delay. Returns the
    /// captured count, or 0 (and no sequence) when the cell is empty or
    /// already launching.
    pub fn begin_launch(&mut self, target: CellId, now_tick: u64) -> u32 {
        if self.drones == 0 || self.launch.is_some() {
            return 0;
        }
        let total = self.drones;
        self.launch = Some(LaunchSequence {
            target,
            total,
            remaining: total,
            next_spawn_tick: now_tick,
            interrupted: false,
        });
        total
    }

    /// Radius within which an arriving drone resolves against this cell.
    /// Scales with capacity: bigger cells are easier to hit.
    pub fn capture_radius(&self) -> f32 {
        self.max_drones as f32 * CAPTURE_RADIUS_RATIO
    }
}

/// An in-flight drone. Faction is fixed at spawn, independent of the
/// origin cell's possibly-later-changed faction.
#[derive(Debug, Clone, Copy)]
pub struct Drone {
    pub id: DroneId,
    pub faction: Faction,
    pub origin: CellId,
    pub target: CellId,
}

/// Build the cell arena from validated level data.
pub fn setup_level(level: &LevelSpec) -> Vec<FactoryCell> {
    level
        .cells
        .iter()
        .enumerate()
        .map(|(id, spec)| FactoryCell {
            id,
            faction: spec.faction,
            position: spec.position,
            max_drones: spec.max_drones,
            drones: spec.starting_drones(),
            production_period: spec.production_period,
            production_counter: 0,
            launch_range: spec.resolved_range(),
            launch: None,
        })
        .collect()
}

/// Change a cell's ownership: reset production, interrupt any in-progress
/// launch (units already departed are not rolled back), update counters and
/// the AI faction mirror, and emit the change — all before returning.
pub fn change_faction(
    cell: &mut FactoryCell,
    new_faction: Faction,
    match_state: &mut MatchState,
    intel: &mut IntelTable,
    events: &mut Vec<SimEvent>,
) {
    if cell.faction == new_faction {
        return;
    }
    let old = cell.faction;
    cell.production_counter = 0;
    if let Some(seq) = &mut cell.launch {
        seq.interrupted = true;
    }
    cell.faction = new_faction;
    match_state.add_cell(new_faction);
    match_state.remove_cell(old);
    intel.update_faction(cell.id, new_faction);
    events.push(SimEvent::CellFactionChanged {
        cell: cell.id,
        old,
        new: new_faction,
    });
}

/// Resolve a hostile drone against this cell: a docked defender trades
/// one-for-one with the attacker; an empty cell is captured.
pub fn receive_attack(
    cell: &mut FactoryCell,
    attacker: Faction,
    match_state: &mut MatchState,
    intel: &mut IntelTable,
    events: &mut Vec<SimEvent>,
) -> DroneOutcome {
    if cell.drones > 0 {
        cell.drones -= 1;
        DroneOutcome::Absorbed
    } else {
        change_faction(cell, attacker, match_state, intel, events);
        DroneOutcome::Captured
    }
}
