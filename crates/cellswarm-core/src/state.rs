//! Game state snapshot — the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Faction, Outcome};
use crate::events::SimEvent;
use crate::types::{CellId, DroneId, SimTime};

/// Complete game state handed to presentation collaborators after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub paused: bool,
    /// Set once the match has ended; terminal.
    pub outcome: Option<Outcome>,
    pub level_number: u32,
    pub cells: Vec<CellView>,
    pub drones: Vec<DroneView>,
    pub counters: CounterView,
    /// Events emitted during this tick.
    pub events: Vec<SimEvent>,
}

/// A factory cell as visible to the outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellView {
    pub id: CellId,
    pub faction: Faction,
    pub position: Vec2,
    pub drones: u32,
    pub max_drones: u32,
    pub launch_range: f32,
    /// Whether a launch sequence is currently in progress.
    pub launching: bool,
}

/// An in-flight drone as visible to the outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneView {
    pub id: DroneId,
    pub faction: Faction,
    pub position: Vec2,
    pub target_cell: CellId,
}

/// Live per-faction counts driving win/lose detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterView {
    pub player_cells: u32,
    pub enemy_cells: u32,
    pub neutral_cells: u32,
    pub player_drones: u32,
    pub enemy_drones: u32,
}
