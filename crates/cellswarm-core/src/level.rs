//! Static level data: the cells a match starts with.
//!
//! Levels are plain serde data so scene loaders can ship them as JSON.
//! Validation happens once, before the engine is built; the simulation
//! itself never re-checks these constraints.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::SIZE_TO_RANGE_RATIO;
use crate::enums::Faction;

/// One factory cell in the level data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    /// Fixed world position, used only for distance lookups.
    pub position: Vec2,
    pub faction: Faction,
    /// Drone capacity.
    pub max_drones: u32,
    /// Ticks per drone produced (before the faction multiplier).
    pub production_period: u32,
    /// Starting drone count. Defaults to full capacity.
    #[serde(default)]
    pub initial_drones: Option<u32>,
    /// Max distance from which this cell may initiate a move.
    /// Defaults to `max_drones * SIZE_TO_RANGE_RATIO`.
    #[serde(default)]
    pub launch_range: Option<f32>,
}

impl CellSpec {
    /// Starting drone count after defaulting.
    pub fn starting_drones(&self) -> u32 {
        self.initial_drones.unwrap_or(self.max_drones)
    }

    /// Launch range after defaulting.
    pub fn resolved_range(&self) -> f32 {
        self.launch_range
            .unwrap_or(self.max_drones as f32 * SIZE_TO_RANGE_RATIO)
    }
}

/// A complete level definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSpec {
    pub level_number: u32,
    pub cells: Vec<CellSpec>,
}

/// Errors in static level data, caught at engine construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level has no cells")]
    Empty,
    #[error("cell {0}: max_drones must be greater than zero")]
    ZeroCapacity(usize),
    #[error("cell {0}: production_period must be greater than zero")]
    ZeroPeriod(usize),
    #[error("cell {cell}: initial drones {drones} exceed capacity {capacity}")]
    OverCapacity {
        cell: usize,
        drones: u32,
        capacity: u32,
    },
}

impl LevelSpec {
    /// Check every static invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.cells.is_empty() {
            return Err(LevelError::Empty);
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.max_drones == 0 {
                return Err(LevelError::ZeroCapacity(i));
            }
            if cell.production_period == 0 {
                return Err(LevelError::ZeroPeriod(i));
            }
            if cell.starting_drones() > cell.max_drones {
                return Err(LevelError::OverCapacity {
                    cell: i,
                    drones: cell.starting_drones(),
                    capacity: cell.max_drones,
                });
            }
        }
        Ok(())
    }
}
