//! Events emitted by the simulation for presentation and persistence
//! collaborators. Drained into each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{DroneOutcome, Faction, MoveRejectReason, Outcome};
use crate::types::{CellId, DroneId};

/// Everything the core tells the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A cell changed ownership (capture or debug override).
    CellFactionChanged {
        cell: CellId,
        old: Faction,
        new: Faction,
    },
    /// A drone departed from its origin cell.
    DroneSpawned {
        id: DroneId,
        faction: Faction,
        origin_cell: CellId,
        target_cell: CellId,
    },
    /// A drone resolved against its target cell and was removed.
    DroneResolved { id: DroneId, outcome: DroneOutcome },
    /// The match ended. Emitted exactly once per match.
    LevelEnded { outcome: Outcome, level_number: u32 },
    /// A move command was rejected without any state change.
    MoveRejected { reason: MoveRejectReason },
}
