//! Commands sent from presentation/input collaborators to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Outcome;
use crate::types::CellId;

/// All actions a collaborator can issue against the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Move coordination ---
    /// Select a Player-owned cell as the origin of a move.
    SelectOrigin { cell: CellId },
    /// Select a candidate destination for the pending move.
    SelectDestination { cell: CellId },
    /// Clear the candidate destination (e.g. pointer left the cell).
    ClearDestination,
    /// Commit the pending move, launching the origin cell's drones.
    CommitMove,
    /// Abandon the pending move entirely.
    CancelMove,

    // --- Simulation control ---
    /// Pause or resume the simulation.
    SetPause { paused: bool },
    /// Debug: force the match to end with the given outcome.
    ForceOutcome { outcome: Outcome },
}
