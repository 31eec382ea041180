//! The player's move state machine.
//!
//! Mediates a single user-initiated move between an origin and destination
//! cell: Idle until a Player-owned origin is selected, then awaiting a
//! destination until commit or cancellation. A committed move returns to
//! Idle immediately; the launch itself proceeds asynchronously through the
//! origin cell's own sequence.

use cellswarm_core::enums::{Faction, MoveRejectReason};
use cellswarm_core::events::SimEvent;
use cellswarm_core::geometry::DistanceTable;
use cellswarm_core::types::CellId;

use crate::world::FactoryCell;

#[derive(Debug, Clone, Default)]
pub struct MoveCoordinator {
    origin: Option<CellId>,
    destination: Option<CellId>,
}

impl MoveCoordinator {
    /// Select a Player-owned cell as the move origin. Illegal selections
    /// are rejected with no state change.
    pub fn select_origin(
        &mut self,
        cells: &[FactoryCell],
        cell: CellId,
        paused: bool,
        ended: bool,
        events: &mut Vec<SimEvent>,
    ) {
        if ended {
            events.push(reject(MoveRejectReason::LevelEnded));
            return;
        }
        if paused {
            events.push(reject(MoveRejectReason::Paused));
            return;
        }
        match cells.get(cell) {
            Some(c) if c.faction == Faction::Player => {
                self.origin = Some(cell);
                self.destination = None;
            }
            _ => events.push(reject(MoveRejectReason::NotPlayerOwned)),
        }
    }

    /// Record a candidate destination. Meaningless without an origin
    /// (hovering while not in a move) or with a nonexistent cell id, so
    /// silently ignored then; an incomplete selection is rejected at
    /// commit.
    pub fn select_destination(&mut self, cells: &[FactoryCell], cell: CellId) {
        if self.origin.is_some() && cell < cells.len() {
            self.destination = Some(cell);
        }
    }

    /// Drop the candidate destination but stay in the move.
    pub fn clear_destination(&mut self) {
        self.destination = None;
    }

    /// Abandon the move entirely.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.destination = None;
    }

    /// Attempt to commit the pending move. On success returns the
    /// (origin, destination) pair for the engine to launch and resets to
    /// Idle. Rejections while paused or ended leave the selection intact;
    /// any other rejection ends the move, mirroring a failed release.
    pub fn commit(
        &mut self,
        cells: &[FactoryCell],
        distances: &DistanceTable,
        paused: bool,
        ended: bool,
        events: &mut Vec<SimEvent>,
    ) -> Option<(CellId, CellId)> {
        if ended {
            events.push(reject(MoveRejectReason::LevelEnded));
            return None;
        }
        if paused {
            events.push(reject(MoveRejectReason::Paused));
            return None;
        }
        let (Some(origin), Some(destination)) = (self.origin, self.destination) else {
            events.push(reject(MoveRejectReason::NoDestination));
            self.cancel();
            return None;
        };
        if origin == destination {
            events.push(reject(MoveRejectReason::SameCell));
            self.cancel();
            return None;
        }
        if distances.between(origin, destination) > cells[origin].launch_range {
            events.push(reject(MoveRejectReason::OutOfRange));
            self.cancel();
            return None;
        }
        self.cancel();
        Some((origin, destination))
    }

    /// Current origin selection, if a move is in progress.
    pub fn origin(&self) -> Option<CellId> {
        self.origin
    }
}

fn reject(reason: MoveRejectReason) -> SimEvent {
    SimEvent::MoveRejected { reason }
}
