//! Cached per-cell intelligence for AI move evaluation.
//!
//! Built once at level load so the planner never recomputes distances or
//! base values during a think cycle. The faction mirror is the only mutable
//! field; the sim updates it synchronously on every ownership change.

use cellswarm_core::enums::Faction;
use cellswarm_core::level::LevelSpec;
use cellswarm_core::types::CellId;

use crate::planner::AiWeights;

/// Read-mostly record the AI keeps about one cell.
#[derive(Debug, Clone)]
pub struct CellIntel {
    /// Mirrored faction, kept in sync by ownership-change notifications.
    pub faction: Faction,
    pub max_drones: u32,
    /// Faction-independent part of the static value, computed once:
    /// `((capacity * capacity_weight / 10) + (production_weight * 200 / period)) / 2`.
    base_value: f32,
}

impl CellIntel {
    fn new(faction: Faction, max_drones: u32, production_period: u32, weights: &AiWeights) -> Self {
        let capacity_part = max_drones as f32 * weights.capacity_weight / 10.0;
        let production_part = weights.production_weight * 200.0 / production_period as f32;
        Self {
            faction,
            max_drones,
            base_value: (capacity_part + production_part) / 2.0,
        }
    }

    /// Static value with the faction bonus applied at read time, so a
    /// faction-change notification is the only invalidation needed.
    pub fn value(&self, weights: &AiWeights) -> f32 {
        let bonus = if self.faction == Faction::Player {
            weights.enemy_faction_weight
        } else {
            1.0
        };
        bonus * self.base_value
    }
}

/// One `CellIntel` per cell, indexed by `CellId`.
#[derive(Debug, Clone, Default)]
pub struct IntelTable {
    cells: Vec<CellIntel>,
}

impl IntelTable {
    /// Build the table from validated level data.
    pub fn build(level: &LevelSpec, weights: &AiWeights) -> Self {
        let cells = level
            .cells
            .iter()
            .map(|spec| CellIntel::new(spec.faction, spec.max_drones, spec.production_period, weights))
            .collect();
        Self { cells }
    }

    /// Ownership-change notification from the sim.
    pub fn update_faction(&mut self, cell: CellId, new_faction: Faction) {
        if let Some(intel) = self.cells.get_mut(cell) {
            intel.faction = new_faction;
        }
    }

    pub fn get(&self, cell: CellId) -> &CellIntel {
        &self.cells[cell]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &CellIntel)> {
        self.cells.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
