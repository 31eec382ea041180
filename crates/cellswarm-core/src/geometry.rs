//! Precomputed pairwise distances between cells.
//!
//! Pure data, built once at level load. Both the move coordinator (range
//! checks) and the AI planner (destination scoring) read from it; nothing
//! recomputes distances during play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::CellId;

/// Symmetric table of Euclidean distances between all cell pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceTable {
    len: usize,
    distances: Vec<f32>,
}

impl DistanceTable {
    /// Build the table from cell positions.
    pub fn build(positions: &[Vec2]) -> Self {
        let len = positions.len();
        let mut distances = Vec::with_capacity(len * len);
        for a in positions {
            for b in positions {
                distances.push(a.distance(*b));
            }
        }
        Self { len, distances }
    }

    /// Distance between two cells.
    pub fn between(&self, a: CellId, b: CellId) -> f32 {
        self.distances[a * self.len + b]
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
