//! Launch decisions for the Enemy faction.
//!
//! Runs once every think interval, not every tick. Each Enemy cell rolls
//! independently against a fullness-based probability; a successful roll
//! picks the highest-scoring non-Enemy destination.

use cellswarm_core::constants::*;
use cellswarm_core::enums::Faction;
use cellswarm_core::geometry::DistanceTable;
use cellswarm_core::types::CellId;
use rand::Rng;

use crate::knowledge::IntelTable;

/// Tuning weights for the decision heuristics.
#[derive(Debug, Clone)]
pub struct AiWeights {
    /// Ticks between decision cycles.
    pub think_interval: u32,
    /// Exponent on cell fullness for the launch roll.
    pub steepness: f32,
    pub distance_weight: f32,
    pub capacity_weight: f32,
    pub production_weight: f32,
    pub enemy_faction_weight: f32,
    pub size_weight: f32,
}

impl Default for AiWeights {
    fn default() -> Self {
        Self {
            think_interval: AI_THINK_INTERVAL_TICKS,
            steepness: AI_MOVE_STEEPNESS,
            distance_weight: AI_DISTANCE_WEIGHT,
            capacity_weight: AI_CAPACITY_WEIGHT,
            production_weight: AI_PRODUCTION_WEIGHT,
            enemy_faction_weight: AI_ENEMY_FACTION_WEIGHT,
            size_weight: AI_SIZE_WEIGHT,
        }
    }
}

/// A decided launch, executed by the sim through the normal launch path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOrder {
    pub origin: CellId,
    pub target: CellId,
}

/// Probability that a cell launches this cycle: `(drones / max)^steepness`.
/// A full cell always launches; steep exponents make partial cells hold.
pub fn launch_probability(drones: u32, max_drones: u32, steepness: f32) -> f32 {
    (drones as f32 / max_drones as f32).powf(steepness)
}

/// Score of destination `target` for a launch from `origin`.
fn destination_score(
    origin: CellId,
    origin_drones: u32,
    target: CellId,
    intel: &IntelTable,
    distances: &DistanceTable,
    weights: &AiWeights,
) -> f32 {
    let target_intel = intel.get(target);
    let distance = distances.between(origin, target);
    target_intel.value(weights) / (distance * weights.distance_weight)
        * (weights.size_weight * origin_drones as f32 / target_intel.max_drones as f32)
}

/// Pick the highest-scoring non-Enemy destination for a launch from
/// `origin`, or None when every other cell is Enemy-owned. Ties resolve to
/// the lowest cell index (stable scan order).
pub fn choose_destination(
    origin: CellId,
    origin_drones: u32,
    intel: &IntelTable,
    distances: &DistanceTable,
    weights: &AiWeights,
) -> Option<CellId> {
    let mut best: Option<(CellId, f32)> = None;
    for (id, candidate) in intel.iter() {
        if candidate.faction == Faction::Enemy {
            continue;
        }
        let score = destination_score(origin, origin_drones, id, intel, distances, weights);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, _)| id)
}

/// One think cycle: roll every Enemy cell and collect launch orders.
/// `live_drones[i]` is the current drone count of cell `i`.
pub fn plan<R: Rng>(
    intel: &IntelTable,
    distances: &DistanceTable,
    live_drones: &[u32],
    weights: &AiWeights,
    rng: &mut R,
) -> Vec<LaunchOrder> {
    let mut orders = Vec::new();
    for (id, cell) in intel.iter() {
        if cell.faction != Faction::Enemy {
            continue;
        }
        let p = launch_probability(live_drones[id], cell.max_drones, weights.steepness);
        if rng.gen::<f32>() >= p {
            continue;
        }
        if let Some(target) = choose_destination(id, live_drones[id], intel, distances, weights) {
            orders.push(LaunchOrder { origin: id, target });
        }
    }
    orders
}
