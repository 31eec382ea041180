//! Snapshot assembly: the complete visible state after a tick.

use glam::Vec2;
use hecs::World;

use cellswarm_core::enums::Outcome;
use cellswarm_core::events::SimEvent;
use cellswarm_core::state::{CellView, DroneView, GameStateSnapshot};
use cellswarm_core::types::SimTime;

use crate::match_state::MatchState;
use crate::world::{Drone, FactoryCell};

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    cells: &[FactoryCell],
    world: &World,
    match_state: &MatchState,
    time: SimTime,
    paused: bool,
    outcome: Option<Outcome>,
    level_number: u32,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let cell_views = cells
        .iter()
        .map(|cell| CellView {
            id: cell.id,
            faction: cell.faction,
            position: cell.position,
            drones: cell.drones,
            max_drones: cell.max_drones,
            launch_range: cell.launch_range,
            launching: cell.launch.is_some(),
        })
        .collect();

    let mut drone_views: Vec<DroneView> = world
        .query::<(&Vec2, &Drone)>()
        .iter()
        .map(|(_entity, (pos, drone))| DroneView {
            id: drone.id,
            faction: drone.faction,
            position: *pos,
            target_cell: drone.target,
        })
        .collect();
    // Stable order regardless of archetype layout, so identical sim states
    // serialize identically.
    drone_views.sort_by_key(|d| d.id);

    GameStateSnapshot {
        time,
        paused,
        outcome,
        level_number,
        cells: cell_views,
        drones: drone_views,
        counters: match_state.counters(),
        events,
    }
}
