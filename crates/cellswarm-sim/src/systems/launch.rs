//! Launch sequence advancement.
//!
//! Called once per live tick. An interrupted sequence terminates before
//! releasing anything further; otherwise one drone departs whenever the
//! per-unit delay has elapsed, carrying the cell's *current* faction. A
//! sequence ends when its captured count is exhausted or the cell runs dry
//! (drones lost to attackers mid-sequence are not owed).

use hecs::World;

use cellswarm_core::constants::LAUNCH_STEP_TICKS;
use cellswarm_core::events::SimEvent;
use cellswarm_core::types::DroneId;

use crate::match_state::MatchState;
use crate::world::{Drone, FactoryCell};

pub fn run(
    cells: &mut [FactoryCell],
    world: &mut World,
    match_state: &mut MatchState,
    events: &mut Vec<SimEvent>,
    next_drone_id: &mut DroneId,
    now_tick: u64,
) {
    for cell in cells.iter_mut() {
        let Some(seq) = &mut cell.launch else {
            continue;
        };
        if seq.interrupted {
            cell.launch = None;
            continue;
        }
        if now_tick < seq.next_spawn_tick {
            continue;
        }
        if cell.drones == 0 {
            cell.launch = None;
            continue;
        }

        let id = *next_drone_id;
        *next_drone_id += 1;
        let drone = Drone {
            id,
            faction: cell.faction,
            origin: cell.id,
            target: seq.target,
        };
        world.spawn((drone, cell.position));
        cell.drones -= 1;
        seq.remaining -= 1;
        seq.next_spawn_tick = now_tick + LAUNCH_STEP_TICKS;

        match_state.add_drone(drone.faction);
        events.push(SimEvent::DroneSpawned {
            id,
            faction: drone.faction,
            origin_cell: drone.origin,
            target_cell: drone.target,
        });

        if seq.remaining == 0 {
            cell.launch = None;
        }
    }
}
