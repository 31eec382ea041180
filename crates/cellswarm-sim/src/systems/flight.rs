//! Drone travel and arrival resolution.
//!
//! Drones head straight at their target at fixed speed. Within the
//! target's capture radius a drone resolves exactly once: a friendly
//! arrival merges under the same capacity-gated rule as passive
//! production; a hostile arrival trades with a defender or captures an
//! empty cell. Resolution, counter update, event emission, and despawn all
//! happen within the same tick.
//!
//! This system keeps running after the match ends — drones already in the
//! air land; only production, launches, and decisions freeze.

use hecs::World;

use cellswarm_ai::knowledge::IntelTable;
use cellswarm_core::constants::{DRONE_SPEED, DT};
use cellswarm_core::enums::DroneOutcome;
use cellswarm_core::events::SimEvent;
use glam::Vec2;

use crate::match_state::MatchState;
use crate::world::{self, Drone, FactoryCell};

pub fn run(
    world: &mut World,
    cells: &mut [FactoryCell],
    match_state: &mut MatchState,
    intel: &mut IntelTable,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let step = DRONE_SPEED * DT as f32;

    for (entity, (pos, drone)) in world.query_mut::<(&mut Vec2, &Drone)>() {
        let target = &mut cells[drone.target];
        let delta = target.position - *pos;

        if delta.length() < target.capture_radius() {
            let outcome = if drone.faction == target.faction {
                target.produce_one();
                DroneOutcome::Reinforced
            } else {
                world::receive_attack(target, drone.faction, match_state, intel, events)
            };
            match_state.remove_drone(drone.faction);
            events.push(SimEvent::DroneResolved {
                id: drone.id,
                outcome,
            });
            despawn_buffer.push(entity);
        } else {
            *pos += delta.normalize() * step;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
