//! Passive drone production.
//!
//! Each live tick every cell accrues one production tick; on reaching its
//! period (tripled for Neutral cells) it gains a drone, capacity
//! permitting, and the accumulator resets. The engine skips this system
//! entirely while paused or after the match has ended.

use crate::world::FactoryCell;

pub fn run(cells: &mut [FactoryCell]) {
    for cell in cells {
        cell.production_counter += 1;
        let threshold = cell.production_period * cell.faction.production_multiplier();
        if cell.production_counter >= threshold {
            cell.produce_one();
            cell.production_counter = 0;
        }
    }
}
