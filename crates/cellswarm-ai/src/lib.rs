//! Enemy decision engine.
//!
//! Pure data in, launch orders out: the planner reads the cached cell
//! intelligence plus the live drone counts and decides which Enemy cells
//! launch where. No ECS dependency; the sim crate executes the orders
//! through the same launch path the player uses.

pub mod knowledge;
pub mod planner;

#[cfg(test)]
mod tests;
