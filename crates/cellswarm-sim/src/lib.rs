//! The CELLSWARM simulation engine.
//!
//! Owns the cell arena and the hecs world of in-flight drones, processes
//! commands at tick boundaries, runs all per-tick systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod match_state;
pub mod move_coordinator;
pub mod systems;
pub mod world;
