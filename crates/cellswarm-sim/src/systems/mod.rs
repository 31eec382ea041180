//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod flight;
pub mod launch;
pub mod production;
pub mod snapshot;
