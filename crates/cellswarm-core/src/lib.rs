//! Core types and definitions for the CELLSWARM simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! enums, commands, events, level data, snapshots, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
