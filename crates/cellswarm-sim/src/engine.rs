//! Simulation engine — the tick scheduler and command processor.
//!
//! `SimEngine` owns the cell arena, the hecs drone world, the AI intel
//! cache, and the match state. Exactly one tick handler runs to completion
//! before the next begins: commands drain at the tick boundary, systems
//! run in a fixed order, and every cross-component effect (counters, intel
//! mirror, events) completes synchronously inside the triggering call.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cellswarm_ai::knowledge::IntelTable;
use cellswarm_ai::planner::{self, AiWeights};
use cellswarm_core::commands::Command;
use cellswarm_core::enums::Outcome;
use cellswarm_core::events::SimEvent;
use cellswarm_core::geometry::DistanceTable;
use cellswarm_core::level::{LevelError, LevelSpec};
use cellswarm_core::state::GameStateSnapshot;
use cellswarm_core::types::{DroneId, SimTime};

use crate::match_state::MatchState;
use crate::move_coordinator::MoveCoordinator;
use crate::systems;
use crate::world::{self, FactoryCell};

/// Configuration for starting a new match.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// AI tuning weights.
    pub weights: AiWeights,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weights: AiWeights::default(),
        }
    }
}

/// The simulation engine. Owns all match state.
pub struct SimEngine {
    cells: Vec<FactoryCell>,
    drones: World,
    distances: DistanceTable,
    intel: IntelTable,
    weights: AiWeights,
    match_state: MatchState,
    mover: MoveCoordinator,
    time: SimTime,
    paused: bool,
    level_number: u32,
    /// Whether LevelEnded has been emitted for the latched outcome.
    announced: bool,
    think_ticks: u32,
    next_drone_id: DroneId,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimEngine {
    /// Build an engine from level data, validating it first.
    pub fn new(level: &LevelSpec, config: SimConfig) -> Result<Self, LevelError> {
        level.validate()?;
        let positions: Vec<glam::Vec2> = level.cells.iter().map(|c| c.position).collect();
        Ok(Self {
            cells: world::setup_level(level),
            drones: World::new(),
            distances: DistanceTable::build(&positions),
            intel: IntelTable::build(level, &config.weights),
            weights: config.weights,
            match_state: MatchState::from_level(level),
            mover: MoveCoordinator::default(),
            time: SimTime::default(),
            paused: false,
            level_number: level.level_number,
            announced: false,
            think_ticks: 0,
            next_drone_id: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused {
            self.run_systems();
            self.time.advance();
        }

        self.announce_outcome();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.cells,
            &self.drones,
            &self.match_state,
            self.time,
            self.paused,
            self.match_state.outcome(),
            self.level_number,
            events,
        )
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// The terminal outcome, if the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.match_state.outcome()
    }

    /// Read-only view of the cell arena.
    pub fn cells(&self) -> &[FactoryCell] {
        &self.cells
    }

    /// Read-only view of the in-flight drone world.
    pub fn drones(&self) -> &World {
        &self.drones
    }

    #[cfg(test)]
    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: Command) {
        let ended = self.match_state.outcome().is_some();
        match command {
            Command::SelectOrigin { cell } => {
                self.mover
                    .select_origin(&self.cells, cell, self.paused, ended, &mut self.events);
            }
            Command::SelectDestination { cell } => {
                self.mover.select_destination(&self.cells, cell);
            }
            Command::ClearDestination => {
                self.mover.clear_destination();
            }
            Command::CancelMove => {
                self.mover.cancel();
            }
            Command::CommitMove => {
                if let Some((origin, destination)) = self.mover.commit(
                    &self.cells,
                    &self.distances,
                    self.paused,
                    ended,
                    &mut self.events,
                ) {
                    self.cells[origin].begin_launch(destination, self.time.tick);
                }
            }
            Command::SetPause { paused } => {
                self.paused = paused;
            }
            Command::ForceOutcome { outcome } => {
                self.match_state.force(outcome);
            }
        }
    }

    /// Run all systems in order. The paused gate is handled by the caller;
    /// the ended gate is checked per system because a resolution earlier in
    /// the same tick can end the match.
    fn run_systems(&mut self) {
        // 1. Production
        if self.match_state.outcome().is_none() {
            systems::production::run(&mut self.cells);
        }
        // 2. Launch sequence advancement
        if self.match_state.outcome().is_none() {
            systems::launch::run(
                &mut self.cells,
                &mut self.drones,
                &mut self.match_state,
                &mut self.events,
                &mut self.next_drone_id,
                self.time.tick,
            );
        }
        // 3. Drone flight and arrival resolution — runs even after the
        //    match ends, so drones already in the air still land.
        systems::flight::run(
            &mut self.drones,
            &mut self.cells,
            &mut self.match_state,
            &mut self.intel,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. AI decision cycle, every think interval
        if self.match_state.outcome().is_none() {
            self.think_ticks += 1;
            if self.think_ticks >= self.weights.think_interval {
                self.think_ticks = 0;
                self.run_ai();
            }
        }
    }

    /// One AI think cycle: roll every Enemy cell and execute the resulting
    /// orders through the same launch path the player uses.
    fn run_ai(&mut self) {
        let live_drones: Vec<u32> = self.cells.iter().map(|c| c.drones).collect();
        let orders = planner::plan(
            &self.intel,
            &self.distances,
            &live_drones,
            &self.weights,
            &mut self.rng,
        );
        for order in orders {
            // Returns 0 for an empty or already-launching cell; no-op.
            self.cells[order.origin].begin_launch(order.target, self.time.tick);
        }
    }

    /// Emit LevelEnded exactly once when the outcome latches.
    fn announce_outcome(&mut self) {
        if self.announced {
            return;
        }
        if let Some(outcome) = self.match_state.outcome() {
            self.events.push(SimEvent::LevelEnded {
                outcome,
                level_number: self.level_number,
            });
            self.announced = true;
        }
    }
}
