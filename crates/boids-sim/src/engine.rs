//! Flock engine — the simulation clock.
//!
//! `FlockEngine` owns the population, the live rule flags and the neighbor
//! query, processes input commands, and advances every boid once per tick.
//! It has no windowing or rendering dependency, so runs are fully
//! reproducible from a seed.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use boids_core::commands::FlockCommand;
use boids_core::enums::{Rule, UpdateOrder};
use boids_core::state::FlockSnapshot;
use boids_core::{Boid, FlockConfig, FlockError, RuleFlags, SimTime};

use crate::systems;
use crate::systems::neighbors::NeighborQuery;
use crate::world_setup;

/// The simulation engine. Owns the flock and all sim state.
pub struct FlockEngine {
    config: FlockConfig,
    boids: Vec<Boid>,
    flags: RuleFlags,
    predator_enabled: bool,
    time: SimTime,
    rng: ChaCha8Rng,
    neighbor_query: Box<dyn NeighborQuery + Send>,
    command_queue: VecDeque<FlockCommand>,
    neighbor_indices: Vec<usize>,
    neighbor_buffer: Vec<Boid>,
}

impl FlockEngine {
    /// Create an engine with a randomly seeded population.
    pub fn new(config: FlockConfig) -> Result<Self, FlockError> {
        config.validate()?;
        if let Some(cap) = config.max_population {
            if cap < config.population {
                return Err(FlockError::InvalidConfig(
                    "max_population must not be below population",
                ));
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let boids = world_setup::seed_population(&mut rng, &config);
        Ok(Self::assemble(config, boids, rng))
    }

    /// Create an engine with an explicit initial population.
    ///
    /// `config.population` is ignored; the RNG is still seeded from
    /// `config.seed` for later spawns.
    pub fn from_boids(config: FlockConfig, boids: Vec<Boid>) -> Result<Self, FlockError> {
        config.validate()?;
        if let Some(cap) = config.max_population {
            if boids.len() > cap {
                return Err(FlockError::PopulationCap { cap });
            }
        }
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::assemble(config, boids, rng))
    }

    fn assemble(config: FlockConfig, boids: Vec<Boid>, rng: ChaCha8Rng) -> Self {
        info!(
            population = boids.len(),
            seed = config.seed,
            strategy = ?config.neighbor_strategy,
            order = ?config.update_order,
            "flock engine initialized"
        );
        let neighbor_query =
            systems::neighbors::for_strategy(config.neighbor_strategy, config.visual_range);
        Self {
            flags: config.initial_flags,
            predator_enabled: config.predator_enabled,
            config,
            boids,
            time: SimTime::default(),
            rng,
            neighbor_query,
            command_queue: VecDeque::new(),
            neighbor_indices: Vec::new(),
            neighbor_buffer: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: FlockCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = FlockCommand>) {
        self.command_queue.extend(commands);
    }

    /// Drain queued commands, advance one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> FlockSnapshot {
        self.process_commands();
        self.step();
        self.snapshot()
    }

    /// Advance every boid by one tick.
    pub fn step(&mut self) {
        self.neighbor_query.rebuild(&self.boids);
        match self.config.update_order {
            UpdateOrder::InPlace => self.step_in_place(),
            UpdateOrder::Snapshot => self.step_from_snapshot(),
        }
        self.time.advance();
        trace!(
            tick = self.time.tick,
            population = self.boids.len(),
            "tick complete"
        );
    }

    /// Each boid sees the already-updated state of boids before it.
    fn step_in_place(&mut self) {
        for index in 0..self.boids.len() {
            self.gather_neighbors(index, None);
            let from = self.boids[index].position;
            let boid = &mut self.boids[index];
            systems::integrate::integrate(boid, &self.neighbor_buffer, self.flags, &self.config);
            let to = boid.position;
            self.neighbor_query.relocate(index, from, to);
        }
    }

    /// Every boid reads the pre-tick population; results land together.
    fn step_from_snapshot(&mut self) {
        let before = self.boids.clone();
        for index in 0..before.len() {
            self.gather_neighbors(index, Some(before.as_slice()));
            systems::integrate::integrate(
                &mut self.boids[index],
                &self.neighbor_buffer,
                self.flags,
                &self.config,
            );
        }
    }

    /// Fill `neighbor_buffer` with copies of `index`'s neighbors, read from
    /// `source` or the live population.
    fn gather_neighbors(&mut self, index: usize, source: Option<&[Boid]>) {
        let boids = source.unwrap_or(self.boids.as_slice());
        self.neighbor_query.find(
            index,
            boids,
            self.config.visual_range,
            &mut self.neighbor_indices,
        );
        self.neighbor_buffer.clear();
        self.neighbor_buffer
            .extend(self.neighbor_indices.iter().map(|&i| boids[i]));
    }

    /// Build a snapshot of the current state without advancing.
    pub fn snapshot(&self) -> FlockSnapshot {
        systems::snapshot::build_snapshot(
            &self.boids,
            &self.time,
            self.flags,
            self.predator_enabled,
            &self.config,
        )
    }

    /// Add a boid at `(x, y)` with a random velocity. Returns its index.
    pub fn spawn(&mut self, x: f64, y: f64) -> Result<usize, FlockError> {
        if let Some(cap) = self.config.max_population {
            if self.boids.len() >= cap {
                warn!(cap, x, y, "spawn refused: population cap reached");
                return Err(FlockError::PopulationCap { cap });
            }
        }
        let index = world_setup::spawn_boid(
            &mut self.boids,
            &mut self.rng,
            x,
            y,
            self.config.spawn_velocity_range,
        );
        debug!(index, x, y, population = self.boids.len(), "spawned boid");
        Ok(index)
    }

    /// Handle a canvas click: spawn there if click-to-spawn is enabled.
    pub fn click(&mut self, x: f64, y: f64) -> Result<Option<usize>, FlockError> {
        if !self.predator_enabled {
            warn!(x, y, "click ignored: predator spawning disabled");
            return Ok(None);
        }
        self.spawn(x, y).map(Some)
    }

    pub fn set_cohesion(&mut self, enabled: bool) {
        self.set_rule(Rule::Cohesion, enabled);
    }

    pub fn set_alignment(&mut self, enabled: bool) {
        self.set_rule(Rule::Alignment, enabled);
    }

    pub fn set_separation(&mut self, enabled: bool) {
        self.set_rule(Rule::Separation, enabled);
    }

    /// Enable or disable a rule from the next step on.
    pub fn set_rule(&mut self, rule: Rule, enabled: bool) {
        self.flags.set(rule, enabled);
        debug!(?rule, enabled, "rule flag set");
    }

    /// Flip a rule. Returns its new state.
    pub fn toggle_rule(&mut self, rule: Rule) -> bool {
        let enabled = self.flags.toggle(rule);
        debug!(?rule, enabled, "rule flag toggled");
        enabled
    }

    pub fn set_predator(&mut self, enabled: bool) {
        self.predator_enabled = enabled;
        debug!(enabled, "predator spawning set");
    }

    /// Indices of `index`'s current neighbors, ascending. Empty if `index`
    /// is not in the population.
    pub fn neighbors_of(&self, index: usize) -> Vec<usize> {
        if index >= self.boids.len() {
            return Vec::new();
        }
        systems::neighbors::find_neighbors(index, &self.boids, self.config.visual_range)
    }

    /// Read-only view of the population in tick-processing order.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn population(&self) -> usize {
        self.boids.len()
    }

    pub fn flags(&self) -> RuleFlags {
        self.flags
    }

    pub fn predator_enabled(&self) -> bool {
        self.predator_enabled
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: FlockCommand) {
        match command {
            FlockCommand::SetCohesion { enabled } => self.set_cohesion(enabled),
            FlockCommand::SetAlignment { enabled } => self.set_alignment(enabled),
            FlockCommand::SetSeparation { enabled } => self.set_separation(enabled),
            FlockCommand::ToggleRule { rule } => {
                self.toggle_rule(rule);
            }
            FlockCommand::SetPredator { enabled } => self.set_predator(enabled),
            FlockCommand::Click { x, y } => {
                // A refused spawn is already logged; commands have no caller to report to.
                let _ = self.click(x, y);
            }
            FlockCommand::Spawn { x, y } => {
                let _ = self.spawn(x, y);
            }
        }
    }
}
