//! Simulation constants and tuning defaults.
//!
//! These seed `FlockConfig::default()`; the engine itself only ever reads
//! the values held in its config.

/// Nominal frame rate the runner paces ticks at (Hz).
pub const TICK_RATE: u32 = 30;

// --- Population ---

/// Number of boids seeded at startup.
pub const DEFAULT_POPULATION: usize = 100;

/// Default RNG seed. Same seed = same initial flock.
pub const DEFAULT_SEED: u64 = 42;

// --- Canvas ---

pub const CANVAS_WIDTH: f64 = 1200.0;
pub const CANVAS_HEIGHT: f64 = 800.0;

// --- Perception ---

/// Radius within which other boids count as neighbors.
pub const VISUAL_RANGE: f64 = 30.0;

/// Neighbors closer than this push the boid away.
pub const MIN_SEPARATION_DISTANCE: f64 = 30.0;

// --- Rule weights ---

pub const COHESION_WEIGHT: f64 = 0.1;
pub const ALIGNMENT_WEIGHT: f64 = 0.5;
pub const SEPARATION_WEIGHT: f64 = 1.1;

// --- Motion limits ---

/// Maximum speed in canvas units per tick.
pub const MAX_SPEED: f64 = 15.0;

/// Distance from a canvas edge at which boids start turning back.
pub const BOUNDARY_MARGIN: f64 = 150.0;

/// Velocity nudge applied per tick per edge while inside the margin.
pub const TURN_FACTOR: f64 = 1.0;

// --- Spawning ---

/// Spawned and seeded velocity components are drawn from [-this, this].
pub const SPAWN_VELOCITY_RANGE: f64 = 2.0;
