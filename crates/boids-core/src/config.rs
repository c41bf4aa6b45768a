//! Startup configuration for a flock.
//!
//! All values are fixed for the run. `validate()` is the only place bad
//! values are caught; the per-tick code assumes a validated config.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{NeighborStrategy, UpdateOrder};
use crate::error::FlockError;
use crate::types::RuleFlags;

/// Per-rule weights applied to the steering deltas before they are added
/// to a boid's velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWeights {
    pub cohesion: f64,
    pub alignment: f64,
    pub separation: f64,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            cohesion: COHESION_WEIGHT,
            alignment: ALIGNMENT_WEIGHT,
            separation: SEPARATION_WEIGHT,
        }
    }
}

/// Complete configuration for a flock simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    /// RNG seed for the initial population and spawn velocities.
    pub seed: u64,
    /// Number of boids seeded at startup.
    pub population: usize,
    /// Optional hard limit on the population; spawns beyond it are refused.
    pub max_population: Option<usize>,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub visual_range: f64,
    pub min_separation: f64,
    pub weights: RuleWeights,
    pub max_speed: f64,
    pub boundary_margin: f64,
    pub turn_factor: f64,
    /// Velocity components of new boids are drawn from [-range, range].
    pub spawn_velocity_range: f64,
    /// Rules active at startup.
    pub initial_flags: RuleFlags,
    /// Whether clicks on the canvas add boids.
    pub predator_enabled: bool,
    pub update_order: UpdateOrder,
    pub neighbor_strategy: NeighborStrategy,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            population: DEFAULT_POPULATION,
            max_population: None,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            visual_range: VISUAL_RANGE,
            min_separation: MIN_SEPARATION_DISTANCE,
            weights: RuleWeights::default(),
            max_speed: MAX_SPEED,
            boundary_margin: BOUNDARY_MARGIN,
            turn_factor: TURN_FACTOR,
            spawn_velocity_range: SPAWN_VELOCITY_RANGE,
            initial_flags: RuleFlags::all(),
            predator_enabled: true,
            update_order: UpdateOrder::default(),
            neighbor_strategy: NeighborStrategy::default(),
        }
    }
}

impl FlockConfig {
    /// Check that every value is usable by the engine.
    ///
    /// The population cap is checked against the actual starting flock by
    /// the engine, since an explicit flock need not match `population`.
    pub fn validate(&self) -> Result<(), FlockError> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(FlockError::InvalidConfig("canvas_width must be positive"));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            return Err(FlockError::InvalidConfig("canvas_height must be positive"));
        }
        if !non_negative(self.visual_range) {
            return Err(FlockError::InvalidConfig(
                "visual_range must be non-negative",
            ));
        }
        if !non_negative(self.min_separation) {
            return Err(FlockError::InvalidConfig(
                "min_separation must be non-negative",
            ));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(FlockError::InvalidConfig("max_speed must be positive"));
        }
        if !non_negative(self.boundary_margin) {
            return Err(FlockError::InvalidConfig(
                "boundary_margin must be non-negative",
            ));
        }
        if !non_negative(self.turn_factor) {
            return Err(FlockError::InvalidConfig(
                "turn_factor must be non-negative",
            ));
        }
        if !non_negative(self.spawn_velocity_range) {
            return Err(FlockError::InvalidConfig(
                "spawn_velocity_range must be non-negative",
            ));
        }
        let RuleWeights {
            cohesion,
            alignment,
            separation,
        } = self.weights;
        if !(cohesion.is_finite() && alignment.is_finite() && separation.is_finite()) {
            return Err(FlockError::InvalidConfig("rule weights must be finite"));
        }
        Ok(())
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
