//! Snapshot system: copies the population into a `FlockSnapshot`.
//!
//! Read-only; never modifies the flock.

use boids_core::state::{BoidView, FlockSnapshot};
use boids_core::{Boid, FlockConfig, RuleFlags, SimTime};

/// Build a complete snapshot from the current flock state.
pub fn build_snapshot(
    boids: &[Boid],
    time: &SimTime,
    flags: RuleFlags,
    predator_enabled: bool,
    config: &FlockConfig,
) -> FlockSnapshot {
    FlockSnapshot {
        time: *time,
        flags,
        predator_enabled,
        canvas_width: config.canvas_width,
        canvas_height: config.canvas_height,
        boids: boids.iter().map(BoidView::from).collect(),
    }
}
