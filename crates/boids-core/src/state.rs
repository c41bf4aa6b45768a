//! Flock snapshot — the read-only view handed to the renderer each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::{Boid, RuleFlags, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlockSnapshot {
    pub time: SimTime,
    pub flags: RuleFlags,
    pub predator_enabled: bool,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub boids: Vec<BoidView>,
}

/// A single boid as drawn on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoidView {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Heading for the drawn triangle (degrees, 0 = +x).
    pub heading_deg: f64,
}

impl From<&Boid> for BoidView {
    fn from(boid: &Boid) -> Self {
        Self {
            position: boid.position,
            velocity: boid.velocity,
            heading_deg: boid.heading_degrees(),
        }
    }
}

impl FlockSnapshot {
    /// Mean speed over all boids, or 0 for an empty flock.
    pub fn mean_speed(&self) -> f64 {
        if self.boids.is_empty() {
            return 0.0;
        }
        self.boids.iter().map(|b| b.velocity.length()).sum::<f64>() / self.boids.len() as f64
    }
}
