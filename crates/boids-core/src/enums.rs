//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the three local steering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Steer toward the neighborhood centroid.
    Cohesion,
    /// Match the neighborhood's average velocity.
    Alignment,
    /// Steer away from neighbors that are too close.
    Separation,
}

/// How agent updates within a single tick observe each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOrder {
    /// Each boid is updated immediately; later boids in the same tick see
    /// the already-moved earlier boids.
    #[default]
    InPlace,
    /// Every boid reads the pre-tick population; new states are committed
    /// together at the end of the tick.
    Snapshot,
}

/// Neighbor discovery strategy. Both return the same neighbor sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborStrategy {
    /// Linear scan of the whole population per boid.
    #[default]
    BruteForce,
    /// Uniform grid with cells one visual range wide.
    UniformGrid,
}
