//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Rule;

/// A single flocking agent: a position and a velocity on the canvas.
///
/// Velocity is in canvas units per tick. Position is unconstrained; boundary
/// avoidance steers boids back but never clamps them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Boid {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
        }
    }

    /// Euclidean distance to another boid.
    pub fn distance_to(&self, other: &Boid) -> f64 {
        self.position.distance(other.position)
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Heading in degrees, measured from +x toward +y, in (-180, 180].
    pub fn heading_degrees(&self) -> f64 {
        self.velocity.y.atan2(self.velocity.x).to_degrees()
    }
}

/// Which steering rules are currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFlags {
    pub cohesion: bool,
    pub alignment: bool,
    pub separation: bool,
}

impl Default for RuleFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl RuleFlags {
    /// All three rules enabled.
    pub fn all() -> Self {
        Self {
            cohesion: true,
            alignment: true,
            separation: true,
        }
    }

    /// All three rules disabled.
    pub fn none() -> Self {
        Self {
            cohesion: false,
            alignment: false,
            separation: false,
        }
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::Cohesion => self.cohesion,
            Rule::Alignment => self.alignment,
            Rule::Separation => self.separation,
        }
    }

    pub fn set(&mut self, rule: Rule, enabled: bool) {
        match rule {
            Rule::Cohesion => self.cohesion = enabled,
            Rule::Alignment => self.alignment = enabled,
            Rule::Separation => self.separation = enabled,
        }
    }

    /// Flip a rule and return its new state.
    pub fn toggle(&mut self, rule: Rule) -> bool {
        let enabled = !self.is_enabled(rule);
        self.set(rule, enabled);
        enabled
    }
}

/// Simulation time tracking. One tick is one unit of simulated time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each step).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
