//! Agent integration: steering, boundary avoidance, speed clamp, Euler step.

use glam::DVec2;

use boids_core::{Boid, FlockConfig, RuleFlags};

use super::rules;

/// Advance one boid by one tick.
///
/// Order: weighted rule deltas, boundary avoidance, speed clamp, then
/// `position += velocity`. The clamp runs last on velocity so the speed
/// bound holds whenever this returns.
pub fn integrate(boid: &mut Boid, neighbors: &[Boid], flags: RuleFlags, config: &FlockConfig) {
    boid.velocity += steering(boid, neighbors, flags, config);
    avoid_edges(boid, config);
    clamp_speed(boid, config.max_speed);
    boid.position += boid.velocity;
}

/// Sum of the enabled rules' weighted deltas.
///
/// All three deltas are computed from the same pre-update boid, so turning
/// one rule off never changes the other two contributions.
pub fn steering(boid: &Boid, neighbors: &[Boid], flags: RuleFlags, config: &FlockConfig) -> DVec2 {
    let weights = &config.weights;
    let mut delta = DVec2::ZERO;
    if flags.cohesion {
        delta += rules::cohesion(boid, neighbors) * weights.cohesion;
    }
    if flags.alignment {
        delta += rules::alignment(boid, neighbors) * weights.alignment;
    }
    if flags.separation {
        delta += rules::separation(boid, neighbors, config.min_separation) * weights.separation;
    }
    delta
}

/// Nudge velocity away from any canvas edge the boid is within the margin of.
/// The four edges are checked independently.
pub fn avoid_edges(boid: &mut Boid, config: &FlockConfig) {
    let margin = config.boundary_margin;
    let turn = config.turn_factor;
    let pos = boid.position;

    if pos.x < margin {
        boid.velocity.x += turn;
    }
    if pos.x > config.canvas_width - margin {
        boid.velocity.x -= turn;
    }
    if pos.y < margin {
        boid.velocity.y += turn;
    }
    if pos.y > config.canvas_height - margin {
        boid.velocity.y -= turn;
    }
}

/// Rescale velocity to `max_speed` if it is faster, keeping its heading.
pub fn clamp_speed(boid: &mut Boid, max_speed: f64) {
    let speed = boid.speed();
    if speed > max_speed {
        boid.velocity *= max_speed / speed;
    }
}
