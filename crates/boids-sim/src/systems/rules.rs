//! The three steering rules.
//!
//! Each rule maps a boid and its neighbors to a velocity delta. Weights are
//! applied by the caller, not here.

use glam::DVec2;

use boids_core::Boid;

/// Vector from the boid toward the mean position of its neighbors.
pub fn cohesion(boid: &Boid, neighbors: &[Boid]) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let centroid =
        neighbors.iter().map(|n| n.position).sum::<DVec2>() / neighbors.len() as f64;
    centroid - boid.position
}

/// Difference between the neighbors' mean velocity and the boid's own.
pub fn alignment(boid: &Boid, neighbors: &[Boid]) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let mean_velocity =
        neighbors.iter().map(|n| n.velocity).sum::<DVec2>() / neighbors.len() as f64;
    mean_velocity - boid.velocity
}

/// Unit vector pointing away from neighbors closer than `min_distance`.
///
/// Every close neighbor contributes a unit vector away from itself; the sum
/// is normalized. Colocated neighbors are skipped, and a sum that cancels
/// out yields zero.
pub fn separation(boid: &Boid, neighbors: &[Boid], min_distance: f64) -> DVec2 {
    if neighbors.is_empty() {
        return DVec2::ZERO;
    }
    let mut push = DVec2::ZERO;
    for neighbor in neighbors {
        let distance = boid.distance_to(neighbor);
        if distance > 0.0 && distance < min_distance {
            push += (boid.position - neighbor.position) / distance;
        }
    }
    push.normalize_or_zero()
}
