//! Boid spawn factories: the initial population and on-demand spawns.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use boids_core::{Boid, FlockConfig};

/// Seed `config.population` boids at random whole-unit positions on the
/// canvas with random velocities.
pub fn seed_population(rng: &mut ChaCha8Rng, config: &FlockConfig) -> Vec<Boid> {
    let max_x = config.canvas_width as i64;
    let max_y = config.canvas_height as i64;
    (0..config.population)
        .map(|_| {
            let x = rng.gen_range(0..=max_x) as f64;
            let y = rng.gen_range(0..=max_y) as f64;
            Boid {
                position: DVec2::new(x, y),
                velocity: random_velocity(rng, config.spawn_velocity_range),
            }
        })
        .collect()
}

/// Velocity with each component uniform in `[-range, range]`.
pub fn random_velocity(rng: &mut ChaCha8Rng, range: f64) -> DVec2 {
    DVec2::new(
        rng.gen_range(-range..=range),
        rng.gen_range(-range..=range),
    )
}

/// Append a boid at `(x, y)` with a random velocity. Returns its index.
pub fn spawn_boid(
    boids: &mut Vec<Boid>,
    rng: &mut ChaCha8Rng,
    x: f64,
    y: f64,
    velocity_range: f64,
) -> usize {
    let velocity = random_velocity(rng, velocity_range);
    boids.push(Boid {
        position: DVec2::new(x, y),
        velocity,
    });
    boids.len() - 1
}
