//! Flocking engine for the boids simulation.
//!
//! Owns the population, runs the neighbor query, steering rules and
//! integration once per tick, and produces `FlockSnapshot`s for the renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use boids_core as core;
pub use engine::FlockEngine;
