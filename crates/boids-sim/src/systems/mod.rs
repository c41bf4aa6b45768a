//! Per-tick systems operating on the population.
//!
//! Systems are free functions over `&[Boid]` / `&mut Boid`. They own no
//! state; everything lives in the engine.

pub mod integrate;
pub mod neighbors;
pub mod rules;
pub mod snapshot;
