//! Core types and definitions for the boids flocking simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! the boid record, configuration, commands, snapshots and constants.
//! It carries no engine logic.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

pub use config::FlockConfig;
pub use error::FlockError;
pub use types::{Boid, RuleFlags, SimTime};

#[cfg(test)]
mod tests;
