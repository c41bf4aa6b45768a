//! Error types for configuration and population management.

use thiserror::Error;

/// Errors raised by the flock engine.
///
/// Ticking never fails; these only surface at construction time or when a
/// spawn would exceed a configured population cap.
#[derive(Debug, Error, PartialEq)]
pub enum FlockError {
    /// A configuration value cannot be used (e.g., negative visual range).
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The population already holds the configured maximum number of boids.
    #[error("population cap of {cap} boids reached")]
    PopulationCap { cap: usize },
}
