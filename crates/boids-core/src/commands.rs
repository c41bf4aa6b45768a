//! Commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Rule;

/// All possible user actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlockCommand {
    // --- Rule toggles ---
    /// Enable or disable cohesion.
    SetCohesion { enabled: bool },
    /// Enable or disable alignment.
    SetAlignment { enabled: bool },
    /// Enable or disable separation.
    SetSeparation { enabled: bool },
    /// Flip a rule, as a button press does.
    ToggleRule { rule: Rule },

    // --- Population ---
    /// Enable or disable click-to-spawn.
    SetPredator { enabled: bool },
    /// A click on the canvas. Adds a boid there if click-to-spawn is on.
    Click { x: f64, y: f64 },
    /// Add a boid regardless of the click-to-spawn setting.
    Spawn { x: f64, y: f64 },
}
