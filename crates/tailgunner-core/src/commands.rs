//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Ray, ViewBasis};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire both emitters along `ray`, placed using the camera basis.
    Fire { ray: Ray, view: ViewBasis },
    /// Raise the force field (rejected unless it is ready).
    ActivateForceField,
    /// Start a new game from the title or game-over screen.
    StartGame,
    /// Go back to the title screen.
    ReturnToTitle,
}
