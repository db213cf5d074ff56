//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the player to start.
    #[default]
    Title,
    Playing,
    /// Out of lives; final score is frozen.
    GameOver,
}

/// Force field state as seen by the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceFieldPhase {
    #[default]
    Ready,
    Active,
    Cooldown,
}

/// Enemy flight mode as seen by renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    /// Following the attack curve toward the player.
    #[default]
    Approach,
    /// Pushed back by the force field, retreating to the curve start.
    Repelled,
}
