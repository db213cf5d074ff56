//! Events emitted by the simulation for audio feedback.
//!
//! The core never plays sounds; the frontend drains these cues from each
//! snapshot and decides what to play.

use serde::{Deserialize, Serialize};

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// The weapon fired (hit or miss).
    Shot,
    /// A shot destroyed enemies.
    Explosion { hits: u32 },
    /// Force field went up.
    ForceFieldUp,
    /// Force field activation rejected (active or recharging).
    ForceFieldDenied,
    /// The field pushed at least one enemy back this frame.
    ForceFieldBounce,
    /// Enemies reached the player plane.
    LifeLost { lives_lost: u32 },
    /// Score crossed an extra-life threshold.
    ExtraLife,
    /// A new wave was populated.
    WaveStarted { wave: u32 },
    /// Lives ran out.
    GameOver { score: u32 },
}
