//! Game state snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Color, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: ScoreView,
    /// Active enemies only, ordered by pool slot.
    pub enemies: Vec<EnemyView>,
    /// Active beams only.
    pub lasers: Vec<LaserView>,
    pub force_field: ForceFieldView,
    pub audio_events: Vec<AudioEvent>,
}

/// A visible enemy ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Pool slot index.
    pub slot: usize,
    pub position: Vec3,
    /// Orientation basis for the ship mesh.
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    /// Cosmetic roll around `spin_axis` (radians), non-zero only while repelled.
    pub spin_axis: Vec3,
    pub spin_angle: f32,
    pub color: Color,
    pub radius: f32,
    pub mode: FlightMode,
}

/// A visible laser beam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaserView {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Color,
    /// Remaining lifetime (seconds), for fading.
    pub remaining_secs: f32,
}

/// Force field HUD state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForceFieldView {
    pub phase: ForceFieldPhase,
    /// Readiness in [0, 1].
    pub charge: f32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub lives: u32,
    pub wave: u32,
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub shots_fired: u32,
}

impl Default for ForceFieldView {
    fn default() -> Self {
        Self {
            phase: ForceFieldPhase::Ready,
            charge: 1.0,
        }
    }
}
