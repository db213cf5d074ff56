//! Enemy flight finite state machine.
//!
//! Pure functions that advance an enemy along its attack path or back toward
//! the path start after a force-field push. No pool dependency; operates on
//! plain data.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tailgunner_core::config::TuningConfig;
use tailgunner_core::enums::FlightMode;
use tailgunner_core::types::ViewBasis;

use crate::curve::BezierPath;

/// Flight state of one enemy. Each variant carries only what that mode needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightState {
    /// Following the attack path; `t` in [0, 1] is progress along it.
    Approach { t: f32 },
    /// Retreating in a straight line from `from` back to the path start.
    Repelled { from: Vec3, r: f32, spin_angle: f32 },
}

/// Per-tick step sizes, resolved once per frame for the current wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParams {
    /// Curve parameter advance this frame (fixed per frame, wave-scaled).
    pub approach_step: f32,
    /// Repel parameter advance this frame.
    pub repel_step: f32,
    /// Spin advance this frame (radians), from real elapsed time.
    pub spin_step: f32,
}

/// What happened to an enemy during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    /// Still flying in the same mode.
    Continue,
    /// Reached the end of the path (the player plane).
    Escaped,
    /// Finished retreating and restarted the approach from the path start.
    Resumed,
}

/// Output of the FSM for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightUpdate {
    pub new_state: FlightState,
    pub outcome: FlightOutcome,
}

impl Default for FlightState {
    fn default() -> Self {
        FlightState::Approach { t: 0.0 }
    }
}

impl FlightState {
    pub fn mode(&self) -> FlightMode {
        match self {
            FlightState::Approach { .. } => FlightMode::Approach,
            FlightState::Repelled { .. } => FlightMode::Repelled,
        }
    }

    /// Cosmetic spin, zero unless repelled.
    pub fn spin_angle(&self) -> f32 {
        match self {
            FlightState::Approach { .. } => 0.0,
            FlightState::Repelled { spin_angle, .. } => *spin_angle,
        }
    }
}

impl FlightParams {
    /// Resolve step sizes for `wave` with `dt` seconds of real time elapsed.
    ///
    /// The approach step ignores `dt`: enemies move a fixed amount per frame.
    pub fn for_wave(wave: u32, dt: f32, tuning: &TuningConfig) -> Self {
        Self {
            approach_step: tuning.approach_step_base + tuning.approach_step_per_wave * wave as f32,
            repel_step: tuning.repel_step,
            spin_step: tuning.repel_spin_rate * dt,
        }
    }
}

/// Advance one enemy by one frame.
pub fn step(state: &FlightState, params: &FlightParams) -> FlightUpdate {
    match *state {
        FlightState::Approach { t } => {
            let t = t + params.approach_step;
            if t >= 1.0 {
                return FlightUpdate {
                    new_state: FlightState::Approach { t: 1.0 },
                    outcome: FlightOutcome::Escaped,
                };
            }
            FlightUpdate {
                new_state: FlightState::Approach { t },
                outcome: FlightOutcome::Continue,
            }
        }
        FlightState::Repelled {
            from,
            r,
            spin_angle,
        } => {
            let r = r + params.repel_step;
            if r >= 1.0 {
                return FlightUpdate {
                    new_state: FlightState::Approach { t: 0.0 },
                    outcome: FlightOutcome::Resumed,
                };
            }
            FlightUpdate {
                new_state: FlightState::Repelled {
                    from,
                    r,
                    spin_angle: spin_angle + params.spin_step,
                },
                outcome: FlightOutcome::Continue,
            }
        }
    }
}

/// Switch an approaching enemy at `position` into the repelled state.
///
/// Returns `None` if the enemy is already repelled.
pub fn repel(state: &FlightState, position: Vec3) -> Option<FlightState> {
    match state {
        FlightState::Approach { .. } => Some(FlightState::Repelled {
            from: position,
            r: 0.0,
            spin_angle: 0.0,
        }),
        FlightState::Repelled { .. } => None,
    }
}

/// Position implied by `state` on `path`.
pub fn position(path: &BezierPath, state: &FlightState) -> Vec3 {
    match *state {
        FlightState::Approach { t } => path.point(t),
        FlightState::Repelled { from, r, .. } => from + (path.start() - from) * r.min(1.0),
    }
}

/// Direction the ship's nose points.
///
/// Approaching ships face along the path; repelled ships face the path start.
/// Degenerate directions fall back to the start tangent, then to "away from
/// the origin", then to +Z.
pub fn forward(path: &BezierPath, state: &FlightState) -> Vec3 {
    let here = position(path, state);
    let away = here.normalize_or_zero();
    let away = if away == Vec3::ZERO { Vec3::Z } else { away };

    match *state {
        FlightState::Approach { t } => path.tangent_or(t, away),
        FlightState::Repelled { .. } => {
            let to_start = (path.start() - here).normalize_or_zero();
            if to_start == Vec3::ZERO {
                path.tangent_or(0.0, away)
            } else {
                to_start
            }
        }
    }
}

/// Full orientation basis for rendering.
pub fn orientation(path: &BezierPath, state: &FlightState) -> ViewBasis {
    ViewBasis::from_forward(forward(path, state), Vec3::Y)
}
