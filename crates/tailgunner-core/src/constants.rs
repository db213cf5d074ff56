//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::TuningConfig`].

use std::f32::consts::TAU;

/// Nominal frame rate the per-frame steps were balanced for (Hz).
pub const NOMINAL_FRAME_RATE: u32 = 60;

// --- Player ---

/// Lives at the start of a game.
pub const STARTING_LIVES: u32 = 3;

/// Score interval that awards an extra life.
pub const POINTS_PER_EXTRA_LIFE: u32 = 50;

// --- Enemy pool ---

/// Number of enemy slots; also the wave size.
pub const ENEMY_POOL_CAPACITY: usize = 5;

/// Collision radius of a freshly reset enemy.
pub const ENEMY_DEFAULT_RADIUS: f32 = 1.0;

// --- Enemy flight ---

/// Curve parameter advance per frame, independent of wave.
/// Applied per frame, not per second.
pub const APPROACH_STEP_BASE: f32 = 0.002;

/// Additional curve parameter advance per frame for each wave number.
pub const APPROACH_STEP_PER_WAVE: f32 = 0.0002;

/// Repel parameter advance per frame.
pub const REPEL_STEP: f32 = 0.02;

/// Spin rate of a repelled enemy (radians per second).
pub const REPEL_SPIN_RATE: f32 = 2.0 * TAU;

/// Derivative magnitude below which a curve tangent is treated as degenerate.
pub const TANGENT_EPSILON: f32 = 1e-6;

// --- Wave spawning ---

/// Depth of the first slot's start point (distance down -Z).
pub const SPAWN_DISTANCE: f32 = 100.0;

/// Extra depth per slot index, staggering arrivals.
pub const SPAWN_STAGGER: f32 = 10.0;

/// Max lateral (x and y) offset of a start point.
pub const SPAWN_LATERAL_SPREAD: f32 = 20.0;

/// Lateral offset range of the intermediate control points.
pub const CURVE_OFFSET_MIN: f32 = 5.0;
pub const CURVE_OFFSET_MAX: f32 = 15.0;

/// Vertical jitter of the intermediate control points.
pub const CURVE_VERTICAL_JITTER: f32 = 5.0;

/// Max lateral offset of the end point.
pub const END_SPREAD: f32 = 2.0;

/// Depth of the end point, just in front of the player plane.
pub const END_DEPTH: f32 = -1.0;

/// Waves up to and including this number spawn with the heavy nerf.
pub const NERF_HEAVY_UNTIL_WAVE: u32 = 3;

/// Slots disabled under the heavy nerf.
pub const NERF_HEAVY_DISABLED_SLOTS: usize = 2;

/// Waves up to and including this number (after the heavy range) spawn with the light nerf.
pub const NERF_LIGHT_UNTIL_WAVE: u32 = 7;

/// Slots disabled under the light nerf.
pub const NERF_LIGHT_DISABLED_SLOTS: usize = 1;

// --- Weapon ---

/// Beam slots; two emitters give the stereo look.
pub const LASER_POOL_CAPACITY: usize = 2;

/// Beam lifetime (seconds).
pub const LASER_LIFETIME_SECS: f32 = 0.2;

/// Beam start offset along the view forward (keeps it off the near plane).
pub const LASER_START_FORWARD_OFFSET: f32 = 0.5;

/// Beam start offset along the view right, alternating sign per slot.
pub const LASER_START_HORIZONTAL_OFFSET: f32 = 1.0;

/// Beam start offset down the view up vector.
pub const LASER_START_VERTICAL_OFFSET: f32 = 1.0;

/// Hit-test radius multiplier over the collision radius.
pub const HIT_RADIUS_MARGIN: f32 = 1.2;

/// Length of a beam that hits nothing.
pub const LASER_MISS_DISTANCE: f32 = 100.0;

// --- Force field ---

/// Time the field stays up once activated (seconds).
pub const FORCE_FIELD_ACTIVE_SECS: f32 = 1.0;

/// Recharge time after the field drops (seconds).
pub const FORCE_FIELD_TIMEOUT_SECS: f32 = 10.0;

/// Depth in front of the player plane covered by the field.
pub const FORCE_FIELD_RADIUS: f32 = 10.0;
