//! Fundamental geometric and simulation types.
//!
//! World axes: x = right, y = up, z = toward the viewer. The player sits at
//! the origin looking down -Z, so incoming enemies have negative z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A firing ray. `direction` is expected to be normalized but consumers
/// re-normalize it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Camera orientation used to place the beam emitters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBasis {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// 8-bit RGBA render color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated while playing.
    pub frame: u64,
    /// Elapsed real time in seconds while playing.
    pub elapsed_secs: f64,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at `distance` along the ray.
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

impl ViewBasis {
    /// Build an orthonormal basis looking along `forward`.
    ///
    /// Falls back to the default -Z basis when `forward` is degenerate, and to
    /// world X as right when `forward` is parallel to `world_up`.
    pub fn from_forward(forward: Vec3, world_up: Vec3) -> Self {
        let forward = forward.normalize_or_zero();
        if forward == Vec3::ZERO {
            return Self::default();
        }
        let mut right = forward.cross(world_up).normalize_or_zero();
        if right == Vec3::ZERO {
            right = Vec3::X;
        }
        let up = right.cross(forward).normalize_or_zero();
        Self { forward, right, up }
    }
}

impl Default for ViewBasis {
    /// Camera at the origin looking down -Z with +Y up.
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);
    pub const RED: Color = Color::rgba(230, 41, 55, 255);
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt as f64;
    }
}
