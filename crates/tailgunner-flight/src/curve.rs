//! Cubic Bézier curve evaluation.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tailgunner_core::constants::TANGENT_EPSILON;

/// Four control points of a cubic attack path. `p0` is the spawn point,
/// `p3` the point at the player plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

#[inline]
fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Point on the curve at `t` (De Casteljau).
///
/// Returns `p0` and `p3` exactly at the endpoints, and a coincident set of
/// control points always yields that point. Defined for any real `t`.
pub fn evaluate_position(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    if t == 0.0 {
        return p0;
    }
    if t == 1.0 {
        return p3;
    }

    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    let c = lerp(p2, p3, t);
    let d = lerp(a, b, t);
    let e = lerp(b, c, t);
    lerp(d, e, t)
}

/// Unnormalized derivative of the curve at `t`.
fn derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    3.0 * u * u * (p1 - p0) + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Unit tangent at `t`, or `Vec3::ZERO` when the derivative is shorter than
/// [`TANGENT_EPSILON`].
pub fn evaluate_tangent(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    evaluate_tangent_or(p0, p1, p2, p3, t, Vec3::ZERO)
}

/// Unit tangent at `t`, or `fallback` when the derivative is degenerate.
pub fn evaluate_tangent_or(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    t: f32,
    fallback: Vec3,
) -> Vec3 {
    let d = derivative(p0, p1, p2, p3, t);
    let len = d.length();
    if !len.is_finite() || len < TANGENT_EPSILON {
        return fallback;
    }
    d / len
}

impl BezierPath {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Degenerate path that sits at a single point.
    pub fn fixed(point: Vec3) -> Self {
        Self::new(point, point, point, point)
    }

    pub fn point(&self, t: f32) -> Vec3 {
        evaluate_position(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn tangent(&self, t: f32) -> Vec3 {
        evaluate_tangent(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn tangent_or(&self, t: f32, fallback: Vec3) -> Vec3 {
        evaluate_tangent_or(self.p0, self.p1, self.p2, self.p3, t, fallback)
    }

    pub fn start(&self) -> Vec3 {
        self.p0
    }
}
