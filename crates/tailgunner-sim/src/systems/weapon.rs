//! Weapon system: resolves a shot against the enemy pool and lays down beams.

use glam::Vec3;

use tailgunner_core::config::TuningConfig;
use tailgunner_core::types::{Ray, ViewBasis};

use crate::entities::{EnemyPool, LaserBeam, LaserPool};

/// Fire along `ray`. Returns the number of enemies destroyed (0 or 1).
///
/// Only the closest enemy whose (slightly inflated) sphere the ray crosses is
/// destroyed; ties keep the lower slot. Every beam slot is rewritten to end at
/// the hit enemy, or far down the ray on a miss.
pub fn fire(
    lasers: &mut LaserPool,
    enemies: &mut EnemyPool,
    ray: &Ray,
    view: &ViewBasis,
    tuning: &TuningConfig,
) -> u32 {
    let shot = Ray::new(ray.origin, aim_direction(ray, view));

    let mut closest: Option<(usize, f32)> = None;
    for (slot, enemy) in enemies.iter_active() {
        let hit_radius = enemy.radius * tuning.hit_radius_margin;
        if let Some(distance) = ray_sphere(&shot, enemy.position(), hit_radius) {
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((slot, distance));
            }
        }
    }

    let (end, hits) = match closest {
        Some((slot, distance)) => {
            let enemy = &mut enemies.slots_mut()[slot];
            enemy.active = false;
            log::trace!("shot hit slot {slot} at {distance:.2}");
            (enemy.position(), 1)
        }
        None => (shot.point_at(tuning.laser_miss_distance), 0),
    };

    let mut written = 0;
    for (slot, beam) in lasers.beams_mut().iter_mut().enumerate() {
        *beam = LaserBeam::fired(
            emitter_origin(ray.origin, view, slot, tuning),
            end,
            tuning.laser_lifetime_secs,
        );
        written += 1;
    }
    if written == 0 {
        lasers.overwrite_first(LaserBeam::fired(
            emitter_origin(ray.origin, view, 0, tuning),
            end,
            tuning.laser_lifetime_secs,
        ));
    }

    hits
}

/// Age active beams by `dt` seconds and retire expired ones.
pub fn tick(lasers: &mut LaserPool, dt: f32) {
    for beam in lasers.beams_mut().iter_mut().filter(|b| b.active) {
        beam.remaining_secs -= dt;
        if beam.remaining_secs <= 0.0 {
            beam.active = false;
        }
    }
}

/// Distance along `ray` to the first point on the sphere, if any.
///
/// `ray.direction` must be unit length. A ray starting inside the sphere
/// reports the exit point; spheres entirely behind the origin are missed.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Normalized shot direction, falling back to the view forward, then -Z.
fn aim_direction(ray: &Ray, view: &ViewBasis) -> Vec3 {
    let direction = ray.direction.normalize_or_zero();
    if direction != Vec3::ZERO {
        return direction;
    }
    let forward = view.forward.normalize_or_zero();
    if forward != Vec3::ZERO {
        forward
    } else {
        Vec3::NEG_Z
    }
}

/// Beam start for `slot`: pushed forward past the near plane, alternating
/// left/right and dropped below the line of sight.
fn emitter_origin(origin: Vec3, view: &ViewBasis, slot: usize, tuning: &TuningConfig) -> Vec3 {
    let side = if slot % 2 == 0 { -1.0 } else { 1.0 };
    origin + view.forward * tuning.laser_forward_offset + view.right * (side * tuning.laser_horizontal_offset)
        - view.up * tuning.laser_vertical_offset
}
