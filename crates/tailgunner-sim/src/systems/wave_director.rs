//! Wave director: fills the enemy pool for a new wave.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tailgunner_core::config::TuningConfig;
use tailgunner_flight::curve::BezierPath;
use tailgunner_flight::fsm::FlightState;

use crate::entities::{EnemyPool, ENEMY_COLOR};

/// Populate every slot of `pool` for `wave` (1-based).
///
/// Each slot gets a fresh attack path; later slots start deeper so arrivals
/// are staggered. The trailing slots disabled by the nerf policy for this wave
/// are left inactive.
pub fn populate(pool: &mut EnemyPool, wave: u32, rng: &mut ChaCha8Rng, tuning: &TuningConfig) {
    let capacity = pool.capacity();
    let disabled = tuning.nerf.disabled_slots(wave).min(capacity);
    let enabled = capacity - disabled;

    for (slot, enemy) in pool.slots_mut().iter_mut().enumerate() {
        enemy.path = spawn_path(rng, slot, tuning);
        enemy.flight = FlightState::default();
        enemy.radius = tuning.enemy_radius;
        enemy.color = ENEMY_COLOR;
        enemy.spin_axis = random_axis(rng);
        enemy.active = slot < enabled;
    }

    log::debug!("wave {wave}: {enabled} of {capacity} slots active");
}

/// Build the attack path for `slot`.
///
/// Even slots swing left on the way in and odd slots swing right, crossing
/// back over before the end point.
fn spawn_path(rng: &mut ChaCha8Rng, slot: usize, tuning: &TuningConfig) -> BezierPath {
    let depth = -(tuning.spawn_distance + slot as f32 * tuning.spawn_stagger);
    let side = if slot % 2 == 0 { -1.0 } else { 1.0 };

    let p0 = Vec3::new(
        symmetric(rng, tuning.spawn_lateral_spread),
        symmetric(rng, tuning.spawn_lateral_spread),
        depth,
    );
    let p1 = Vec3::new(
        side * offset(rng, tuning),
        symmetric(rng, tuning.curve_vertical_jitter),
        depth * (2.0 / 3.0),
    );
    let p2 = Vec3::new(
        -side * offset(rng, tuning),
        symmetric(rng, tuning.curve_vertical_jitter),
        depth * (1.0 / 3.0),
    );
    let p3 = Vec3::new(
        symmetric(rng, tuning.end_spread),
        symmetric(rng, tuning.end_spread),
        tuning.end_depth,
    );

    BezierPath::new(p0, p1, p2, p3)
}

/// Uniform in [-extent, extent].
fn symmetric(rng: &mut ChaCha8Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(-extent..=extent)
    } else {
        0.0
    }
}

/// Lateral magnitude of an intermediate control point.
fn offset(rng: &mut ChaCha8Rng, tuning: &TuningConfig) -> f32 {
    if tuning.curve_offset_max > tuning.curve_offset_min {
        rng.gen_range(tuning.curve_offset_min..=tuning.curve_offset_max)
    } else {
        tuning.curve_offset_min
    }
}

fn random_axis(rng: &mut ChaCha8Rng) -> Vec3 {
    let axis = Vec3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
    .normalize_or_zero();
    if axis == Vec3::ZERO {
        Vec3::Y
    } else {
        axis
    }
}
