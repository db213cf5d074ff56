//! Force field system: activation and the READY → ACTIVE → COOLDOWN timer.
//!
//! While up, the field pushes approaching enemies near the player back toward
//! their spawn points.

use glam::Vec3;

use tailgunner_flight::fsm;

use crate::entities::{EnemyPool, ForceField, ForceFieldState};

/// Raise the field. Returns `false` (and changes nothing) unless it is ready.
pub fn activate(field: &mut ForceField) -> bool {
    match field.state {
        ForceFieldState::Ready => {
            field.state = ForceFieldState::Active {
                remaining: field.active_secs,
            };
            log::debug!("force field up for {:.1}s", field.active_secs);
            true
        }
        ForceFieldState::Active { .. } | ForceFieldState::Cooldown { .. } => {
            log::debug!("force field activation rejected in {:?}", field.phase());
            false
        }
    }
}

/// Advance the field timers by `dt` seconds. Returns whether any enemy was
/// repelled this frame.
///
/// Enemies are pushed on every frame the field was up at the start of the
/// tick, including the frame it drops.
pub fn tick(field: &mut ForceField, enemies: &mut EnemyPool, dt: f32) -> bool {
    match field.state {
        ForceFieldState::Ready => false,
        ForceFieldState::Active { remaining } => {
            let remaining = remaining - dt;
            field.state = if remaining <= 0.0 {
                log::debug!("force field down, recharging for {:.1}s", field.timeout_secs);
                ForceFieldState::Cooldown {
                    remaining: field.timeout_secs,
                }
            } else {
                ForceFieldState::Active { remaining }
            };
            repel_enemies(enemies, field.radius) > 0
        }
        ForceFieldState::Cooldown { remaining } => {
            let remaining = remaining - dt;
            field.state = if remaining <= 0.0 {
                log::debug!("force field ready");
                ForceFieldState::Ready
            } else {
                ForceFieldState::Cooldown { remaining }
            };
            false
        }
    }
}

/// Whether `position` is inside the field: in front of the player (the camera
/// looks down -Z) and within `radius` of the player plane.
pub fn in_field_zone(position: Vec3, radius: f32) -> bool {
    position.z < 0.0 && -position.z < radius
}

/// Switch every approaching enemy inside the field to the repelled state.
/// Enemies already retreating keep their current retreat.
fn repel_enemies(enemies: &mut EnemyPool, radius: f32) -> usize {
    let mut repelled = 0;
    for enemy in enemies.slots_mut().iter_mut().filter(|e| e.active) {
        let position = enemy.position();
        if !in_field_zone(position, radius) {
            continue;
        }
        if let Some(state) = fsm::repel(&enemy.flight, position) {
            enemy.flight = state;
            repelled += 1;
        }
    }
    repelled
}
