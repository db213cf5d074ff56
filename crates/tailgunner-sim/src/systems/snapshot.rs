//! Snapshot system: reads the pools and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies simulation state.

use tailgunner_core::enums::GamePhase;
use tailgunner_core::events::AudioEvent;
use tailgunner_core::state::*;
use tailgunner_core::types::SimTime;

use crate::entities::{EnemyPool, ForceField, LaserPool};
use crate::scoring::ScoreState;

/// Build a complete GameStateSnapshot from the current simulation state.
pub fn build_snapshot(
    time: &SimTime,
    phase: GamePhase,
    score: &ScoreState,
    enemies: &EnemyPool,
    lasers: &LaserPool,
    force_field: &ForceField,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: score.view(),
        enemies: build_enemies(enemies),
        lasers: build_lasers(lasers),
        force_field: ForceFieldView {
            phase: force_field.phase(),
            charge: force_field.charge(),
        },
        audio_events,
    }
}

fn build_enemies(enemies: &EnemyPool) -> Vec<EnemyView> {
    enemies
        .iter_active()
        .map(|(slot, enemy)| {
            let basis = enemy.orientation();
            EnemyView {
                slot,
                position: enemy.position(),
                forward: basis.forward,
                right: basis.right,
                up: basis.up,
                spin_axis: enemy.spin_axis,
                spin_angle: enemy.spin_angle(),
                color: enemy.color,
                radius: enemy.radius,
                mode: enemy.mode(),
            }
        })
        .collect()
}

fn build_lasers(lasers: &LaserPool) -> Vec<LaserView> {
    lasers
        .beams()
        .iter()
        .filter(|b| b.active)
        .map(|b| LaserView {
            start: b.start,
            end: b.end,
            color: b.color,
            remaining_secs: b.remaining_secs,
        })
        .collect()
}
