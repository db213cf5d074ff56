//! Enemy flight system: advances every active enemy each frame.
//!
//! Calls the flight FSM from tailgunner-flight and applies its outcome to the
//! pool. Escapes are reported to the caller, which owns the life total.

use tailgunner_core::config::TuningConfig;
use tailgunner_flight::fsm::{self, FlightOutcome, FlightParams};

use crate::entities::EnemyPool;

/// Deactivate every slot and restore default radius, color and flight state.
pub fn reset(pool: &mut EnemyPool) {
    pool.reset_slots();
}

/// Advance all active enemies by one frame. Returns how many reached the
/// player plane (lives lost) this frame.
///
/// Approaching enemies move a fixed, wave-scaled step per frame regardless of
/// `dt`; `dt` only drives the cosmetic spin of repelled enemies. The pool is
/// never repopulated here.
pub fn advance(pool: &mut EnemyPool, current_wave: u32, dt: f32, tuning: &TuningConfig) -> u32 {
    let params = FlightParams::for_wave(current_wave, dt, tuning);
    let mut lives_lost = 0;

    for enemy in pool.slots_mut().iter_mut().filter(|e| e.active) {
        let update = fsm::step(&enemy.flight, &params);
        enemy.flight = update.new_state;

        match update.outcome {
            FlightOutcome::Continue => {}
            FlightOutcome::Escaped => {
                enemy.active = false;
                lives_lost += 1;
            }
            FlightOutcome::Resumed => {
                log::trace!("repelled enemy resumed its approach");
            }
        }
    }

    lives_lost
}
