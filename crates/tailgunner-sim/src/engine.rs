//! Simulation engine for TAILGUNNER.
//!
//! `SimulationEngine` owns the entity pools, processes player commands, runs
//! all systems in a fixed order, and produces `GameStateSnapshot`s. Completely
//! headless (no window, audio or renderer), enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tailgunner_core::commands::PlayerCommand;
use tailgunner_core::config::{ConfigError, TuningConfig};
use tailgunner_core::enums::GamePhase;
use tailgunner_core::events::AudioEvent;
use tailgunner_core::state::GameStateSnapshot;
use tailgunner_core::types::{Ray, SimTime, ViewBasis};

use crate::entities::{EnemyPool, ForceField, LaserPool};
use crate::scoring::ScoreState;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same waves.
    pub seed: u64,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: TuningConfig::default(),
        }
    }
}

/// The simulation engine. Owns the pools and all sim state.
pub struct SimulationEngine {
    tuning: TuningConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    audio_events: Vec<AudioEvent>,

    enemies: EnemyPool,
    lasers: LaserPool,
    force_field: ForceField,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Fails if the tuning does not pass [`TuningConfig::validate`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let tuning = config.tuning;
        tuning.validate()?;
        Ok(Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            audio_events: Vec::new(),
            enemies: EnemyPool::new(tuning.enemy_pool_capacity, tuning.enemy_radius),
            lasers: LaserPool::new(tuning.laser_pool_capacity),
            force_field: ForceField::new(
                tuning.force_field_active_secs,
                tuning.force_field_timeout_secs,
                tuning.force_field_radius,
            ),
            score: ScoreState::default(),
            tuning,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            &self.score,
            &self.enemies,
            &self.lasers,
            &self.force_field,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn enemies(&self) -> &EnemyPool {
        &self.enemies
    }

    pub fn lasers(&self) -> &LaserPool {
        &self.lasers
    }

    pub fn force_field(&self) -> &ForceField {
        &self.force_field
    }

    /// Mutable pool access for tests that need to stage enemies.
    #[cfg(test)]
    pub fn enemies_mut(&mut self) -> &mut EnemyPool {
        &mut self.enemies
    }

    /// Mutable score access for tests.
    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Title | GamePhase::GameOver) {
                    self.start_game();
                }
            }
            PlayerCommand::ReturnToTitle => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::Title;
                }
            }
            PlayerCommand::Fire { ray, view } => {
                if self.phase == GamePhase::Playing {
                    self.fire(&ray, &view);
                }
            }
            PlayerCommand::ActivateForceField => {
                if self.phase == GamePhase::Playing {
                    if systems::force_field::activate(&mut self.force_field) {
                        self.audio_events.push(AudioEvent::ForceFieldUp);
                    } else {
                        self.audio_events.push(AudioEvent::ForceFieldDenied);
                    }
                }
            }
        }
    }

    /// Reset every pool and spawn wave 1.
    fn start_game(&mut self) {
        self.score = ScoreState::new_game(self.tuning.starting_lives);
        self.time = SimTime::default();
        self.lasers.clear();
        self.force_field.reset();
        systems::enemy::reset(&mut self.enemies);
        systems::wave_director::populate(
            &mut self.enemies,
            self.score.wave,
            &mut self.rng,
            &self.tuning,
        );
        self.phase = GamePhase::Playing;
        self.audio_events.push(AudioEvent::WaveStarted {
            wave: self.score.wave,
        });
        log::info!("game started with {} lives", self.score.lives);
    }

    fn fire(&mut self, ray: &Ray, view: &ViewBasis) {
        let hits = systems::weapon::fire(
            &mut self.lasers,
            &mut self.enemies,
            ray,
            view,
            &self.tuning,
        );
        self.audio_events.push(AudioEvent::Shot);
        if hits > 0 {
            self.audio_events.push(AudioEvent::Explosion { hits });
        }

        let extra_lives = self
            .score
            .record_shot(hits, self.tuning.points_per_extra_life);
        for _ in 0..extra_lives {
            self.audio_events.push(AudioEvent::ExtraLife);
        }
        if extra_lives > 0 {
            log::info!("extra life at {} points", self.score.score);
        }
    }

    /// Run all per-frame systems in order. Shots were already resolved while
    /// processing commands, so they see this frame's pool before enemies move.
    fn run_systems(&mut self, dt: f32) {
        // 1. Beam lifetimes
        systems::weapon::tick(&mut self.lasers, dt);

        // 2. Enemy flight
        let lives_lost =
            systems::enemy::advance(&mut self.enemies, self.score.wave, dt, &self.tuning);

        // 3. Force field, on this frame's fresh positions
        if systems::force_field::tick(&mut self.force_field, &mut self.enemies, dt) {
            self.audio_events.push(AudioEvent::ForceFieldBounce);
        }

        // 4. Lives
        if lives_lost > 0 {
            self.score.record_escapes(lives_lost);
            self.audio_events.push(AudioEvent::LifeLost { lives_lost });
        }
        if self.score.is_out_of_lives() {
            self.phase = GamePhase::GameOver;
            self.audio_events.push(AudioEvent::GameOver {
                score: self.score.score,
            });
            log::info!(
                "game over on wave {} with score {}",
                self.score.wave,
                self.score.score
            );
            return;
        }

        // 5. Next wave once the pool is empty
        if self.enemies.active_count() == 0 {
            self.score.wave += 1;
            systems::wave_director::populate(
                &mut self.enemies,
                self.score.wave,
                &mut self.rng,
                &self.tuning,
            );
            self.audio_events.push(AudioEvent::WaveStarted {
                wave: self.score.wave,
            });
            log::info!("wave {} started", self.score.wave);
        }
    }
}
