//! tailgunner-headless: run the simulation without a window.
//!
//! A scripted gunner fires at the nearest enemy on a fixed cadence and raises
//! the force field whenever something gets inside it. Prints a JSON summary
//! of the run.
//!
//! Usage:
//!   tailgunner-headless --frames 3600 --seed 7
//!   RUST_LOG=debug tailgunner-headless --config tuning.json --pretty

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use serde::Serialize;

use tailgunner_core::commands::PlayerCommand;
use tailgunner_core::config::TuningConfig;
use tailgunner_core::constants::NOMINAL_FRAME_RATE;
use tailgunner_core::enums::{ForceFieldPhase, GamePhase};
use tailgunner_core::events::AudioEvent;
use tailgunner_core::state::{GameStateSnapshot, ScoreView};
use tailgunner_core::types::{Ray, ViewBasis};
use tailgunner_sim::systems::force_field::in_field_zone;
use tailgunner_sim::{SimConfig, SimulationEngine};

#[derive(Parser, Debug)]
#[command(name = "tailgunner-headless")]
#[command(about = "Run TAILGUNNER headless with a scripted gunner and report the outcome")]
struct Cli {
    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 36_000)]
    frames: u32,
    /// RNG seed for wave generation
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Simulated frame rate
    #[arg(long, default_value_t = NOMINAL_FRAME_RATE as f32)]
    fps: f32,
    /// JSON tuning overrides
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames between shots (0 never fires)
    #[arg(long, default_value_t = 15)]
    fire_every: u32,
    /// Pretty-print the summary
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u32,
    final_phase: GamePhase,
    score: ScoreView,
    force_field_activations: u32,
    bounces: u32,
    extra_lives: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if !(cli.fps.is_finite() && cli.fps > 0.0) {
        anyhow::bail!("--fps must be positive, got {}", cli.fps);
    }

    let tuning = load_tuning(cli.config.as_ref())?;
    let field_radius = tuning.force_field_radius;
    let mut engine = SimulationEngine::new(SimConfig {
        seed: cli.seed,
        tuning,
    })
    .context("invalid tuning")?;

    let dt = 1.0 / cli.fps;
    engine.queue_command(PlayerCommand::StartGame);
    let mut snapshot = engine.tick(dt);
    let mut summary = RunSummary {
        seed: cli.seed,
        frames: 1,
        ..Default::default()
    };
    tally(&mut summary, &snapshot);

    while summary.frames < cli.frames && snapshot.phase == GamePhase::Playing {
        if cli.fire_every > 0 && summary.frames % cli.fire_every == 0 {
            if let Some(target) = nearest_enemy(&snapshot) {
                engine.queue_command(PlayerCommand::Fire {
                    ray: Ray::new(Vec3::ZERO, target.normalize_or_zero()),
                    view: ViewBasis::default(),
                });
            }
        }
        if snapshot.force_field.phase == ForceFieldPhase::Ready
            && snapshot
                .enemies
                .iter()
                .any(|e| in_field_zone(e.position, field_radius))
        {
            engine.queue_command(PlayerCommand::ActivateForceField);
        }

        snapshot = engine.tick(dt);
        summary.frames += 1;
        tally(&mut summary, &snapshot);
    }

    summary.final_phase = snapshot.phase;
    summary.score = snapshot.score.clone();
    log::info!(
        "finished after {} frames: wave {}, score {}, lives {}",
        summary.frames,
        summary.score.wave,
        summary.score.score,
        summary.score.lives
    );

    let json = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}

fn load_tuning(path: Option<&PathBuf>) -> Result<TuningConfig> {
    let Some(path) = path else {
        return Ok(TuningConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading tuning config {}", path.display()))?;
    let tuning = TuningConfig::from_json_str(&text)
        .with_context(|| format!("loading tuning config {}", path.display()))?;
    log::info!("loaded tuning overrides from {}", path.display());
    Ok(tuning)
}

/// Position of the closest active enemy to the gunner.
fn nearest_enemy(snapshot: &GameStateSnapshot) -> Option<Vec3> {
    snapshot
        .enemies
        .iter()
        .map(|e| e.position)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
}

fn tally(summary: &mut RunSummary, snapshot: &GameStateSnapshot) {
    for event in &snapshot.audio_events {
        match event {
            AudioEvent::ForceFieldUp => summary.force_field_activations += 1,
            AudioEvent::ForceFieldBounce => summary.bounces += 1,
            AudioEvent::ExtraLife => summary.extra_lives += 1,
            _ => {}
        }
    }
}
