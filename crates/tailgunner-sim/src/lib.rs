//! Simulation engine for TAILGUNNER.
//!
//! Owns the enemy, laser and force-field state, runs systems once per frame
//! in a fixed order, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod entities;
pub mod scoring;
pub mod systems;

pub use engine::{SimConfig, SimulationEngine};
pub use tailgunner_core as core;
