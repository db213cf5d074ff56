//! Core types and definitions for the TAILGUNNER simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, commands, state snapshots, audio cues, tuning and constants.
//! It has no dependency on any windowing, audio or rendering framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

pub use glam::Vec3;

#[cfg(test)]
mod tests;
