//! Enemy flight for TAILGUNNER.
//!
//! Cubic Bézier attack paths and the per-enemy flight state machine
//! (approach along the path, retreat when repelled). Pure functions over
//! plain data. No pools, no randomness.

pub mod curve;
pub mod fsm;

pub use curve::BezierPath;
pub use fsm::{FlightOutcome, FlightParams, FlightState};
pub use tailgunner_core as core;
