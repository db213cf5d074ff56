//! Systems that operate on the simulation pools each frame.
//!
//! Systems are free functions that take the pools they touch as explicit
//! `&mut` arguments. They do not own state; all state lives in the pools.

pub mod enemy;
pub mod force_field;
pub mod snapshot;
pub mod wave_director;
pub mod weapon;
