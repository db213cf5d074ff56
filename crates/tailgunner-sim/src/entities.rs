//! Entity pools and singleton state owned by `SimulationEngine`.
//!
//! Pools are fixed-size: slots are reused by index and retired by clearing
//! their `active` flag, never removed.

use glam::Vec3;

use tailgunner_core::enums::{FlightMode, ForceFieldPhase};
use tailgunner_core::types::{Color, ViewBasis};
use tailgunner_flight::curve::BezierPath;
use tailgunner_flight::fsm::{self, FlightState};

/// Render color of a freshly spawned enemy.
pub const ENEMY_COLOR: Color = Color::BLUE;

/// Render color of a laser beam.
pub const LASER_COLOR: Color = Color::RED;

/// One attacking ship.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub active: bool,
    /// Collision radius.
    pub radius: f32,
    pub color: Color,
    /// Attack path, fixed for the lifetime of a spawn.
    pub path: BezierPath,
    pub flight: FlightState,
    /// Cosmetic roll axis used while repelled.
    pub spin_axis: Vec3,
}

/// Fixed-capacity enemy pool. Its capacity is the wave size.
#[derive(Debug, Clone)]
pub struct EnemyPool {
    slots: Vec<Enemy>,
    default_radius: f32,
}

/// A transient, cosmetic laser beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserBeam {
    pub start: Vec3,
    pub end: Vec3,
    pub active: bool,
    /// Seconds until the beam disappears.
    pub remaining_secs: f32,
    pub color: Color,
}

/// Beam slots. One shot writes every slot.
#[derive(Debug, Clone)]
pub struct LaserPool {
    beams: Vec<LaserBeam>,
}

/// Force field timer state. Timers count down in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceFieldState {
    Ready,
    Active { remaining: f32 },
    Cooldown { remaining: f32 },
}

/// The player's area-effect defense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceField {
    pub state: ForceFieldState,
    /// How long the field stays up.
    pub active_secs: f32,
    /// Recharge time after it drops.
    pub timeout_secs: f32,
    /// Depth in front of the player plane that the field covers.
    pub radius: f32,
}

impl Enemy {
    fn idle(radius: f32) -> Self {
        Self {
            active: false,
            radius,
            color: ENEMY_COLOR,
            path: BezierPath::default(),
            flight: FlightState::default(),
            spin_axis: Vec3::Y,
        }
    }

    /// Current position, derived from the path and flight state.
    pub fn position(&self) -> Vec3 {
        fsm::position(&self.path, &self.flight)
    }

    pub fn forward(&self) -> Vec3 {
        fsm::forward(&self.path, &self.flight)
    }

    pub fn orientation(&self) -> ViewBasis {
        fsm::orientation(&self.path, &self.flight)
    }

    pub fn mode(&self) -> FlightMode {
        self.flight.mode()
    }

    pub fn spin_angle(&self) -> f32 {
        self.flight.spin_angle()
    }
}

impl EnemyPool {
    pub fn new(capacity: usize, default_radius: f32) -> Self {
        Self {
            slots: vec![Enemy::idle(default_radius); capacity],
            default_radius,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn default_radius(&self) -> f32 {
        self.default_radius
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Enemy] {
        &mut self.slots
    }

    /// Active enemies with their slot index.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.slots.iter().enumerate().filter(|(_, e)| e.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|e| e.active).count()
    }

    /// Return every slot to its idle default.
    pub(crate) fn reset_slots(&mut self) {
        let radius = self.default_radius;
        for enemy in &mut self.slots {
            *enemy = Enemy::idle(radius);
        }
    }
}

impl LaserBeam {
    pub(crate) fn fired(start: Vec3, end: Vec3, lifetime_secs: f32) -> Self {
        Self {
            start,
            end,
            active: true,
            remaining_secs: lifetime_secs,
            color: LASER_COLOR,
        }
    }
}

impl Default for LaserBeam {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            end: Vec3::ZERO,
            active: false,
            remaining_secs: 0.0,
            color: LASER_COLOR,
        }
    }
}

impl LaserPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            beams: vec![LaserBeam::default(); capacity],
        }
    }

    pub fn beams(&self) -> &[LaserBeam] {
        &self.beams
    }

    pub(crate) fn beams_mut(&mut self) -> &mut [LaserBeam] {
        &mut self.beams
    }

    /// Put `beam` in slot zero. A pool built with no slots gains exactly one
    /// here and keeps it, so later shots are written normally.
    pub(crate) fn overwrite_first(&mut self, beam: LaserBeam) {
        match self.beams.first_mut() {
            Some(slot) => *slot = beam,
            None => self.beams.push(beam),
        }
    }

    pub fn active_count(&self) -> usize {
        self.beams.iter().filter(|b| b.active).count()
    }

    pub fn clear(&mut self) {
        for beam in &mut self.beams {
            *beam = LaserBeam::default();
        }
    }
}

impl ForceField {
    pub fn new(active_secs: f32, timeout_secs: f32, radius: f32) -> Self {
        Self {
            state: ForceFieldState::Ready,
            active_secs,
            timeout_secs,
            radius,
        }
    }

    pub fn phase(&self) -> ForceFieldPhase {
        match self.state {
            ForceFieldState::Ready => ForceFieldPhase::Ready,
            ForceFieldState::Active { .. } => ForceFieldPhase::Active,
            ForceFieldState::Cooldown { .. } => ForceFieldPhase::Cooldown,
        }
    }

    /// Readiness in [0, 1]. Full while ready or up, rising linearly during
    /// cooldown. A non-positive timeout counts as fully charged.
    pub fn charge(&self) -> f32 {
        match self.state {
            ForceFieldState::Ready | ForceFieldState::Active { .. } => 1.0,
            ForceFieldState::Cooldown { .. }
                if self.timeout_secs.is_nan() || self.timeout_secs <= 0.0 =>
            {
                1.0
            }
            ForceFieldState::Cooldown { remaining } => {
                (1.0 - remaining / self.timeout_secs).clamp(0.0, 1.0)
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = ForceFieldState::Ready;
    }
}
