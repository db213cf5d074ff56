//! Gameplay tuning.
//!
//! Every tunable has a default in [`crate::constants`]. A JSON file may
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Early-wave difficulty ramp: how many trailing pool slots spawn disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerfPolicy {
    pub heavy_until_wave: u32,
    pub heavy_disabled_slots: usize,
    pub light_until_wave: u32,
    pub light_disabled_slots: usize,
}

/// Every gameplay constant the simulation reads at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub starting_lives: u32,
    pub points_per_extra_life: u32,

    pub enemy_pool_capacity: usize,
    pub enemy_radius: f32,

    pub approach_step_base: f32,
    pub approach_step_per_wave: f32,
    pub repel_step: f32,
    pub repel_spin_rate: f32,

    pub spawn_distance: f32,
    pub spawn_stagger: f32,
    pub spawn_lateral_spread: f32,
    pub curve_offset_min: f32,
    pub curve_offset_max: f32,
    pub curve_vertical_jitter: f32,
    pub end_spread: f32,
    pub end_depth: f32,
    pub nerf: NerfPolicy,

    pub laser_pool_capacity: usize,
    pub laser_lifetime_secs: f32,
    pub laser_forward_offset: f32,
    pub laser_horizontal_offset: f32,
    pub laser_vertical_offset: f32,
    pub hit_radius_margin: f32,
    pub laser_miss_distance: f32,

    pub force_field_active_secs: f32,
    pub force_field_timeout_secs: f32,
    pub force_field_radius: f32,
}

impl NerfPolicy {
    /// Number of trailing slots spawned inactive for `wave`.
    pub fn disabled_slots(&self, wave: u32) -> usize {
        if wave <= self.heavy_until_wave {
            self.heavy_disabled_slots
        } else if wave <= self.light_until_wave {
            self.light_disabled_slots
        } else {
            0
        }
    }
}

impl Default for NerfPolicy {
    fn default() -> Self {
        Self {
            heavy_until_wave: NERF_HEAVY_UNTIL_WAVE,
            heavy_disabled_slots: NERF_HEAVY_DISABLED_SLOTS,
            light_until_wave: NERF_LIGHT_UNTIL_WAVE,
            light_disabled_slots: NERF_LIGHT_DISABLED_SLOTS,
        }
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            points_per_extra_life: POINTS_PER_EXTRA_LIFE,
            enemy_pool_capacity: ENEMY_POOL_CAPACITY,
            enemy_radius: ENEMY_DEFAULT_RADIUS,
            approach_step_base: APPROACH_STEP_BASE,
            approach_step_per_wave: APPROACH_STEP_PER_WAVE,
            repel_step: REPEL_STEP,
            repel_spin_rate: REPEL_SPIN_RATE,
            spawn_distance: SPAWN_DISTANCE,
            spawn_stagger: SPAWN_STAGGER,
            spawn_lateral_spread: SPAWN_LATERAL_SPREAD,
            curve_offset_min: CURVE_OFFSET_MIN,
            curve_offset_max: CURVE_OFFSET_MAX,
            curve_vertical_jitter: CURVE_VERTICAL_JITTER,
            end_spread: END_SPREAD,
            end_depth: END_DEPTH,
            nerf: NerfPolicy::default(),
            laser_pool_capacity: LASER_POOL_CAPACITY,
            laser_lifetime_secs: LASER_LIFETIME_SECS,
            laser_forward_offset: LASER_START_FORWARD_OFFSET,
            laser_horizontal_offset: LASER_START_HORIZONTAL_OFFSET,
            laser_vertical_offset: LASER_START_VERTICAL_OFFSET,
            hit_radius_margin: HIT_RADIUS_MARGIN,
            laser_miss_distance: LASER_MISS_DISTANCE,
            force_field_active_secs: FORCE_FIELD_ACTIVE_SECS,
            force_field_timeout_secs: FORCE_FIELD_TIMEOUT_SECS,
            force_field_radius: FORCE_FIELD_RADIUS,
        }
    }
}

impl TuningConfig {
    /// Parse a (possibly partial) JSON tuning document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TuningConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be a finite number greater than zero",
                })
            }
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be a finite number, zero or greater",
                })
            }
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::InvalidValue {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        if self.points_per_extra_life == 0 {
            return Err(ConfigError::InvalidValue {
                field: "points_per_extra_life",
                reason: "must be at least 1",
            });
        }
        if self.enemy_pool_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "enemy_pool_capacity",
                reason: "must be at least 1",
            });
        }
        if self.nerf.light_until_wave < self.nerf.heavy_until_wave {
            return Err(ConfigError::InvalidValue {
                field: "nerf.light_until_wave",
                reason: "must not be lower than nerf.heavy_until_wave",
            });
        }
        if self.nerf.light_disabled_slots > self.nerf.heavy_disabled_slots {
            return Err(ConfigError::InvalidValue {
                field: "nerf.light_disabled_slots",
                reason: "must not exceed nerf.heavy_disabled_slots",
            });
        }
        if self.nerf.heavy_disabled_slots >= self.enemy_pool_capacity {
            return Err(ConfigError::InvalidValue {
                field: "nerf.heavy_disabled_slots",
                reason: "must leave at least one enemy slot enabled",
            });
        }
        if self.curve_offset_max < self.curve_offset_min {
            return Err(ConfigError::InvalidValue {
                field: "curve_offset_max",
                reason: "must not be lower than curve_offset_min",
            });
        }

        positive("enemy_radius", self.enemy_radius)?;
        positive("approach_step_base", self.approach_step_base)?;
        non_negative("approach_step_per_wave", self.approach_step_per_wave)?;
        positive("repel_step", self.repel_step)?;
        non_negative("repel_spin_rate", self.repel_spin_rate)?;
        positive("spawn_distance", self.spawn_distance)?;
        non_negative("spawn_stagger", self.spawn_stagger)?;
        non_negative("spawn_lateral_spread", self.spawn_lateral_spread)?;
        non_negative("curve_offset_min", self.curve_offset_min)?;
        non_negative("curve_vertical_jitter", self.curve_vertical_jitter)?;
        non_negative("end_spread", self.end_spread)?;
        positive("laser_lifetime_secs", self.laser_lifetime_secs)?;
        positive("hit_radius_margin", self.hit_radius_margin)?;
        positive("laser_miss_distance", self.laser_miss_distance)?;
        positive("force_field_active_secs", self.force_field_active_secs)?;
        positive("force_field_timeout_secs", self.force_field_timeout_secs)?;
        positive("force_field_radius", self.force_field_radius)?;
        Ok(())
    }
}
