//! Venom - Level and stat scaling of the thief poison

use super::{DotEffect, DEFAULT_TICK_INTERVAL_MS};
use crate::types::PlayerStats;
use serde::{Deserialize, Serialize};

/// `base + per_level × level`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelScaling {
    pub base: u32,
    pub per_level: u32,
}

impl LevelScaling {
    pub fn at(&self, level: u32) -> u32 {
        self.base.saturating_add(self.per_level.saturating_mul(level))
    }
}

/// Success rate growing every `ceil_divisor` levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuccessRateScaling {
    pub base_percent: f64,
    pub per_ceil_step_percent: f64,
    pub ceil_divisor: u32,
}

/// Duration growing every `ceil_divisor` levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationScaling {
    pub base: u64,
    pub per_ceil_step: u64,
    pub ceil_divisor: u32,
}

/// Stat coefficients of the per-stack tick damage
///
/// `max = (max_main × (STR + LUK) + DEX × secondary) / 100 × basic_attack`,
/// and the same with `min_main` for the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageCoefficients {
    pub max_main_stat_coeff: f64,
    pub min_main_stat_coeff: f64,
    pub secondary_stat_coeff: f64,
}

/// Venom configuration as loaded from the skill catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenomMetadata {
    pub basic_attack: LevelScaling,
    pub success_rate: SuccessRateScaling,
    pub duration_ms: DurationScaling,
    pub max_stack: u32,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    pub damage_coefficients: DamageCoefficients,
}

fn default_tick_interval() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn ceil_steps(level: u32, divisor: u32) -> u32 {
    if divisor == 0 {
        0
    } else {
        level.div_ceil(divisor)
    }
}

impl VenomMetadata {
    /// Basic attack at a skill level
    pub fn basic_attack_at(&self, level: u32) -> u32 {
        self.basic_attack.at(level)
    }

    /// Proc chance per hit (0.0 to 1.0)
    pub fn success_rate_at(&self, level: u32) -> f64 {
        let scaling = &self.success_rate;
        let steps = ceil_steps(level, scaling.ceil_divisor) as f64;
        (scaling.base_percent + scaling.per_ceil_step_percent * steps) / 100.0
    }

    /// Stack duration in milliseconds
    pub fn duration_at(&self, level: u32) -> u64 {
        let scaling = &self.duration_ms;
        let steps = ceil_steps(level, scaling.ceil_divisor) as u64;
        scaling.base.saturating_add(scaling.per_ceil_step.saturating_mul(steps))
    }

    /// Derive the DoT parameters for a skill level and the thief's stats
    pub fn effect(&self, level: u32, stats: &PlayerStats) -> DotEffect {
        let basic_attack = self.basic_attack_at(level) as f64;
        let coeffs = &self.damage_coefficients;
        let main = stats.str as f64 + stats.luk as f64;
        let secondary = stats.dex as f64 * coeffs.secondary_stat_coeff;

        DotEffect {
            success_rate: self.success_rate_at(level).clamp(0.0, 1.0),
            duration_ms: self.duration_at(level),
            max_stack: self.max_stack,
            tick_interval_ms: self.tick_interval_ms,
            damage_min: (coeffs.min_main_stat_coeff * main + secondary) / 100.0 * basic_attack,
            damage_max: (coeffs.max_main_stat_coeff * main + secondary) / 100.0 * basic_attack,
        }
    }

    /// Like [`VenomMetadata::effect`], but level 0 means venom is not learned
    pub fn effect_at(&self, level: u32, stats: &PlayerStats) -> Option<DotEffect> {
        (level > 0).then(|| self.effect(level, stats))
    }
}
