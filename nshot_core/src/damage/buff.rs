//! WATK buffs - flat weapon attack bonuses applied outside the simulator

use super::AttackRange;
use crate::catalog::{Job, Weapon};
use crate::types::PlayerStats;
use serde::{Deserialize, Serialize};

/// Flat WATK buff. Only one can be active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttackBuff {
    #[default]
    None,
    /// Takoyaki, +8 WATK
    Takoyaki,
    /// Snowflake, +20 WATK
    Snowflake,
    /// User-specified WATK bonus
    Custom { watk: u32 },
}

impl AttackBuff {
    /// WATK granted by the buff
    pub fn watk(&self) -> u32 {
        match self {
            AttackBuff::None => 0,
            AttackBuff::Takoyaki => 8,
            AttackBuff::Snowflake => 20,
            AttackBuff::Custom { watk } => *watk,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttackBuff::None => "None",
            AttackBuff::Takoyaki => "Takoyaki",
            AttackBuff::Snowflake => "Snowflake",
            AttackBuff::Custom { .. } => "Custom",
        }
    }
}

/// Shift an attack range by the damage a WATK buff adds
///
/// `max += floor(max_coefficient × watk / 100)` and
/// `min += floor(min_coefficient × watk / 100)`. The base range is returned
/// unchanged when the buff grants nothing or no weapon formula applies.
pub fn buffed_range(
    base: AttackRange,
    job: Option<&Job>,
    weapon: Option<&Weapon>,
    stats: &PlayerStats,
    buff: AttackBuff,
) -> AttackRange {
    let watk = buff.watk();
    let (Some(job), Some(weapon)) = (job, weapon) else {
        return base;
    };
    if watk == 0 {
        return base;
    }

    let max_bonus = (job.max_coefficient(weapon, stats) * watk as f64 / 100.0).floor();
    let min_bonus = (job.min_coefficient(weapon, stats) * watk as f64 / 100.0).floor();
    base.shifted(min_bonus.max(0.0) as u32, max_bonus.max(0.0) as u32)
}
