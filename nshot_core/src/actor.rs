//! CombatActor - The attacking character for one simulation run

use crate::damage::AttackRange;
use crate::types::PlayerStats;
use serde::{Deserialize, Serialize};

/// Player inputs that stay fixed for a whole batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatActor {
    /// Attribute values
    pub stats: PlayerStats,
    /// Effective (buff-adjusted) attack range
    pub attack_range: AttackRange,
    /// Weapon mastery fraction in [0, 1]
    pub mastery: f64,
}

impl CombatActor {
    pub fn new(stats: PlayerStats, attack_range: AttackRange, mastery: f64) -> Self {
        CombatActor {
            stats,
            attack_range,
            mastery: mastery.clamp(0.0, 1.0),
        }
    }

    /// Actor with only an attack range, for callers that don't track attributes
    pub fn with_range(min: u32, max: u32) -> Self {
        Self::new(PlayerStats::default(), AttackRange::new(min, max), 0.0)
    }
}
