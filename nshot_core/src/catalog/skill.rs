//! Skill records - damage percent, hits and cast latency

use crate::dot::VenomMetadata;
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Skill role in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    /// Castable attack that deals direct damage
    Attack,
    /// Passive that only contributes a damage-over-time effect
    PassiveDot,
}

/// Damage percent of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DamagePercent {
    /// `base + per_level × level`
    Scaling { base: u32, per_level: u32 },
    /// The skill deals no direct damage
    None,
}

impl DamagePercent {
    pub fn at(&self, level: u32) -> Option<u32> {
        match self {
            DamagePercent::Scaling { base, per_level } => {
                Some(base.saturating_add(per_level.saturating_mul(level)))
            }
            DamagePercent::None => None,
        }
    }
}

/// A skill as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    /// Job id (or job category for shared skills) that owns the skill
    pub job: String,
    pub kind: SkillKind,
    pub min_level: u32,
    pub max_level: u32,
    pub default_level: u32,
    pub damage_percent: DamagePercent,
    #[serde(default = "default_hits")]
    pub hits: u32,
    /// Time between casts
    pub latency_ms: u64,
    /// Poison parameters, only for the venom passive
    #[serde(default)]
    pub venom: Option<VenomMetadata>,
}

fn default_hits() -> u32 {
    1
}

impl Skill {
    /// Single-level attack skill with a fixed damage percent
    pub fn fixed(id: &str, percent: u32, hits: u32, latency_ms: u64) -> Self {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            name_en: id.to_string(),
            job: String::new(),
            kind: SkillKind::Attack,
            min_level: 1,
            max_level: 1,
            default_level: 1,
            damage_percent: DamagePercent::Scaling {
                base: percent,
                per_level: 0,
            },
            hits,
            latency_ms,
            venom: None,
        }
    }

    /// Damage percent at a level, `None` for skills without direct damage
    pub fn damage_percent_at(&self, level: u32) -> Option<u32> {
        self.damage_percent.at(level)
    }

    pub fn is_attack(&self) -> bool {
        self.kind == SkillKind::Attack
    }

    /// Resolve a user-entered level: missing means the default level,
    /// anything else is clamped to the declared bounds.
    pub fn clamp_level(&self, level: Option<i64>) -> u32 {
        let level = level.unwrap_or(self.default_level as i64);
        level.clamp(self.min_level as i64, self.max_level as i64) as u32
    }

    /// Reject levels outside the declared bounds
    pub fn check_level(&self, level: u32) -> Result<(), SimulationError> {
        if level < self.min_level || level > self.max_level {
            return Err(SimulationError::SkillLevelOutOfRange {
                level,
                min: self.min_level,
                max: self.max_level,
            });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.hits == 0 {
            return Err(SimulationError::InvalidSkill(format!(
                "'{}' must hit at least once",
                self.id
            )));
        }
        if self.latency_ms == 0 {
            return Err(SimulationError::InvalidSkill(format!(
                "'{}' must have a positive latency",
                self.id
            )));
        }
        if self.min_level > self.max_level {
            return Err(SimulationError::InvalidSkill(format!(
                "'{}' has level bounds {}~{}",
                self.id, self.min_level, self.max_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boomerang_step() -> Skill {
        Skill {
            id: "boomerang_step".to_string(),
            name: "Boomerang Step".to_string(),
            name_en: "Boomerang Step".to_string(),
            job: "shadower".to_string(),
            kind: SkillKind::Attack,
            min_level: 1,
            max_level: 30,
            default_level: 30,
            damage_percent: DamagePercent::Scaling { base: 250, per_level: 5 },
            hits: 2,
            latency_ms: 720,
            venom: None,
        }
    }

    #[test]
    fn test_damage_percent_scaling() {
        let skill = boomerang_step();
        assert_eq!(skill.damage_percent_at(30), Some(400));
        assert_eq!(skill.damage_percent_at(1), Some(255));
        assert_eq!(DamagePercent::None.at(30), None);
    }

    #[test]
    fn test_clamp_level() {
        let skill = boomerang_step();
        assert_eq!(skill.clamp_level(None), 30);
        assert_eq!(skill.clamp_level(Some(0)), 1);
        assert_eq!(skill.clamp_level(Some(-5)), 1);
        assert_eq!(skill.clamp_level(Some(99)), 30);
        assert_eq!(skill.clamp_level(Some(12)), 12);
    }

    #[test]
    fn test_check_level() {
        let skill = boomerang_step();
        assert!(skill.check_level(30).is_ok());
        assert_eq!(
            skill.check_level(31),
            Err(SimulationError::SkillLevelOutOfRange { level: 31, min: 1, max: 30 })
        );
    }

    #[test]
    fn test_validate() {
        assert!(boomerang_step().validate().is_ok());
        assert!(Skill::fixed("zero_hits", 100, 0, 600).validate().is_err());
        assert!(Skill::fixed("instant", 100, 1, 0).validate().is_err());
    }
}
