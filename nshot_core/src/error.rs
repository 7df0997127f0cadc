//! Simulation input errors

use thiserror::Error;

/// Rejected simulation request
///
/// Every variant is raised before the first trial runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid attack range {min}~{max}: min must not exceed max and max must be positive")]
    InvalidAttackRange { min: u32, max: u32 },
    #[error("Skill level {level} is outside {min}~{max}")]
    SkillLevelOutOfRange { level: u32, min: u32, max: u32 },
    #[error("Skill '{0}' does not deal direct damage")]
    NonDamagingSkill(String),
    #[error("Invalid skill: {0}")]
    InvalidSkill(String),
    #[error("Invalid monster: {0}")]
    InvalidMonster(String),
    #[error("Invalid damage-over-time effect: {0}")]
    InvalidDot(String),
    #[error("Trial count must be positive")]
    ZeroTrials,
    #[error("Event budget must be positive")]
    ZeroEventBudget,
}
