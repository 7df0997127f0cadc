//! Simulation constants configuration

use super::ConfigError;
use crate::damage::DEFAULT_DEFENSE_FACTOR;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable simulation constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConstants {
    /// Fights per batch
    #[serde(default = "default_trial_count")]
    pub trial_count: u32,
    /// Events a single fight may process before it is called inconclusive
    #[serde(default = "default_max_events")]
    pub max_events: u32,
    /// Share of weapon defense subtracted from each attack roll
    #[serde(default = "default_defense_factor")]
    pub defense_factor: f64,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        SimulationConstants {
            trial_count: default_trial_count(),
            max_events: default_max_events(),
            defense_factor: default_defense_factor(),
        }
    }
}

fn default_trial_count() -> u32 {
    10_000
}
fn default_max_events() -> u32 {
    10_000
}
fn default_defense_factor() -> f64 {
    DEFAULT_DEFENSE_FACTOR
}

impl SimulationConstants {
    /// Load constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: Self = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load constants from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let constants: Self = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Constants shipped with the crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(include_str!("../../config/constants.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_count == 0 {
            return Err(ConfigError::Validation("trial_count must be positive".into()));
        }
        if self.max_events == 0 {
            return Err(ConfigError::Validation("max_events must be positive".into()));
        }
        if !self.defense_factor.is_finite() || self.defense_factor < 0.0 {
            return Err(ConfigError::Validation(format!(
                "defense_factor {} must be a non-negative number",
                self.defense_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = SimulationConstants::default();
        assert_eq!(constants.trial_count, 10_000);
        assert_eq!(constants.max_events, 10_000);
        assert!((constants.defense_factor - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builtin_matches_defaults() {
        assert_eq!(SimulationConstants::builtin().unwrap(), SimulationConstants::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let constants = SimulationConstants::parse("trial_count = 500").unwrap();
        assert_eq!(constants.trial_count, 500);
        assert_eq!(constants.max_events, 10_000);
    }

    #[test]
    fn test_zero_trials_rejected() {
        let result = SimulationConstants::parse("trial_count = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = SimulationConstants::parse("trial_count = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
