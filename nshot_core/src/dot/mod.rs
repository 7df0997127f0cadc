//! DoT (Damage over Time) system - poison stacks that tick on a fixed clock

mod stacks;
mod venom;

pub use stacks::StackTracker;
pub use venom::{DamageCoefficients, DurationScaling, LevelScaling, SuccessRateScaling, VenomMetadata};

use crate::error::SimulationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default time between DoT ticks
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Parameters of a stacking DoT for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotEffect {
    /// Chance for each hit to apply a stack (0.0 to 1.0)
    pub success_rate: f64,
    /// Lifetime of a stack in milliseconds
    pub duration_ms: u64,
    /// Maximum simultaneous stacks
    pub max_stack: u32,
    /// Time between ticks
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Per-stack tick damage, lower bound
    pub damage_min: f64,
    /// Per-stack tick damage, upper bound
    pub damage_max: f64,
}

fn default_tick_interval() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl DotEffect {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(SimulationError::InvalidDot(format!(
                "success rate {} is outside 0~1",
                self.success_rate
            )));
        }
        if self.max_stack == 0 {
            return Err(SimulationError::InvalidDot("max stack must be positive".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(SimulationError::InvalidDot("tick interval must be positive".into()));
        }
        if !self.damage_min.is_finite()
            || !self.damage_max.is_finite()
            || self.damage_min < 0.0
            || self.damage_min > self.damage_max
        {
            return Err(SimulationError::InvalidDot(format!(
                "damage range {}~{} is malformed",
                self.damage_min, self.damage_max
            )));
        }
        Ok(())
    }

    /// Roll per-stack tick damage uniformly from the damage range
    pub fn roll_tick(&self, rng: &mut impl Rng) -> f64 {
        rng.gen::<f64>() * (self.damage_max - self.damage_min) + self.damage_min
    }

    /// Whether a stack proc succeeds for one hit
    pub fn roll_proc(&self, rng: &mut impl Rng) -> bool {
        rng.gen::<f64>() < self.success_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn poison() -> DotEffect {
        DotEffect {
            success_rate: 0.4,
            duration_ms: 4000,
            max_stack: 3,
            tick_interval_ms: 1000,
            damage_min: 100.0,
            damage_max: 200.0,
        }
    }

    #[test]
    fn test_validate() {
        assert!(poison().validate().is_ok());

        let mut dot = poison();
        dot.success_rate = 1.5;
        assert!(dot.validate().is_err());

        let mut dot = poison();
        dot.max_stack = 0;
        assert!(dot.validate().is_err());

        let mut dot = poison();
        dot.damage_min = 300.0;
        assert!(dot.validate().is_err());
    }

    #[test]
    fn test_roll_tick_in_range() {
        let dot = poison();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let roll = dot.roll_tick(&mut rng);
            assert!((100.0..=200.0).contains(&roll));
        }
    }

    #[test]
    fn test_certain_and_impossible_procs() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut dot = poison();

        dot.success_rate = 1.0;
        assert!((0..100).all(|_| dot.roll_proc(&mut rng)));

        dot.success_rate = 0.0;
        assert!((0..100).all(|_| !dot.roll_proc(&mut rng)));
    }

    #[test]
    fn test_default_tick_interval() {
        let toml = r#"
success_rate = 0.5
duration_ms = 2000
max_stack = 3
damage_min = 10.0
damage_max = 20.0
"#;
        let dot: DotEffect = toml::from_str(toml).unwrap();
        assert_eq!(dot.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }
}
