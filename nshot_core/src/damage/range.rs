//! AttackRange - Inclusive min/max attack of the actor

use crate::error::SimulationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive attack range an attack roll is drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRange {
    pub min: u32,
    pub max: u32,
}

impl AttackRange {
    pub fn new(min: u32, max: u32) -> Self {
        AttackRange { min, max }
    }

    /// Reject ranges that can't be simulated (min > max, or max of 0)
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.min > self.max || self.max == 0 {
            return Err(SimulationError::InvalidAttackRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Whether every roll yields the same value
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Draw a roll uniformly from the inclusive range
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        if self.min >= self.max {
            self.max
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    /// Shift both ends by flat amounts
    pub fn shifted(&self, min_bonus: u32, max_bonus: u32) -> Self {
        AttackRange {
            min: self.min.saturating_add(min_bonus),
            max: self.max.saturating_add(max_bonus),
        }
    }
}

impl std::fmt::Display for AttackRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_validate() {
        assert!(AttackRange::new(100, 200).validate().is_ok());
        assert!(AttackRange::new(0, 1).validate().is_ok());
        assert_eq!(
            AttackRange::new(200, 100).validate(),
            Err(SimulationError::InvalidAttackRange { min: 200, max: 100 })
        );
        assert!(AttackRange::new(0, 0).validate().is_err());
    }

    #[test]
    fn test_roll_stays_in_range() {
        let range = AttackRange::new(10, 20);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let roll = range.roll(&mut rng);
            assert!((10..=20).contains(&roll));
        }
    }

    #[test]
    fn test_fixed_range_roll() {
        let range = AttackRange::new(100, 100);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(range.is_fixed());
        assert_eq!(range.roll(&mut rng), 100);
    }
}
