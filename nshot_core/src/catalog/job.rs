//! Jobs and weapons - stat formulas behind the attack range

use crate::types::{JobCategory, PlayerStats, SecondaryStat, Stat};
use serde::{Deserialize, Serialize};

/// Fraction of the min multiplier kept by the min attack formula
const MIN_ATTACK_SPREAD: f64 = 0.9;

/// Weapon type usable by a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    pub max_multiplier: f64,
    pub min_multiplier: f64,
}

/// A job as listed in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    pub category: JobCategory,
    #[serde(default)]
    pub category_name: String,
    pub main_stat: Stat,
    pub secondary_stat: SecondaryStat,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    /// Mastery fraction (0.6 = 60%)
    #[serde(default)]
    pub mastery: f64,
    /// Listed but not selectable (e.g. magic formula not supported)
    #[serde(default)]
    pub disabled: bool,
    /// Has at least one attack skill in the catalog
    #[serde(default)]
    pub implemented: bool,
}

impl Job {
    /// Main and secondary stat values for this job
    pub fn stat_values(&self, stats: &PlayerStats) -> (u32, u32) {
        (stats.get(self.main_stat), stats.secondary(self.secondary_stat))
    }

    /// Pick a weapon by id. A single-weapon job always uses its weapon;
    /// an unknown id falls back to the first one.
    pub fn select_weapon(&self, id: Option<&str>) -> Option<&Weapon> {
        match self.weapons.as_slice() {
            [] => None,
            [only] => Some(only),
            weapons => id
                .and_then(|id| weapons.iter().find(|w| w.id == id))
                .or_else(|| weapons.first()),
        }
    }

    /// `main × max_multiplier + secondary`
    pub fn max_coefficient(&self, weapon: &Weapon, stats: &PlayerStats) -> f64 {
        let (main, secondary) = self.stat_values(stats);
        main as f64 * weapon.max_multiplier + secondary as f64
    }

    /// `main × min_multiplier × 0.9 × mastery + secondary`
    pub fn min_coefficient(&self, weapon: &Weapon, stats: &PlayerStats) -> f64 {
        let (main, secondary) = self.stat_values(stats);
        main as f64 * weapon.min_multiplier * MIN_ATTACK_SPREAD * self.mastery + secondary as f64
    }

    /// Estimate WATK from the displayed max attack
    ///
    /// `round(max_attack × 100 / max_coefficient)`, `None` when either is zero.
    pub fn estimate_watk(&self, weapon: &Weapon, stats: &PlayerStats, max_attack: u32) -> Option<u32> {
        let denominator = self.max_coefficient(weapon, stats);
        if denominator <= 0.0 || max_attack == 0 {
            return None;
        }
        Some((max_attack as f64 * 100.0 / denominator).round() as u32)
    }

    /// Only thieves can poison with venom
    pub fn can_use_venom(&self) -> bool {
        self.category == JobCategory::Thief
    }

    /// Formula hint for the attack range, e.g. "MAX = (LUK × 4.2 + STR+DEX) × WATK / 100"
    pub fn formula_hint(&self, weapon: &Weapon) -> [String; 2] {
        let main = self.main_stat.label();
        let secondary = self.secondary_stat.label();
        [
            format!("MAX = ({} × {} + {}) × WATK / 100", main, weapon.max_multiplier, secondary),
            format!(
                "MIN = ({} × {} × 0.9 × mastery + {}) × WATK / 100",
                main, weapon.min_multiplier, secondary
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dagger() -> Weapon {
        Weapon {
            id: "dagger".to_string(),
            name: "Dagger".to_string(),
            name_en: "Dagger".to_string(),
            max_multiplier: 4.2,
            min_multiplier: 3.6,
        }
    }

    fn shadower() -> Job {
        Job {
            id: "shadower".to_string(),
            name: "Shadower".to_string(),
            name_en: "Shadower".to_string(),
            category: JobCategory::Thief,
            category_name: "Thief".to_string(),
            main_stat: Stat::Luk,
            secondary_stat: SecondaryStat::StrDex,
            weapons: vec![dagger()],
            mastery: 0.6,
            disabled: false,
            implemented: true,
        }
    }

    #[test]
    fn test_stat_values() {
        let stats = PlayerStats::new(4, 25, 4, 500);
        assert_eq!(shadower().stat_values(&stats), (500, 29));
    }

    #[test]
    fn test_estimate_watk() {
        let job = shadower();
        let stats = PlayerStats::new(4, 25, 4, 500);
        // 2129 coefficient, 2129 max attack -> 100 WATK
        assert_eq!(job.estimate_watk(&dagger(), &stats, 2129), Some(100));
        assert_eq!(job.estimate_watk(&dagger(), &stats, 0), None);
        assert_eq!(job.estimate_watk(&dagger(), &PlayerStats::default(), 100), None);
    }

    #[test]
    fn test_select_weapon() {
        let mut job = shadower();
        assert_eq!(job.select_weapon(Some("claw")).map(|w| w.id.as_str()), Some("dagger"));

        let mut claw = dagger();
        claw.id = "claw".to_string();
        job.weapons.push(claw);
        assert_eq!(job.select_weapon(Some("claw")).map(|w| w.id.as_str()), Some("claw"));
        assert_eq!(job.select_weapon(Some("bow")).map(|w| w.id.as_str()), Some("dagger"));

        job.weapons.clear();
        assert!(job.select_weapon(None).is_none());
    }

    #[test]
    fn test_only_thieves_use_venom() {
        let mut job = shadower();
        assert!(job.can_use_venom());
        job.category = JobCategory::Warrior;
        assert!(!job.can_use_venom());
    }
}
