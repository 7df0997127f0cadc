//! Form inputs - what the user picked, resolved against the catalog

use directories::ProjectDirs;
use nshot_core::{
    buffed_range, AttackBuff, AttackRange, Catalog, CombatActor, DotEffect, Job, Monster,
    PlayerStats, SimulationError, SimulationRequest, SimulationResult, Simulator, Skill, Weapon,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const INPUTS_FILE: &str = "inputs.json";

/// Inputs that can't be turned into a simulation request
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Unknown job '{0}'")]
    UnknownJob(String),
    #[error("{0} is not supported yet")]
    JobNotImplemented(String),
    #[error("Unknown monster '{0}'")]
    UnknownMonster(String),
    #[error("No attack skill available for {0}")]
    NoAttackSkill(String),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Everything entered on the setup form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    pub job: String,
    pub weapon: Option<String>,
    pub stats: PlayerStats,
    pub attack_min: u32,
    pub attack_max: u32,
    pub monster: String,
    pub skill: String,
    pub skill_level: Option<i64>,
    pub venom_enabled: bool,
    pub venom_level: u32,
    pub buff: AttackBuff,
    pub custom_watk: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Inputs {
            job: "shadower".to_string(),
            weapon: None,
            stats: PlayerStats::new(4, 25, 4, 500),
            attack_min: 1000,
            attack_max: 2000,
            monster: String::new(),
            skill: String::new(),
            skill_level: None,
            venom_enabled: false,
            venom_level: 30,
            buff: AttackBuff::None,
            custom_watk: 0,
        }
    }
}

/// Inputs resolved against the catalog, ready to simulate
#[derive(Debug, Clone)]
pub struct Prepared<'a> {
    pub job: &'a Job,
    pub weapon: Option<&'a Weapon>,
    pub actor: CombatActor,
    pub monster: &'a Monster,
    pub skill: &'a Skill,
    pub skill_level: u32,
    pub dot: Option<DotEffect>,
}

impl<'a> Prepared<'a> {
    pub fn request(&self, trial_count: u32) -> SimulationRequest<'_> {
        SimulationRequest {
            actor: &self.actor,
            monster: self.monster,
            skill: self.skill,
            skill_level: self.skill_level,
            dot: self.dot.as_ref(),
            trial_count,
        }
    }
}

impl Inputs {
    /// Replace ids the catalog doesn't know with sensible picks:
    /// the highest-level monster and the job's first attack skill.
    pub fn normalize(&mut self, catalog: &Catalog) {
        if catalog.job(&self.job).filter(|j| !j.disabled).is_none() {
            if let Some(job) = catalog.selectable_jobs().find(|j| j.implemented) {
                self.job = job.id.clone();
            }
        }
        if catalog.monster(&self.monster).is_none() {
            if let Some(monster) = catalog.monsters.last() {
                self.monster = monster.id.clone();
            }
        }
        let owns_skill = catalog
            .attack_skills_for(&self.job)
            .any(|s| s.id == self.skill);
        if !owns_skill {
            self.skill = catalog
                .attack_skills_for(&self.job)
                .next()
                .map(|s| s.id.clone())
                .unwrap_or_default();
        }
        if let AttackBuff::Custom { watk } = &mut self.buff {
            *watk = self.custom_watk;
        }
    }

    pub fn job<'a>(&self, catalog: &'a Catalog) -> Option<&'a Job> {
        catalog.job(&self.job)
    }

    pub fn weapon<'a>(&self, catalog: &'a Catalog) -> Option<&'a Weapon> {
        self.job(catalog)
            .and_then(|job| job.select_weapon(self.weapon.as_deref()))
    }

    /// Attack range after the selected WATK buff
    pub fn buffed_range(&self, catalog: &Catalog) -> AttackRange {
        buffed_range(
            AttackRange::new(self.attack_min, self.attack_max),
            self.job(catalog),
            self.weapon(catalog),
            &self.stats,
            self.buff,
        )
    }

    /// WATK implied by the entered max attack, before buffs
    pub fn estimated_watk(&self, catalog: &Catalog) -> Option<u32> {
        let job = self.job(catalog)?;
        job.estimate_watk(self.weapon(catalog)?, &self.stats, self.attack_max)
    }

    pub fn buffed_watk(&self, catalog: &Catalog) -> Option<u32> {
        self.estimated_watk(catalog)
            .map(|watk| watk.saturating_add(self.buff.watk()))
    }

    /// Venom parameters when the job can poison and venom is turned on
    pub fn venom_effect(&self, catalog: &Catalog) -> Option<DotEffect> {
        let job = self.job(catalog)?;
        if !job.can_use_venom() || !self.venom_enabled {
            return None;
        }
        let skill = catalog.venom_skill()?;
        let level = skill.clamp_level(Some(self.venom_level as i64));
        skill.venom.as_ref()?.effect_at(level, &self.stats)
    }

    pub fn prepare<'a>(&self, catalog: &'a Catalog) -> Result<Prepared<'a>, InputError> {
        let job = catalog
            .job(&self.job)
            .ok_or_else(|| InputError::UnknownJob(self.job.clone()))?;
        if job.disabled || !job.implemented {
            return Err(InputError::JobNotImplemented(job.name_en.clone()));
        }
        let monster = catalog
            .monster(&self.monster)
            .ok_or_else(|| InputError::UnknownMonster(self.monster.clone()))?;
        let skill = catalog
            .attack_skills_for(&job.id)
            .find(|s| s.id == self.skill)
            .or_else(|| catalog.attack_skills_for(&job.id).next())
            .ok_or_else(|| InputError::NoAttackSkill(job.name_en.clone()))?;

        let range = self.buffed_range(catalog);
        range.validate()?;

        Ok(Prepared {
            job,
            weapon: self.weapon(catalog),
            actor: CombatActor::new(self.stats, range, job.mastery),
            monster,
            skill,
            skill_level: skill.clamp_level(self.skill_level),
            dot: self.venom_effect(catalog),
        })
    }

    /// Resolve the inputs and run one batch
    pub fn run(
        &self,
        catalog: &Catalog,
        simulator: &Simulator,
        trial_count: u32,
    ) -> Result<SimulationResult, InputError> {
        let prepared = self.prepare(catalog)?;
        Ok(simulator.run(&prepared.request(trial_count))?)
    }

    /// Load saved inputs, falling back to defaults on a missing or corrupt file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring corrupt inputs file {}: {}", path.display(), e);
                Inputs::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Inputs::default(),
            Err(e) => {
                warn!("Could not read inputs file {}: {}", path.display(), e);
                Inputs::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}

/// Platform data directory path for saved inputs
pub fn default_inputs_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nshot").map(|dirs| dirs.data_dir().join(INPUTS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nshot_core::default_catalog;

    fn inputs(catalog: &Catalog) -> Inputs {
        let mut inputs = Inputs::default();
        inputs.normalize(catalog);
        inputs
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let catalog = default_catalog().unwrap();
        let inputs = inputs(&catalog);
        assert_eq!(inputs.job, "shadower");
        assert_eq!(inputs.monster, "skelosaurus");
        assert_eq!(inputs.skill, "boomerang_step");
    }

    #[test]
    fn test_prepare_resolves_everything() {
        let catalog = default_catalog().unwrap();
        let prepared = inputs(&catalog).prepare(&catalog).unwrap();

        assert_eq!(prepared.monster.id, "skelosaurus");
        assert_eq!(prepared.skill_level, 30);
        assert_eq!(prepared.actor.attack_range, AttackRange::new(1000, 2000));
        assert!(prepared.dot.is_none());
    }

    #[test]
    fn test_watk_estimate_with_buff() {
        let catalog = default_catalog().unwrap();
        let mut inputs = inputs(&catalog);

        // 2000 × 100 / (500 × 4.2 + 29) = 93.9
        assert_eq!(inputs.estimated_watk(&catalog), Some(94));
        assert_eq!(inputs.buffed_watk(&catalog), Some(94));

        inputs.buff = AttackBuff::Snowflake;
        assert_eq!(inputs.buffed_watk(&catalog), Some(114));

        inputs.attack_max = 0;
        assert_eq!(inputs.buffed_watk(&catalog), None);
    }

    #[test]
    fn test_venom_only_for_thieves() {
        let catalog = default_catalog().unwrap();
        let mut inputs = inputs(&catalog);
        inputs.venom_enabled = true;
        assert!(inputs.venom_effect(&catalog).is_some());

        inputs.venom_level = 0;
        assert!(inputs.venom_effect(&catalog).is_none());

        inputs.venom_level = 30;
        inputs.job = "hero".to_string();
        assert!(inputs.venom_effect(&catalog).is_none());
    }

    #[test]
    fn test_unimplemented_job_rejected() {
        let catalog = default_catalog().unwrap();
        let mut inputs = inputs(&catalog);
        inputs.job = "hero".to_string();
        assert_eq!(
            inputs.prepare(&catalog).unwrap_err(),
            InputError::JobNotImplemented("Hero".to_string())
        );
    }

    #[test]
    fn test_invalid_range_rejected() {
        let catalog = default_catalog().unwrap();
        let mut inputs = inputs(&catalog);
        inputs.attack_min = 3000;
        assert!(matches!(
            inputs.prepare(&catalog),
            Err(InputError::Simulation(SimulationError::InvalidAttackRange { .. }))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(INPUTS_FILE);
        let catalog = default_catalog().unwrap();
        let mut original = inputs(&catalog);
        original.buff = AttackBuff::Snowflake;
        original.venom_enabled = true;

        original.save(&path).unwrap();
        assert_eq!(Inputs::load(&path), original);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Inputs::load(&path), Inputs::default());
        assert_eq!(Inputs::load(&dir.path().join("missing.json")), Inputs::default());
    }
}
