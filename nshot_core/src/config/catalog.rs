//! Catalog loading - jobs, monsters and skills

use super::ConfigError;
use crate::catalog::{Catalog, Job, Monster, Skill};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Container for job configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    pub jobs: Vec<Job>,
}

/// Container for monster configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonstersConfig {
    pub monsters: Vec<Monster>,
}

/// Container for skill configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub skills: Vec<Skill>,
}

/// Build a catalog from the three TOML documents
pub fn parse_catalog(jobs: &str, monsters: &str, skills: &str) -> Result<Catalog, ConfigError> {
    let jobs: JobsConfig = super::parse_toml(jobs)?;
    let monsters: MonstersConfig = super::parse_toml(monsters)?;
    let skills: SkillsConfig = super::parse_toml(skills)?;

    let catalog = Catalog::new(jobs.jobs, monsters.monsters, skills.skills);
    validate(&catalog)?;
    Ok(catalog)
}

/// Load `jobs.toml`, `monsters.toml` and `skills.toml` from a directory
pub fn load_catalog_dir(dir: &Path) -> Result<Catalog, ConfigError> {
    let jobs: JobsConfig = super::load_toml(&dir.join("jobs.toml"))?;
    let monsters: MonstersConfig = super::load_toml(&dir.join("monsters.toml"))?;
    let skills: SkillsConfig = super::load_toml(&dir.join("skills.toml"))?;

    let catalog = Catalog::new(jobs.jobs, monsters.monsters, skills.skills);
    validate(&catalog)?;
    Ok(catalog)
}

/// Catalog shipped with the crate
pub fn default_catalog() -> Result<Catalog, ConfigError> {
    parse_catalog(
        include_str!("../../config/jobs.toml"),
        include_str!("../../config/monsters.toml"),
        include_str!("../../config/skills.toml"),
    )
}

fn validate(catalog: &Catalog) -> Result<(), ConfigError> {
    check_unique("job", catalog.jobs.iter().map(|j| j.id.as_str()))?;
    check_unique("monster", catalog.monsters.iter().map(|m| m.id.as_str()))?;
    check_unique("skill", catalog.skills.iter().map(|s| s.id.as_str()))?;

    for monster in &catalog.monsters {
        monster
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
    }

    for skill in &catalog.skills {
        skill
            .validate()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if skill.default_level < skill.min_level || skill.default_level > skill.max_level {
            return Err(ConfigError::Validation(format!(
                "skill '{}' default level {} is outside {}~{}",
                skill.id, skill.default_level, skill.min_level, skill.max_level
            )));
        }
        if skill.is_attack() && skill.damage_percent.at(skill.min_level).is_none() {
            return Err(ConfigError::Validation(format!(
                "attack skill '{}' has no damage percent",
                skill.id
            )));
        }
    }

    for job in &catalog.jobs {
        if !(0.0..=1.0).contains(&job.mastery) {
            return Err(ConfigError::Validation(format!(
                "job '{}' mastery {} is outside 0~1",
                job.id, job.mastery
            )));
        }
    }

    Ok(())
}

fn check_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::Validation(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DamagePercent, SkillKind};
    use crate::types::{SecondaryStat, Stat};

    const JOBS: &str = r#"
[[jobs]]
id = "shadower"
name = "Shadower"
category = "thief"
main_stat = "luk"
secondary_stat = "str_dex"
mastery = 0.6
implemented = true

[[jobs.weapons]]
id = "dagger"
name = "Dagger"
max_multiplier = 4.2
min_multiplier = 3.6
"#;

    const MONSTERS: &str = r#"
[[monsters]]
id = "goby"
name = "Goby"
level = 85
area = "Aqua Road"
hp = 17000
weapon_def = 645
"#;

    const SKILLS: &str = r#"
[[skills]]
id = "boomerang_step"
name = "Boomerang Step"
job = "shadower"
kind = "attack"
min_level = 1
max_level = 30
default_level = 30
hits = 2
latency_ms = 720

[skills.damage_percent]
type = "scaling"
base = 250
per_level = 5
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(JOBS, MONSTERS, SKILLS).unwrap();

        let job = catalog.job("shadower").unwrap();
        assert_eq!(job.main_stat, Stat::Luk);
        assert_eq!(job.secondary_stat, SecondaryStat::StrDex);
        assert_eq!(job.weapons.len(), 1);

        let skill = catalog.skill("boomerang_step").unwrap();
        assert_eq!(skill.kind, SkillKind::Attack);
        assert_eq!(skill.damage_percent, DamagePercent::Scaling { base: 250, per_level: 5 });
        assert!(skill.venom.is_none());

        let goby = catalog.monster("goby").unwrap();
        assert_eq!(goby.hp, 17000);
        assert_eq!(goby.magic_def, 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let monsters = format!("{}{}", MONSTERS, MONSTERS);
        let result = parse_catalog(JOBS, &monsters, SKILLS);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_zero_hp_monster_rejected() {
        let monsters = MONSTERS.replace("hp = 17000", "hp = 0");
        assert!(parse_catalog(JOBS, &monsters, SKILLS).is_err());
    }

    #[test]
    fn test_attack_without_damage_rejected() {
        let skills = SKILLS
            .replace("type = \"scaling\"\nbase = 250\nper_level = 5", "type = \"none\"");
        assert!(parse_catalog(JOBS, MONSTERS, &skills).is_err());
    }

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.jobs.len(), 12, "Expected 12 jobs from config");
        assert_eq!(catalog.monsters.len(), 9, "Expected 9 monsters from config");
        assert_eq!(catalog.skills.len(), 2, "Expected 2 skills from config");

        let expected = [
            "goby",
            "bombing_fish_house",
            "bone_fish",
            "shark",
            "cold_shark",
            "jr_newtie",
            "nest_golem",
            "skelegon",
            "skelosaurus",
        ];
        for id in expected {
            assert!(catalog.monster(id).is_some(), "Missing monster: {}", id);
        }
    }

    #[test]
    fn test_load_missing_dir() {
        let result = load_catalog_dir(Path::new("/nonexistent/catalog"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
