//! Catalog - read-only jobs, monsters and skills

mod job;
mod monster;
mod skill;

pub use job::{Job, Weapon};
pub use monster::Monster;
pub use skill::{DamagePercent, Skill, SkillKind};

/// Static game data the simulator inputs are picked from
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub jobs: Vec<Job>,
    pub monsters: Vec<Monster>,
    pub skills: Vec<Skill>,
}

impl Catalog {
    pub fn new(jobs: Vec<Job>, monsters: Vec<Monster>, skills: Vec<Skill>) -> Self {
        Catalog {
            jobs,
            monsters,
            skills,
        }
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Attack skills owned by a job, in catalog order
    pub fn attack_skills_for<'a>(&'a self, job_id: &'a str) -> impl Iterator<Item = &'a Skill> + 'a {
        self.skills
            .iter()
            .filter(move |s| s.is_attack() && s.job == job_id)
    }

    /// The skill record carrying venom metadata
    pub fn venom_skill(&self) -> Option<&Skill> {
        self.skills.iter().find(|s| s.venom.is_some())
    }

    /// Monsters grouped by area, keeping catalog order
    pub fn monsters_by_area(&self) -> Vec<(&str, Vec<&Monster>)> {
        let mut groups: Vec<(&str, Vec<&Monster>)> = Vec::new();
        for monster in &self.monsters {
            match groups.last_mut() {
                Some((area, members)) if *area == monster.area => members.push(monster),
                _ => groups.push((monster.area.as_str(), vec![monster])),
            }
        }
        groups
    }

    /// Jobs that can be selected
    pub fn selectable_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter().filter(|j| !j.disabled)
    }
}
