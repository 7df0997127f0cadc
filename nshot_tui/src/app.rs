//! Application state

use crate::inputs::{InputError, Inputs};
use nshot_core::{
    AttackBuff, Catalog, FightEvent, FightOutcome, Monster, SimulationResult, Simulator, Stat,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Setup,
    Results,
    Trace,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Setup, Tab::Results, Tab::Trace, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Setup => "Setup",
            Tab::Results => "Results",
            Tab::Trace => "Trace",
            Tab::Help => "Help",
        }
    }
}

/// One editable row of the setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Job,
    Weapon,
    Stat(Stat),
    AttackMin,
    AttackMax,
    Buff,
    CustomWatk,
    Monster,
    Skill,
    SkillLevel,
    Venom,
    VenomLevel,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Job => "Job",
            Field::Weapon => "Weapon",
            Field::Stat(stat) => stat.label(),
            Field::AttackMin => "Attack min",
            Field::AttackMax => "Attack max",
            Field::Buff => "WATK buff",
            Field::CustomWatk => "Custom WATK",
            Field::Monster => "Monster",
            Field::Skill => "Skill",
            Field::SkillLevel => "Skill level",
            Field::Venom => "Venom",
            Field::VenomLevel => "Venom level",
        }
    }
}

/// Result of the last traced fight
#[derive(Debug, Clone)]
pub struct SampleFight {
    pub outcome: FightOutcome,
    pub events: Vec<FightEvent>,
}

pub struct App {
    pub current_tab: Tab,
    pub catalog: Catalog,
    pub inputs: Inputs,
    pub simulator: Simulator,
    pub trial_count: u32,
    pub inputs_path: Option<PathBuf>,
    pub selected_field: usize,
    pub result: Option<SimulationResult>,
    pub sample: Option<SampleFight>,
    pub last_error: Option<String>,
    pub status: String,
    pub results_scroll: usize,
    pub trace_scroll: usize,
}

impl App {
    pub fn new(
        catalog: Catalog,
        mut inputs: Inputs,
        simulator: Simulator,
        trial_count: u32,
        inputs_path: Option<PathBuf>,
    ) -> Self {
        inputs.normalize(&catalog);
        App {
            current_tab: Tab::Setup,
            catalog,
            inputs,
            simulator,
            trial_count,
            inputs_path,
            selected_field: 0,
            result: None,
            sample: None,
            last_error: None,
            status: "Press Enter to simulate".to_string(),
            results_scroll: 0,
            trace_scroll: 0,
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
        }
    }

    /// Form rows that apply to the current selections
    pub fn fields(&self) -> Vec<Field> {
        let job = self.inputs.job(&self.catalog);
        let mut fields = vec![Field::Job];
        if job.map(|j| j.weapons.len() > 1).unwrap_or(false) {
            fields.push(Field::Weapon);
        }
        fields.extend(Stat::all().iter().map(|s| Field::Stat(*s)));
        fields.extend([Field::AttackMin, Field::AttackMax, Field::Buff]);
        if matches!(self.inputs.buff, AttackBuff::Custom { .. }) {
            fields.push(Field::CustomWatk);
        }
        fields.extend([Field::Monster, Field::Skill, Field::SkillLevel]);
        if job.map(|j| j.can_use_venom()).unwrap_or(false) {
            fields.push(Field::Venom);
            if self.inputs.venom_enabled {
                fields.push(Field::VenomLevel);
            }
        }
        fields
    }

    /// The selected monster's area and every monster listed in it
    pub fn area_roster(&self) -> Option<(&str, Vec<&Monster>)> {
        self.catalog
            .monsters_by_area()
            .into_iter()
            .find(|(_, members)| members.iter().any(|m| m.id == self.inputs.monster))
    }

    pub fn current_field(&self) -> Option<Field> {
        self.fields().get(self.selected_field).copied()
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Setup => {
                let len = self.fields().len();
                self.selected_field = (self.selected_field + len - 1) % len;
            }
            Tab::Results => self.results_scroll = self.results_scroll.saturating_sub(1),
            Tab::Trace => self.trace_scroll = self.trace_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Setup => {
                let len = self.fields().len();
                self.selected_field = (self.selected_field + 1) % len;
            }
            Tab::Results => self.results_scroll = self.results_scroll.saturating_add(1),
            Tab::Trace => self.trace_scroll = self.trace_scroll.saturating_add(1),
            Tab::Help => {}
        }
    }

    /// Change the selected field by `delta` steps
    pub fn adjust(&mut self, delta: i64) {
        if self.current_tab != Tab::Setup {
            return;
        }
        let Some(field) = self.current_field() else {
            return;
        };

        match field {
            Field::Job => {
                let ids: Vec<String> = self.catalog.selectable_jobs().map(|j| j.id.clone()).collect();
                if let Some(id) = cycle(&ids, &self.inputs.job, delta) {
                    self.inputs.job = id;
                    self.inputs.weapon = None;
                    self.inputs.skill = String::new();
                    self.inputs.skill_level = None;
                    self.inputs.normalize(&self.catalog);
                }
            }
            Field::Weapon => {
                let ids: Vec<String> = self
                    .inputs
                    .job(&self.catalog)
                    .map(|j| j.weapons.iter().map(|w| w.id.clone()).collect())
                    .unwrap_or_default();
                let current = self
                    .inputs
                    .weapon(&self.catalog)
                    .map(|w| w.id.clone())
                    .unwrap_or_default();
                if let Some(id) = cycle(&ids, &current, delta) {
                    self.inputs.weapon = Some(id);
                }
            }
            Field::Stat(stat) => step(self.inputs.stats.get_mut(stat), delta),
            Field::AttackMin => step(&mut self.inputs.attack_min, delta),
            Field::AttackMax => step(&mut self.inputs.attack_max, delta),
            Field::Buff => {
                let choices = [
                    AttackBuff::None,
                    AttackBuff::Takoyaki,
                    AttackBuff::Snowflake,
                    AttackBuff::Custom { watk: self.inputs.custom_watk },
                ];
                let idx = choices
                    .iter()
                    .position(|b| b.name() == self.inputs.buff.name())
                    .unwrap_or(0);
                self.inputs.buff = choices[wrap(idx, delta, choices.len())];
            }
            Field::CustomWatk => {
                step(&mut self.inputs.custom_watk, delta);
                self.inputs.buff = AttackBuff::Custom { watk: self.inputs.custom_watk };
            }
            Field::Monster => {
                let ids: Vec<String> = self.catalog.monsters.iter().map(|m| m.id.clone()).collect();
                if let Some(id) = cycle(&ids, &self.inputs.monster, delta) {
                    self.inputs.monster = id;
                }
            }
            Field::Skill => {
                let ids: Vec<String> = self
                    .catalog
                    .attack_skills_for(&self.inputs.job)
                    .map(|s| s.id.clone())
                    .collect();
                if let Some(id) = cycle(&ids, &self.inputs.skill, delta) {
                    self.inputs.skill = id;
                    self.inputs.skill_level = None;
                }
            }
            Field::SkillLevel => {
                if let Some(skill) = self.catalog.skill(&self.inputs.skill) {
                    let level = skill.clamp_level(self.inputs.skill_level) as i64 + delta;
                    self.inputs.skill_level = Some(skill.clamp_level(Some(level)) as i64);
                }
            }
            Field::Venom => self.inputs.venom_enabled = !self.inputs.venom_enabled,
            Field::VenomLevel => {
                if let Some(skill) = self.catalog.venom_skill() {
                    let level = self.inputs.venom_level as i64 + delta;
                    self.inputs.venom_level = skill.clamp_level(Some(level));
                }
            }
        }

        let len = self.fields().len();
        if self.selected_field >= len {
            self.selected_field = len - 1;
        }
    }

    /// Run a batch plus one traced fight from the current inputs
    pub fn run_simulation(&mut self) {
        match self.simulate() {
            Ok((result, sample)) => {
                self.status = result.summary();
                self.result = Some(result);
                self.sample = Some(sample);
                self.last_error = None;
                self.results_scroll = 0;
                self.trace_scroll = 0;
                self.current_tab = Tab::Results;
                self.save_inputs();
            }
            Err(e) => {
                warn!("Simulation rejected: {}", e);
                self.last_error = Some(e.to_string());
                self.result = None;
                self.sample = None;
            }
        }
    }

    fn simulate(&self) -> Result<(SimulationResult, SampleFight), InputError> {
        let prepared = self.inputs.prepare(&self.catalog)?;
        let request = prepared.request(self.trial_count);
        // One base seed for both, so the trace is fight 0 of this batch
        let simulator = self.simulator.pinned();
        let result = simulator.run(&request)?;
        let (outcome, events) = simulator.sample_fight(&request)?;
        Ok((result, SampleFight { outcome, events }))
    }

    pub fn save_inputs(&mut self) {
        let Some(path) = &self.inputs_path else {
            return;
        };
        match self.inputs.save(path) {
            Ok(()) => info!("Saved inputs to {}", path.display()),
            Err(e) => {
                warn!("Could not save inputs to {}: {}", path.display(), e);
                self.status = format!("Could not save inputs: {}", e);
            }
        }
    }

    pub fn reset_inputs(&mut self) {
        self.inputs = Inputs::default();
        self.inputs.normalize(&self.catalog);
        self.selected_field = 0;
        self.last_error = None;
    }
}

fn wrap(idx: usize, delta: i64, len: usize) -> usize {
    (idx as i64 + delta).rem_euclid(len as i64) as usize
}

fn cycle(ids: &[String], current: &str, delta: i64) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    let idx = ids.iter().position(|id| id == current).unwrap_or(0);
    Some(ids[wrap(idx, delta, ids.len())].clone())
}

fn step(value: &mut u32, delta: i64) {
    *value = (*value as i64 + delta).clamp(0, u32::MAX as i64) as u32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use nshot_core::{default_catalog, SimulationConstants};

    fn app() -> App {
        let simulator = Simulator::new(SimulationConstants::default()).with_seed(42);
        App::new(default_catalog().unwrap(), Inputs::default(), simulator, 500, None)
    }

    fn select(app: &mut App, field: Field) {
        app.selected_field = app.fields().iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Setup);
        app.set_tab(2);
        assert_eq!(app.current_tab, Tab::Trace);
        app.set_tab(9);
        assert_eq!(app.current_tab, Tab::Trace);
    }

    #[test]
    fn test_venom_fields_follow_toggle() {
        let mut app = app();
        assert!(app.fields().contains(&Field::Venom));
        assert!(!app.fields().contains(&Field::VenomLevel));

        select(&mut app, Field::Venom);
        app.adjust(1);
        assert!(app.inputs.venom_enabled);
        assert!(app.fields().contains(&Field::VenomLevel));
    }

    #[test]
    fn test_levels_stay_in_bounds() {
        let mut app = app();
        select(&mut app, Field::SkillLevel);
        app.adjust(100);
        assert_eq!(app.inputs.skill_level, Some(30));
        app.adjust(-100);
        assert_eq!(app.inputs.skill_level, Some(1));

        select(&mut app, Field::Stat(Stat::Luk));
        app.adjust(-10_000);
        assert_eq!(app.inputs.stats.luk, 0);
    }

    #[test]
    fn test_area_roster_follows_monster() {
        let mut app = app();
        let (area, members) = app.area_roster().unwrap();
        assert_eq!(area, "神木村");
        assert_eq!(members.len(), 4);

        app.inputs.monster = "goby".to_string();
        let (area, members) = app.area_roster().unwrap();
        assert_eq!(area, "水世界");
        assert_eq!(members.first().map(|m| m.id.as_str()), Some("goby"));

        app.inputs.monster = "missing".to_string();
        assert!(app.area_roster().is_none());
    }

    #[test]
    fn test_custom_buff_tracks_watk() {
        let mut app = app();
        select(&mut app, Field::Buff);
        app.adjust(-1);
        assert!(matches!(app.inputs.buff, AttackBuff::Custom { .. }));

        select(&mut app, Field::CustomWatk);
        app.adjust(15);
        assert_eq!(app.inputs.buff, AttackBuff::Custom { watk: 15 });
    }

    #[test]
    fn test_job_change_resets_skill() {
        let mut app = app();
        select(&mut app, Field::Job);
        app.adjust(-1);
        assert_eq!(app.inputs.job, "marksman");
        assert!(app.inputs.skill.is_empty());
        assert!(!app.fields().contains(&Field::Venom));
    }

    #[test]
    fn test_run_simulation_fills_results() {
        let mut app = app();
        app.run_simulation();

        assert_eq!(app.current_tab, Tab::Results);
        assert!(app.last_error.is_none());
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.trial_count, 500);
        assert!(app.sample.as_ref().unwrap().outcome.is_kill());
    }

    #[test]
    fn test_unseeded_trace_belongs_to_batch() {
        let mut app = App::new(
            default_catalog().unwrap(),
            Inputs::default(),
            Simulator::default(),
            1,
            None,
        );
        app.run_simulation();

        let casts = app.sample.as_ref().unwrap().outcome.casts();
        let result = app.result.as_ref().unwrap();
        assert_eq!(result.distribution.get(&casts), Some(&1));
    }

    #[test]
    fn test_run_simulation_reports_bad_range() {
        let mut app = app();
        app.inputs.attack_min = 5000;
        app.run_simulation();

        assert_eq!(app.current_tab, Tab::Setup);
        assert!(app.result.is_none());
        assert!(app.last_error.as_ref().unwrap().contains("5000"));
    }
}
