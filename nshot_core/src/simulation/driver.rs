//! Monte Carlo driver - many independent fights into one distribution

use super::{simulate_fight, simulate_fight_traced, FightEvent, FightOutcome, FightParams, SimulationResult};
use crate::actor::CombatActor;
use crate::catalog::{Monster, Skill};
use crate::config::SimulationConstants;
use crate::dot::DotEffect;
use crate::error::SimulationError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Inputs of one batch
#[derive(Debug, Clone, Copy)]
pub struct SimulationRequest<'a> {
    pub actor: &'a CombatActor,
    pub monster: &'a Monster,
    pub skill: &'a Skill,
    pub skill_level: u32,
    pub dot: Option<&'a DotEffect>,
    pub trial_count: u32,
}

impl<'a> SimulationRequest<'a> {
    /// Check every input and build the per-fight parameters
    ///
    /// Nothing is simulated when this fails.
    pub fn fight_params(&self, constants: &SimulationConstants) -> Result<FightParams<'a>, SimulationError> {
        self.actor.attack_range.validate()?;
        self.monster.validate()?;
        self.skill.validate()?;
        self.skill.check_level(self.skill_level)?;
        let percent = self
            .skill
            .damage_percent_at(self.skill_level)
            .ok_or_else(|| SimulationError::NonDamagingSkill(self.skill.id.clone()))?;
        if let Some(dot) = self.dot {
            dot.validate()?;
        }
        if self.trial_count == 0 {
            return Err(SimulationError::ZeroTrials);
        }
        if constants.max_events == 0 {
            return Err(SimulationError::ZeroEventBudget);
        }

        Ok(FightParams {
            attack_range: self.actor.attack_range,
            monster_hp: self.monster.hp,
            monster_defense: self.monster.weapon_def,
            multiplier: percent as f64 / 100.0,
            hits: self.skill.hits,
            latency_ms: self.skill.latency_ms,
            dot: self.dot,
            defense_factor: constants.defense_factor,
            max_events: constants.max_events,
        })
    }
}

/// Batch runner with fixed constants and an optional base seed
///
/// Fight `i` draws from `ChaCha8Rng::seed_from_u64(base_seed + i)`, so a
/// seeded batch is reproducible however its fights are scheduled.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    constants: SimulationConstants,
    seed: Option<u64>,
}

impl Simulator {
    pub fn new(constants: SimulationConstants) -> Self {
        Simulator { constants, seed: None }
    }

    /// Use a fixed base seed instead of drawing one per batch
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Copy with a fixed base seed, drawn now when none was set
    ///
    /// `run` and `sample_fight` on the copy replay the same fights.
    pub fn pinned(&self) -> Simulator {
        self.clone().with_seed(self.base_seed())
    }

    fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }

    /// Run `request.trial_count` fights and tally their outcomes
    pub fn run(&self, request: &SimulationRequest<'_>) -> Result<SimulationResult, SimulationError> {
        let params = request.fight_params(&self.constants)?;
        let base_seed = self.base_seed();

        debug!(
            monster = %request.monster.id,
            skill = %request.skill.id,
            level = request.skill_level,
            range = %request.actor.attack_range,
            dot = request.dot.is_some(),
            trials = request.trial_count,
            seed = base_seed,
            "Starting casts-to-kill batch"
        );

        let result = run_trials(&params, request.trial_count, base_seed);

        let inconclusive = result.inconclusive_trials();
        if inconclusive > 0 {
            warn!(
                inconclusive,
                trials = result.trial_count,
                max_events = params.max_events,
                "Some fights hit the event budget without a kill"
            );
        }
        debug!(summary = %result.summary(), "Batch finished");

        Ok(result)
    }

    /// Replay fight 0 of a batch and return its event log
    ///
    /// Matches the batch only when both share a base seed; use
    /// [`Simulator::pinned`] on an unseeded simulator.
    pub fn sample_fight(
        &self,
        request: &SimulationRequest<'_>,
    ) -> Result<(FightOutcome, Vec<FightEvent>), SimulationError> {
        let params = request.fight_params(&self.constants)?;
        let base_seed = self.base_seed();
        let mut trace = Vec::new();
        let outcome = simulate_fight_traced(&params, &mut trial_rng(base_seed, 0), &mut trace);
        debug!(?outcome, events = trace.len(), "Sampled one fight");
        Ok((outcome, trace))
    }
}

fn trial_rng(base_seed: u64, trial: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(trial as u64))
}

#[cfg(not(feature = "parallel"))]
fn run_trials(params: &FightParams<'_>, trial_count: u32, base_seed: u64) -> SimulationResult {
    let mut result = SimulationResult::new();
    for trial in 0..trial_count {
        let mut rng = trial_rng(base_seed, trial);
        result.record(simulate_fight(params, &mut rng));
    }
    result
}

#[cfg(feature = "parallel")]
fn run_trials(params: &FightParams<'_>, trial_count: u32, base_seed: u64) -> SimulationResult {
    use rayon::prelude::*;

    (0..trial_count)
        .into_par_iter()
        .fold(SimulationResult::new, |mut acc, trial| {
            let mut rng = trial_rng(base_seed, trial);
            acc.record(simulate_fight(params, &mut rng));
            acc
        })
        .reduce(SimulationResult::new, SimulationResult::merge)
}

/// Run a batch with default constants and a fresh random seed
pub fn simulate_distribution(
    actor: &CombatActor,
    monster: &Monster,
    skill: &Skill,
    skill_level: u32,
    dot: Option<&DotEffect>,
    trial_count: u32,
) -> Result<SimulationResult, SimulationError> {
    Simulator::default().run(&SimulationRequest {
        actor,
        monster,
        skill,
        skill_level,
        dot,
        trial_count,
    })
}
