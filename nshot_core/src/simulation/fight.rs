//! Single-fight simulation - interleaved cast and tick timelines
//!
//! Casts fire at `0, latency, 2×latency, …` and, when a DoT is configured,
//! ticks fire at `interval, 2×interval, …`. The earlier event runs first;
//! on a tie the cast runs before the tick.

use crate::damage::{hit_damage_with_factor, tick_damage, AttackRange};
use crate::dot::{DotEffect, StackTracker};
use rand::Rng;

/// Immutable inputs of one fight
#[derive(Debug, Clone, Copy)]
pub struct FightParams<'a> {
    pub attack_range: AttackRange,
    pub monster_hp: u64,
    pub monster_defense: u32,
    /// Skill damage percent / 100
    pub multiplier: f64,
    pub hits: u32,
    pub latency_ms: u64,
    pub dot: Option<&'a DotEffect>,
    pub defense_factor: f64,
    /// Events processed before the fight is abandoned
    pub max_events: u32,
}

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    /// HP reached zero; casts issued up to and including the lethal one
    Dead { casts: u32 },
    /// Event budget ran out with the monster still alive
    Inconclusive { casts: u32 },
}

impl FightOutcome {
    pub fn casts(&self) -> u32 {
        match self {
            FightOutcome::Dead { casts } | FightOutcome::Inconclusive { casts } => *casts,
        }
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, FightOutcome::Dead { .. })
    }
}

/// A processed timeline event, for inspecting a fight
#[derive(Debug, Clone, PartialEq)]
pub enum FightEvent {
    Cast {
        at_ms: u64,
        /// Hits that actually landed (later hits are skipped after a kill)
        hits: u32,
        damage: u64,
        stacks_after: usize,
        hp_after: i64,
    },
    Tick {
        at_ms: u64,
        stacks: usize,
        damage: u64,
        hp_after: i64,
    },
}

impl FightEvent {
    pub fn at_ms(&self) -> u64 {
        match self {
            FightEvent::Cast { at_ms, .. } | FightEvent::Tick { at_ms, .. } => *at_ms,
        }
    }
}

/// Run one fight to a kill or to the event budget
pub fn simulate_fight<R: Rng>(params: &FightParams<'_>, rng: &mut R) -> FightOutcome {
    run_fight(params, rng, None)
}

/// Like [`simulate_fight`], recording every processed event into `trace`
pub fn simulate_fight_traced<R: Rng>(
    params: &FightParams<'_>,
    rng: &mut R,
    trace: &mut Vec<FightEvent>,
) -> FightOutcome {
    run_fight(params, rng, Some(trace))
}

fn run_fight<R: Rng>(
    params: &FightParams<'_>,
    rng: &mut R,
    mut trace: Option<&mut Vec<FightEvent>>,
) -> FightOutcome {
    let mut hp = params.monster_hp.min(i64::MAX as u64) as i64;
    let mut casts = 0u32;
    let mut stacks = StackTracker::new();
    let mut clock = 0u64;

    let latency = params.latency_ms.max(1);
    let tick_interval = params.dot.map(|dot| dot.tick_interval_ms.max(1));
    let mut next_cast = 0u64;
    let mut next_tick = tick_interval.unwrap_or(u64::MAX);

    for _ in 0..params.max_events {
        let cast_first = tick_interval.is_none() || next_cast <= next_tick;

        let event = if cast_first {
            let now = next_cast;
            casts += 1;
            let (hits, damage) = process_cast(params, now, &mut hp, &mut stacks, rng);
            next_cast = next_cast.saturating_add(latency);
            FightEvent::Cast {
                at_ms: now,
                hits,
                damage,
                stacks_after: stacks.count(),
                hp_after: hp,
            }
        } else {
            let now = next_tick;
            let (count, damage) = match params.dot {
                Some(dot) => process_tick(dot, now, &mut hp, &mut stacks, rng),
                None => (0, 0),
            };
            next_tick = next_tick.saturating_add(tick_interval.unwrap_or(u64::MAX));
            FightEvent::Tick {
                at_ms: now,
                stacks: count,
                damage,
                hp_after: hp,
            }
        };

        debug_assert!(event.at_ms() >= clock, "fight clock went backwards");
        clock = event.at_ms();
        if let Some(trace) = trace.as_deref_mut() {
            trace.push(event);
        }

        if hp <= 0 {
            return FightOutcome::Dead { casts };
        }
    }

    FightOutcome::Inconclusive { casts }
}

/// Land the skill's hits at `now`, proccing the DoT on each one.
/// Returns hits landed and total damage.
fn process_cast<R: Rng>(
    params: &FightParams<'_>,
    now: u64,
    hp: &mut i64,
    stacks: &mut StackTracker,
    rng: &mut R,
) -> (u32, u64) {
    let mut landed = 0u32;
    let mut total = 0u64;

    for _ in 0..params.hits {
        let roll = params.attack_range.roll(rng);
        let damage = hit_damage_with_factor(
            roll,
            params.monster_defense,
            params.multiplier,
            params.defense_factor,
        );
        *hp = hp.saturating_sub(damage.min(i64::MAX as u64) as i64);
        landed += 1;
        total = total.saturating_add(damage);

        if let Some(dot) = params.dot {
            stacks.prune(now);
            stacks.try_apply(now, dot, rng);
        }

        if *hp <= 0 {
            break;
        }
    }

    (landed, total)
}

/// Expire stacks at `now`, then deal one roll per active stack.
/// Returns the stack count and damage dealt.
fn process_tick<R: Rng>(
    dot: &DotEffect,
    now: u64,
    hp: &mut i64,
    stacks: &mut StackTracker,
    rng: &mut R,
) -> (usize, u64) {
    stacks.prune(now);
    let count = stacks.count();
    if count == 0 {
        return (0, 0);
    }

    let damage = tick_damage(dot.roll_tick(rng), count);
    *hp = hp.saturating_sub(damage.min(i64::MAX as u64) as i64);
    (count, damage)
}
