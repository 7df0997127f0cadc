//! nshot_core - Casts-to-kill estimation for skill + poison combat
//!
//! This library provides:
//! - Damage formula: attack roll vs weapon defense, clamped to 1
//! - StackTracker: bounded, expiring damage-over-time stacks
//! - Fight simulation: interleaved cast and tick timelines for one fight
//! - Monte Carlo driver: casts-to-kill distribution over many fights
//! - Catalog: jobs, weapons, monsters and skills loaded from TOML

pub mod actor;
pub mod catalog;
pub mod config;
pub mod damage;
pub mod dot;
pub mod error;
pub mod prelude;
pub mod simulation;
pub mod types;

// Re-export core types for convenience
pub use actor::CombatActor;
pub use catalog::{Catalog, DamagePercent, Job, Monster, Skill, SkillKind, Weapon};
pub use config::{default_catalog, load_catalog_dir, ConfigError, SimulationConstants};
pub use damage::{buffed_range, hit_damage, tick_damage, AttackBuff, AttackRange};
pub use dot::{DotEffect, StackTracker, VenomMetadata};
pub use error::SimulationError;
pub use simulation::{
    simulate_distribution, simulate_fight, simulate_fight_traced, FightEvent, FightOutcome, FightParams,
    HistogramRow, SimulationRequest, SimulationResult, Simulator,
};
pub use types::{JobCategory, PlayerStats, SecondaryStat, Stat};
