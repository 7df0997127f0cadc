//! Prelude module for convenient imports
//!
//! ```rust
//! use nshot_core::prelude::*;
//! ```

// Core types
pub use crate::types::{JobCategory, PlayerStats, SecondaryStat, Stat};
pub use crate::actor::CombatActor;

// Damage
pub use crate::damage::{hit_damage, AttackBuff, AttackRange};

// DoT system
pub use crate::dot::{DotEffect, StackTracker, VenomMetadata};

// Simulation
pub use crate::simulation::{SimulationRequest, SimulationResult, Simulator};

// Catalog & config
pub use crate::catalog::{Catalog, Job, Monster, Skill, Weapon};
pub use crate::config::{default_catalog, SimulationConstants};
pub use crate::error::SimulationError;
