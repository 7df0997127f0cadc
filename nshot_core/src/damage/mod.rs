//! Damage system - per-hit formula, attack ranges and WATK buffs

mod buff;
mod formula;
mod range;

pub use buff::{buffed_range, AttackBuff};
pub use formula::{hit_damage, hit_damage_with_factor, tick_damage, DEFAULT_DEFENSE_FACTOR};
pub use range::AttackRange;
