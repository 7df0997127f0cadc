//! Damage formula - attack roll vs weapon defense

/// Share of weapon defense subtracted from each attack roll
pub const DEFAULT_DEFENSE_FACTOR: f64 = 0.55;

/// Calculate the damage of a single hit
///
/// `damage = floor((attack_roll - 0.55 × defense) × multiplier)`, never below 1.
///
/// # Arguments
/// * `attack_roll` - Value drawn from the actor's attack range for this hit
/// * `defense` - The monster's weapon defense
/// * `multiplier` - Skill damage percent / 100 (a 400% skill is 4.0)
pub fn hit_damage(attack_roll: u32, defense: u32, multiplier: f64) -> u64 {
    hit_damage_with_factor(attack_roll, defense, multiplier, DEFAULT_DEFENSE_FACTOR)
}

/// Same as [`hit_damage`] with a configurable defense factor
pub fn hit_damage_with_factor(
    attack_roll: u32,
    defense: u32,
    multiplier: f64,
    defense_factor: f64,
) -> u64 {
    let raw = ((attack_roll as f64 - defense_factor * defense as f64) * multiplier).floor();
    clamp_to_one(raw)
}

/// Damage of one DoT tick: a per-stack roll scaled by the active stack count
pub fn tick_damage(roll: f64, stacks: usize) -> u64 {
    clamp_to_one((roll * stacks as f64).floor())
}

fn clamp_to_one(raw: f64) -> u64 {
    if raw.is_nan() || raw < 1.0 {
        1
    } else {
        raw as u64
    }
}
