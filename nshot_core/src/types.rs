//! Core types shared across the simulator

use serde::{Deserialize, Serialize};

/// Primary character attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Str,
    Dex,
    Int,
    Luk,
}

impl Stat {
    /// Get all attributes in display order
    pub fn all() -> &'static [Stat] {
        &[Stat::Str, Stat::Dex, Stat::Int, Stat::Luk]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Str => "STR",
            Stat::Dex => "DEX",
            Stat::Int => "INT",
            Stat::Luk => "LUK",
        }
    }
}

/// Secondary attribute of a job
///
/// Thieves take STR and DEX together as their secondary stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryStat {
    Str,
    Dex,
    Int,
    Luk,
    StrDex,
}

impl SecondaryStat {
    pub fn label(&self) -> &'static str {
        match self {
            SecondaryStat::Str => "STR",
            SecondaryStat::Dex => "DEX",
            SecondaryStat::Int => "INT",
            SecondaryStat::Luk => "LUK",
            SecondaryStat::StrDex => "STR+DEX",
        }
    }
}

/// Job family, used for grouping and for venom availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Warrior,
    Mage,
    Archer,
    Thief,
    Pirate,
}

/// The four attribute values of a character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub str: u32,
    #[serde(default)]
    pub dex: u32,
    #[serde(default)]
    pub int: u32,
    #[serde(default)]
    pub luk: u32,
}

impl PlayerStats {
    pub fn new(str: u32, dex: u32, int: u32, luk: u32) -> Self {
        PlayerStats { str, dex, int, luk }
    }

    /// Get the value of a single attribute
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Str => self.str,
            Stat::Dex => self.dex,
            Stat::Int => self.int,
            Stat::Luk => self.luk,
        }
    }

    /// Mutable access to a single attribute
    pub fn get_mut(&mut self, stat: Stat) -> &mut u32 {
        match stat {
            Stat::Str => &mut self.str,
            Stat::Dex => &mut self.dex,
            Stat::Int => &mut self.int,
            Stat::Luk => &mut self.luk,
        }
    }

    /// Value of a secondary stat, summing STR and DEX where required
    pub fn secondary(&self, stat: SecondaryStat) -> u32 {
        match stat {
            SecondaryStat::Str => self.str,
            SecondaryStat::Dex => self.dex,
            SecondaryStat::Int => self.int,
            SecondaryStat::Luk => self.luk,
            SecondaryStat::StrDex => self.str.saturating_add(self.dex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_str_dex_sums() {
        let stats = PlayerStats::new(4, 25, 4, 500);
        assert_eq!(stats.secondary(SecondaryStat::StrDex), 29);
        assert_eq!(stats.secondary(SecondaryStat::Dex), 25);
    }

    #[test]
    fn test_get_mut_updates_stat() {
        let mut stats = PlayerStats::default();
        *stats.get_mut(Stat::Luk) += 10;
        assert_eq!(stats.get(Stat::Luk), 10);
        assert_eq!(stats.luk, 10);
    }
}
