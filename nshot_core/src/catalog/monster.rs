//! Monster records

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// A monster as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    pub level: u32,
    /// Area used to group monsters for display
    #[serde(default)]
    pub area: String,
    pub hp: u64,
    pub weapon_def: u32,
    #[serde(default)]
    pub magic_def: u32,
}

impl Monster {
    /// Ad-hoc target with only the fields the simulator reads
    pub fn target(hp: u64, weapon_def: u32) -> Self {
        Monster {
            id: "target".to_string(),
            name: "Target".to_string(),
            name_en: "Target".to_string(),
            level: 1,
            area: String::new(),
            hp,
            weapon_def,
            magic_def: 0,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.hp == 0 {
            return Err(SimulationError::InvalidMonster(format!(
                "'{}' has no hit points",
                self.id
            )));
        }
        Ok(())
    }

    /// Display label, e.g. "Goby [Lv.85]"
    pub fn label(&self) -> String {
        let name = if self.name_en.is_empty() { &self.name } else { &self.name_en };
        format!("{} [Lv.{}]", name, self.level)
    }
}
