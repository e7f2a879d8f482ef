//! Skill configuration loading

use super::ConfigError;
use crate::item::SkillItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for skill definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    pub skills: Vec<SkillItem>,
}

/// Load skill definitions from a TOML file
pub fn load_skill_configs(path: &Path) -> Result<HashMap<String, SkillItem>, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    index_skills(config)
}

/// Load skill definitions from a TOML string
pub fn parse_skill_configs(content: &str) -> Result<HashMap<String, SkillItem>, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    index_skills(config)
}

fn index_skills(config: SkillsConfig) -> Result<HashMap<String, SkillItem>, ConfigError> {
    let mut map = HashMap::new();
    for skill in config.skills {
        let id = skill.id.0.clone();
        if map.insert(id.clone(), skill).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "duplicate skill id: {id}"
            )));
        }
    }
    Ok(map)
}

/// Get the shipped starter skills
pub fn default_skills() -> HashMap<String, SkillItem> {
    let toml = include_str!("../../config/skills.toml");
    parse_skill_configs(toml).unwrap_or_default()
}
