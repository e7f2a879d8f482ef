//! Class configuration loading

use super::ConfigError;
use crate::item::ClassItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for class definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassesConfig {
    pub classes: Vec<ClassItem>,
}

/// Load class definitions from a TOML file
pub fn load_class_configs(path: &Path) -> Result<HashMap<String, ClassItem>, ConfigError> {
    let config: ClassesConfig = super::load_toml(path)?;
    index_classes(config)
}

/// Load class definitions from a TOML string
pub fn parse_class_configs(content: &str) -> Result<HashMap<String, ClassItem>, ConfigError> {
    let config: ClassesConfig = super::parse_toml(content)?;
    index_classes(config)
}

fn index_classes(config: ClassesConfig) -> Result<HashMap<String, ClassItem>, ConfigError> {
    let mut map = HashMap::new();
    for class in config.classes {
        let id = class.id.0.clone();
        if map.insert(id.clone(), class).is_some() {
            return Err(ConfigError::ValidationError(format!(
                "duplicate class id: {id}"
            )));
        }
    }
    Ok(map)
}

/// Get the shipped starter classes
pub fn default_classes() -> HashMap<String, ClassItem> {
    let toml = include_str!("../../config/classes.toml");
    parse_class_configs(toml).unwrap_or_default()
}
