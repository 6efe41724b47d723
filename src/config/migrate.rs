//! Keeps configuration files written by older versions usable: reports
//! missing keys and fills them with defaults without touching set values.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Current defaults as a YAML mapping.
fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let yaml: Value = serde_yaml::from_str(&content)?;
    yaml.as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))
}

/// Keys the file lacks compared to the current defaults.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys with default values.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut changed = false;

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            current.insert(key, value);
            changed = true;
        }
    }

    if changed {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, serialized)?;
    }

    Ok(changed)
}
