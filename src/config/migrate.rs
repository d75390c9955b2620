//! Keep an on-disk config file in step with the current `Config` struct.
//!
//! Older files simply lack the keys added later; serde fills those with
//! defaults at load time, and `config --migrate` writes them out for good.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config("default config is not a mapping".into())),
    }
}

fn file_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys known to the current version but absent from the file, in struct order.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let current = file_mapping(path)?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Existing values are never
/// touched. Returns the keys that were added.
pub fn run_config_migration(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let mut current = file_mapping(path)?;

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        tracing::info!(path = %path.display(), keys = ?added, "config migrated");
    }

    Ok(added)
}
