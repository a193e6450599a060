use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a current configuration file carries.
pub const CONFIG_KEYS: [&str; 7] = [
    "database",
    "trend_days",
    "export_dir",
    "summary_model",
    "summary_endpoint",
    "summary_api_key_env",
    "summary_timeout_secs",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read config {:?}: {}", path, e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "Config {:?} is not a YAML mapping",
            path
        ))),
    }
}

/// Keys missing from the configuration file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Add every missing key with its default value, keeping existing values.
/// Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in CONFIG_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k)
            && let Some(v) = defaults.get(&k)
        {
            map.insert(k, v.clone());
            added.push(key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized)
            .map_err(|e| AppError::Config(format!("Failed to write config {:?}: {}", path, e)))?;

        success(format!(
            "Configuration migrated: added {}.",
            added.join(", ")
        ));
    }

    Ok(added)
}
