use crate::error::{RankError, Result};
use crate::types::config::RankConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "reporank.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/reporank/config.toml";

/// Loads the global config, then `explicit` (which must exist) or
/// `./reporank.toml` on top of it.
pub fn load_config(explicit: Option<&Path>) -> Result<RankConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let project = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RankError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    load_config_with_global(&project, global.as_deref())
}

pub(crate) fn load_config_with_global(
    project_path: &Path,
    global_path: Option<&Path>,
) -> Result<RankConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, project_path)?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| RankError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RankError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
