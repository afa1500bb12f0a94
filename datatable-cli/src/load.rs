//! Loading configuration and data files.

use std::fs;
use std::path::Path;

use datatable_lib::{TableConfig, TableError};
use serde_json::Value;

use crate::error::{CliError, Result};
use crate::paths;

/// Load the table configuration.
///
/// An explicit path must exist. Without one, `config.json` in the config
/// directory is used when present, else the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<TableConfig> {
    let config = match explicit {
        Some(path) => read_config(path)?,
        None => match paths::config_file() {
            Some(path) if path.is_file() => read_config(&path)?,
            _ => {
                log::debug!("No config file found, using defaults");
                TableConfig::default()
            }
        },
    };
    config.validate().map_err(TableError::from)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<TableConfig> {
    log::info!("Loading config from {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    serde_json::from_str(&text).map_err(|e| CliError::json(path, e))
}

/// Load a JSON array of objects.
pub fn load_rows(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| CliError::json(path, e))?;
    let Value::Array(rows) = value else {
        return Err(CliError::NotAnArray { path: path.into() });
    };
    if !rows.iter().all(Value::is_object) {
        return Err(CliError::NotAnArray { path: path.into() });
    }
    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Column paths taken from the keys of the first record.
pub fn infer_columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}
