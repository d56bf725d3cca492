use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Check that a catalog path exists and has a supported extension.
pub fn validate_catalog_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") | Some("json") => {}
        _ => anyhow::bail!("Catalog must have a .tsv, .csv or .json extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Read a JSON config file as an untyped value so fields can be loaded one by one.
pub fn read_partial_config(path: &Path) -> Result<Value> {
    let config_json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let partial: Value = serde_json::from_str(&config_json)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(partial)
}

/// Overwrite `target` with `partial[field]` when present and valid, otherwise
/// keep the default and warn.
pub fn load_or_default<T>(partial: &Value, field: &str, target: &mut T)
where
    T: DeserializeOwned + Debug,
{
    match partial.get(field) {
        Some(val) => match serde_json::from_value(val.clone()) {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!(
                "Config Invalid value for '{}', using default: {:?}",
                field,
                target
            ),
        },
        None => log::warn!(
            "Config Missing field '{}', using default: {:?}",
            field,
            target
        ),
    }
}
