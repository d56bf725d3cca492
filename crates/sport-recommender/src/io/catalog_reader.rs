//! Catalog readers for CSV/TSV exports and JSON dumps of the sports view.
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;
use serde_json::Value;

use crate::catalog::SportCatalog;
use crate::features::{SportFeatureRecord, FEATURE_NAMES, N_FEATURES};

/// Header names tried, in order, when no name column is configured.
const NAME_COLUMN_CANDIDATES: [&str; 3] = ["name", "sport", "Angebot"];

/// Configuration for reading catalog files.
#[derive(Debug, Clone, Default)]
pub struct CatalogReaderConfig {
    /// Column (or JSON key) holding the sport name.
    pub name_column: Option<String>,
    /// Field delimiter; inferred from the file extension when `None`.
    pub delimiter: Option<u8>,
}

/// Read a catalog from `.json`, `.tsv` or `.csv` and build a `SportCatalog`.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<SportCatalog> {
    read_catalog_with_config(path, &CatalogReaderConfig::default())
}

pub fn read_catalog_with_config<P: AsRef<Path>>(
    path: P,
    config: &CatalogReaderConfig,
) -> Result<SportCatalog> {
    let path = path.as_ref();
    let records = match extension(path).as_deref() {
        Some("json") => read_catalog_json_with_config(path, config)?,
        _ => read_catalog_csv_with_config(path, config)?,
    };
    log::info!("Loaded {} sports from {}", records.len(), path.display());
    let catalog = SportCatalog::new(records)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;
    Ok(catalog)
}

/// Read a CSV/TSV catalog file.
pub fn read_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SportFeatureRecord>> {
    read_catalog_csv_with_config(path, &CatalogReaderConfig::default())
}

/// Read a CSV/TSV catalog file using a custom configuration.
///
/// Feature columns are looked up by name; a missing column or an empty cell
/// reads as 0.0.
pub fn read_catalog_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &CatalogReaderConfig,
) -> Result<Vec<SportFeatureRecord>> {
    let path = path.as_ref();
    let delimiter = config.delimiter.unwrap_or_else(|| match extension(path).as_deref() {
        Some("tsv") => b'\t',
        _ => b',',
    });

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read catalog header row")?
        .clone();

    let name_idx = match &config.name_column {
        Some(name) => find_column(&headers, name)
            .ok_or_else(|| anyhow!("Missing name column '{}'", name))?,
        None => find_any_column(&headers, &NAME_COLUMN_CANDIDATES).ok_or_else(|| {
            anyhow!(
                "No name column found, expected one of {:?}",
                NAME_COLUMN_CANDIDATES
            )
        })?,
    };

    let feature_indices: Vec<Option<usize>> = FEATURE_NAMES
        .iter()
        .map(|name| {
            let idx = find_column(&headers, name);
            if idx.is_none() {
                log::warn!("Catalog has no '{}' column, defaulting to 0.0", name);
            }
            idx
        })
        .collect();

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let name = record.get(name_idx).unwrap_or_default().trim();
        if name.is_empty() {
            log::warn!("Skipping row {} without a sport name", row_idx + 1);
            continue;
        }

        let mut features = [0.0; N_FEATURES];
        for (feature, idx) in feature_indices.iter().enumerate() {
            let Some(idx) = idx else { continue };
            let raw = record.get(*idx).unwrap_or_default();
            features[feature] = parse_feature(raw).with_context(|| {
                format!(
                    "Invalid feature '{}' at row {}",
                    FEATURE_NAMES[feature],
                    row_idx + 1
                )
            })?;
        }
        records.push(SportFeatureRecord::new(name, features));
    }

    Ok(records)
}

/// Read a JSON array of sport objects.
pub fn read_catalog_json<P: AsRef<Path>>(path: P) -> Result<Vec<SportFeatureRecord>> {
    read_catalog_json_with_config(path, &CatalogReaderConfig::default())
}

/// Read a JSON array of sport objects, as returned by the sports view.
///
/// Absent or `null` features read as 0.0; other keys are ignored.
pub fn read_catalog_json_with_config<P: AsRef<Path>>(
    path: P,
    config: &CatalogReaderConfig,
) -> Result<Vec<SportFeatureRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let rows: Vec<serde_json::Map<String, Value>> = serde_json::from_str(&content)
        .with_context(|| format!("Catalog must be a JSON array of objects: {}", path.display()))?;

    let mut records = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let name = match &config.name_column {
            Some(key) => lookup(row, key),
            None => NAME_COLUMN_CANDIDATES.iter().find_map(|key| lookup(row, key)),
        }
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();
        if name.is_empty() {
            log::warn!("Skipping entry {} without a sport name", row_idx + 1);
            continue;
        }

        let mut features = [0.0; N_FEATURES];
        for (feature, key) in FEATURE_NAMES.iter().enumerate() {
            features[feature] = match lookup(row, key) {
                None | Some(Value::Null) => 0.0,
                Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
                Some(Value::Bool(b)) => f64::from(u8::from(*b)),
                Some(Value::String(s)) => parse_feature(s).with_context(|| {
                    format!("Invalid feature '{}' at entry {}", key, row_idx + 1)
                })?,
                Some(other) => bail!(
                    "Invalid feature '{}' at entry {}: {}",
                    key,
                    row_idx + 1,
                    other
                ),
            };
        }
        records.push(SportFeatureRecord::new(name, features));
    }

    Ok(records)
}

fn parse_feature(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return Ok(0.0);
    }
    let value = raw
        .parse::<f64>()
        .with_context(|| format!("'{}' is not a number", raw))?;
    // NaN marks a missing value in exported spreadsheets.
    if value.is_nan() {
        return Ok(0.0);
    }
    if !value.is_finite() {
        bail!("'{}' is not finite", raw);
    }
    Ok(value)
}

fn lookup<'a>(row: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    row.get(key).or_else(|| {
        row.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn find_any_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|name| find_column(headers, name))
}
