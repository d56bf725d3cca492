use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use crate::util::{load_or_default, read_partial_config, validate_catalog_file};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TrainConfig {
    pub version: String,
    pub catalog: String,
    pub model_path: String,
    pub name_column: Option<String>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            version: clap::crate_version!().to_string(),
            catalog: String::new(),
            model_path: "knn_recommender.json".to_string(),
            name_column: None,
        }
    }
}

impl TrainConfig {
    /// Build the training config from an optional JSON file, then apply
    /// command-line overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = TrainConfig::default();

        if let Some(path) = config_path {
            let partial = read_partial_config(path)?;
            load_or_default(&partial, "version", &mut config.version);
            load_or_default(&partial, "catalog", &mut config.catalog);
            load_or_default(&partial, "model_path", &mut config.model_path);
            load_or_default(&partial, "name_column", &mut config.name_column);
        }

        if let Some(catalog) = matches.get_one::<String>("catalog") {
            config.catalog = catalog.clone();
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.model_path = output_file.clone();
        }
        if let Some(name_column) = matches.get_one::<String>("name_column") {
            config.name_column = Some(name_column.clone());
        }

        validate_catalog_file(&config.catalog)?;

        Ok(config)
    }
}
