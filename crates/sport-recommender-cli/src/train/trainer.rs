use std::time::Instant;

use anyhow::{Context, Result};
use sport_recommender::io::{read_catalog_with_config, CatalogReaderConfig};
use sport_recommender::SportModel;

use crate::train::input::TrainConfig;

/// Read the catalog, fit scaler and index, and write the model artifact.
pub fn run_training(config: &TrainConfig) -> Result<SportModel> {
    let reader_config = CatalogReaderConfig {
        name_column: config.name_column.clone(),
        ..Default::default()
    };
    let catalog = read_catalog_with_config(&config.catalog, &reader_config)?;

    let start = Instant::now();
    let model = SportModel::train(&catalog)
        .with_context(|| format!("Failed to train KNN model on {}", config.catalog))?;
    log::info!(
        "Trained KNN model on {} sports in {:.2?}",
        model.len(),
        start.elapsed()
    );

    model.save(&config.model_path)?;
    Ok(model)
}
