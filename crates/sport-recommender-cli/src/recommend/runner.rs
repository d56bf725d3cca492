use std::io;

use anyhow::Result;
use sport_recommender::io::read_catalog;
use sport_recommender::{Recommendation, RecommendationService};

use crate::recommend::input::RecommendConfig;
use crate::recommend::output::{build_rows, write_delimited, write_recommendations};

/// An explicit catalog must load; a missing or invalid model artifact only
/// leaves the service unloaded.
fn build_service(config: &RecommendConfig) -> Result<RecommendationService> {
    let service = match &config.catalog {
        Some(catalog) => RecommendationService::from_catalog(&read_catalog(catalog)?),
        None => RecommendationService::from_artifact(&config.model_path),
    };
    Ok(service)
}

/// Answer one preference query and write the result to the configured
/// output file, or to stdout as TSV.
pub fn run_recommend(config: &RecommendConfig) -> Result<Vec<Recommendation>> {
    let service = build_service(config)?;
    if !service.is_ready() {
        log::warn!("No recommender model available, returning no recommendations");
    }

    let recommendations = service.recommend(&config.preferences, &config.options);
    log::info!(
        "{} recommendations for focus={:?} intensity={:?} setting={:?}",
        recommendations.len(),
        config.preferences.focus,
        config.preferences.intensity,
        config.preferences.setting
    );

    let user = config.preferences.to_vector();
    let rows = build_rows(&recommendations, &user, config.explain);
    match &config.output_file {
        Some(path) => write_recommendations(&rows, path)?,
        None if rows.is_empty() => {}
        None => write_delimited(&rows, io::stdout().lock(), b'\t')?,
    }

    Ok(recommendations)
}
