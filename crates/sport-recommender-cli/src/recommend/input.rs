use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use sport_recommender::features::PreferenceTags;
use sport_recommender::RecommendOptions;

use crate::util::{load_or_default, read_partial_config, validate_catalog_file};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecommendConfig {
    pub version: String,
    pub model_path: String,
    /// Train an in-memory model from this catalog instead of loading `model_path`.
    pub catalog: Option<String>,
    pub preferences: PreferenceTags,
    pub options: RecommendOptions,
    pub output_file: Option<String>,
    pub explain: bool,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            version: clap::crate_version!().to_string(),
            model_path: "knn_recommender.json".to_string(),
            catalog: None,
            preferences: PreferenceTags::default(),
            options: RecommendOptions::default(),
            output_file: None,
            explain: false,
        }
    }
}

fn collect_values(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(id)
        .map(|values| values.map(|v| v.trim().to_string()).collect())
}

impl RecommendConfig {
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = RecommendConfig::default();

        if let Some(path) = config_path {
            let partial = read_partial_config(path)?;
            load_or_default(&partial, "version", &mut config.version);
            load_or_default(&partial, "model_path", &mut config.model_path);
            load_or_default(&partial, "catalog", &mut config.catalog);
            load_or_default(&partial, "preferences", &mut config.preferences);
            load_or_default(&partial, "options", &mut config.options);
            load_or_default(&partial, "output_file", &mut config.output_file);
            load_or_default(&partial, "explain", &mut config.explain);
        }

        if let Some(model_path) = matches.get_one::<String>("model_path") {
            config.model_path = model_path.clone();
        }
        if let Some(catalog) = matches.get_one::<String>("catalog") {
            config.catalog = Some(catalog.clone());
        }
        if let Some(focus) = collect_values(matches, "focus") {
            config.preferences.focus = focus;
        }
        if let Some(intensity) = collect_values(matches, "intensity") {
            config.preferences.intensity = intensity;
        }
        if let Some(setting) = collect_values(matches, "setting") {
            config.preferences.setting = setting;
        }
        if let Some(min_score) = matches.get_one::<f64>("min_score") {
            config.options.min_match_score = *min_score;
        }
        if let Some(max_results) = matches.get_one::<usize>("max_results") {
            config.options.max_results = *max_results;
        }
        if let Some(exclude) = collect_values(matches, "exclude") {
            config.options.exclude.extend(exclude);
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = Some(output_file.clone());
        }
        if matches.get_flag("explain") {
            config.explain = true;
        }

        if !config.options.min_match_score.is_finite() {
            anyhow::bail!(
                "min_match_score must be a finite number, got {}",
                config.options.min_match_score
            );
        }
        if let Some(catalog) = &config.catalog {
            validate_catalog_file(catalog)?;
        }

        Ok(config)
    }
}
