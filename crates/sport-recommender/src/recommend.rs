//! Turning neighbour rankings into filtered, scored recommendations.
//!
//! [`recommend_with_model`] is the strict path and reports every failure.
//! [`RecommendationService`] sits behind user-facing code: it owns the current
//! model and answers with an empty list whenever no usable model is loaded.
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::catalog::SportCatalog;
use crate::config::RecommendOptions;
use crate::error::Result;
use crate::features::{PreferenceTags, SportFeatureRecord};
use crate::math::Array1;
use crate::model::SportModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub sport_name: String,
    /// Similarity in percent, 100 = same direction as the preferences.
    pub match_score: f64,
    pub source_record: SportFeatureRecord,
}

impl Recommendation {
    pub fn new(record: &SportFeatureRecord, match_score: f64) -> Self {
        Self {
            sport_name: record.name.clone(),
            match_score,
            source_record: record.clone(),
        }
    }
}

/// `(1 - distance) * 100`, clamped to `[0, 100]`.
pub fn match_score_from_distance(distance: f64) -> f64 {
    ((1.0 - distance) * 100.0).clamp(0.0, 100.0)
}

/// Rank the whole catalog for `vector` and apply exclusion, threshold and cap.
///
/// Sports are visited by ascending distance, so the result is already sorted
/// by descending match score.
pub fn recommend_with_model(
    model: &SportModel,
    vector: &Array1<f64>,
    options: &RecommendOptions,
) -> Result<Vec<Recommendation>> {
    let neighbors = model.rank(vector)?;
    let mut recommendations = Vec::with_capacity(options.max_results.min(neighbors.len()));

    for (distance, idx) in neighbors.iter() {
        if recommendations.len() >= options.max_results {
            break;
        }
        let record = &model.records()[idx];
        if options.exclude.contains(&record.name) {
            continue;
        }
        let match_score = match_score_from_distance(distance);
        // A NaN score or threshold fails this comparison.
        let passes = match_score >= options.min_match_score;
        if !passes {
            continue;
        }
        recommendations.push(Recommendation::new(record, match_score));
    }

    log::debug!(
        "{} of {} sports passed the filters (min score {:.1}, max {})",
        recommendations.len(),
        neighbors.len(),
        options.min_match_score,
        options.max_results
    );
    Ok(recommendations)
}

/// Process-wide holder of the current model.
///
/// Readers clone the `Arc` and work on their own snapshot, so a refresh via
/// [`RecommendationService::replace_model`] never disturbs in-flight requests.
#[derive(Debug, Default)]
pub struct RecommendationService {
    model: RwLock<Option<Arc<SportModel>>>,
}

impl RecommendationService {
    pub fn new(model: SportModel) -> Self {
        Self {
            model: RwLock::new(Some(Arc::new(model))),
        }
    }

    /// A service without a model; every request returns no recommendations.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Load a saved model, staying unloaded if the artifact is missing or invalid.
    pub fn from_artifact<P: AsRef<Path>>(path: P) -> Self {
        match SportModel::load(&path) {
            Ok(model) => Self::new(model),
            Err(e) => {
                log::warn!("KNN model unavailable: {:#}", e);
                Self::unloaded()
            }
        }
    }

    /// Train on a catalog, staying unloaded if the catalog cannot be fitted.
    pub fn from_catalog(catalog: &SportCatalog) -> Self {
        match SportModel::train(catalog) {
            Ok(model) => Self::new(model),
            Err(e) => {
                log::warn!("KNN model unavailable: {}", e);
                Self::unloaded()
            }
        }
    }

    /// Swap in a new model and return the previous one.
    pub fn replace_model(&self, model: SportModel) -> Option<Arc<SportModel>> {
        let mut guard = self.model.write().unwrap_or_else(|e| e.into_inner());
        guard.replace(Arc::new(model))
    }

    pub fn clear(&self) -> Option<Arc<SportModel>> {
        let mut guard = self.model.write().unwrap_or_else(|e| e.into_inner());
        guard.take()
    }

    pub fn model(&self) -> Option<Arc<SportModel>> {
        self.model
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_ready(&self) -> bool {
        self.model().is_some()
    }

    /// Recommendations for a set of filter tags; empty when no model is loaded.
    pub fn recommend(&self, tags: &PreferenceTags, options: &RecommendOptions) -> Vec<Recommendation> {
        self.recommend_vector(&tags.to_vector(), options)
    }

    pub fn recommend_vector(
        &self,
        vector: &Array1<f64>,
        options: &RecommendOptions,
    ) -> Vec<Recommendation> {
        let Some(model) = self.model() else {
            log::warn!("No KNN model loaded; returning no recommendations");
            return Vec::new();
        };
        match recommend_with_model(&model, vector, options) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                log::warn!("Recommendation failed, returning none: {}", e);
                Vec::new()
            }
        }
    }
}
