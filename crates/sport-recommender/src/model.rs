//! The fitted scaler + index pair and its on-disk artifact.
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};

use crate::catalog::SportCatalog;
use crate::error::{RecommenderError, Result};
use crate::features::{feature_names, SportFeatureRecord, FEATURE_NAMES, N_FEATURES};
use crate::index::{NearestNeighbors, Neighbors};
use crate::math::Array1;
use crate::preprocessing::StandardScaler;
use crate::recommend::{match_score_from_distance, Recommendation};

/// A KNN sport model: the scaler fitted on the catalog, the index over the
/// standardized catalog, and the source records in index row order.
///
/// Treated as immutable once trained; a catalog refresh trains a new model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportModel {
    feature_names: Vec<String>,
    scaler: StandardScaler,
    index: NearestNeighbors,
    records: Vec<SportFeatureRecord>,
}

impl SportModel {
    /// Fit the scaler on the catalog and index the standardized rows.
    pub fn train(catalog: &SportCatalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommenderError::DegenerateInput("SportModel"));
        }

        let x = catalog.feature_matrix();
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&x)?;

        let mut index = NearestNeighbors::new();
        index.fit(scaled, catalog.names())?;

        log::info!("KNN model trained with {} sports", catalog.len());
        Ok(Self {
            feature_names: feature_names(),
            scaler,
            index,
            records: catalog.records().to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SportFeatureRecord] {
        &self.records
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn index(&self) -> &NearestNeighbors {
        &self.index
    }

    /// Check the invariants a deserialized artifact must hold.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(RecommenderError::FeatureOrderMismatch {
                expected: feature_names(),
                found: self.feature_names.clone(),
            });
        }
        if !self.scaler.is_fitted() {
            return Err(RecommenderError::NotFitted("StandardScaler"));
        }
        if !self.index.is_fitted() {
            return Err(RecommenderError::NotFitted("NearestNeighbors"));
        }
        for width in [self.scaler.n_features(), self.index.n_features()] {
            if width != Some(N_FEATURES) {
                return Err(RecommenderError::DimensionMismatch {
                    expected: N_FEATURES,
                    found: width.unwrap_or(0),
                });
            }
        }
        for record in &self.records {
            record.check_range()?;
        }
        if self.index.n_samples() != self.records.len() {
            return Err(RecommenderError::LengthMismatch {
                rows: self.index.n_samples(),
                labels: self.records.len(),
            });
        }
        Ok(())
    }

    /// Standardize a raw preference vector.
    ///
    /// A vector without signal stays the zero vector, so the index answers
    /// with its zero-norm fallback instead of matching against `-mean/std`.
    pub fn scale_query(&self, vector: &Array1<f64>) -> Result<Array1<f64>> {
        if vector.len() != N_FEATURES {
            return Err(RecommenderError::DimensionMismatch {
                expected: N_FEATURES,
                found: vector.len(),
            });
        }
        if vector.is_zero() {
            log::debug!("Preference vector has no signal; every sport gets the fallback distance");
            return Ok(Array1::zeros(N_FEATURES));
        }
        self.scaler.transform(vector.as_slice())
    }

    /// Rank every sport of the catalog against a raw preference vector.
    pub fn rank(&self, vector: &Array1<f64>) -> Result<Neighbors> {
        let query = self.scale_query(vector)?;
        self.index.kneighbors(query.as_slice(), self.len())
    }

    /// The `k` closest sports with their match scores, without any filtering.
    pub fn nearest(&self, vector: &Array1<f64>, k: usize) -> Result<Vec<Recommendation>> {
        let query = self.scale_query(vector)?;
        let neighbors = self.index.kneighbors(query.as_slice(), k)?;
        Ok(neighbors
            .iter()
            .map(|(distance, idx)| {
                Recommendation::new(&self.records[idx], match_score_from_distance(distance))
            })
            .collect())
    }

    /// Write the model as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AnyResult<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create model file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to serialize model to {}", path.display()))?;
        writer.flush()?;
        log::info!("Saved KNN model to {}", path.display());
        Ok(())
    }

    /// Load and validate a model written by [`SportModel::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open model file: {}", path.display()))?;
        let model: SportModel = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse model file: {}", path.display()))?;
        model
            .validate()
            .with_context(|| format!("Invalid model file: {}", path.display()))?;
        log::info!(
            "Loaded KNN model with {} sports from {}",
            model.len(),
            path.display()
        );
        Ok(model)
    }
}
