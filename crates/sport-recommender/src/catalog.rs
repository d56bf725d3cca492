//! The set of sports available for recommendation.
use std::collections::HashSet;

use crate::error::{RecommenderError, Result};
use crate::features::{SportFeatureRecord, N_FEATURES};
use crate::math::Array2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SportCatalog {
    records: Vec<SportFeatureRecord>,
}

impl SportCatalog {
    /// Build a catalog, dropping sports without any feature signal.
    ///
    /// An all-zero row has no direction, so it could never be ranked by
    /// cosine distance. Sport names must be unique and every feature must lie
    /// in `[0, 1]`.
    pub fn new(records: Vec<SportFeatureRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(RecommenderError::DuplicateSport(record.name.clone()));
            }
            record.check_range()?;
        }

        let total = records.len();
        let (records, dropped): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|record| record.has_signal());
        if !dropped.is_empty() {
            let names: Vec<&str> = dropped.iter().map(|r| r.name.as_str()).collect();
            log::info!(
                "Filtering out {} sports with no features: {:?}",
                dropped.len(),
                names
            );
        }
        log::debug!("Catalog keeps {} of {} sports", records.len(), total);

        Ok(Self { records })
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

    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|record| record.name.clone()).collect()
    }

    /// Raw feature matrix, one row per sport in catalog order.
    pub fn feature_matrix(&self) -> Array2<f64> {
        Array2::from_rows(N_FEATURES, self.records.iter().map(|record| record.features))
            .expect("catalog rows always have N_FEATURES columns")
    }
}
