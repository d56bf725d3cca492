//! Brute-force nearest-neighbour search under cosine distance.
//!
//! The catalog holds a few hundred sports, so every query is compared against
//! every stored row. Results are exact and deterministic: ascending distance,
//! ties resolved by row order.

use serde::{Deserialize, Serialize};

use crate::error::{RecommenderError, Result};
use crate::math::{cosine_distance, Array2};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct FittedIndex {
    data: Array2<f64>,
    labels: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestNeighbors {
    fitted: Option<FittedIndex>,
}

/// Neighbours of one query, closest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbors {
    pub distances: Vec<f64>,
    pub indices: Vec<usize>,
}

impl Neighbors {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// `(distance, row index)` pairs in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.distances
            .iter()
            .copied()
            .zip(self.indices.iter().copied())
    }
}

impl NearestNeighbors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the (already standardized) matrix and one label per row.
    pub fn fit(&mut self, data: Array2<f64>, labels: Vec<String>) -> Result<()> {
        if data.nrows() == 0 {
            return Err(RecommenderError::DegenerateInput("NearestNeighbors"));
        }
        if labels.len() != data.nrows() {
            return Err(RecommenderError::LengthMismatch {
                rows: data.nrows(),
                labels: labels.len(),
            });
        }
        self.fitted = Some(FittedIndex { data, labels });
        Ok(())
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Number of stored rows, 0 before `fit`.
    pub fn n_samples(&self) -> usize {
        self.fitted.as_ref().map_or(0, |f| f.data.nrows())
    }

    pub fn n_features(&self) -> Option<usize> {
        self.fitted.as_ref().map(|f| f.data.ncols())
    }

    pub fn labels(&self) -> &[String] {
        match &self.fitted {
            Some(fitted) => &fitted.labels,
            None => &[],
        }
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.labels().get(idx).map(String::as_str)
    }

    /// Return the `k` rows closest to `query`.
    pub fn kneighbors(&self, query: &[f64], k: usize) -> Result<Neighbors> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or(RecommenderError::NotFitted("NearestNeighbors"))?;
        let n_samples = fitted.data.nrows();
        if k == 0 || k > n_samples {
            return Err(RecommenderError::InvalidQuery { k, n_samples });
        }
        if query.len() != fitted.data.ncols() {
            return Err(RecommenderError::DimensionMismatch {
                expected: fitted.data.ncols(),
                found: query.len(),
            });
        }

        let mut scored: Vec<(f64, usize)> = fitted
            .data
            .rows()
            .enumerate()
            .map(|(idx, row)| (cosine_distance(query, row), idx))
            .collect();
        // Stable sort keeps catalog order among equal distances.
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored.truncate(k);

        let (distances, indices) = scored.into_iter().unzip();
        Ok(Neighbors { distances, indices })
    }
}
