//! Per-feature standardization.
//!
//! `StandardScaler` learns column means and (population) standard deviations
//! from the catalog matrix and maps vectors to zero-mean, unit-variance space.
//! The instance fitted on the catalog must also transform every query.

use serde::{Deserialize, Serialize};

use crate::error::{RecommenderError, Result};
use crate::math::{Array1, Array2};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct ScalerParams {
    mean: Vec<f64>,
    std: Vec<f64>,
}

/// Mean/std standard scaler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    params: Option<ScalerParams>,
}

impl StandardScaler {
    /// Columns with a standard deviation below this are left unscaled.
    const MIN_STD: f64 = 1e-12;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    pub fn n_features(&self) -> Option<usize> {
        self.params.as_ref().map(|p| p.mean.len())
    }

    pub fn mean(&self) -> Option<&[f64]> {
        self.params.as_ref().map(|p| p.mean.as_slice())
    }

    pub fn std(&self) -> Option<&[f64]> {
        self.params.as_ref().map(|p| p.std.as_slice())
    }

    /// Fit column statistics on `x` (rows are samples).
    ///
    /// A zero-variance column keeps a std of 1.0, so it transforms to all
    /// zeros instead of dividing by zero.
    pub fn fit(&mut self, x: &Array2<f64>) -> Result<()> {
        let (nrows, ncols) = x.shape();
        if nrows == 0 || ncols == 0 {
            return Err(RecommenderError::DegenerateInput("StandardScaler"));
        }

        let mut mean = vec![0.0f64; ncols];
        for row in x.rows() {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        let nrows_f = nrows as f64;
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut var = vec![0.0f64; ncols];
        for row in x.rows() {
            for c in 0..ncols {
                let d = row[c] - mean[c];
                var[c] += d * d;
            }
        }
        let std = var
            .into_iter()
            .map(|v| {
                let s = (v / nrows_f).sqrt();
                if s < Self::MIN_STD {
                    1.0
                } else {
                    s
                }
            })
            .collect();

        self.params = Some(ScalerParams { mean, std });
        Ok(())
    }

    /// Standardize a single vector with the fitted parameters.
    pub fn transform(&self, x: &[f64]) -> Result<Array1<f64>> {
        let params = self.fitted()?;
        if x.len() != params.mean.len() {
            return Err(RecommenderError::DimensionMismatch {
                expected: params.mean.len(),
                found: x.len(),
            });
        }
        Ok(x
            .iter()
            .zip(params.mean.iter().zip(params.std.iter()))
            .map(|(v, (m, s))| (v - m) / s)
            .collect())
    }

    /// Transform all rows and return a new matrix.
    pub fn transform_all(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let params = self.fitted()?;
        let (nrows, ncols) = x.shape();
        if ncols != params.mean.len() {
            return Err(RecommenderError::DimensionMismatch {
                expected: params.mean.len(),
                found: ncols,
            });
        }

        let mut out = Vec::with_capacity(nrows * ncols);
        for row in x.rows() {
            for c in 0..ncols {
                out.push((row[c] - params.mean[c]) / params.std[c]);
            }
        }
        // Shape is preserved from `x`.
        Ok(Array2::from_shape_vec((nrows, ncols), out).expect("transform_all: shape mismatch"))
    }

    /// Fit on `x` and return it transformed.
    pub fn fit_transform(&mut self, x: &Array2<f64>) -> Result<Array2<f64>> {
        self.fit(x)?;
        self.transform_all(x)
    }

    fn fitted(&self) -> Result<&ScalerParams> {
        self.params
            .as_ref()
            .ok_or(RecommenderError::NotFitted("StandardScaler"))
    }
}
