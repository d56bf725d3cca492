//! Small dense containers and the cosine distance used by the neighbour index.
//!
//! `Array2` holds the catalog feature matrix (rows are sports, columns are
//! features) and `Array1` a single feature vector. Both serialize so a fitted
//! index can be written to and restored from a model artifact.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::{Array1, NORM_EPSILON};

/// Distance assigned when either vector has (near) zero norm.
///
/// Cosine similarity is undefined there; `1.0` maps to a match score of 0.
pub const ZERO_NORM_DISTANCE: f64 = 1.0;

/// Cosine distance `1 - a.b / (|a| |b|)`, in `[0, 2]`.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "cosine distance requires equal lengths");
    let norm_a = vector::norm(a);
    let norm_b = vector::norm(b);
    if norm_a < NORM_EPSILON || norm_b < NORM_EPSILON {
        return ZERO_NORM_DISTANCE;
    }
    let similarity = (vector::dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0);
    1.0 - similarity
}
