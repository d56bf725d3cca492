//! Integration tests for the brute-force cosine NearestNeighbors index.

use sport_recommender::error::RecommenderError;
use sport_recommender::index::NearestNeighbors;
use sport_recommender::math::{Array2, ZERO_NORM_DISTANCE};

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("sport_{}", i)).collect()
}

fn fitted(rows: &[[f64; 2]]) -> NearestNeighbors {
    let data = Array2::from_rows(2, rows.iter()).unwrap();
    let mut index = NearestNeighbors::new();
    index.fit(data, labels(rows.len())).unwrap();
    index
}

// ---------------------------------------------------------------------------
// fit
// ---------------------------------------------------------------------------

#[test]
fn fit_on_zero_rows_is_degenerate() {
    let mut index = NearestNeighbors::new();
    let data = Array2::<f64>::from_shape_vec((0, 2), vec![]).unwrap();
    assert!(matches!(
        index.fit(data, vec![]),
        Err(RecommenderError::DegenerateInput(_))
    ));
    assert!(!index.is_fitted());
}

#[test]
fn fit_requires_one_label_per_row() {
    let mut index = NearestNeighbors::new();
    let data = Array2::from_shape_vec((2, 2), vec![1.0, 0.0, 0.0, 1.0]).unwrap();
    assert!(matches!(
        index.fit(data, labels(3)),
        Err(RecommenderError::LengthMismatch { rows: 2, labels: 3 })
    ));
}

#[test]
fn fit_stores_matrix_and_labels() {
    let index = fitted(&[[1.0, 0.0], [0.0, 1.0]]);
    assert_eq!(index.n_samples(), 2);
    assert_eq!(index.n_features(), Some(2));
    assert_eq!(index.label(1), Some("sport_1"));
    assert_eq!(index.label(2), None);
}

// ---------------------------------------------------------------------------
// kneighbors
// ---------------------------------------------------------------------------

#[test]
fn query_before_fit_fails() {
    let index = NearestNeighbors::new();
    assert!(matches!(
        index.kneighbors(&[1.0, 0.0], 1),
        Err(RecommenderError::NotFitted(_))
    ));
}

#[test]
fn k_outside_catalog_size_is_invalid() {
    let index = fitted(&[[1.0, 0.0], [0.0, 1.0]]);
    assert!(matches!(
        index.kneighbors(&[1.0, 0.0], 0),
        Err(RecommenderError::InvalidQuery { k: 0, n_samples: 2 })
    ));
    assert!(matches!(
        index.kneighbors(&[1.0, 0.0], 3),
        Err(RecommenderError::InvalidQuery { k: 3, n_samples: 2 })
    ));
}

#[test]
fn neighbours_sorted_by_ascending_cosine_distance() {
    let index = fitted(&[[-1.0, 0.0], [1.0, 1.0], [1.0, 0.1], [0.0, 1.0]]);
    let result = index.kneighbors(&[1.0, 0.0], 4).unwrap();
    assert_eq!(result.indices, vec![2, 1, 3, 0]);
    assert!(result.distances.windows(2).all(|w| w[0] <= w[1]));
    assert!((result.distances[3] - 2.0).abs() < 1e-12);
}

#[test]
fn k_truncates_ranking() {
    let index = fitted(&[[-1.0, 0.0], [1.0, 1.0], [1.0, 0.1]]);
    let result = index.kneighbors(&[1.0, 0.0], 2).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.indices, vec![2, 1]);
}

#[test]
fn ties_keep_catalog_order() {
    // Same direction, different magnitude: identical cosine distance.
    let index = fitted(&[[0.0, 1.0], [2.0, 0.0], [1.0, 0.0], [3.0, 0.0]]);
    let result = index.kneighbors(&[1.0, 0.0], 4).unwrap();
    assert_eq!(result.indices, vec![1, 2, 3, 0]);
}

#[test]
fn zero_query_gets_fallback_distance_everywhere() {
    let index = fitted(&[[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]]);
    let result = index.kneighbors(&[0.0, 0.0], 3).unwrap();
    assert_eq!(result.indices, vec![0, 1, 2]);
    for d in &result.distances {
        assert_eq!(*d, ZERO_NORM_DISTANCE);
        assert!(!d.is_nan());
    }
}

#[test]
fn query_width_must_match_index() {
    let index = fitted(&[[1.0, 0.0]]);
    assert!(matches!(
        index.kneighbors(&[1.0, 0.0, 0.0], 1),
        Err(RecommenderError::DimensionMismatch { expected: 2, found: 3 })
    ));
}
