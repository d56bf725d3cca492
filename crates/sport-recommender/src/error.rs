use std::error::Error;
use std::fmt;

/// Failures raised by the scaler, the neighbour index and model construction.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommenderError {
    /// Fitting or building on zero rows.
    DegenerateInput(&'static str),
    /// `transform`/`kneighbors` called before `fit`.
    NotFitted(&'static str),
    /// Requested neighbour count outside `[1, n_samples]`.
    InvalidQuery { k: usize, n_samples: usize },
    DimensionMismatch { expected: usize, found: usize },
    LengthMismatch { rows: usize, labels: usize },
    DuplicateSport(String),
    /// A catalog feature outside `[0, 1]` (or not a number).
    FeatureOutOfRange {
        sport: String,
        feature: &'static str,
        value: f64,
    },
    FeatureOrderMismatch { expected: Vec<String>, found: Vec<String> },
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

impl fmt::Display for RecommenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecommenderError::DegenerateInput(what) => {
                write!(f, "Cannot fit {} on an empty catalog", what)
            }
            RecommenderError::NotFitted(what) => {
                write!(f, "{} must be fitted before use", what)
            }
            RecommenderError::InvalidQuery { k, n_samples } => write!(
                f,
                "Requested {} neighbours but k must be within [1, {}]",
                k, n_samples
            ),
            RecommenderError::DimensionMismatch { expected, found } => write!(
                f,
                "Expected a vector of {} features, got {}",
                expected, found
            ),
            RecommenderError::LengthMismatch { rows, labels } => write!(
                f,
                "Feature matrix has {} rows but {} labels were given",
                rows, labels
            ),
            RecommenderError::DuplicateSport(name) => {
                write!(f, "Sport '{}' appears more than once in the catalog", name)
            }
            RecommenderError::FeatureOutOfRange {
                sport,
                feature,
                value,
            } => write!(
                f,
                "Feature '{}' of sport '{}' is {}, expected a value within [0, 1]",
                feature, sport, value
            ),
            RecommenderError::FeatureOrderMismatch { expected, found } => write!(
                f,
                "Model was fitted with feature order [{}], expected [{}]",
                found.join(", "),
                expected.join(", ")
            ),
        }
    }
}

impl Error for RecommenderError {}
