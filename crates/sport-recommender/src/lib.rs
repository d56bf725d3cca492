//! sport-recommender: KNN sport recommendations from stated preferences.
//!
//! Each sport is described by 13 features (focus areas, intensity, social
//! setting). The catalog is standardized with a [`preprocessing::StandardScaler`]
//! and indexed by a brute-force cosine [`index::NearestNeighbors`]. Preference
//! tags are turned into a vector in the same space, ranked against the whole
//! catalog, and converted into percentage match scores.
//!
//! Catalog loading and model persistence live in [`io`] and [`model`]; the
//! request-facing entry point is [`recommend::RecommendationService`].
pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod index;
pub mod io;
pub mod math;
pub mod model;
pub mod preprocessing;
pub mod recommend;

pub use catalog::SportCatalog;
pub use config::RecommendOptions;
pub use error::RecommenderError;
pub use features::{build_vector, PreferenceTags, SportFeatureRecord, FEATURE_NAMES};
pub use model::SportModel;
pub use recommend::{Recommendation, RecommendationService};
