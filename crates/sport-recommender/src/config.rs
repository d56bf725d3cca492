use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Filters applied to the full neighbour ranking of a request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RecommendOptions {
    /// Minimum match score (0-100) a sport needs to be returned.
    pub min_match_score: f64,
    pub max_results: usize,
    /// Sport names never returned, e.g. ones already on screen.
    pub exclude: HashSet<String>,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            min_match_score: 50.0,
            max_results: 10,
            exclude: HashSet::new(),
        }
    }
}

impl RecommendOptions {
    pub fn new(min_match_score: f64, max_results: usize) -> Self {
        Self {
            min_match_score,
            max_results,
            exclude: HashSet::new(),
        }
    }

    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }
}

/// Load recommendation options from a JSON file; missing fields use defaults.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<RecommendOptions> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let options: RecommendOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(options)
}
