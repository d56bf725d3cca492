//! Feature vocabulary and the preference vector builder.
//!
//! Every sport and every user query lives in the same 13-dimensional space,
//! ordered as in [`FEATURE_NAMES`]: seven focus indicators, one intensity
//! level and five setting indicators. Vectors built from a different ordering
//! are not comparable.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecommenderError;
use crate::math::Array1;

pub const N_FEATURES: usize = 13;

pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "balance",
    "flexibility",
    "coordination",
    "relaxation",
    "strength",
    "endurance",
    "longevity",
    "intensity",
    "setting_team",
    "setting_fun",
    "setting_duo",
    "setting_solo",
    "setting_competitive",
];

pub const INTENSITY_INDEX: usize = 7;

/// Position of a feature column, matched case-insensitively.
pub fn feature_index(name: &str) -> Option<usize> {
    let name = name.trim();
    FEATURE_NAMES
        .iter()
        .position(|feature| feature.eq_ignore_ascii_case(name))
}

pub fn feature_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|name| name.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Focus {
    Balance,
    Flexibility,
    Coordination,
    Relaxation,
    Strength,
    Endurance,
    Longevity,
}

impl Focus {
    pub const ALL: [Focus; 7] = [
        Focus::Balance,
        Focus::Flexibility,
        Focus::Coordination,
        Focus::Relaxation,
        Focus::Strength,
        Focus::Endurance,
        Focus::Longevity,
    ];

    pub fn feature_index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        FEATURE_NAMES[self.feature_index()]
    }
}

impl FromStr for Focus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Focus::ALL
            .iter()
            .copied()
            .find(|focus| focus.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| format!("Unknown focus: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Moderate, Intensity::High];

    /// Value stored in the `intensity` feature for this level.
    pub fn value(self) -> f64 {
        match self {
            Intensity::Low => 0.33,
            Intensity::Moderate => 0.67,
            Intensity::High => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
        }
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "moderate" => Ok(Intensity::Moderate),
            "high" => Ok(Intensity::High),
            _ => Err(format!("Unknown intensity: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setting {
    Team,
    Fun,
    Duo,
    Solo,
    Competitive,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::Team,
        Setting::Fun,
        Setting::Duo,
        Setting::Solo,
        Setting::Competitive,
    ];

    pub fn feature_index(self) -> usize {
        INTENSITY_INDEX + 1 + self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Setting::Team => "team",
            Setting::Fun => "fun",
            Setting::Duo => "duo",
            Setting::Solo => "solo",
            Setting::Competitive => "competitive",
        }
    }

    /// Catalog column name, e.g. `setting_solo`.
    pub fn column_name(self) -> &'static str {
        FEATURE_NAMES[self.feature_index()]
    }
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Setting::ALL
            .iter()
            .copied()
            .find(|setting| {
                setting.as_str().eq_ignore_ascii_case(tag)
                    || setting.column_name().eq_ignore_ascii_case(tag)
            })
            .ok_or_else(|| format!("Unknown setting: {}", s))
    }
}

/// One sport of the catalog with its 13 features in [`FEATURE_NAMES`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportFeatureRecord {
    pub name: String,
    pub features: [f64; N_FEATURES],
}

impl SportFeatureRecord {
    pub fn new(name: impl Into<String>, features: [f64; N_FEATURES]) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Build a record from loosely named features.
    ///
    /// Features that are not mentioned stay at 0.0; names outside the
    /// vocabulary are skipped.
    pub fn from_named_features<I, K>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let name = name.into();
        let mut features = [0.0; N_FEATURES];
        for (key, value) in values {
            match feature_index(key.as_ref()) {
                Some(idx) => features[idx] = value,
                None => log::debug!(
                    "Ignoring unknown feature '{}' for sport '{}'",
                    key.as_ref(),
                    name
                ),
            }
        }
        Self { name, features }
    }

    pub fn feature(&self, name: &str) -> Option<f64> {
        feature_index(name).map(|idx| self.features[idx])
    }

    /// Every feature must lie in `[0, 1]`; NaN fails too.
    pub fn check_range(&self) -> crate::error::Result<()> {
        for (idx, &value) in self.features.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(RecommenderError::FeatureOutOfRange {
                    sport: self.name.clone(),
                    feature: FEATURE_NAMES[idx],
                    value,
                });
            }
        }
        Ok(())
    }

    /// False for records without any feature signal (e.g. locker rentals).
    pub fn has_signal(&self) -> bool {
        self.features.iter().sum::<f64>() > 0.0
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.features)
    }
}

/// Raw preference selections as they come from a filter form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceTags {
    pub focus: Vec<String>,
    pub intensity: Vec<String>,
    pub setting: Vec<String>,
}

impl PreferenceTags {
    pub fn is_empty(&self) -> bool {
        self.focus.is_empty() && self.intensity.is_empty() && self.setting.is_empty()
    }

    pub fn to_vector(&self) -> Array1<f64> {
        build_vector(&self.focus, &self.intensity, &self.setting)
    }
}

/// Map tag selections onto a preference vector.
///
/// Focus and setting features are 1.0 when selected. Intensity is the mean
/// value of the distinct recognized levels, 0.0 when none is selected. Tags
/// are case-insensitive and unknown tags are ignored.
pub fn build_vector<F, I, S>(focus: F, intensity: I, setting: S) -> Array1<f64>
where
    F: IntoIterator,
    F::Item: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: IntoIterator,
    S::Item: AsRef<str>,
{
    let mut vector = Array1::zeros(N_FEATURES);

    for focus in parse_tags::<Focus, _>(focus, "focus") {
        vector[focus.feature_index()] = 1.0;
    }

    let levels: BTreeSet<Intensity> = parse_tags(intensity, "intensity");
    if !levels.is_empty() {
        let total: f64 = levels.iter().map(|level| level.value()).sum();
        vector[INTENSITY_INDEX] = total / levels.len() as f64;
    }

    for setting in parse_tags::<Setting, _>(setting, "setting") {
        vector[setting.feature_index()] = 1.0;
    }

    vector
}

fn parse_tags<T, I>(tags: I, kind: &str) -> BTreeSet<T>
where
    T: FromStr + Ord,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let tag = tag.as_ref();
            let parsed = tag.parse::<T>().ok();
            if parsed.is_none() {
                log::debug!("Ignoring unrecognized {} tag '{}'", kind, tag);
            }
            parsed
        })
        .collect()
}

/// User and sport value of one feature, for "why this sport" views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureComparison {
    pub feature: &'static str,
    pub user: f64,
    pub sport: f64,
}

impl fmt::Display for FeatureComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} vs {:.2}", self.feature, self.user, self.sport)
    }
}

pub fn compare_features(user: &Array1<f64>, record: &SportFeatureRecord) -> Vec<FeatureComparison> {
    FEATURE_NAMES
        .iter()
        .zip(user.iter().zip(record.features.iter()))
        .map(|(&feature, (&user, &sport))| FeatureComparison {
            feature,
            user,
            sport,
        })
        .collect()
}
