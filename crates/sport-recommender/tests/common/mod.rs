#![allow(dead_code)]

use sport_recommender::{SportCatalog, SportFeatureRecord, SportModel};

pub fn sport(name: &str, features: &[(&str, f64)]) -> SportFeatureRecord {
    SportFeatureRecord::from_named_features(name, features.iter().copied())
}

pub fn yoga() -> SportFeatureRecord {
    sport(
        "Yoga",
        &[("relaxation", 1.0), ("intensity", 0.33), ("setting_solo", 1.0)],
    )
}

pub fn crossfit() -> SportFeatureRecord {
    sport(
        "CrossFit",
        &[
            ("strength", 1.0),
            ("endurance", 1.0),
            ("intensity", 1.0),
            ("setting_competitive", 1.0),
        ],
    )
}

pub fn badminton() -> SportFeatureRecord {
    sport(
        "Badminton",
        &[("coordination", 1.0), ("intensity", 0.67), ("setting_duo", 1.0)],
    )
}

pub fn three_sport_catalog() -> SportCatalog {
    SportCatalog::new(vec![yoga(), crossfit(), badminton()]).unwrap()
}

pub fn three_sport_model() -> SportModel {
    SportModel::train(&three_sport_catalog()).unwrap()
}

/// A larger catalog with overlapping profiles, for ranking properties.
pub fn campus_catalog() -> SportCatalog {
    SportCatalog::new(vec![
        yoga(),
        crossfit(),
        badminton(),
        sport(
            "Pilates",
            &[
                ("balance", 1.0),
                ("flexibility", 1.0),
                ("relaxation", 1.0),
                ("intensity", 0.33),
                ("setting_solo", 1.0),
            ],
        ),
        sport(
            "Football",
            &[
                ("endurance", 1.0),
                ("coordination", 1.0),
                ("intensity", 0.67),
                ("setting_team", 1.0),
                ("setting_competitive", 1.0),
            ],
        ),
        sport(
            "Climbing",
            &[
                ("strength", 1.0),
                ("balance", 1.0),
                ("coordination", 1.0),
                ("intensity", 0.67),
                ("setting_duo", 1.0),
                ("setting_fun", 1.0),
            ],
        ),
        sport(
            "Running Club",
            &[
                ("endurance", 1.0),
                ("longevity", 1.0),
                ("intensity", 0.67),
                ("setting_fun", 1.0),
                ("setting_team", 1.0),
            ],
        ),
        sport(
            "Tai Chi",
            &[
                ("balance", 1.0),
                ("relaxation", 1.0),
                ("longevity", 1.0),
                ("intensity", 0.33),
                ("setting_solo", 1.0),
            ],
        ),
    ])
    .unwrap()
}
