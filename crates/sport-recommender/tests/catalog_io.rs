//! Integration tests for SportCatalog construction and the catalog readers.

mod common;

use std::io::Write;

use sport_recommender::error::RecommenderError;
use sport_recommender::features::{SportFeatureRecord, N_FEATURES};
use sport_recommender::io::{
    read_catalog, read_catalog_csv, read_catalog_csv_with_config, read_catalog_json,
    CatalogReaderConfig,
};
use sport_recommender::SportCatalog;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// SportCatalog
// ---------------------------------------------------------------------------

#[test]
fn catalog_drops_sports_without_signal() {
    let catalog = SportCatalog::new(vec![
        common::yoga(),
        SportFeatureRecord::new("Locker Rental", [0.0; N_FEATURES]),
        common::crossfit(),
    ])
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.names(), vec!["Yoga".to_string(), "CrossFit".to_string()]);
}

#[test]
fn catalog_rejects_duplicate_names() {
    let result = SportCatalog::new(vec![common::yoga(), common::yoga()]);
    assert_eq!(
        result.unwrap_err(),
        RecommenderError::DuplicateSport("Yoga".to_string())
    );
}

#[test]
fn catalog_feature_matrix_follows_record_order() {
    let catalog = common::three_sport_catalog();
    let x = catalog.feature_matrix();
    assert_eq!(x.shape(), (3, N_FEATURES));
    assert_eq!(x.row_slice(1), &common::crossfit().features[..]);
}

#[test]
fn catalog_of_only_empty_sports_is_empty() {
    let catalog =
        SportCatalog::new(vec![SportFeatureRecord::new("Locker", [0.0; N_FEATURES])]).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn catalog_rejects_features_outside_unit_interval() {
    // Sums to zero, so it must be reported rather than filtered as empty.
    let mut features = [0.0; N_FEATURES];
    features[0] = 0.5;
    features[1] = -0.5;
    let result = SportCatalog::new(vec![
        common::yoga(),
        SportFeatureRecord::new("Slackline", features),
    ]);
    assert_eq!(
        result.unwrap_err(),
        RecommenderError::FeatureOutOfRange {
            sport: "Slackline".to_string(),
            feature: "flexibility",
            value: -0.5,
        }
    );

    let huge = common::sport("Rugby", &[("strength", 1e308)]);
    assert!(matches!(
        SportCatalog::new(vec![huge]),
        Err(RecommenderError::FeatureOutOfRange { feature: "strength", .. })
    ));

    let mut all_negative = [-1.0; N_FEATURES];
    all_negative[7] = 0.0;
    assert!(matches!(
        SportCatalog::new(vec![SportFeatureRecord::new("Void", all_negative)]),
        Err(RecommenderError::FeatureOutOfRange { feature: "balance", .. })
    ));
}

#[test]
fn catalog_rejects_nan_features() {
    let nan = common::sport("Mystery", &[("balance", f64::NAN)]);
    assert!(matches!(
        SportCatalog::new(vec![nan]),
        Err(RecommenderError::FeatureOutOfRange { feature: "balance", .. })
    ));
}

// ---------------------------------------------------------------------------
// CSV / TSV
// ---------------------------------------------------------------------------

#[test]
fn csv_reader_defaults_missing_columns_and_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.csv",
        "Angebot,relaxation,intensity,setting_solo,price\n\
         Yoga,1,0.33,1,20\n\
         Spinning,,1.0,,15\n",
    );

    let records = read_catalog_csv(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Yoga");
    assert_eq!(records[0].feature("relaxation"), Some(1.0));
    assert_eq!(records[0].feature("setting_solo"), Some(1.0));
    assert_eq!(records[0].feature("strength"), Some(0.0));
    assert_eq!(records[1].feature("relaxation"), Some(0.0));
    assert_eq!(records[1].feature("intensity"), Some(1.0));
}

#[test]
fn tsv_reader_uses_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.tsv",
        "name\tstrength\tintensity\nBoxing\t1\t1.0\n",
    );
    let records = read_catalog_csv(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].feature("strength"), Some(1.0));
}

#[test]
fn csv_reader_honours_configured_name_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "catalog.csv", "title,balance\nSlackline,1\n");
    let config = CatalogReaderConfig {
        name_column: Some("title".to_string()),
        ..Default::default()
    };
    let records = read_catalog_csv_with_config(&path, &config).unwrap();
    assert_eq!(records[0].name, "Slackline");

    assert!(read_catalog_csv(&path).is_err(), "no default name column present");
}

#[test]
fn csv_reader_reports_invalid_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "catalog.csv", "name,intensity\nRugby,very high\n");
    let err = read_catalog_csv(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("intensity"), "{:#}", err);
}

#[test]
fn csv_reader_skips_rows_without_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "catalog.csv", "name,strength\n,1\nJudo,1\n");
    let records = read_catalog_csv(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Judo");
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_reader_accepts_loose_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.json",
        r#"[
            {"Angebot": "Yoga", "relaxation": 1, "intensity": 0.33, "setting_solo": 1, "href": "x"},
            {"Angebot": "Volleyball", "coordination": null, "setting_team": true, "intensity": "0.67"}
        ]"#,
    );
    let records = read_catalog_json(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].feature("intensity"), Some(0.33));
    assert_eq!(records[1].feature("coordination"), Some(0.0));
    assert_eq!(records[1].feature("setting_team"), Some(1.0));
    assert_eq!(records[1].feature("intensity"), Some(0.67));
}

#[test]
fn json_reader_rejects_non_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "catalog.json", r#"{"name": "Yoga"}"#);
    assert!(read_catalog_json(&path).is_err());
}

#[test]
fn read_catalog_dispatches_on_extension_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.json",
        r#"[{"name": "Yoga", "relaxation": 1}, {"name": "Locker"}]"#,
    );
    let catalog = read_catalog(&path).unwrap();
    assert_eq!(catalog.names(), vec!["Yoga".to_string()]);
}

#[test]
fn read_catalog_rejects_overflowing_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.csv",
        "name,strength,relaxation,setting_solo\n\
         A,1e308,0,0\n\
         B,1e308,0,1\n\
         Yoga,0,1,1\n",
    );
    let err = read_catalog(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("'strength'"), "{}", message);
    assert!(message.contains("'A'"), "{}", message);
}

#[test]
fn read_catalog_missing_file_errors() {
    assert!(read_catalog("/nonexistent/catalog.csv").is_err());
}
