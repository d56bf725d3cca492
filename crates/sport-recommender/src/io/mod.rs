//! IO utilities for loading sport catalogs from external exports.

pub mod catalog_reader;

pub use catalog_reader::{
    read_catalog, read_catalog_csv, read_catalog_csv_with_config, read_catalog_json,
    read_catalog_json_with_config, read_catalog_with_config, CatalogReaderConfig,
};
