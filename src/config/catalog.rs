//! Catalog seed loading from config.toml
//!
//! The `[catalog]` section lists the plants, materials, farming tools and
//! irrigation systems inserted into the database at startup.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Catalog entries to seed
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Seed lists for every catalog table
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Seeds the `plants` table
    #[serde(default)]
    pub plants: Vec<CatalogEntry>,
    /// Seeds the `materials` table
    #[serde(default)]
    pub materials: Vec<CatalogEntry>,
    /// Seeds the `farming_tools` table
    #[serde(default)]
    pub farming_tools: Vec<CatalogEntry>,
    /// Seeds the `irrigation_systems` table
    #[serde(default)]
    pub irrigation_systems: Vec<CatalogEntry>,
}

/// A single catalog entry
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Display name
    pub name: String,
    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,
}

/// Loads the catalog seed from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[catalog.plants]]
            name = "Tomato"
            description = "Warm-season fruiting plant"

            [[catalog.plants]]
            name = "Mint"

            [[catalog.irrigation_systems]]
            name = "Drip irrigation"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.plants.len(), 2);
        assert_eq!(config.catalog.plants[0].name, "Tomato");
        assert_eq!(
            config.catalog.plants[0].description.as_deref(),
            Some("Warm-season fruiting plant")
        );
        assert!(config.catalog.plants[1].description.is_none());
        assert!(config.catalog.materials.is_empty());
        assert!(config.catalog.farming_tools.is_empty());
        assert_eq!(config.catalog.irrigation_systems[0].name, "Drip irrigation");
    }

    #[test]
    fn test_missing_catalog_section_is_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.catalog.plants.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
