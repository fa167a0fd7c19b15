//! Configuration file handling.
//!
//! This module provides loading and parsing of `.worldclim_aql.json`
//! configuration files. Every section is optional:
//!
//! ```json
//! {
//!   "document": {
//!     "shape_field": "geometry",
//!     "centroid_field": "geometry_point",
//!     "properties_field": "properties"
//!   },
//!   "schema": {
//!     "periods": [
//!       { "path": ["1970-2000"], "variables": [{ "name": "tavg", "layout": "monthly" }] }
//!     ]
//!   },
//!   "paging": { "start": 0, "limit": 10 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::aql::QueryError;
use crate::queries::WorldClimQueries;
use crate::schema::{ClimateSchema, DocumentLayout};
use crate::types::Paging;

/// Configuration file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".worldclim_aql.json";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] QueryError),
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Attribute names of the grid-cell documents
    pub document: DocumentLayout,
    /// Replaces the built-in WorldClim schema when present
    pub schema: Option<ClimateSchema>,
    /// Paging used when the command line does not specify one
    pub paging: Paging,
}

impl ConfigFile {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `.worldclim_aql.json` in the current directory is used if present and
    /// built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file doesn't exist
    /// - The file cannot be read
    /// - The JSON is invalid
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_path(default_path)
                } else {
                    log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build a query generator from the configured layout and schema.
    pub fn queries(&self) -> Result<WorldClimQueries, ConfigError> {
        let schema = self
            .schema
            .clone()
            .unwrap_or_else(ClimateSchema::worldclim);
        Ok(WorldClimQueries::new(self.document.clone(), schema)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.paging, Paging::default());
        assert!(config.schema.is_none());
    }

    #[test]
    fn test_document_deserialization() {
        let json = r#"
        {
            "document": {
                "shape_field": "cell",
                "centroid_field": "center"
            }
        }
        "#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.document.shape_field, "cell");
        assert_eq!(config.document.centroid_field, "center");
        assert_eq!(config.document.properties_field, "properties");
    }

    #[test]
    fn test_paging_deserialization() {
        let json = r#"{ "paging": { "start": 20, "limit": null } }"#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(config.paging, Paging::new(Some(20), None));
    }

    #[test]
    fn test_schema_override() {
        let json = r#"
        {
            "schema": {
                "periods": [
                    {
                        "path": ["2041-2060", "MPI-ESM1-2-HR", "ssp585"],
                        "variables": [{ "name": "prec", "layout": "monthly" }]
                    }
                ]
            }
        }
        "#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        let queries = config.queries().unwrap();
        assert_eq!(queries.schema().field_count(), 12);
        assert_eq!(queries.schema().periods[0].name(), "2041-2060.MPI-ESM1-2-HR.ssp585");
    }

    #[test]
    fn test_default_queries_use_worldclim_schema() {
        let queries = ConfigFile::default().queries().unwrap();
        assert_eq!(queries.schema(), &ClimateSchema::worldclim());
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let json = r#"
        {
            "schema": {
                "periods": [
                    { "path": [], "variables": [] }
                ]
            }
        }
        "#;
        let config: ConfigFile = serde_json::from_str(json).unwrap();
        let err = config.queries().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(QueryError::InvalidSchema(SchemaError::EmptyPeriodPath))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "paging": {{ "limit": 50 }} }}"#).unwrap();

        let config = ConfigFile::from_path(file.path()).unwrap();
        assert_eq!(config.paging, Paging::new(Some(0), Some(50)));
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let err = ConfigFile::load(Some(Path::new("/nonexistent/worldclim.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ConfigFile::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { .. }));
        assert!(err.to_string().starts_with("Invalid JSON in"));
    }
}
