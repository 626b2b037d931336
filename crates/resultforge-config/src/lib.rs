//! Configuration system for ResultForge.
//!
//! Load reader configuration from TOML or YAML files to describe the problem
//! schema and the line markers of a result file without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use resultforge_config::ReaderConfig;
//!
//! let config = ReaderConfig::from_toml_str(r#"
//!     [schema]
//!     objectives = 2
//!
//!     [[schema.variables]]
//!     type = "real"
//!     lower_bound = 0.0
//!     upper_bound = 1.0
//!
//!     [[schema.variables]]
//!     type = "binary"
//!     bits = 8
//! "#).unwrap();
//!
//! assert_eq!(config.separator_marker, "#");
//! assert_eq!(config.schema.number_of_variables(), 2);
//! ```
//!
//! Use default markers when the file only names a schema:
//!
//! ```
//! use resultforge_config::ReaderConfig;
//!
//! let config = ReaderConfig::from_yaml_str("schema:\n  objectives: 3\n").unwrap();
//! assert_eq!(config.metadata_marker, "//");
//! ```

use std::path::Path;

use resultforge_core::{ProblemSchema, SchemaError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker that starts every separator line.
pub const DEFAULT_SEPARATOR_MARKER: &str = "#";

/// Marker that starts every metadata line.
pub const DEFAULT_METADATA_MARKER: &str = "//";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main reader configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReaderConfig {
    /// Prefix of the lines that delimit entries.
    #[serde(default = "default_separator_marker")]
    pub separator_marker: String,

    /// Prefix of the lines that carry entry properties.
    #[serde(default = "default_metadata_marker")]
    pub metadata_marker: String,

    /// Shape of the data lines.
    pub schema: ProblemSchema,
}

fn default_separator_marker() -> String {
    DEFAULT_SEPARATOR_MARKER.to_string()
}

fn default_metadata_marker() -> String {
    DEFAULT_METADATA_MARKER.to_string()
}

impl ReaderConfig {
    /// Creates a configuration with default markers for the given schema.
    pub fn new(schema: ProblemSchema) -> Self {
        Self {
            separator_marker: default_separator_marker(),
            metadata_marker: default_metadata_marker(),
            schema,
        }
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML; anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, can't be parsed, or fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the separator line marker.
    pub fn with_separator_marker(mut self, marker: impl Into<String>) -> Self {
        self.separator_marker = marker.into();
        self
    }

    /// Sets the metadata line marker.
    pub fn with_metadata_marker(mut self, marker: impl Into<String>) -> Self {
        self.metadata_marker = marker.into();
        self
    }

    /// Checks markers and schema.
    ///
    /// The separator marker is tested before the metadata marker when
    /// classifying a line, so a metadata marker that starts with the
    /// separator marker could never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator_marker.is_empty() {
            return Err(ConfigError::Invalid(
                "separator_marker must not be empty".to_string(),
            ));
        }
        if self.metadata_marker.is_empty() {
            return Err(ConfigError::Invalid(
                "metadata_marker must not be empty".to_string(),
            ));
        }
        if self.metadata_marker.starts_with(&self.separator_marker) {
            return Err(ConfigError::Invalid(format!(
                "metadata_marker {:?} is shadowed by separator_marker {:?}",
                self.metadata_marker, self.separator_marker
            )));
        }
        self.schema.validate()?;
        Ok(())
    }
}
